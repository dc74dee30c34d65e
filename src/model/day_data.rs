use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::PairData;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDaily {
    pub date: DateTime<Utc>,
    pub price_usd: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairDaily {
    pub date: DateTime<Utc>,
    pub daily_volume_usd: BigDecimal,
    pub reserve_usd: BigDecimal,
}

/// Flattened entry of the top-pairs listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairListing {
    pub contract_address: String,
    pub pair_symbol: String,
    pub total_supply: BigDecimal,
    pub reserve_usd: BigDecimal,
    pub volume_usd: BigDecimal,
    pub tx_count: i64,
}

impl From<PairData> for PairListing {
    fn from(pair: PairData) -> PairListing {
        PairListing {
            contract_address: pair.id,
            pair_symbol: format!(
                "{}-{}",
                pair.token0.symbol, pair.token1.symbol
            ),
            total_supply: pair.total_supply,
            reserve_usd: pair.reserve_usd,
            volume_usd: pair.volume_usd,
            tx_count: pair.tx_count,
        }
    }
}
