use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Root response for `/portfolio/{address}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub address: String,
    pub balance_usd: BigDecimal,
    pub pairs: Vec<PairSummary>,
}

/// One position against a pair, valued in USD.
///
/// The pair-derived fields are `None` when the upstream position carries
/// no pair object; `balance_usd` still defaults to zero in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSummary {
    pub contract_address: Option<String>,
    pub staking_contract_address: Option<String>,
    pub owner_balance: BigDecimal,
    pub pair_symbol: Option<String>,
    pub total_supply: Option<BigDecimal>,
    pub share: Option<BigDecimal>,
    pub balance_usd: BigDecimal,
    pub tokens: Vec<TokenSummary>,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSummary {
    pub symbol: String,
    pub price: BigDecimal,
    pub balance: BigDecimal,
    pub balance_usd: BigDecimal,
}
