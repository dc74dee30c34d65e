use bigdecimal::BigDecimal;
use serde::Deserialize;

use super::pair::PairData;

#[derive(Debug, Deserialize)]
pub struct TokenDayDataResponse {
    #[serde(rename = "tokenDayDatas", default)]
    pub token_day_datas: Vec<TokenDayData>,
}

/// One `tokenDayData` row; `date` is a unix day bucket (JSON number).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDayData {
    pub date: i64,
    #[serde(rename = "priceUSD")]
    pub price_usd: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct PairDayDataResponse {
    #[serde(rename = "pairDayDatas", default)]
    pub pair_day_datas: Vec<PairDayData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairDayData {
    pub date: i64,
    #[serde(rename = "dailyVolumeUSD")]
    pub daily_volume_usd: BigDecimal,
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct TopPairsResponse {
    #[serde(default)]
    pub pairs: Vec<PairData>,
}
