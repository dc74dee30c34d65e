use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::graphql::big_int_string;

#[derive(Debug, Deserialize)]
pub struct PairResponse {
    pub pair: Option<PairData>,
}

/// The shared pair field set every pair-bearing query selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairData {
    pub id: String,
    pub token0: TokenData,
    pub token1: TokenData,
    pub reserve0: BigDecimal,
    pub reserve1: BigDecimal,
    #[serde(rename = "reserveUSD")]
    pub reserve_usd: BigDecimal,
    #[serde(rename = "trackedReserveETH")]
    pub tracked_reserve_eth: BigDecimal,
    pub total_supply: BigDecimal,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,
    #[serde(rename = "volumeUSD")]
    pub volume_usd: BigDecimal,
    #[serde(with = "big_int_string")]
    pub tx_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "derivedETH")]
    pub derived_eth: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pair_data_from_subgraph_json() {
        let json = serde_json::json!({
            "pair": {
                "id": "0xa478c2975ab1ea89e8196811f51a7b7ade33eb11",
                "token0": {
                    "id": "0x6b175474e89094c44da98b954eedeac495271d0f",
                    "symbol": "DAI",
                    "name": "Dai Stablecoin",
                    "derivedETH": "0.003113487225076902557084748885835120"
                },
                "token1": {
                    "id": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                    "symbol": "WETH",
                    "name": "Wrapped Ether",
                    "derivedETH": "1"
                },
                "reserve0": "85331456.277957222079018909",
                "reserve1": "265657.65328296260331891",
                "reserveUSD": "170614398.9835991822817947720795495",
                "trackedReserveETH": "531315.3065659252066378202",
                "totalSupply": "8967094.518364383041536096",
                "token0Price": "321.2034360763658023009912",
                "token1Price": "0.003113290439010837867707856689027612",
                "volumeUSD": "1520394420.939849996315668312973537",
                "txCount": "477690"
            }
        });

        let response: PairResponse = serde_json::from_value(json).unwrap();
        let pair = response.pair.unwrap();

        assert_eq!(pair.token0.symbol, "DAI");
        assert_eq!(pair.tx_count, 477690);
        assert_eq!(
            pair.total_supply,
            BigDecimal::from_str("8967094.518364383041536096").unwrap()
        );
    }

    #[test]
    fn test_null_pair_deserializes_to_none() {
        let response: PairResponse =
            serde_json::from_value(serde_json::json!({ "pair": null }))
                .unwrap();
        assert!(response.pair.is_none());
    }
}
