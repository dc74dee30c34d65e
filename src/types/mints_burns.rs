use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::graphql::big_int_string;

/// `getMintsBurnsTransactions` selects both lists in one query.
#[derive(Debug, Deserialize)]
pub struct MintsBurnsResponse {
    pub mints: Vec<MintBurnData>,
    pub burns: Vec<MintBurnData>,
}

/// One mint (deposit) or burn (withdrawal) event against a pair.
/// Mints and burns share the same field set on the subgraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintBurnData {
    pub transaction: TransactionRef,
    pub pair: PairRef,
    pub to: Option<String>,
    pub sender: Option<String>,
    pub liquidity: BigDecimal,
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
    #[serde(rename = "amountUSD")]
    pub amount_usd: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRef {
    pub id: String,
    #[serde(with = "big_int_string")]
    pub timestamp: i64,
    #[serde(with = "big_int_string")]
    pub block_number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRef {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_burn_round_trips_big_int_strings() {
        let json = serde_json::json!({
            "transaction": {
                "id": "0x7f9080f8c72c0ec21ec7e1690b94c52ebc4787bca66f2d154f6274",
                "timestamp": "1588712972",
                "blockNumber": "10008566"
            },
            "pair": { "id": "0xa478c2975ab1ea89e8196811f51a7b7ade33eb11" },
            "to": "0x000000000000000000000000000000000000dead",
            "sender": null,
            "liquidity": "1.935056302566633023",
            "amount0": "605.773676696150346128",
            "amount1": "3.0",
            "amountUSD": "1243.610051210472179434"
        });

        let data: MintBurnData = serde_json::from_value(json).unwrap();
        assert_eq!(data.transaction.timestamp, 1588712972);
        assert_eq!(data.transaction.block_number, 10008566);

        let back = serde_json::to_value(&data).unwrap();
        assert_eq!(back["transaction"]["timestamp"], "1588712972");
        assert_eq!(back["blockNumber"], serde_json::Value::Null);
        assert_eq!(back["transaction"]["blockNumber"], "10008566");
    }
}
