use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::pair::PairData;

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: Option<UserData>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    #[serde(rename = "liquidityPositions", default)]
    pub liquidity_positions: Vec<LiquidityPositionData>,
}

/// An LP token balance against a pair. Direct positions come from the
/// subgraph; staking positions are assembled locally from a `balanceOf`
/// read and carry the staking contract address on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPositionData {
    #[serde(rename = "liquidityTokenBalance")]
    pub liquidity_token_balance: BigDecimal,
    pub pair: Option<PairData>,
    #[serde(default)]
    pub staking_contract_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_user_means_no_positions() {
        let response: UserResponse =
            serde_json::from_value(serde_json::json!({ "user": null }))
                .unwrap();
        assert!(response.user.is_none());
    }

    #[test]
    fn test_position_without_staking_field() {
        let json = serde_json::json!({
            "liquidityTokenBalance": "1.123",
            "pair": null
        });
        let position: LiquidityPositionData =
            serde_json::from_value(json).unwrap();
        assert_eq!(
            position.liquidity_token_balance,
            "1.123".parse::<BigDecimal>().unwrap()
        );
        assert!(position.staking_contract_address.is_none());
    }
}
