use alloy::{
    hex,
    primitives::{Address, U256},
    sol,
    sol_types::SolCall,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::{configuration::Config, error::Error};

sol!(IERC20, "abi/erc20.json");

/// Pool tokens that can be staked: staking contract -> pool contract.
/// The same minimal ERC-20 ABI covers all of them.
pub const STAKING_POOLS: &[(&str, &str)] = &[
    // DAI-ETH
    (
        "0xa1484C3aa22a66C62b77E0AE78E15258bd0cB711",
        "0xA478c2975Ab1Ea89e8196811F51A7B7Ade33eB11",
    ),
    // USDC-ETH
    (
        "0x7FBa4B8Dc5E7616e59622806932DBea72537A56b",
        "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc",
    ),
    // USDT-ETH
    (
        "0x6C3e4cb2E96B01F4b866965A91ed4437839A121a",
        "0x0d4a11d5EEaaC28EC3F61d100daF4d40471f1852",
    ),
    // WBTC-ETH
    (
        "0xCA35e32e7926b96A9988f61d510E038108d8068e",
        "0xBb2b8038a1640196FbE3e38816F3e67Cba72D940",
    ),
];

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'a str,
    id: u32,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC client for ERC-20 balance reads.
#[derive(Debug)]
pub struct EthNode {
    client: Client,
    url: String,
}

impl EthNode {
    pub fn new(config: &Config) -> EthNode {
        EthNode {
            client: Client::new(),
            url: config.rpc_url.to_owned(),
        }
    }

    /// `balanceOf(owner)` on `contract` via `eth_call` at the latest block.
    pub async fn balance_of(
        &self,
        contract: &str,
        owner: &str,
    ) -> Result<U256, Error> {
        let contract: Address = contract
            .parse()
            .map_err(|_| Error::InvalidAddress(contract.to_owned()))?;
        let owner: Address = owner
            .parse()
            .map_err(|_| Error::InvalidAddress(owner.to_owned()))?;

        let calldata = balance_of_calldata(owner);
        info!("eth_call balanceOf on {}", contract);

        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: json!([
                { "to": contract, "data": calldata },
                "latest"
            ]),
        };
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::Rpc(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }
        decode_uint(&response.result.unwrap_or_default())
    }
}

fn balance_of_calldata(owner: Address) -> String {
    let calldata = IERC20::balanceOfCall { owner }.abi_encode();
    format!("0x{}", hex::encode(calldata))
}

/// Decodes the 32-byte word an `eth_call` returns. An empty `0x` (call
/// against a non-contract) counts as zero.
fn decode_uint(word: &str) -> Result<U256, Error> {
    let digits = word.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|e| {
        Error::Rpc(format!("invalid eth_call result {}: {}", word, e))
    })
}
