use bigdecimal::BigDecimal;
use serde::Deserialize;

/// `{ bundle(id: "1") { ethPrice } }`
#[derive(Debug, Deserialize)]
pub struct BundleResponse {
    pub bundle: Option<BundleData>,
}

#[derive(Debug, Deserialize)]
pub struct BundleData {
    #[serde(rename = "ethPrice")]
    pub eth_price: BigDecimal,
}
