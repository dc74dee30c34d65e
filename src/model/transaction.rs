use serde::{Deserialize, Serialize};

use crate::types::MintBurnData;

/// A mint or burn event tagged with its kind, serialized flat so the
/// upstream fields stay exactly as the subgraph sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(flatten)]
    pub data: MintBurnData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Mint,
    Burn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_tag() {
        let json =
            serde_json::to_value(TransactionKind::Mint).unwrap();
        assert_eq!(json, "mint");
        let json =
            serde_json::to_value(TransactionKind::Burn).unwrap();
        assert_eq!(json, "burn");
    }
}
