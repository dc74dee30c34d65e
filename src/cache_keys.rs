//! Centralized cache key constants
//!
//! Address-keyed caches use the lowercased address itself as the key;
//! only the fixed singleton keys live here.

pub const ETH_PRICE: &str = "eth_price";
