//! API controllers, one module per route.

pub mod index;
pub mod pairs;
pub mod pairs_daily;
pub mod portfolio;
pub mod tokens_daily;
