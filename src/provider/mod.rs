pub use self::{eth::EthNode, graph::TheGraph};

pub mod eth;
pub mod graph;
