pub use self::{
    day_data::{PairDaily, PairListing, TokenDaily},
    portfolio::{PairSummary, Portfolio, TokenSummary},
    transaction::{Transaction, TransactionKind},
};

mod day_data;
mod portfolio;
mod transaction;
