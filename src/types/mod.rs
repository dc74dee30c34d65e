pub use self::{
    bundle::{BundleData, BundleResponse},
    day_data::{
        PairDayData, PairDayDataResponse, TokenDayData, TokenDayDataResponse,
        TopPairsResponse,
    },
    graphql::{GraphQlError, GraphQlResponse},
    liquidity_position::{LiquidityPositionData, UserData, UserResponse},
    mints_burns::{MintBurnData, MintsBurnsResponse, PairRef, TransactionRef},
    pair::{PairData, PairResponse, TokenData},
};

mod bundle;
mod day_data;
mod graphql;
mod liquidity_position;
mod mints_burns;
mod pair;
