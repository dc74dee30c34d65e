use actix_web::{get, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::PairListing,
};

const DEFAULT_PAIRS: i64 = 10;
const MAX_PAIRS: i64 = 100;

#[get("/pairs")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let limit = data.limit.unwrap_or(DEFAULT_PAIRS).clamp(1, MAX_PAIRS);

    let pairs = state
        .graph
        .top_pairs(limit)
        .await?
        .into_iter()
        .map(PairListing::from)
        .collect::<Vec<PairListing>>();

    Ok(web::Json(pairs))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<i64>,
}
