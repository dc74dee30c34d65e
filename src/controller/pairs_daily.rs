use actix_web::{get, web, Responder, Result};
use anyhow::Context;
use chrono::DateTime;
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::PairDaily,
};

const DEFAULT_DAYS: i64 = 30;
const MAX_DAYS: i64 = 100;

#[get("/pairs/{address}/daily")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let limit = data.limit.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);

    let days = state.graph.pair_day_data(&path, limit).await?;
    let mut items = Vec::with_capacity(days.len());
    for day in days.into_iter().rev() {
        let date = DateTime::from_timestamp(day.date, 0)
            .context("pair day data timestamp out of range")?;
        items.push(PairDaily {
            date,
            daily_volume_usd: day.daily_volume_usd,
            reserve_usd: day.reserve_usd,
        });
    }

    Ok(web::Json(items))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<i64>,
}
