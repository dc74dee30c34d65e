use actix_web::{get, web, Responder, Result};
use anyhow::Context;
use chrono::DateTime;
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::TokenDaily,
};

const DEFAULT_DAYS: i64 = 30;
const MAX_DAYS: i64 = 100;

#[get("/tokens/{address}/daily")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let limit = data.limit.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);

    let days = state.graph.token_day_data(&path, limit).await?;
    let mut items = Vec::with_capacity(days.len());
    // upstream orders newest-first; serve ascending
    for day in days.into_iter().rev() {
        let date = DateTime::from_timestamp(day.date, 0)
            .context("token day data timestamp out of range")?;
        items.push(TokenDaily {
            date,
            price_usd: day.price_usd,
        });
    }

    Ok(web::Json(items))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::test_config;
    use actix_web::{
        http::StatusCode, test, App, HttpResponse, HttpServer,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    const TOKEN: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

    #[actix_web::test]
    async fn test_limit_is_clamped_before_the_upstream_call() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();
        let server = HttpServer::new(move || {
            let seen = seen.clone();
            App::new().route(
                "/",
                web::post().to(move |body: web::Json<Value>| {
                    seen.lock().unwrap().push(body.into_inner());
                    async move {
                        HttpResponse::Ok()
                            .json(json!({ "data": { "tokenDayDatas": [] } }))
                    }
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let url = format!("http://{}", server.addrs()[0]);
        tokio::spawn(server.run());

        let state = AppState::new(State::new(test_config(&url, &url)));
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(index),
        )
        .await;

        for (query, expected) in
            [("limit=-5", 1), ("limit=1000", MAX_DAYS), ("", DEFAULT_DAYS)]
        {
            let request = test::TestRequest::get()
                .uri(&format!("/tokens/{}/daily?{}", TOKEN, query))
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK, "query: {}", query);
        }

        let requests = requests.lock().unwrap();
        let limits = requests
            .iter()
            .map(|body| body["variables"]["limit"].as_i64().unwrap())
            .collect::<Vec<i64>>();
        assert_eq!(limits, vec![1, MAX_DAYS, DEFAULT_DAYS]);
    }
}
