use actix_web::{get, web, Responder, Result};

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler,
};

#[get("/portfolio/{address}")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let address = path.into_inner();
    let data = handler::portfolio::portfolio(&state, &address).await?;

    Ok(web::Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::test_config;
    use actix_web::{
        http::StatusCode, test, App, HttpResponse, HttpServer,
    };

    fn app_state(graph_url: &str, rpc_url: &str) -> AppState<State> {
        AppState::new(State::new(test_config(graph_url, rpc_url)))
    }

    #[actix_web::test]
    async fn test_invalid_address_is_a_bad_request() {
        let state = app_state("http://127.0.0.1:9", "http://127.0.0.1:9");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(index),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/portfolio/0xnot-an-address")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(response).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Invalid address 0xnot-an-address"));
    }

    #[actix_web::test]
    async fn test_upstream_outage_is_an_internal_server_error() {
        // a graph upstream that only answers 502
        let server = HttpServer::new(|| {
            App::new().default_service(web::to(|| async {
                HttpResponse::BadGateway().body("bad gateway")
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let url = format!("http://{}", server.addrs()[0]);
        tokio::spawn(server.run());

        let state = app_state(&url, &url);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(index),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/portfolio/0x000000000000000000000000000000000000dEaD")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(response).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("thegraph.com"), "body: {}", body);
        assert!(body.contains("bad gateway"), "body: {}", body);
    }
}
