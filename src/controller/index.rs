use actix_web::{get, web, Responder};

use crate::configuration::{AppState, State};

#[get("/")]
async fn index(state: web::Data<AppState<State>>) -> impl Responder {
    web::Redirect::to(state.config.docs_url.to_owned())
}
