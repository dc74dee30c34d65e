use actix_web::{http::StatusCode, ResponseError};
use anyhow::Error as ANYHOW_ERROR;
use bigdecimal::{
    num_bigint::ParseBigIntError as BIG_INT_ERROR,
    ParseBigDecimalError as BIG_DECIMAL_ERROR,
};
use serde_json::Error as JSON_ERROR;
use std::{
    env::VarError, io::Error as IO_ERROR, num::ParseIntError,
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;
use url::ParseError as URL_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("The Graph (thegraph.com) is down. {0}")]
    TheGraphDown(String),

    #[error("GraphQL error: {0}")]
    Graph(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    URL(#[from] URL_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] JSON_ERROR),

    #[error("{0}")]
    BigDecimalError(#[from] BIG_DECIMAL_ERROR),

    #[error("{0}")]
    BigIntError(#[from] BIG_INT_ERROR),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("{0}")]
    AnyHowError(#[from] ANYHOW_ERROR),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
