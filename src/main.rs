use tracing::{error, Level};

use uniswap_roi::{
    configuration::{get_configuration, set_configuration, AppState, State},
    error::Error,
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    set_configuration()?;
    let config = get_configuration()
        .map_err(|e| Error::ConfigurationError(e.to_string()))?;

    let state = State::new(config);
    let app_state = AppState::new(state);

    server::server_task(&app_state).await
}
