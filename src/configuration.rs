use std::{env, fs, ops::Deref, sync::Arc, time::Duration};

use bigdecimal::BigDecimal;
use url::Url;

use crate::{
    cache::TimedCache,
    error::Error,
    model::Portfolio,
    provider::{EthNode, TheGraph},
    types::{LiquidityPositionData, PairData},
};

pub const DEFAULT_GRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v2";
pub const DEFAULT_DOCS_URL: &str =
    "https://thegraph.com/explorer/subgraph/uniswap/uniswap-v2";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

/// Per-result-type TTL caches, keyed by call argument.
#[derive(Debug)]
pub struct ApiCache {
    pub eth_price: TimedCache<BigDecimal>,
    pub pair_info: TimedCache<PairData>,
    pub liquidity_positions: TimedCache<Vec<LiquidityPositionData>>,
    pub staking_positions: TimedCache<Vec<LiquidityPositionData>>,
    pub portfolio: TimedCache<Portfolio>,
}

impl ApiCache {
    pub fn new(ttl: Duration, max_entries: usize) -> ApiCache {
        ApiCache {
            eth_price: TimedCache::new(ttl, max_entries),
            pair_info: TimedCache::new(ttl, max_entries),
            liquidity_positions: TimedCache::new(ttl, max_entries),
            staking_positions: TimedCache::new(ttl, max_entries),
            portfolio: TimedCache::new(ttl, max_entries),
        }
    }

    /// Drops every cached upstream result, forcing fresh fetches.
    pub async fn clear(&self) {
        self.eth_price.clear().await;
        self.pair_info.clear().await;
        self.liquidity_positions.clear().await;
        self.staking_positions.clear().await;
        self.portfolio.clear().await;
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub graph: TheGraph,
    pub eth: EthNode,
    pub api_cache: ApiCache,
}

impl State {
    pub fn new(config: Config) -> State {
        let graph = TheGraph::new(&config);
        let eth = EthNode::new(&config);
        let api_cache = ApiCache::new(
            Duration::from_secs(config.cache_ttl),
            config.cache_max_entries,
        );
        State {
            config,
            graph,
            eth,
            api_cache,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub graph_url: String,
    pub rpc_url: String,
    pub cache_ttl: u64,
    pub cache_max_entries: usize,
    pub docs_url: String,
}

pub fn get_configuration() -> Result<Config, Error> {
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();

    let graph_url = env::var("GRAPH_URL")
        .unwrap_or_else(|_| DEFAULT_GRAPH_URL.to_owned());
    Url::parse(&graph_url)?;

    let rpc_url = env::var("RPC_URL")?;
    Url::parse(&rpc_url)?;

    let cache_ttl = env::var("CACHE_TTL_SECS")
        .map_or(Ok(DEFAULT_CACHE_TTL_SECS), |value| value.parse())?;
    let cache_max_entries = env::var("CACHE_MAX_ENTRIES")
        .map_or(Ok(DEFAULT_CACHE_MAX_ENTRIES), |value| value.parse())?;

    let docs_url =
        env::var("DOCS_URL").unwrap_or_else(|_| DEFAULT_DOCS_URL.to_owned());

    let config = Config {
        server_host,
        port,
        allowed_origins,
        graph_url,
        rpc_url,
        cache_ttl,
        cache_max_entries,
        docs_url,
    };

    Ok(config)
}

/// Loads `.env` from the manifest directory into the process environment.
/// Variables already set in the environment win; a missing file is fine.
pub fn set_configuration() -> Result<(), Error> {
    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/.env", directory);

    let Ok(config_string) = fs::read_to_string(path) else {
        return Ok(());
    };
    parse_config_string(config_string);

    Ok(())
}

fn parse_config_string(config: String) {
    for line in config.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if env::var(key).is_err() {
                env::set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
pub fn test_config(graph_url: &str, rpc_url: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_owned(),
        port: 0,
        allowed_origins: vec!["*".to_owned()],
        graph_url: graph_url.to_owned(),
        rpc_url: rpc_url.to_owned(),
        cache_ttl: DEFAULT_CACHE_TTL_SECS,
        cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        docs_url: DEFAULT_DOCS_URL.to_owned(),
    }
}
