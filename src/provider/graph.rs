use bigdecimal::BigDecimal;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    configuration::Config,
    error::Error,
    types::{
        BundleResponse, GraphQlResponse, LiquidityPositionData,
        MintsBurnsResponse, PairData, PairDayData, PairDayDataResponse,
        PairResponse, TokenDayData, TokenDayDataResponse, TopPairsResponse,
        UserResponse,
    },
};

/// Field set shared by every pair-bearing query.
const PAIR_FIELDS: &str = "
id
token0 {
  id
  symbol
  name
  derivedETH
}
token1 {
  id
  symbol
  name
  derivedETH
}
reserve0
reserve1
reserveUSD
trackedReserveETH
totalSupply
token0Price
token1Price
volumeUSD
txCount
";

const MINT_BURN_FIELDS: &str =
    "transaction { id timestamp blockNumber } pair { id } \
     to sender liquidity amount0 amount1 amountUSD";

pub fn eth_price_query() -> String {
    r#"{ bundle(id: "1") { ethPrice } }"#.to_owned()
}

pub fn pair_info_query() -> String {
    format!(
        "query getPairInfo($id: ID!) {{ pair(id: $id) {{ {PAIR_FIELDS} }} }}"
    )
}

pub fn liquidity_positions_query() -> String {
    format!(
        r#"query getLiquidityPositions($id: ID!) {{
  user(id: $id) {{
    liquidityPositions(where: {{liquidityTokenBalance_not: "0"}}) {{
      liquidityTokenBalance
      pair {{ {PAIR_FIELDS} }}
    }}
  }}
}}"#
    )
}

pub fn mints_burns_query() -> String {
    format!(
        "query getMintsBurnsTransactions($address: Bytes!, $pairs: [String!]) {{
  mints(
    where: {{to: $address, pair_in: $pairs}},
    orderBy: timestamp, orderDirection: desc
  ) {{ {MINT_BURN_FIELDS} }}
  burns(
    where: {{sender: $address, pair_in: $pairs}},
    orderBy: timestamp, orderDirection: desc
  ) {{ {MINT_BURN_FIELDS} }}
}}"
    )
}

pub fn token_day_data_query() -> String {
    "query getTokenDayData($token: String!, $limit: Int!) {
  tokenDayDatas(
    first: $limit,
    orderBy: date, orderDirection: desc,
    where: {token: $token}
  ) { date priceUSD }
}"
    .to_owned()
}

pub fn pair_day_data_query() -> String {
    "query getPairDayData($pair: Bytes!, $limit: Int!) {
  pairDayDatas(
    first: $limit,
    orderBy: date, orderDirection: desc,
    where: {pairAddress: $pair}
  ) { date dailyVolumeUSD reserveUSD }
}"
    .to_owned()
}

pub fn top_pairs_query() -> String {
    format!(
        "query getTopPairs($limit: Int!) {{
  pairs(
    first: $limit,
    orderBy: trackedReserveETH, orderDirection: desc
  ) {{ {PAIR_FIELDS} }}
}}"
    )
}

/// Client for the Uniswap V2 subgraph.
#[derive(Debug)]
pub struct TheGraph {
    client: Client,
    url: String,
}

impl TheGraph {
    pub fn new(config: &Config) -> TheGraph {
        TheGraph {
            client: Client::new(),
            url: config.graph_url.to_owned(),
        }
    }

    /// Posts one GraphQL query. A 5xx from the transport is the one
    /// failure translated into a domain condition (`TheGraphDown`);
    /// everything else surfaces as-is.
    async fn query<T: DeserializeOwned>(
        &self,
        query: String,
        variables: Value,
    ) -> Result<T, Error> {
        let body = json!({ "query": query, "variables": variables });
        let response =
            self.client.post(&self.url).json(&body).send().await?;

        let status = response.status();
        if status.is_server_error() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::TheGraphDown(format!("{status}: {text}")));
        }

        let envelope: GraphQlResponse<T> = response.json().await?;
        if let Some(errors) = envelope.errors {
            let messages = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<String>>()
                .join("; ");
            return Err(Error::Graph(messages));
        }
        envelope
            .data
            .ok_or_else(|| Error::Graph("response carries no data".to_owned()))
    }

    /// Current ETH price in USD, from the global bundle.
    pub async fn eth_price(&self) -> Result<BigDecimal, Error> {
        let data: BundleResponse =
            self.query(eth_price_query(), json!({})).await?;
        let bundle = data
            .bundle
            .ok_or_else(|| Error::Graph("bundle not found".to_owned()))?;
        Ok(bundle.eth_price)
    }

    /// Pair info by pool contract address.
    // the subgraph doesn't match checksummed ids, hence the lowercasing
    pub async fn pair_info(
        &self,
        contract_address: &str,
    ) -> Result<PairData, Error> {
        let id = contract_address.to_lowercase();
        info!("fetching pair {}", id);
        let data: PairResponse = self
            .query(pair_info_query(), json!({ "id": id }))
            .await?;
        data.pair
            .ok_or_else(|| Error::Graph(format!("pair {} not found", id)))
    }

    /// Directly held, non-zero liquidity positions of an address.
    pub async fn liquidity_positions(
        &self,
        address: &str,
    ) -> Result<Vec<LiquidityPositionData>, Error> {
        let id = address.to_lowercase();
        let data: UserResponse = self
            .query(liquidity_positions_query(), json!({ "id": id }))
            .await?;
        Ok(data
            .user
            .map(|user| user.liquidity_positions)
            .unwrap_or_default())
    }

    /// Mint/burn history of an address, restricted to the given pairs.
    pub async fn mints_burns(
        &self,
        address: &str,
        pairs: &[String],
    ) -> Result<MintsBurnsResponse, Error> {
        let address = address.to_lowercase();
        let pairs = pairs
            .iter()
            .map(|pair| pair.to_lowercase())
            .collect::<Vec<String>>();
        self.query(
            mints_burns_query(),
            json!({ "address": address, "pairs": pairs }),
        )
        .await
    }

    pub async fn token_day_data(
        &self,
        token_address: &str,
        limit: i64,
    ) -> Result<Vec<TokenDayData>, Error> {
        let token = token_address.to_lowercase();
        let data: TokenDayDataResponse = self
            .query(
                token_day_data_query(),
                json!({ "token": token, "limit": limit }),
            )
            .await?;
        Ok(data.token_day_datas)
    }

    pub async fn pair_day_data(
        &self,
        pair_address: &str,
        limit: i64,
    ) -> Result<Vec<PairDayData>, Error> {
        let pair = pair_address.to_lowercase();
        let data: PairDayDataResponse = self
            .query(
                pair_day_data_query(),
                json!({ "pair": pair, "limit": limit }),
            )
            .await?;
        Ok(data.pair_day_datas)
    }

    pub async fn top_pairs(&self, limit: i64) -> Result<Vec<PairData>, Error> {
        let data: TopPairsResponse = self
            .query(top_pairs_query(), json!({ "limit": limit }))
            .await?;
        Ok(data.pairs)
    }
}
