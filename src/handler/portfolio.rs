use std::collections::HashMap;

use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};
use tracing::info;

use crate::{
    cache_keys,
    configuration::{AppState, State},
    error::Error,
    helpers::{from_wei, to_checksum_address},
    model::{PairSummary, Portfolio, TokenSummary, Transaction, TransactionKind},
    provider::eth::STAKING_POOLS,
    types::{LiquidityPositionData, MintBurnData, PairData},
};

/// Builds the full portfolio of an address: direct and staked liquidity
/// positions, their share of each pool, USD valuations and the mint/burn
/// history per pair. The result is cached per checksummed address.
pub async fn portfolio(
    state: &AppState<State>,
    address: &str,
) -> Result<Portfolio, Error> {
    let address = to_checksum_address(address)?;

    if let Some(cached) = state.api_cache.portfolio.get(&address).await {
        return Ok(cached);
    }
    info!("building portfolio for {}", address);

    let eth_price = eth_price(state).await?;

    let mut positions = liquidity_positions(state, &address).await?;
    positions.extend(staking_positions(state, &address).await?);

    let pair_ids = positions
        .iter()
        .filter_map(|position| {
            position.pair.as_ref().map(|pair| pair.id.to_owned())
        })
        .collect::<Vec<String>>();
    let history = state.graph.mints_burns(&address, &pair_ids).await?;
    let transactions = merge_transactions(history.mints, history.burns);
    let transactions_by_pair = group_transactions(transactions);

    let mut balance_usd = BigDecimal::zero();
    let mut pairs = Vec::with_capacity(positions.len());
    for position in &positions {
        let mut summary = extract_pair_info(position, &eth_price);
        if let Some(contract_address) = &summary.contract_address {
            // several positions can sit on the same pair (direct plus
            // staked), each carries the pair's full history
            summary.transactions = transactions_by_pair
                .get(contract_address)
                .cloned()
                .unwrap_or_default();
        }
        balance_usd += &summary.balance_usd;
        pairs.push(summary);
    }

    let portfolio = Portfolio {
        address: address.to_owned(),
        balance_usd,
        pairs,
    };
    state
        .api_cache
        .portfolio
        .set(&address, portfolio.clone())
        .await;
    Ok(portfolio)
}

/// Cached ETH/USD price.
pub async fn eth_price(state: &AppState<State>) -> Result<BigDecimal, Error> {
    if let Some(cached) =
        state.api_cache.eth_price.get(cache_keys::ETH_PRICE).await
    {
        return Ok(cached);
    }
    let price = state.graph.eth_price().await?;
    state
        .api_cache
        .eth_price
        .set(cache_keys::ETH_PRICE, price.clone())
        .await;
    Ok(price)
}

/// Cached pair info, keyed by lowercased contract address.
pub async fn pair_info(
    state: &AppState<State>,
    contract_address: &str,
) -> Result<PairData, Error> {
    let key = contract_address.to_lowercase();
    if let Some(cached) = state.api_cache.pair_info.get(&key).await {
        return Ok(cached);
    }
    let pair = state.graph.pair_info(contract_address).await?;
    state.api_cache.pair_info.set(&key, pair.clone()).await;
    Ok(pair)
}

/// Cached directly-held positions, keyed by lowercased address.
pub async fn liquidity_positions(
    state: &AppState<State>,
    address: &str,
) -> Result<Vec<LiquidityPositionData>, Error> {
    let key = address.to_lowercase();
    if let Some(cached) = state.api_cache.liquidity_positions.get(&key).await {
        return Ok(cached);
    }
    let positions = state.graph.liquidity_positions(address).await?;
    state
        .api_cache
        .liquidity_positions
        .set(&key, positions.clone())
        .await;
    Ok(positions)
}

/// Staking positions of an address over the fixed staking-pool map.
/// Zero balances are skipped; positive ones are merged with the pool's
/// pair info into the same shape a direct position has.
pub async fn staking_positions(
    state: &AppState<State>,
    address: &str,
) -> Result<Vec<LiquidityPositionData>, Error> {
    let key = address.to_lowercase();
    if let Some(cached) = state.api_cache.staking_positions.get(&key).await {
        return Ok(cached);
    }

    let mut positions = Vec::new();
    for (staking_contract, pool_contract) in STAKING_POOLS {
        let balance = state.eth.balance_of(staking_contract, address).await?;
        if balance.is_zero() {
            continue;
        }
        let pair = pair_info(state, pool_contract).await?;
        positions.push(LiquidityPositionData {
            liquidity_token_balance: from_wei(balance),
            pair: Some(pair),
            staking_contract_address: Some((*staking_contract).to_owned()),
        });
    }

    state
        .api_cache
        .staking_positions
        .set(&key, positions.clone())
        .await;
    Ok(positions)
}

/// Tags mints and burns and orders the merged list by timestamp, ascending.
pub fn merge_transactions(
    mints: Vec<MintBurnData>,
    burns: Vec<MintBurnData>,
) -> Vec<Transaction> {
    let mut transactions = mints
        .into_iter()
        .map(|data| Transaction {
            kind: TransactionKind::Mint,
            data,
        })
        .chain(burns.into_iter().map(|data| Transaction {
            kind: TransactionKind::Burn,
            data,
        }))
        .collect::<Vec<Transaction>>();
    transactions.sort_by_key(|tx| tx.data.transaction.timestamp);
    transactions
}

/// Groups an ordered transaction list by pair contract address.
pub fn group_transactions(
    transactions: Vec<Transaction>,
) -> HashMap<String, Vec<Transaction>> {
    let mut grouped: HashMap<String, Vec<Transaction>> = HashMap::new();
    for transaction in transactions {
        grouped
            .entry(transaction.data.pair.id.to_owned())
            .or_default()
            .push(transaction);
    }
    grouped
}

/// Values one position against its pair.
///
/// share = 100 * balance / total supply; every token's balance is its
/// reserve scaled by that share, and prices come from the token's
/// ETH-derived price times the current ETH price. Positions without a
/// pair keep a zero `balance_usd`.
pub fn extract_pair_info(
    position: &LiquidityPositionData,
    eth_price: &BigDecimal,
) -> PairSummary {
    let balance = &position.liquidity_token_balance;
    let mut summary = PairSummary {
        contract_address: None,
        staking_contract_address: position.staking_contract_address.clone(),
        owner_balance: balance.clone(),
        pair_symbol: None,
        total_supply: None,
        share: None,
        balance_usd: BigDecimal::zero(),
        tokens: Vec::new(),
        transactions: Vec::new(),
    };

    let Some(pair) = &position.pair else {
        return summary;
    };

    let share = if pair.total_supply.is_zero() {
        BigDecimal::zero()
    } else {
        BigDecimal::from(100) * (balance / &pair.total_supply)
    };

    // exact scaling by 1/100
    let percent = BigDecimal::new(BigInt::from(1), 2);
    let mut balance_usd = BigDecimal::zero();
    let mut tokens = Vec::with_capacity(2);
    for (token, reserve) in [
        (&pair.token0, &pair.reserve0),
        (&pair.token1, &pair.reserve1),
    ] {
        let price = &token.derived_eth * eth_price;
        let token_balance = reserve * &share * &percent;
        let token_balance_usd = &token_balance * &price;
        balance_usd += &token_balance_usd;
        tokens.push(TokenSummary {
            symbol: token.symbol.to_owned(),
            price,
            balance: token_balance,
            balance_usd: token_balance_usd,
        });
    }

    summary.contract_address = Some(pair.id.to_owned());
    summary.pair_symbol = Some(format!(
        "{}-{}",
        pair.token0.symbol, pair.token1.symbol
    ));
    summary.total_supply = Some(pair.total_supply.clone());
    summary.share = Some(share);
    summary.balance_usd = balance_usd;
    summary.tokens = tokens;
    summary
}
