use crate::errors::Error;
use crate::events::emit_swap;
use crate::interfaces::{DexFactoryClient, DexRouterClient};
use crate::pull_into_custody;
use crate::types::{ChainEndpoint, SwapRequest};
use soroban_sdk::{log, token, Env};

/// Swaps `request.amount_in` of `request.token_in`, pulled from `request`'s
/// caller, into the canonical token. The output stays in this contract.
///
/// Returns the realized output: the change in this contract's canonical
/// balance, not the amount the router reports.
pub fn swap_to_canonical(
    env: &Env,
    endpoint: &ChainEndpoint,
    request: &SwapRequest,
) -> Result<i128, Error> {
    if request.amount_in <= 0 || request.min_amount_out < 0 {
        return Err(Error::InvalidAmount);
    }
    if request.token_in == endpoint.canonical_token {
        return Err(Error::IdenticalTokens);
    }

    let pool = DexFactoryClient::new(env, &endpoint.dex_factory)
        .get_pool(
            &request.token_in,
            &endpoint.canonical_token,
            &endpoint.fee_tier,
        )
        .ok_or(Error::PoolNotFound)?;

    let this = env.current_contract_address();
    pull_into_custody(env, &request.token_in, &request.caller, request.amount_in)?;

    let canonical = token::Client::new(env, &endpoint.canonical_token);
    let balance_before = canonical.balance(&this);

    // Exact amount, valid for this ledger only.
    token::Client::new(env, &request.token_in).approve(
        &this,
        &endpoint.dex_router,
        &request.amount_in,
        &env.ledger().sequence(),
    );

    let reported = DexRouterClient::new(env, &endpoint.dex_router).swap_exact_input(
        &this,
        &request.token_in,
        &endpoint.canonical_token,
        &endpoint.fee_tier,
        &request.amount_in,
        &request.min_amount_out,
        &this,
        &env.ledger().timestamp(),
    );

    let amount_out = canonical.balance(&this) - balance_before;
    log!(env, "swap through pool", pool, reported, amount_out);

    if amount_out <= 0 || amount_out < request.min_amount_out {
        return Err(Error::SlippageExceeded);
    }

    emit_swap(env, request.token_in.clone(), request.amount_in, amount_out);

    Ok(amount_out)
}
