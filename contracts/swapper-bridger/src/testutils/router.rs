use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Rate,
}

/// Fixed-rate router paying out of its own reserves.
/// Does not enforce `amount_out_min`, so callers' own slippage checks are observable.
#[contract]
pub struct MockDexRouter;

#[contractimpl]
impl MockDexRouter {
    /// Every swap pays `amount_in * numerator / denominator`.
    pub fn set_rate(env: Env, numerator: i128, denominator: i128) {
        env.storage()
            .instance()
            .set(&DataKey::Rate, &(numerator, denominator));
    }

    pub fn swap_exact_input(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        _fee_tier: u32,
        amount_in: i128,
        _amount_out_min: i128,
        recipient: Address,
        _deadline: u64,
    ) -> i128 {
        let this = env.current_contract_address();
        let (numerator, denominator): (i128, i128) =
            env.storage().instance().get(&DataKey::Rate).unwrap_or((1, 1));

        token::Client::new(&env, &token_in).transfer_from(&this, &sender, &this, &amount_in);

        let amount_out = amount_in * numerator / denominator;
        token::Client::new(&env, &token_out).transfer(&this, &recipient, &amount_out);

        amount_out
    }
}
