use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Pool(Address, Address, u32),
}

#[contract]
pub struct MockDexFactory;

#[contractimpl]
impl MockDexFactory {
    pub fn set_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32, pool: Address) {
        let storage = env.storage().instance();
        storage.set(&DataKey::Pool(token_a.clone(), token_b.clone(), fee_tier), &pool);
        storage.set(&DataKey::Pool(token_b, token_a, fee_tier), &pool);
    }

    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Option<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Pool(token_a, token_b, fee_tier))
    }
}
