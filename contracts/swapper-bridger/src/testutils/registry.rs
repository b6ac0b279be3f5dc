use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, String, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Total(BytesN<32>),
    Beneficiaries(BytesN<32>),
}

/// Fractional-ownership registry keeping a running total per reference.
#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn register_contribution(
        env: Env,
        reference_id: BytesN<32>,
        _source_chain: String,
        beneficiaries: Vec<Address>,
        amount: i128,
    ) {
        let total = Self::total(env.clone(), reference_id.clone());
        let storage = env.storage().instance();
        storage.set(&DataKey::Total(reference_id.clone()), &(total + amount));
        storage.set(&DataKey::Beneficiaries(reference_id), &beneficiaries);
    }

    pub fn total(env: Env, reference_id: BytesN<32>) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Total(reference_id))
            .unwrap_or(0)
    }

    pub fn beneficiaries(env: Env, reference_id: BytesN<32>) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Beneficiaries(reference_id))
            .unwrap_or(Vec::new(&env))
    }
}
