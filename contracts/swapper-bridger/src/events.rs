use soroban_sdk::{Address, BytesN, Env, String, Symbol};

pub fn emit_swap(env: &Env, token_in: Address, amount_in: i128, amount_out: i128) {
    env.events()
        .publish((Symbol::new(env, "swap"), token_in), (amount_in, amount_out));
}

pub fn emit_donation_sent(
    env: &Env,
    destination_chain: String,
    sender: Address,
    destination_contract: String,
    reference_id: BytesN<32>,
    amount: i128,
    message_hash: BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "donation_sent"), destination_chain),
        (sender, destination_contract, reference_id, amount, message_hash),
    );
}

pub fn emit_executed(
    env: &Env,
    source_chain: String,
    source_address: String,
    message_hash: BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "executed"), source_chain),
        (source_address, message_hash),
    );
}

pub fn emit_trusted_contract_set(env: &Env, chain_name: String, contract_address: String) {
    env.events().publish(
        (Symbol::new(env, "trusted_contract_set"), chain_name),
        contract_address,
    );
}

pub fn emit_trusted_contract_removed(env: &Env, chain_name: String) {
    env.events()
        .publish((Symbol::new(env, "trusted_contract_removed"), chain_name), ());
}
