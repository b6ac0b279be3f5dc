use crate::errors::Error;
use crate::types::{ChainEndpoint, ExecutionRecord};
use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Execution records must outlive any relay retry window.
const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

// Storage keys using symbol_short!
fn endpoint_key() -> soroban_sdk::Symbol {
    symbol_short!("ENDPOINT")
}

fn owner_key() -> soroban_sdk::Symbol {
    symbol_short!("OWNER")
}

fn nonce_key() -> soroban_sdk::Symbol {
    symbol_short!("NONCE")
}

// Key builders
fn trusted_key(chain_name: &String) -> (soroban_sdk::Symbol, String) {
    (symbol_short!("TRUSTED"), chain_name.clone())
}

fn execution_key(message_hash: &BytesN<32>) -> (soroban_sdk::Symbol, BytesN<32>) {
    (symbol_short!("EXEC"), message_hash.clone())
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Endpoint
pub fn has_endpoint(env: &Env) -> bool {
    env.storage().instance().has(&endpoint_key())
}

pub fn load_endpoint(env: &Env) -> Result<ChainEndpoint, Error> {
    env.storage()
        .instance()
        .get(&endpoint_key())
        .ok_or(Error::NotInitialized)
}

pub fn set_endpoint(env: &Env, endpoint: &ChainEndpoint) {
    env.storage().instance().set(&endpoint_key(), endpoint);
}

// Owner
pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&owner_key())
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&owner_key(), owner);
}

pub fn require_owner(env: &Env, admin: &Address) -> Result<(), Error> {
    if *admin != get_owner(env)? {
        return Err(Error::NotOwner);
    }
    admin.require_auth();
    Ok(())
}

// Outbound nonce
pub fn get_outbound_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&nonce_key()).unwrap_or(0)
}

/// Returns the nonce to stamp on the next outbound message and advances the counter.
pub fn next_outbound_nonce(env: &Env) -> u64 {
    let nonce = get_outbound_nonce(env);
    env.storage().instance().set(&nonce_key(), &(nonce + 1));
    nonce
}

// Trusted remote dispatchers
pub fn get_trusted_contract(env: &Env, chain_name: &String) -> Result<String, Error> {
    env.storage()
        .instance()
        .get(&trusted_key(chain_name))
        .ok_or(Error::UntrustedSource)
}

pub fn set_trusted_contract(env: &Env, chain_name: &String, contract_address: &String) {
    env.storage()
        .instance()
        .set(&trusted_key(chain_name), contract_address);
}

pub fn remove_trusted_contract(env: &Env, chain_name: &String) {
    env.storage().instance().remove(&trusted_key(chain_name));
}

// Execution records (destination side, for replay protection)
pub fn get_execution_record(env: &Env, message_hash: &BytesN<32>) -> Option<ExecutionRecord> {
    env.storage().persistent().get(&execution_key(message_hash))
}

pub fn is_executed(env: &Env, message_hash: &BytesN<32>) -> bool {
    get_execution_record(env, message_hash)
        .map(|record| record.executed)
        .unwrap_or(false)
}

pub fn set_execution_record(env: &Env, record: &ExecutionRecord) {
    let key = execution_key(&record.message_hash);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
