use crate::SwapperBridgerClient;
use soroban_sdk::{
    contract, contractimpl, contracttype, token, Address, Bytes, Env, String, Symbol, Vec,
};

/// Outbound call as received by the gateway.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContractCall {
    pub caller: Address,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload: Bytes,
    pub symbol: String,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Token,
    Calls,
}

#[contract]
pub struct MockGateway;

#[contractimpl]
impl MockGateway {
    /// `token` is released to destination contracts on delivery.
    pub fn init(env: Env, token: Address) {
        env.storage().instance().set(&DataKey::Token, &token);
    }

    pub fn call_contract_with_token(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
        symbol: String,
        amount: i128,
    ) {
        caller.require_auth();

        let call = ContractCall {
            caller: caller.clone(),
            destination_chain,
            destination_address,
            payload,
            symbol,
            amount,
        };

        let mut calls = Self::calls(env.clone());
        calls.push_back(call.clone());
        env.storage().instance().set(&DataKey::Calls, &calls);

        env.events().publish(
            (Symbol::new(&env, "contract_call_with_token"), caller),
            call,
        );
    }

    pub fn calls(env: Env) -> Vec<ContractCall> {
        env.storage()
            .instance()
            .get(&DataKey::Calls)
            .unwrap_or(Vec::new(&env))
    }

    /// Release `amount` to `destination` and invoke its `execute`, as the
    /// relayer network would after the source transaction is final.
    pub fn deliver(
        env: Env,
        destination: Address,
        source_chain: String,
        source_address: String,
        payload: Bytes,
        symbol: String,
        amount: i128,
    ) {
        let this = env.current_contract_address();
        let token: Address = env.storage().instance().get(&DataKey::Token).unwrap();
        token::Client::new(&env, &token).transfer(&this, &destination, &amount);

        SwapperBridgerClient::new(&env, &destination).execute(
            &this,
            &source_chain,
            &source_address,
            &payload,
            &symbol,
            &amount,
        );
    }
}
