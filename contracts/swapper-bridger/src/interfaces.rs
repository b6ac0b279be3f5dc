//! Client bindings for the contracts a dispatcher talks to.
//!
//! None of these are implemented here; the gateway, gas service, DEX and
//! registry are deployed independently on every chain.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String, Vec};

#[contractclient(name = "AxelarGatewayClient")]
pub trait AxelarGatewayInterface {
    /// Sends `payload` and `amount` of the token registered as `symbol` to
    /// `destination_address` on `destination_chain`.
    ///
    /// The tokens must already be held by the gateway when this is called.
    fn call_contract_with_token(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
        symbol: String,
        amount: i128,
    );
}

#[contractclient(name = "AxelarGasServiceClient")]
pub trait AxelarGasServiceInterface {
    /// Fee, in the gas token, required to relay `payload` to `destination_chain`.
    fn estimate_gas_fee(
        env: Env,
        destination_chain: String,
        destination_address: String,
        payload: Bytes,
    ) -> i128;

    /// Records a prepaid relay fee for the call identified by `payload_hash`.
    ///
    /// `gas_amount` has already been transferred to the gas service.
    fn pay_gas(
        env: Env,
        sender: Address,
        destination_chain: String,
        destination_address: String,
        payload_hash: BytesN<32>,
        symbol: String,
        amount: i128,
        gas_amount: i128,
        refund_address: Address,
    );
}

#[contractclient(name = "DexFactoryClient")]
pub trait DexFactoryInterface {
    /// Pool for the unordered pair at `fee_tier`, if one has been created.
    fn get_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Option<Address>;
}

#[contractclient(name = "DexRouterClient")]
pub trait DexRouterInterface {
    /// Swaps exactly `amount_in` of `token_in` pulled from `sender` and pays
    /// the output to `recipient`. Returns the output amount.
    fn swap_exact_input(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        fee_tier: u32,
        amount_in: i128,
        amount_out_min: i128,
        recipient: Address,
        deadline: u64,
    ) -> i128;
}

#[contractclient(name = "ContributionRegistryClient")]
pub trait ContributionRegistryInterface {
    fn register_contribution(
        env: Env,
        reference_id: BytesN<32>,
        source_chain: String,
        beneficiaries: Vec<Address>,
        amount: i128,
    );
}
