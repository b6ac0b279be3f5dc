#![no_std]

mod errors;
mod events;
pub mod interfaces;
mod payload;
mod storage;
mod swap;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use errors::Error;
pub use types::{ChainEndpoint, DonationPayload, ExecutionRecord, MAX_RECIPIENTS};

use events::*;
use interfaces::{AxelarGasServiceClient, AxelarGatewayClient, ContributionRegistryClient};
use soroban_sdk::{contract, contractimpl, log, token, vec, Address, Bytes, BytesN, Env, String, Vec};
use storage::*;
use types::SwapRequest;

// Zero bytes32 constant for comparisons
const ZERO_BYTES32: [u8; 32] = [0u8; 32];

/// SwapperBridger Soroban Contract
/// Swaps local tokens into the canonical bridging token and sends them,
/// with a payload, to a peer deployment on another chain through an
/// Axelar-style gateway. Receives and executes such messages exactly once.
#[contract]
pub struct SwapperBridger;

#[contractimpl]
impl SwapperBridger {
    /// Initialize the contract. The endpoint is fixed from here on.
    pub fn initialize(env: Env, owner: Address, endpoint: ChainEndpoint) -> Result<(), Error> {
        if has_endpoint(&env) {
            return Err(Error::AlreadyInitialized);
        }
        endpoint.validate()?;

        set_owner(&env, &owner);
        set_endpoint(&env, &endpoint);
        extend_instance_ttl(&env);

        log!(&env, "initialized", endpoint.chain_name);

        Ok(())
    }

    // ============ Swap Functions ============

    /// Swap `amount_in` of `token_in` into the canonical token and pay it to `recipient`.
    /// The caller must have approved this contract for at least `amount_in`.
    pub fn swap_token(
        env: Env,
        caller: Address,
        token_in: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        let endpoint = load_endpoint(&env)?;

        let request = SwapRequest {
            caller,
            token_in,
            amount_in,
            min_amount_out,
            recipient,
        };
        let amount_out = swap::swap_to_canonical(&env, &endpoint, &request)?;

        token::Client::new(&env, &endpoint.canonical_token).transfer(
            &env.current_contract_address(),
            &request.recipient,
            &amount_out,
        );

        extend_instance_ttl(&env);

        Ok(amount_out)
    }

    /// Swap into the canonical token and bridge the whole output in one transaction.
    /// Returns the message hash the destination will record.
    pub fn swap_and_send(
        env: Env,
        caller: Address,
        token_in: Address,
        amount_in: i128,
        min_amount_out: i128,
        destination_chain: String,
        destination_contract: String,
        recipients: Vec<Address>,
        reference_id: BytesN<32>,
        gas_payment: i128,
    ) -> Result<BytesN<32>, Error> {
        caller.require_auth();
        let endpoint = load_endpoint(&env)?;

        // Quote first so an underfunded call fails before touching the pool.
        let payload = prepare_message(
            &env,
            &endpoint,
            &destination_chain,
            &destination_contract,
            recipients,
            reference_id.clone(),
            gas_payment,
        )?;

        let request = SwapRequest {
            caller: caller.clone(),
            token_in,
            amount_in,
            min_amount_out,
            recipient: env.current_contract_address(),
        };
        let amount = swap::swap_to_canonical(&env, &endpoint, &request)?;

        let message_hash = dispatch(
            &env,
            &endpoint,
            &caller,
            &destination_chain,
            &destination_contract,
            &payload,
            amount,
            gas_payment,
        );

        emit_donation_sent(
            &env,
            destination_chain,
            caller,
            destination_contract,
            reference_id,
            amount,
            message_hash.clone(),
        );
        extend_instance_ttl(&env);

        Ok(message_hash)
    }

    // ============ Bridge Functions ============

    /// Bridge `amount` of the canonical token to a single recipient on `destination_chain`.
    pub fn send_donation(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_contract: String,
        recipient: Address,
        reference_id: BytesN<32>,
        token: Address,
        amount: i128,
        gas_payment: i128,
    ) -> Result<BytesN<32>, Error> {
        let recipients = vec![&env, recipient];
        Self::send_to_many(
            env,
            caller,
            destination_chain,
            destination_contract,
            recipients,
            reference_id,
            token,
            amount,
            gas_payment,
        )
    }

    /// Bridge `amount` of the canonical token, split evenly across `recipients`
    /// on arrival. Returns the message hash the destination will record.
    pub fn send_to_many(
        env: Env,
        caller: Address,
        destination_chain: String,
        destination_contract: String,
        recipients: Vec<Address>,
        reference_id: BytesN<32>,
        token: Address,
        amount: i128,
        gas_payment: i128,
    ) -> Result<BytesN<32>, Error> {
        caller.require_auth();
        let endpoint = load_endpoint(&env)?;

        if token != endpoint.canonical_token {
            return Err(Error::UnsupportedToken);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let payload = prepare_message(
            &env,
            &endpoint,
            &destination_chain,
            &destination_contract,
            recipients,
            reference_id.clone(),
            gas_payment,
        )?;

        pull_into_custody(&env, &endpoint.canonical_token, &caller, amount)?;

        let message_hash = dispatch(
            &env,
            &endpoint,
            &caller,
            &destination_chain,
            &destination_contract,
            &payload,
            amount,
            gas_payment,
        );

        emit_donation_sent(
            &env,
            destination_chain,
            caller,
            destination_contract,
            reference_id,
            amount,
            message_hash.clone(),
        );
        extend_instance_ttl(&env);

        Ok(message_hash)
    }

    // ============ Gateway Callback ============

    /// Execute a message delivered by the gateway.
    /// @dev Only the configured gateway can call this function. The gateway
    ///      transfers `amount` of the bridged token to this contract first.
    /// Re-delivery of an executed message is accepted and does nothing.
    pub fn execute(
        env: Env,
        caller: Address,
        source_chain: String,
        source_address: String,
        payload: Bytes,
        token_symbol: String,
        amount: i128,
    ) -> Result<(), Error> {
        let endpoint = load_endpoint(&env)?;

        // SECURITY: the passed address must be the gateway and must have authorized this call.
        if caller != endpoint.gateway {
            return Err(Error::UnauthorizedCaller);
        }
        caller.require_auth();

        // Before the trust check: redelivery stays a no-op after the source is removed.
        let message_hash = payload::message_hash(&env, &source_chain, &source_address, &payload);
        if is_executed(&env, &message_hash) {
            log!(&env, "message already executed", message_hash);
            return Ok(());
        }

        if get_trusted_contract(&env, &source_chain)? != source_address {
            return Err(Error::UntrustedSource);
        }

        let canonical = token::Client::new(&env, &endpoint.canonical_token);
        if token_symbol != canonical.symbol() {
            return Err(Error::UnsupportedToken);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let message = payload::decode_payload(&env, &payload)?;

        let this = env.current_contract_address();
        if canonical.balance(&this) < amount {
            return Err(Error::InsufficientBalance);
        }

        // Record before any outbound transfer.
        set_execution_record(
            &env,
            &ExecutionRecord {
                message_hash: message_hash.clone(),
                source_chain: source_chain.clone(),
                source_contract: source_address.clone(),
                executed: true,
            },
        );

        distribute(&canonical, &this, &message.recipients, amount);

        if let Some(registry) = endpoint.registry {
            if message.reference_id != BytesN::from_array(&env, &ZERO_BYTES32) {
                ContributionRegistryClient::new(&env, &registry).register_contribution(
                    &message.reference_id,
                    &source_chain,
                    &message.recipients,
                    &amount,
                );
            }
        }

        emit_executed(&env, source_chain, source_address, message_hash);
        extend_instance_ttl(&env);

        Ok(())
    }

    // ============ Admin Functions ============

    /// Trust `contract_address` as the dispatcher deployed on `chain_name`
    pub fn set_trusted_contract(
        env: Env,
        admin: Address,
        chain_name: String,
        contract_address: String,
    ) -> Result<(), Error> {
        require_owner(&env, &admin)?;

        if chain_name.len() == 0 || contract_address.len() == 0 {
            return Err(Error::InvalidConfig);
        }

        storage::set_trusted_contract(&env, &chain_name, &contract_address);
        emit_trusted_contract_set(&env, chain_name, contract_address);
        Ok(())
    }

    /// Stop accepting messages from `chain_name`
    pub fn remove_trusted_contract(env: Env, admin: Address, chain_name: String) -> Result<(), Error> {
        require_owner(&env, &admin)?;
        storage::remove_trusted_contract(&env, &chain_name);
        emit_trusted_contract_removed(&env, chain_name);
        Ok(())
    }

    // ============ View Functions ============

    pub fn gateway(env: Env) -> Result<Address, Error> {
        Ok(load_endpoint(&env)?.gateway)
    }

    pub fn gas_service(env: Env) -> Result<Address, Error> {
        Ok(load_endpoint(&env)?.gas_service)
    }

    /// Get the full deployment descriptor
    pub fn endpoint(env: Env) -> Result<ChainEndpoint, Error> {
        load_endpoint(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn get_trusted_contract(env: Env, chain_name: String) -> Result<String, Error> {
        storage::get_trusted_contract(&env, &chain_name)
    }

    pub fn is_executed(env: Env, message_hash: BytesN<32>) -> bool {
        storage::is_executed(&env, &message_hash)
    }

    pub fn get_execution_record(env: Env, message_hash: BytesN<32>) -> Option<ExecutionRecord> {
        storage::get_execution_record(&env, &message_hash)
    }

    /// Hash under which a destination dispatcher records the given message
    pub fn message_hash(
        env: Env,
        source_chain: String,
        source_address: String,
        payload: Bytes,
    ) -> BytesN<32> {
        payload::message_hash(&env, &source_chain, &source_address, &payload)
    }

    /// Nonce the next outbound message will carry
    pub fn outbound_nonce(env: Env) -> u64 {
        get_outbound_nonce(&env)
    }
}

// ============ Helper Functions ============

/// Pull `amount` of `token` from `from` into this contract through its allowance.
pub(crate) fn pull_into_custody(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    let this = env.current_contract_address();
    let token_client = token::Client::new(env, token);

    if token_client.allowance(from, &this) < amount {
        return Err(Error::InsufficientAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(Error::InsufficientBalance);
    }

    token_client.transfer_from(&this, from, &this, &amount);
    Ok(())
}

/// Validate the destination descriptor, build the payload with the next
/// outbound nonce and check `gas_payment` against the gas service's quote.
fn prepare_message(
    env: &Env,
    endpoint: &ChainEndpoint,
    destination_chain: &String,
    destination_contract: &String,
    recipients: Vec<Address>,
    reference_id: BytesN<32>,
    gas_payment: i128,
) -> Result<Bytes, Error> {
    if destination_chain.len() == 0 || destination_contract.len() == 0 {
        return Err(Error::InvalidDestination);
    }
    if gas_payment < 0 {
        return Err(Error::InvalidAmount);
    }

    let payload = payload::encode_payload(
        env,
        &DonationPayload {
            recipients,
            reference_id,
            nonce: next_outbound_nonce(env),
        },
    )?;

    let quoted = AxelarGasServiceClient::new(env, &endpoint.gas_service).estimate_gas_fee(
        destination_chain,
        destination_contract,
        &payload,
    );
    if gas_payment < quoted {
        log!(env, "gas payment below quote", gas_payment, quoted);
        return Err(Error::InsufficientGasPayment);
    }

    Ok(payload)
}

/// Pay relay gas and hand `amount` of the canonical token, already in
/// custody, to the gateway together with `payload`.
fn dispatch(
    env: &Env,
    endpoint: &ChainEndpoint,
    sender: &Address,
    destination_chain: &String,
    destination_contract: &String,
    payload: &Bytes,
    amount: i128,
    gas_payment: i128,
) -> BytesN<32> {
    let this = env.current_contract_address();
    let canonical = token::Client::new(env, &endpoint.canonical_token);
    let symbol = canonical.symbol();

    if gas_payment > 0 {
        token::Client::new(env, &endpoint.gas_token).transfer(
            sender,
            &endpoint.gas_service,
            &gas_payment,
        );
        AxelarGasServiceClient::new(env, &endpoint.gas_service).pay_gas(
            &this,
            destination_chain,
            destination_contract,
            &payload::payload_hash(env, payload),
            &symbol,
            &amount,
            &gas_payment,
            sender,
        );
    }

    canonical.transfer(&this, &endpoint.gateway, &amount);
    AxelarGatewayClient::new(env, &endpoint.gateway).call_contract_with_token(
        &this,
        destination_chain,
        destination_contract,
        payload,
        &symbol,
        &amount,
    );

    payload::message_hash(env, &endpoint.chain_name, &this.to_string(), payload)
}

/// Equal split; the remainder of the division goes to the last recipient.
fn distribute(canonical: &token::Client, from: &Address, recipients: &Vec<Address>, amount: i128) {
    let count = recipients.len() as i128;
    let share = amount / count;
    let last = recipients.len() - 1;

    for (i, recipient) in recipients.iter().enumerate() {
        let value = if i as u32 == last {
            amount - share * (count - 1)
        } else {
            share
        };
        if value > 0 {
            canonical.transfer(from, &recipient, &value);
        }
    }
}
