use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, String, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GasPayment {
    pub sender: Address,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload_hash: BytesN<32>,
    pub symbol: String,
    pub amount: i128,
    pub gas_amount: i128,
    pub refund_address: Address,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Fee,
    Payments,
}

#[contract]
pub struct MockGasService;

#[contractimpl]
impl MockGasService {
    pub fn set_fee(env: Env, fee: i128) {
        env.storage().instance().set(&DataKey::Fee, &fee);
    }

    /// Flat fee regardless of destination or payload size.
    pub fn estimate_gas_fee(
        env: Env,
        _destination_chain: String,
        _destination_address: String,
        _payload: Bytes,
    ) -> i128 {
        env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
    }

    pub fn pay_gas(
        env: Env,
        sender: Address,
        destination_chain: String,
        destination_address: String,
        payload_hash: BytesN<32>,
        symbol: String,
        amount: i128,
        gas_amount: i128,
        refund_address: Address,
    ) {
        sender.require_auth();

        let mut payments = Self::payments(env.clone());
        payments.push_back(GasPayment {
            sender,
            destination_chain,
            destination_address,
            payload_hash,
            symbol,
            amount,
            gas_amount,
            refund_address,
        });
        env.storage().instance().set(&DataKey::Payments, &payments);
    }

    pub fn payments(env: Env) -> Vec<GasPayment> {
        env.storage()
            .instance()
            .get(&DataKey::Payments)
            .unwrap_or(Vec::new(&env))
    }
}
