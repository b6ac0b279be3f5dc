use crate::errors::Error;
use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

/// Upper bound on beneficiaries carried by one bridge message.
pub const MAX_RECIPIENTS: u32 = 16;

/// Per-chain deployment descriptor.
/// Written once by `initialize`, never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ChainEndpoint {
    /// Name the gateway uses for this chain (e.g. "stellar").
    pub chain_name: String,
    pub gateway: Address,
    pub gas_service: Address,
    /// Native asset contract used to pay relay gas.
    pub gas_token: Address,
    pub dex_factory: Address,
    pub dex_router: Address,
    /// The only token moved across chains.
    pub canonical_token: Address,
    /// Local token this deployment primarily swaps from.
    pub source_token: Address,
    /// Pool fee tier used for every factory lookup, in hundredths of a bip.
    pub fee_tier: u32,
    /// Optional fractional-ownership registry notified on execution.
    pub registry: Option<Address>,
}

impl ChainEndpoint {
    pub fn validate(&self) -> Result<(), Error> {
        if self.chain_name.len() == 0 {
            return Err(Error::InvalidConfig);
        }
        if self.canonical_token == self.source_token || self.canonical_token == self.gas_token {
            return Err(Error::InvalidConfig);
        }
        if self.gateway == self.gas_service || self.dex_factory == self.dex_router {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

/// Body of a bridge message, word-encoded into the gateway payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DonationPayload {
    pub recipients: Vec<Address>,
    /// Opaque off-chain reference (certificate, split, ...). All zeroes means none.
    pub reference_id: BytesN<32>,
    /// Outbound sequence number of the sending dispatcher.
    pub nonce: u64,
}

/// Destination-side record of a consumed message.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ExecutionRecord {
    pub message_hash: BytesN<32>,
    pub source_chain: String,
    pub source_contract: String,
    pub executed: bool,
}

/// Inbound swap, consumed within a single invocation.
#[derive(Clone, Debug)]
pub struct SwapRequest {
    pub caller: Address,
    pub token_in: Address,
    pub amount_in: i128,
    pub min_amount_out: i128,
    /// Receiver of the canonical output; this contract when the output is bridged next.
    pub recipient: Address,
}
