//! Wire format of bridge messages.
//!
//! Layout, in 32-byte big-endian words:
//!
//! ```text
//! reference_id | nonce | count | (kind | key) * count
//! ```
//!
//! `kind` is 0 for an account (ed25519 key) and 1 for a contract (contract id).
//! Decoding is strict: the length must match `count` exactly.

use crate::errors::Error;
use crate::types::{DonationPayload, MAX_RECIPIENTS};
use soroban_sdk::{
    xdr::{FromXdr, ToXdr},
    Address, Bytes, BytesN, Env, String, Vec,
};

const WORD: u32 = 32;
const HEADER_LEN: u32 = 3 * WORD;
const RECIPIENT_LEN: u32 = 2 * WORD;

const KIND_ACCOUNT: u8 = 0;
const KIND_CONTRACT: u8 = 1;

// ScVal::Address discriminant, first word of an address' XDR encoding.
const SCV_ADDRESS: [u8; 4] = [0, 0, 0, 18];

pub fn encode_payload(env: &Env, payload: &DonationPayload) -> Result<Bytes, Error> {
    let count = payload.recipients.len();
    if count == 0 || count > MAX_RECIPIENTS {
        return Err(Error::InvalidRecipients);
    }

    let mut bytes = Bytes::new(env);
    bytes.append(&Bytes::from_array(env, &payload.reference_id.to_array()));
    bytes.append(&Bytes::from_array(env, &u64_word(payload.nonce)));
    bytes.append(&Bytes::from_array(env, &u64_word(count as u64)));

    for recipient in payload.recipients.iter() {
        let (kind, key) = address_parts(env, &recipient)?;
        bytes.append(&Bytes::from_array(env, &u64_word(kind as u64)));
        bytes.append(&Bytes::from_array(env, &key));
    }

    Ok(bytes)
}

pub fn decode_payload(env: &Env, bytes: &Bytes) -> Result<DonationPayload, Error> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::InvalidPayload);
    }

    let reference_id = BytesN::from_array(env, &read_word(bytes, 0));
    let nonce = word_u64(&read_word(bytes, WORD))?;
    let count = word_u64(&read_word(bytes, 2 * WORD))?;

    if count == 0 || count > MAX_RECIPIENTS as u64 {
        return Err(Error::InvalidRecipients);
    }
    let count = count as u32;
    if bytes.len() != HEADER_LEN + count * RECIPIENT_LEN {
        return Err(Error::InvalidPayload);
    }

    let mut recipients = Vec::new(env);
    for i in 0..count {
        let offset = HEADER_LEN + i * RECIPIENT_LEN;
        let kind = word_u64(&read_word(bytes, offset))?;
        let key = read_word(bytes, offset + WORD);
        recipients.push_back(address_from_parts(env, kind, &key)?);
    }

    Ok(DonationPayload {
        recipients,
        reference_id,
        nonce,
    })
}

/// Identity of a message as seen by the destination dispatcher.
///
/// Strings are hashed in XDR form, which is length-prefixed, so distinct
/// `(source_chain, source_address)` splits never collide.
pub fn message_hash(
    env: &Env,
    source_chain: &String,
    source_address: &String,
    payload: &Bytes,
) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&source_chain.clone().to_xdr(env));
    preimage.append(&source_address.clone().to_xdr(env));
    preimage.append(payload);
    env.crypto().keccak256(&preimage).to_bytes()
}

pub fn payload_hash(env: &Env, payload: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(payload).to_bytes()
}

fn read_word(bytes: &Bytes, offset: u32) -> [u8; 32] {
    let mut word = [0u8; 32];
    bytes.slice(offset..offset + WORD).copy_into_slice(&mut word);
    word
}

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..32].copy_from_slice(&value.to_be_bytes());
    word
}

// Rejects words that do not fit in a u64 rather than truncating them.
fn word_u64(word: &[u8; 32]) -> Result<u64, Error> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(Error::InvalidPayload);
    }
    let mut value = [0u8; 8];
    value.copy_from_slice(&word[24..32]);
    Ok(u64::from_be_bytes(value))
}

/// Splits an address into its kind and raw 32-byte key.
///
/// XDR of an address value:
/// - Account: SCV_ADDRESS (4) + kind 0 (4) + PublicKeyType::Ed25519 (4) + key (32) = 44 bytes
/// - Contract: SCV_ADDRESS (4) + kind 1 (4) + contract id (32) = 40 bytes
fn address_parts(env: &Env, address: &Address) -> Result<(u8, [u8; 32]), Error> {
    let xdr = address.clone().to_xdr(env);
    let mut key = [0u8; 32];

    let kind = match (xdr.len(), xdr.get(7)) {
        (44, Some(KIND_ACCOUNT)) => {
            xdr.slice(12..44).copy_into_slice(&mut key);
            KIND_ACCOUNT
        }
        (40, Some(KIND_CONTRACT)) => {
            xdr.slice(8..40).copy_into_slice(&mut key);
            KIND_CONTRACT
        }
        _ => return Err(Error::InvalidRecipients),
    };

    Ok((kind, key))
}

fn address_from_parts(env: &Env, kind: u64, key: &[u8; 32]) -> Result<Address, Error> {
    let kind = u8::try_from(kind).map_err(|_| Error::InvalidPayload)?;

    let mut xdr = Bytes::from_array(env, &SCV_ADDRESS);
    match kind {
        KIND_ACCOUNT => {
            xdr.append(&Bytes::from_array(env, &[0, 0, 0, KIND_ACCOUNT]));
            // PublicKeyType::Ed25519
            xdr.append(&Bytes::from_array(env, &[0, 0, 0, 0]));
        }
        KIND_CONTRACT => {
            xdr.append(&Bytes::from_array(env, &[0, 0, 0, KIND_CONTRACT]));
        }
        _ => return Err(Error::InvalidPayload),
    }
    xdr.append(&Bytes::from_array(env, key));

    Address::from_xdr(env, &xdr).map_err(|_| Error::InvalidPayload)
}
