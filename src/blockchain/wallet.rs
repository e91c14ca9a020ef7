//! Key generation, import and address derivation.
//!
//! # Security
//! - Randomness comes from an injected CSPRNG, the OS source by default
//! - Private scalars are never logged and `Debug` output omits them
//! - The scalar is only readable through [`KeyPair::expose_private_key_hex`]

use alloy::primitives::{hex, keccak256, Address};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};
use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Draws allowed before giving up on finding a valid scalar.
const MAX_GENERATION_ATTEMPTS: usize = 16;

/// A secp256k1 private scalar and its public point.
pub struct KeyPair {
    signer: PrivateKeySigner,
    public_key: VerifyingKey,
}

impl KeyPair {
    fn from_signing_key(key: SigningKey) -> Self {
        let public_key = VerifyingKey::from(&key);
        Self {
            signer: PrivateKeySigner::from_signing_key(key),
            public_key,
        }
    }

    /// Parse a hex-encoded private scalar.
    ///
    /// The `0x` prefix is optional. Fewer than 64 digits are left-padded
    /// with zeros, matching big-integer renderings that drop leading zeros.
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let digits = private_key_hex
            .strip_prefix("0x")
            .or_else(|| private_key_hex.strip_prefix("0X"))
            .unwrap_or(private_key_hex);

        if digits.is_empty() || digits.len() > 64 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BlockchainError::InvalidKeyFormat(
                "expected 1 to 64 hex digits".to_string(),
            ));
        }

        let padded = Zeroizing::new(format!("{:0>64}", digits));
        let mut bytes = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(padded.as_bytes(), &mut bytes[..])
            .map_err(|e| BlockchainError::InvalidKeyFormat(e.to_string()))?;

        let key = SigningKey::from_slice(&bytes[..]).map_err(|_| {
            BlockchainError::InvalidKeyFormat(
                "scalar is zero or not below the secp256k1 group order".to_string(),
            )
        })?;

        Ok(Self::from_signing_key(key))
    }

    pub fn public_key(&self) -> &VerifyingKey {
        &self.public_key
    }

    /// Uncompressed public point without the leading `0x04` tag.
    pub fn public_key_bytes(&self) -> [u8; 64] {
        let point = self.public_key.to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }

    /// Lowercase hex of the private scalar, zero-padded to 64 digits.
    ///
    /// The returned buffer is wiped when dropped.
    pub fn expose_private_key_hex(&self) -> Zeroizing<String> {
        let mut raw = self.signer.to_bytes();
        let encoded = Zeroizing::new(hex::encode(raw));
        raw.0.zeroize();
        encoded
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &derive_address(self))
            .finish_non_exhaustive()
    }
}

/// Last 20 bytes of keccak256 over the uncompressed public point.
pub fn derive_address(key_pair: &KeyPair) -> Address {
    let hash = keccak256(key_pair.public_key_bytes());
    Address::from_slice(&hash[12..])
}

/// Generates and imports key pairs.
///
/// The entropy source is a type parameter so tests can plug in a seeded
/// generator.
#[derive(Debug)]
pub struct KeyManager<R = OsRng> {
    rng: R,
}

impl KeyManager<OsRng> {
    /// Key manager backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyManager<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> KeyManager<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a fresh private scalar and derive its public point.
    pub fn generate(&mut self) -> BlockchainResult<KeyPair> {
        let mut bytes = Zeroizing::new([0u8; 32]);

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            self.rng.try_fill_bytes(&mut bytes[..]).map_err(|e| {
                BlockchainError::CryptoProvider(format!("Entropy source unavailable: {}", e))
            })?;

            match SigningKey::from_slice(&bytes[..]) {
                Ok(key) => {
                    let key_pair = KeyPair::from_signing_key(key);
                    tracing::info!(address = %derive_address(&key_pair), "Generated key pair");
                    return Ok(key_pair);
                }
                Err(_) => tracing::debug!(attempt, "Drew an invalid scalar, retrying"),
            }
        }

        Err(BlockchainError::CryptoProvider(format!(
            "No valid scalar after {} draws",
            MAX_GENERATION_ATTEMPTS
        )))
    }

    pub fn from_private_key(&self, private_key_hex: &str) -> BlockchainResult<KeyPair> {
        let key_pair = KeyPair::from_private_key(private_key_hex)?;
        tracing::debug!(address = %derive_address(&key_pair), "Imported key pair");
        Ok(key_pair)
    }

    pub fn derive_address(&self, key_pair: &KeyPair) -> Address {
        derive_address(key_pair)
    }

    /// Generate a key pair and wrap it with its address.
    pub fn generate_credentials(&mut self) -> BlockchainResult<Credentials> {
        self.generate().map(Credentials::new)
    }
}

/// A key pair together with its cached address.
pub struct Credentials {
    key_pair: KeyPair,
    address: Address,
}

impl Credentials {
    pub fn new(key_pair: KeyPair) -> Self {
        let address = derive_address(&key_pair);
        Self { key_pair, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn into_key_pair(self) -> KeyPair {
        self.key_pair
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> BlockchainResult<Signature> {
        self.key_pair
            .signer
            .sign_message(message)
            .await
            .map_err(|e| BlockchainError::CryptoProvider(format!("Message signing failed: {}", e)))
    }
}

impl From<KeyPair> for Credentials {
    fn from(key_pair: KeyPair) -> Self {
        Self::new(key_pair)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
