//! 32-byte addresses carried by CCTP messages
//!
//! Solana public keys are natively 32 bytes. EVM addresses are 20 bytes and travel
//! left-padded with 12 zero bytes (the `bytes32` convention TokenMessenger uses for
//! `mintRecipient` and `destinationCaller`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of every address field in the message layout
pub const ADDRESS_SIZE: usize = 32;

/// Width of an EVM address before bytes32 padding
pub const EVM_ADDRESS_SIZE: usize = 20;

const EVM_PADDING_SIZE: usize = ADDRESS_SIZE - EVM_ADDRESS_SIZE;

/// Address construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input slice is not exactly 32 bytes
    #[error("Invalid address length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Input string is not valid hex
    #[error("Invalid address hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },
}

/// Opaque 32-byte address
///
/// No structural interpretation beyond the bytes themselves; equality, ordering and
/// hashing are byte-wise.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// All-zero address (used for "any destination caller")
    pub const ZERO: Self = Self([0u8; ADDRESS_SIZE]);

    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; ADDRESS_SIZE] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_SIZE,
                got: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Left-pad a 20-byte EVM address into bytes32 form
    pub fn from_evm_address(address: [u8; EVM_ADDRESS_SIZE]) -> Self {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[EVM_PADDING_SIZE..].copy_from_slice(&address);
        Self(bytes)
    }

    /// Extract the EVM address if the 12 leading bytes are zero padding
    pub fn to_evm_address(&self) -> Option<[u8; EVM_ADDRESS_SIZE]> {
        if self.0[..EVM_PADDING_SIZE].iter().any(|&b| b != 0) {
            return None;
        }
        let mut address = [0u8; EVM_ADDRESS_SIZE];
        address.copy_from_slice(&self.0[EVM_PADDING_SIZE..]);
        Some(address)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_SIZE]
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_SIZE] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse 64 hex digits, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }
}
