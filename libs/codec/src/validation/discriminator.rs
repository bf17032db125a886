//! Anchor account discriminator validation
//!
//! Anchor prefixes account data with `sha256("account:" + name)[..8]`. The MessageSent
//! value is a compile-time constant; [`account_discriminator`] derives any other one.

use crate::constants::{DISCRIMINATOR_OFFSET, DISCRIMINATOR_SIZE, MESSAGE_SENT_DISCRIMINATOR};
use crate::error::{ProtocolError, ProtocolResult};
use crate::validation::bounds::read_array;
use sha2::{Digest, Sha256};

/// Derive the 8-byte Anchor discriminator for an account type name
pub fn account_discriminator(account_name: &str) -> [u8; DISCRIMINATOR_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(b"account:");
    hasher.update(account_name.as_bytes());
    let digest = hasher.finalize();

    let mut discriminator = [0u8; DISCRIMINATOR_SIZE];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_SIZE]);
    discriminator
}

/// Check that `data` starts with `expected`
pub fn validate_account_discriminator(
    data: &[u8],
    expected: &[u8; DISCRIMINATOR_SIZE],
) -> ProtocolResult<()> {
    let actual: [u8; DISCRIMINATOR_SIZE] =
        read_array(data, DISCRIMINATOR_OFFSET, "account discriminator")?;
    if &actual != expected {
        return Err(ProtocolError::invalid_discriminator(expected, &actual));
    }
    Ok(())
}

/// Check that `data` is a MessageSent account
pub fn validate_discriminator(data: &[u8]) -> ProtocolResult<()> {
    validate_account_discriminator(data, &MESSAGE_SENT_DISCRIMINATOR)
}
