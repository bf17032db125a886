//! MessageSent envelope reader
//!
//! The envelope is the Anchor account wrapper around the message: discriminator, the
//! account that paid rent, and the length-prefixed message bytes. This is the only place
//! the declared length is checked against the bytes actually present.

use crate::constants::{MESSAGE_HEADER_OFFSET, MESSAGE_LENGTH_OFFSET, RENT_PAYER_OFFSET};
use crate::error::ProtocolResult;
use crate::validation::bounds::{read_address, read_u32_le, safe_slice};
use types::Address;

/// Borrowed view of the envelope fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub rent_payer: Address,
    pub message_length: u32,
    /// Exactly `message_length` bytes starting at offset 44
    pub header: &'a [u8],
}

/// Read rent payer, message length and header region
///
/// Assumes the discriminator has already been validated.
pub fn read_envelope(data: &[u8]) -> ProtocolResult<Envelope<'_>> {
    let rent_payer = read_address(data, RENT_PAYER_OFFSET, "envelope rent_payer")?;
    let message_length = read_u32_le(data, MESSAGE_LENGTH_OFFSET, "envelope message_length")?;
    let header = safe_slice(
        data,
        MESSAGE_HEADER_OFFSET,
        message_length as usize,
        "envelope header region",
    )?;

    Ok(Envelope {
        rent_payer,
        message_length,
        header,
    })
}
