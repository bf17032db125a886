//! TokenMessenger burn body decoder

use crate::constants::{
    AMOUNT_OFFSET, AMOUNT_SIZE, BODY_VERSION_OFFSET, BURN_TOKEN_OFFSET, MESSAGE_SENDER_OFFSET,
    MINT_RECIPIENT_OFFSET,
};
use crate::error::ProtocolResult;
use crate::integer::read_uint_be;
use crate::validation::bounds::{read_address, read_u32_be, safe_slice};
use types::MessageBody;

/// Decode the burn body from the body region
///
/// Bytes past the 132-byte body layout are ignored.
pub fn decode_body(body: &[u8]) -> ProtocolResult<MessageBody> {
    let body_version = read_u32_be(body, BODY_VERSION_OFFSET, "body version")?;
    let burn_token = read_address(body, BURN_TOKEN_OFFSET, "body burn_token")?;
    let mint_recipient = read_address(body, MINT_RECIPIENT_OFFSET, "body mint_recipient")?;
    let amount = read_uint_be(safe_slice(body, AMOUNT_OFFSET, AMOUNT_SIZE, "body amount")?);
    let message_sender = read_address(body, MESSAGE_SENDER_OFFSET, "body message_sender")?;

    Ok(MessageBody {
        body_version,
        burn_token,
        mint_recipient,
        amount,
        message_sender,
    })
}
