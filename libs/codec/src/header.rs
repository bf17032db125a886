//! Message header decoder
//!
//! Header fields are read from the envelope's header region. The body is NOT taken from
//! that region: it is the account data from offset 44 + 116 to the end, which is where
//! the message transmitter places it regardless of the declared length.

use crate::body::decode_body;
use crate::constants::{
    DESTINATION_CALLER_OFFSET, DESTINATION_DOMAIN_OFFSET, HEADER_RECIPIENT_OFFSET,
    HEADER_SENDER_OFFSET, HEADER_VERSION_OFFSET, MESSAGE_BODY_OFFSET, NONCE_OFFSET,
    SOURCE_DOMAIN_OFFSET,
};
use crate::error::ProtocolResult;
use crate::validation::bounds::{read_address, read_u32_be, read_u64_be, slice_from};
use types::MessageHeader;

/// Decode the header from `header` and the body from `data`
///
/// `data` is the complete account data, `header` the region returned by
/// [`read_envelope`](crate::envelope::read_envelope).
pub fn decode_header(data: &[u8], header: &[u8]) -> ProtocolResult<MessageHeader> {
    let header_version = read_u32_be(header, HEADER_VERSION_OFFSET, "header version")?;
    let source_domain = read_u32_be(header, SOURCE_DOMAIN_OFFSET, "header source_domain")?;
    let destination_domain =
        read_u32_be(header, DESTINATION_DOMAIN_OFFSET, "header destination_domain")?;
    let nonce = read_u64_be(header, NONCE_OFFSET, "header nonce")?;
    let header_sender = read_address(header, HEADER_SENDER_OFFSET, "header sender")?;
    let header_recipient = read_address(header, HEADER_RECIPIENT_OFFSET, "header recipient")?;
    let destination_caller =
        read_address(header, DESTINATION_CALLER_OFFSET, "header destination_caller")?;

    let body = slice_from(data, MESSAGE_BODY_OFFSET, "message body region")?;
    let message_body = decode_body(body)?;

    Ok(MessageHeader {
        header_version,
        source_domain,
        destination_domain,
        nonce,
        header_sender,
        header_recipient,
        destination_caller,
        message_body,
    })
}
