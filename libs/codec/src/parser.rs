//! # MessageSent Parser - Account Data Decoding Pipeline
//!
//! ## Purpose
//!
//! Entry point for turning raw MessageSent account data (as fetched by an RPC client)
//! into a [`DecodedEvent`]. Each step fails fast; nothing partial is ever returned.
//!
//! ## Pipeline
//!
//! ```text
//! &[u8] → discriminator → envelope → header region → header fields
//!                            ↓                            ↓
//!                       rent_payer               body at data[160..]
//!                       message_length                    ↓
//!                                                   body fields → DecodedEvent
//! ```
//!
//! ## Thread Safety
//!
//! Stateless and allocation-free apart from the returned record. Decoders can be shared
//! across threads; the input is only borrowed for the duration of the call.

use crate::envelope::read_envelope;
use crate::error::{ProtocolError, ProtocolResult};
use crate::header::decode_header;
use crate::validation::bounds::validate_event_size;
use crate::validation::config::DecoderConfig;
use crate::validation::discriminator::validate_discriminator;
use tracing::{debug, trace};
use types::DecodedEvent;

/// Decode MessageSent account data with the fixed layout and no extra limits
pub fn decode_message_sent(data: &[u8]) -> ProtocolResult<DecodedEvent> {
    validate_discriminator(data)?;
    let envelope = read_envelope(data)?;
    let message_header = decode_header(data, envelope.header)?;

    Ok(DecodedEvent {
        rent_payer: envelope.rent_payer,
        message_length: envelope.message_length,
        message_header,
    })
}

/// Configured MessageSent decoder
#[derive(Debug, Clone, Default)]
pub struct MessageSentDecoder {
    config: DecoderConfig,
}

impl MessageSentDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode and apply the configured limits and domain expectations
    pub fn decode(&self, data: &[u8]) -> ProtocolResult<DecodedEvent> {
        match self.decode_inner(data) {
            Ok(event) => {
                trace!(
                    nonce = event.message_header.nonce,
                    source_domain = event.message_header.source_domain,
                    destination_domain = event.message_header.destination_domain,
                    "Decoded MessageSent"
                );
                Ok(event)
            }
            Err(e) => {
                debug!(size = data.len(), "Rejected MessageSent data: {}", e);
                Err(e)
            }
        }
    }

    fn decode_inner(&self, data: &[u8]) -> ProtocolResult<DecodedEvent> {
        validate_event_size(data.len(), self.config.max_event_size)?;
        let event = decode_message_sent(data)?;

        let header = &event.message_header;
        if let Some(expected) = self.config.expected_source_domain {
            if header.source_domain != expected {
                return Err(ProtocolError::domain_mismatch(
                    "source_domain",
                    expected,
                    header.source_domain,
                ));
            }
        }
        if let Some(expected) = self.config.expected_destination_domain {
            if header.destination_domain != expected {
                return Err(ProtocolError::domain_mismatch(
                    "destination_domain",
                    expected,
                    header.destination_domain,
                ));
            }
        }

        Ok(event)
    }
}
