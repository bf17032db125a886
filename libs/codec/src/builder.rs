//! # MessageSent Builder - Producer-Side Encoding
//!
//! ## Purpose
//!
//! Writes MessageSent account data in exactly the layout the parser reads: discriminator,
//! rent payer, little-endian message length, big-endian header at offset 44 and
//! big-endian burn body at offset 160. Used by producers that need to emit the format and
//! by tests that need well-formed (or deliberately malformed) accounts.
//!
//! ## Layout Guarantees
//!
//! - The 292-byte header + body layout is always written.
//! - If `44 + message_length` is larger than that, zero bytes are appended so the declared
//!   header region is always backed by data.
//! - A `message_length` smaller than 116 is written as given; the parser will then reject
//!   the account when it reads header fields past the region.

use crate::constants::*;
use types::{Address, DecodedEvent, MessageBody, MessageHeader, U256};

/// Builder for MessageSent account data
#[derive(Debug, Clone)]
pub struct MessageSentBuilder {
    discriminator: [u8; DISCRIMINATOR_SIZE],
    rent_payer: Address,
    message_length: u32,
    header_version: u32,
    source_domain: u32,
    destination_domain: u32,
    nonce: u64,
    header_sender: Address,
    header_recipient: Address,
    destination_caller: Address,
    body_version: u32,
    burn_token: Address,
    mint_recipient: Address,
    amount: U256,
    message_sender: Address,
}

impl Default for MessageSentBuilder {
    fn default() -> Self {
        Self {
            discriminator: MESSAGE_SENT_DISCRIMINATOR,
            rent_payer: Address::ZERO,
            message_length: BURN_MESSAGE_LENGTH as u32,
            header_version: 0,
            source_domain: 0,
            destination_domain: 0,
            nonce: 0,
            header_sender: Address::ZERO,
            header_recipient: Address::ZERO,
            destination_caller: Address::ZERO,
            body_version: 0,
            burn_token: Address::ZERO,
            mint_recipient: Address::ZERO,
            amount: U256::zero(),
            message_sender: Address::ZERO,
        }
    }
}

impl MessageSentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from every field of a decoded event
    pub fn from_event(event: &DecodedEvent) -> Self {
        let header = &event.message_header;
        let body = &header.message_body;
        Self {
            discriminator: MESSAGE_SENT_DISCRIMINATOR,
            rent_payer: event.rent_payer,
            message_length: event.message_length,
            header_version: header.header_version,
            source_domain: header.source_domain,
            destination_domain: header.destination_domain,
            nonce: header.nonce,
            header_sender: header.header_sender,
            header_recipient: header.header_recipient,
            destination_caller: header.destination_caller,
            body_version: body.body_version,
            burn_token: body.burn_token,
            mint_recipient: body.mint_recipient,
            amount: body.amount,
            message_sender: body.message_sender,
        }
    }

    /// Override the account discriminator (negative tests, other account types)
    pub fn discriminator(mut self, discriminator: [u8; DISCRIMINATOR_SIZE]) -> Self {
        self.discriminator = discriminator;
        self
    }

    pub fn rent_payer(mut self, rent_payer: Address) -> Self {
        self.rent_payer = rent_payer;
        self
    }

    /// Declared header region length (defaults to header + body)
    pub fn message_length(mut self, message_length: u32) -> Self {
        self.message_length = message_length;
        self
    }

    pub fn header_version(mut self, version: u32) -> Self {
        self.header_version = version;
        self
    }

    pub fn source_domain(mut self, domain: u32) -> Self {
        self.source_domain = domain;
        self
    }

    pub fn destination_domain(mut self, domain: u32) -> Self {
        self.destination_domain = domain;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn header_sender(mut self, sender: Address) -> Self {
        self.header_sender = sender;
        self
    }

    pub fn header_recipient(mut self, recipient: Address) -> Self {
        self.header_recipient = recipient;
        self
    }

    pub fn destination_caller(mut self, caller: Address) -> Self {
        self.destination_caller = caller;
        self
    }

    pub fn body_version(mut self, version: u32) -> Self {
        self.body_version = version;
        self
    }

    pub fn burn_token(mut self, burn_token: Address) -> Self {
        self.burn_token = burn_token;
        self
    }

    pub fn mint_recipient(mut self, mint_recipient: Address) -> Self {
        self.mint_recipient = mint_recipient;
        self
    }

    pub fn amount(mut self, amount: U256) -> Self {
        self.amount = amount;
        self
    }

    pub fn message_sender(mut self, sender: Address) -> Self {
        self.message_sender = sender;
        self
    }

    /// The event this builder describes, as the parser would return it
    pub fn to_event(&self) -> DecodedEvent {
        DecodedEvent {
            rent_payer: self.rent_payer,
            message_length: self.message_length,
            message_header: MessageHeader {
                header_version: self.header_version,
                source_domain: self.source_domain,
                destination_domain: self.destination_domain,
                nonce: self.nonce,
                header_sender: self.header_sender,
                header_recipient: self.header_recipient,
                destination_caller: self.destination_caller,
                message_body: MessageBody {
                    body_version: self.body_version,
                    burn_token: self.burn_token,
                    mint_recipient: self.mint_recipient,
                    amount: self.amount,
                    message_sender: self.message_sender,
                },
            },
        }
    }

    /// Encode the account data
    pub fn build(&self) -> Vec<u8> {
        let declared_end = MESSAGE_HEADER_OFFSET.saturating_add(self.message_length as usize);
        let mut data = vec![0u8; MESSAGE_SENT_SIZE.max(declared_end)];

        write_at(&mut data, DISCRIMINATOR_OFFSET, &self.discriminator);
        write_at(&mut data, RENT_PAYER_OFFSET, self.rent_payer.as_bytes());
        write_at(&mut data, MESSAGE_LENGTH_OFFSET, &self.message_length.to_le_bytes());

        let header = &mut data[MESSAGE_HEADER_OFFSET..];
        write_at(header, HEADER_VERSION_OFFSET, &self.header_version.to_be_bytes());
        write_at(header, SOURCE_DOMAIN_OFFSET, &self.source_domain.to_be_bytes());
        write_at(header, DESTINATION_DOMAIN_OFFSET, &self.destination_domain.to_be_bytes());
        write_at(header, NONCE_OFFSET, &self.nonce.to_be_bytes());
        write_at(header, HEADER_SENDER_OFFSET, self.header_sender.as_bytes());
        write_at(header, HEADER_RECIPIENT_OFFSET, self.header_recipient.as_bytes());
        write_at(header, DESTINATION_CALLER_OFFSET, self.destination_caller.as_bytes());

        let body = &mut data[MESSAGE_BODY_OFFSET..];
        write_at(body, BODY_VERSION_OFFSET, &self.body_version.to_be_bytes());
        write_at(body, BURN_TOKEN_OFFSET, self.burn_token.as_bytes());
        write_at(body, MINT_RECIPIENT_OFFSET, self.mint_recipient.as_bytes());
        self.amount
            .to_big_endian(&mut body[AMOUNT_OFFSET..AMOUNT_OFFSET + AMOUNT_SIZE]);
        write_at(body, MESSAGE_SENDER_OFFSET, self.message_sender.as_bytes());

        data
    }
}

/// Encode a decoded event back into account data
pub fn encode_message_sent(event: &DecodedEvent) -> Vec<u8> {
    MessageSentBuilder::from_event(event).build()
}

// Offsets come from the constants table and the buffer is sized for them
#[inline]
fn write_at(buffer: &mut [u8], offset: usize, bytes: &[u8]) {
    buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
}
