//! Decoded MessageSent records
//!
//! Field names follow Circle's message format documentation. The nesting mirrors the
//! wire format: the envelope owns the header, the header owns the body.

use crate::{Address, Domain, U256};

/// TokenMessenger burn message body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageBody {
    pub body_version: u32,
    /// Mint of the token burned on the source chain
    pub burn_token: Address,
    /// Recipient of the minted tokens on the destination chain
    pub mint_recipient: Address,
    pub amount: U256,
    /// Account that requested the burn
    pub message_sender: Address,
}

impl MessageBody {
    /// Amount narrowed to `u64`, `None` if it does not fit
    ///
    /// SPL token amounts are `u64`, so any amount burned on Solana fits.
    pub fn amount_u64(&self) -> Option<u64> {
        if self.amount > U256::from(u64::MAX) {
            return None;
        }
        Some(self.amount.low_u64())
    }
}

/// CCTP message header
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageHeader {
    pub header_version: u32,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub nonce: u64,
    /// Program that sent the message (TokenMessengerMinter for burns)
    pub header_sender: Address,
    /// Handler on the destination domain (remote TokenMessenger)
    pub header_recipient: Address,
    /// Only this caller may receive the message; zero means anyone
    pub destination_caller: Address,
    pub message_body: MessageBody,
}

impl MessageHeader {
    pub fn source(&self) -> Option<Domain> {
        Domain::from_id(self.source_domain)
    }

    pub fn destination(&self) -> Option<Domain> {
        Domain::from_id(self.destination_domain)
    }

    pub fn has_destination_caller(&self) -> bool {
        !self.destination_caller.is_zero()
    }
}

/// Complete MessageSent account contents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedEvent {
    /// Account that paid rent for the event account
    pub rent_payer: Address,
    /// Declared length of the header region
    pub message_length: u32,
    pub message_header: MessageHeader,
}

impl DecodedEvent {
    pub fn body(&self) -> &MessageBody {
        &self.message_header.message_body
    }

    pub fn nonce(&self) -> u64 {
        self.message_header.nonce
    }
}
