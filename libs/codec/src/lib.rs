//! # CCTP MessageSent Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer for Circle CCTP `MessageSent` accounts on
//! Solana:
//! - Account discriminator validation
//! - Envelope reading (rent payer, little-endian message length, header region)
//! - Message header and TokenMessenger burn body decoding
//! - 256-bit big-endian amount decoding
//! - Producer-side encoding with the identical layout
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → RPC clients / indexers
//!     ↑           ↓              ↓
//! Pure Data   Layout Rules   Raw account data in,
//! Structures  Validation     DecodedEvent out
//! Address     Encoding
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - RPC access or account fetching
//! - Transaction construction or signing
//! - Any layout other than the one MessageSent format
//!
//! ## Example
//!
//! ```rust
//! use cctp_codec::{decode_message_sent, MessageSentBuilder};
//! use types::{Address, U256};
//!
//! let data = MessageSentBuilder::new()
//!     .source_domain(5)
//!     .nonce(42)
//!     .amount(U256::from(10_000_000u64))
//!     .build();
//!
//! let event = decode_message_sent(&data)?;
//! assert_eq!(event.message_header.nonce, 42);
//! assert_eq!(event.body().amount_u64(), Some(10_000_000));
//! assert_eq!(event.rent_payer, Address::ZERO);
//! # Ok::<(), cctp_codec::ProtocolError>(())
//! ```

pub mod body;
pub mod builder;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod header;
pub mod integer;
pub mod parser;
pub mod validation;

pub use body::decode_body;
pub use builder::{encode_message_sent, MessageSentBuilder};
pub use constants::*;
pub use envelope::{read_envelope, Envelope};
pub use error::{ProtocolError, ProtocolResult};
pub use header::decode_header;
pub use integer::read_uint_be;
pub use parser::{decode_message_sent, MessageSentDecoder};
pub use validation::{
    account_discriminator, validate_account_discriminator, validate_discriminator, ConfigError,
    DecoderConfig,
};
