//! # CCTP Types - Decoded MessageSent Records
//!
//! ## Purpose
//!
//! Pure data structures for the Circle CCTP `MessageSent` event as it is stored in a
//! Solana account: the outer envelope (rent payer, message length), the message header,
//! and the TokenMessenger burn body. Nothing in this crate touches raw bytes; parsing and
//! encoding rules live in the codec crate.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → callers (RPC clients, indexers, relayers)
//!     ↑             ↓                ↓
//! Address      decode_message_sent   DecodedEvent
//! Domain       MessageSentBuilder    by value
//! U256
//! ```
//!
//! ## Type Safety
//!
//! - [`Address`] wraps exactly 32 bytes so header/body addresses can never be confused
//!   with arbitrary byte slices of another width.
//! - Amounts are [`U256`] so no burn amount is ever truncated to a native integer.
//! - Domains stay raw `u32` on the records (unknown domains must still decode) with
//!   [`Domain`] available for the registered ones.

pub mod address;
pub mod domain;
pub mod message;

pub use address::{Address, AddressError, ADDRESS_SIZE, EVM_ADDRESS_SIZE};
pub use domain::Domain;
pub use message::{DecodedEvent, MessageBody, MessageHeader};

/// Unsigned 256-bit integer used for burn amounts
pub use ethereum_types::U256;
