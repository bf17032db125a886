//! # Wire Layout Constants - MessageSent Account Format
//!
//! ## Purpose
//!
//! Single table of every byte offset and width used by the codec. Decoders and the
//! builder both read from here so the layout is defined exactly once per region.
//!
//! ## Layout
//!
//! ```text
//! Envelope (offsets into the account data)
//!   0 ┬ discriminator          8  sha256("account:MessageSent")[..8]
//!   8 ┼ rent_payer            32
//!  40 ┼ message_length         4  little-endian u32
//!  44 ┴ header region          message_length bytes
//!
//! Header region (big-endian)             Body region (big-endian, starts at 44 + 116)
//!   0 version             4                0 version          4
//!   4 source_domain       4                4 burn_token      32
//!   8 destination_domain  4               36 mint_recipient  32
//!  12 nonce               8               68 amount          32  uint256
//!  20 sender             32              100 message_sender  32
//!  52 recipient          32
//!  84 destination_caller 32
//! ```
//!
//! Sources: Circle `message-transmitter` `MessageSent` account and the CCTP message
//! format documentation (header, TokenMessenger burn body).

use hex_literal::hex;
use types::ADDRESS_SIZE;

// =============================================================================
// Envelope
// =============================================================================

/// Anchor account name the discriminator is derived from
pub const MESSAGE_SENT_ACCOUNT_NAME: &str = "MessageSent";

/// Length of an Anchor account discriminator
pub const DISCRIMINATOR_SIZE: usize = 8;

/// MessageSent account discriminator
/// sha256("account:MessageSent")[..8]
pub const MESSAGE_SENT_DISCRIMINATOR: [u8; DISCRIMINATOR_SIZE] = hex!("83648538a6e1973c");

pub const DISCRIMINATOR_OFFSET: usize = 0;
pub const RENT_PAYER_OFFSET: usize = 8;
pub const MESSAGE_LENGTH_OFFSET: usize = 40;
pub const MESSAGE_LENGTH_SIZE: usize = 4;
/// Start of the header region in the account data
pub const MESSAGE_HEADER_OFFSET: usize = 44;

// =============================================================================
// Message header (relative to the header region)
// =============================================================================

pub const HEADER_VERSION_OFFSET: usize = 0;
pub const SOURCE_DOMAIN_OFFSET: usize = 4;
pub const DESTINATION_DOMAIN_OFFSET: usize = 8;
pub const NONCE_OFFSET: usize = 12;
pub const HEADER_SENDER_OFFSET: usize = 20;
pub const HEADER_RECIPIENT_OFFSET: usize = 52;
pub const DESTINATION_CALLER_OFFSET: usize = 84;
/// Fixed header size; the body follows it on the wire
pub const MESSAGE_HEADER_SIZE: usize = DESTINATION_CALLER_OFFSET + ADDRESS_SIZE;

/// Start of the body region in the account data, not in the header region
pub const MESSAGE_BODY_OFFSET: usize = MESSAGE_HEADER_OFFSET + MESSAGE_HEADER_SIZE;

// =============================================================================
// TokenMessenger burn body (relative to the body region)
// =============================================================================

pub const BODY_VERSION_OFFSET: usize = 0;
pub const BURN_TOKEN_OFFSET: usize = 4;
pub const MINT_RECIPIENT_OFFSET: usize = 36;
pub const AMOUNT_OFFSET: usize = 68;
pub const AMOUNT_SIZE: usize = 32;
pub const MESSAGE_SENDER_OFFSET: usize = 100;
pub const MESSAGE_BODY_SIZE: usize = MESSAGE_SENDER_OFFSET + ADDRESS_SIZE;

/// Header + body, the `message_length` Circle writes for burn messages
pub const BURN_MESSAGE_LENGTH: usize = MESSAGE_HEADER_SIZE + MESSAGE_BODY_SIZE;

/// Total bytes of a fully populated MessageSent account
pub const MESSAGE_SENT_SIZE: usize = MESSAGE_BODY_OFFSET + MESSAGE_BODY_SIZE;

/// Solana caps account data at 10 MiB
pub const MAX_ACCOUNT_DATA_SIZE: usize = 10 * 1024 * 1024;
