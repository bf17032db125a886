//! # MessageSent Validation
//!
//! ## Architecture
//!
//! ```text
//! Account Data → size limit → discriminator → bounds-checked field reads
//!      ↓             ↓              ↓                    ↓
//!   &[u8]      DecoderConfig   sha256 prefix       BufferUnderrun on
//!              EventTooLarge   InvalidDiscriminator  any short region
//! ```

pub mod bounds;
pub mod config;
pub mod discriminator;

pub use bounds::*;
pub use config::{ConfigError, DecoderConfig};
pub use discriminator::{account_discriminator, validate_account_discriminator, validate_discriminator};
