//! Protocol-level errors for MessageSent decoding
//!
//! Every decode failure aborts the whole decode; callers get one of these and no partial
//! record. Variants carry enough context (offsets, sizes, the field being read) to tell a
//! wrong account apart from a truncated fetch.

use thiserror::Error;

/// MessageSent decoding errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// First 8 bytes are not the MessageSent account discriminator
    #[error("Invalid discriminator: expected {expected}, got {actual} (indicates: {diagnosis})")]
    InvalidDiscriminator {
        expected: String,
        actual: String,
        diagnosis: String,
    },

    /// A field read would run past the end of the available bytes
    #[error("Buffer underrun: need {need} bytes, got {got} (context: {context})")]
    BufferUnderrun {
        need: usize,
        got: usize,
        context: String,
    },

    /// Account data exceeds the configured decode limit
    #[error("Event too large: {size} bytes exceeds maximum {max}")]
    EventTooLarge { size: usize, max: usize },

    /// Decoded domain does not match the configured expectation
    #[error("Domain mismatch on {field}: expected {expected}, got {got}")]
    DomainMismatch {
        field: &'static str,
        expected: u32,
        got: u32,
    },
}

impl ProtocolError {
    /// Create InvalidDiscriminator with a guess at what the bytes actually are
    pub fn invalid_discriminator(expected: &[u8], actual: &[u8]) -> Self {
        let diagnosis = if actual.iter().all(|&b| b == 0) {
            "uninitialized or closed account"
        } else if actual.iter().zip(expected).filter(|(a, e)| a != e).count() == 1 {
            "single byte corruption"
        } else {
            "different account type"
        };

        Self::InvalidDiscriminator {
            expected: hex::encode(expected),
            actual: hex::encode(actual),
            diagnosis: diagnosis.to_string(),
        }
    }

    /// Create BufferUnderrun naming the read that failed
    pub fn buffer_underrun(need: usize, got: usize, context: impl Into<String>) -> Self {
        Self::BufferUnderrun {
            need,
            got,
            context: context.into(),
        }
    }

    pub fn event_too_large(size: usize, max: usize) -> Self {
        Self::EventTooLarge { size, max }
    }

    pub fn domain_mismatch(field: &'static str, expected: u32, got: u32) -> Self {
        Self::DomainMismatch {
            field,
            expected,
            got,
        }
    }

    /// True for errors caused by missing bytes rather than wrong bytes
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::BufferUnderrun { .. })
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminator_diagnosis() {
        let expected = [0x83, 0x64, 0x85, 0x38, 0xa6, 0xe1, 0x97, 0x3c];

        match ProtocolError::invalid_discriminator(&expected, &[0u8; 8]) {
            ProtocolError::InvalidDiscriminator { diagnosis, .. } => {
                assert_eq!(diagnosis, "uninitialized or closed account")
            }
            other => panic!("unexpected error {:?}", other),
        }

        let mut flipped = expected;
        flipped[3] ^= 0x01;
        match ProtocolError::invalid_discriminator(&expected, &flipped) {
            ProtocolError::InvalidDiscriminator {
                diagnosis, actual, ..
            } => {
                assert_eq!(diagnosis, "single byte corruption");
                assert_eq!(actual, "83648539a6e1973c");
            }
            other => panic!("unexpected error {:?}", other),
        }

        match ProtocolError::invalid_discriminator(&expected, &[0xffu8; 8]) {
            ProtocolError::InvalidDiscriminator { diagnosis, .. } => {
                assert_eq!(diagnosis, "different account type")
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_truncation_classification() {
        assert!(ProtocolError::buffer_underrun(44, 10, "envelope").is_truncation());
        assert!(!ProtocolError::event_too_large(10, 5).is_truncation());
        assert!(!ProtocolError::domain_mismatch("source_domain", 5, 0).is_truncation());
    }
}
