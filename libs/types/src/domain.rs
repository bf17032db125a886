//! CCTP domain identifiers
//!
//! Every chain connected to CCTP is assigned a numeric domain. Message headers carry the
//! raw `u32`; this enum names the registered ones.

use num_enum::TryFromPrimitive;
use std::fmt;

/// Registered CCTP domains
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    Ethereum = 0,
    Avalanche = 1,
    Optimism = 2,
    Arbitrum = 3,
    Noble = 4,
    /// Source domain of every MessageSent account this workspace decodes
    Solana = 5,
    Base = 6,
    Polygon = 7,
    Sui = 8,
    Aptos = 9,
}

impl Domain {
    /// Look up a raw header value; unregistered domains yield `None`
    pub fn from_id(id: u32) -> Option<Self> {
        Self::try_from(id).ok()
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Domain::Ethereum => "ethereum",
            Domain::Avalanche => "avalanche",
            Domain::Optimism => "optimism",
            Domain::Arbitrum => "arbitrum",
            Domain::Noble => "noble",
            Domain::Solana => "solana",
            Domain::Base => "base",
            Domain::Polygon => "polygon",
            Domain::Sui => "sui",
            Domain::Aptos => "aptos",
        }
    }

    /// Whether addresses on this domain are 20-byte EVM addresses padded to bytes32
    pub fn is_evm(&self) -> bool {
        matches!(
            self,
            Domain::Ethereum
                | Domain::Avalanche
                | Domain::Optimism
                | Domain::Arbitrum
                | Domain::Base
                | Domain::Polygon
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
