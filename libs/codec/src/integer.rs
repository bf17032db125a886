//! Big-endian unsigned integer reader
//!
//! Amounts on the wire are Solidity `uint256`, so they are decoded into a fixed 256-bit
//! integer rather than any native type.

use types::U256;

/// Bytes in a 256-bit integer
pub const U256_SIZE: usize = 32;

/// Interpret `bytes` as a big-endian base-256 number
///
/// Empty input is zero. Inputs longer than 32 bytes keep their low-order 256 bits,
/// i.e. the result is the value modulo 2^256.
pub fn read_uint_be(bytes: &[u8]) -> U256 {
    let start = bytes.len().saturating_sub(U256_SIZE);
    U256::from_big_endian(&bytes[start..])
}
