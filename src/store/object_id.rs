//! Binary bookmark identifiers and their hex wire encoding.
//!
//! A stored bookmark is keyed by a 12-byte identifier: a 4-byte big-endian
//! UNIX timestamp followed by 8 random bytes. On the wire the identifier is
//! always its 24-character lowercase hex encoding.

use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::IdError;

/// Number of raw identifier bytes.
pub const ID_LEN: usize = 12;

/// Number of hex characters in the wire encoding.
pub const ID_HEX_LEN: usize = 2 * ID_LEN;

/// A 12-byte bookmark identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; ID_LEN]);

impl ObjectId {
    /// Mints a fresh identifier: current UNIX seconds + 8 random bytes.
    ///
    /// # Errors
    /// Returns `IdError::RandomGeneration` if the system RNG fails.
    pub fn mint(rng: &SystemRandom) -> Result<Self, IdError> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as u32;

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rng.fill(&mut bytes[4..])
            .map_err(|e| IdError::RandomGeneration(format!("{:?}", e)))?;

        Ok(Self(bytes))
    }

    /// Parses the 24-character hex wire encoding of an identifier.
    ///
    /// Accepts either case on input; rejects any string that is not exactly
    /// 24 hex characters.
    ///
    /// # Errors
    /// Returns `IdError::InvalidLength` or `IdError::InvalidHex`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != ID_HEX_LEN {
            return Err(IdError::InvalidLength(s.len()));
        }

        let mut bytes = [0u8; ID_LEN];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            let hi = hex_nibble(chunk[0]).ok_or_else(|| IdError::InvalidHex(s.to_string()))?;
            let lo = hex_nibble(chunk[1]).ok_or_else(|| IdError::InvalidHex(s.to_string()))?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Returns the lowercase hex wire encoding. Total — never fails.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(ID_HEX_LEN);
        for b in &self.0 {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }

    /// Constructs an identifier from raw storage bytes.
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw storage bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Returns the embedded creation timestamp (UNIX seconds).
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Decodes a single ASCII hex digit to its value.
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
