use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string is not a well-formed object id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("object id must be a 24-character hex string")]
pub struct ParseObjectIdError;

/// Store-assigned identifier for catalog records.
///
/// Twelve bytes: a big-endian creation timestamp in seconds followed by eight
/// random bytes. The wire form is the 24-character lowercase hex encoding;
/// parsing accepts mixed case.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generate a fresh id stamped with the current time.
    pub fn generate() -> Self {
        let secs = chrono::Utc::now().timestamp() as u32;
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        Self(bytes)
    }

    /// Lowercase hex encoding of the id.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut out = String::with_capacity(24);
        for byte in self.0 {
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0f) as usize] as char);
        }
        out
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value.as_bytes();
        if raw.len() != 24 {
            return Err(ParseObjectIdError);
        }

        let mut bytes = [0u8; 12];
        for (slot, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            let hi = hex_digit(pair[0]).ok_or(ParseObjectIdError)?;
            let lo = hex_digit(pair[1]).ok_or(ParseObjectIdError)?;
            *slot = (hi << 4) | lo;
        }

        Ok(Self(bytes))
    }
}

fn hex_digit(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
