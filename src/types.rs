//! Common types shared across the pipeline

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Threshold
// ============================================================================

/// Inclusive lower bound on the `school` confidence score.
///
/// Keeps the literal text it was parsed from, because the output file name
/// embeds the threshold exactly as the user typed it (`0.90` stays `0.90`).
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    value: f64,
    literal: String,
}

impl Threshold {
    /// Parse a threshold from its text form.
    ///
    /// Surrounding whitespace is ignored for the numeric value but kept in
    /// the literal. `inf`, `-inf` and `nan` are valid: `-inf` admits every
    /// score and `nan` admits none.
    pub fn parse(text: &str) -> Result<Self> {
        let value: f64 = text.trim().parse().map_err(|_| Error::InvalidThreshold {
            value: text.to_string(),
        })?;

        Ok(Self {
            value,
            literal: text.to_string(),
        })
    }

    /// Numeric value used for comparisons
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Literal text the threshold was parsed from
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Whether a score passes the threshold (inclusive)
    #[inline]
    pub fn admits(&self, score: f64) -> bool {
        score >= self.value
    }
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl<'de> Deserialize<'de> for Threshold {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Job files may write `threshold: 0.9` or `threshold: "0.90"`
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
        }

        let text = match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s,
            Repr::Number(n) => n.to_string(),
        };
        Threshold::parse(&text).map_err(serde::de::Error::custom)
    }
}
