//! Declaration identifiers
//!
//! Shape: `DEC-ADU-SAG-YYMMDD-XXXXXX`, where the date is the local date the
//! form was opened and the suffix is six random characters from `[A-Z0-9]`.

use chrono::{Local, NaiveDate};
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

const PREFIX: &str = "DEC-ADU-SAG";
const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^DEC-ADU-SAG-\d{6}-[A-Z0-9]{6}$").expect("static pattern is valid")
});

/// Identifier of one declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeclarationId(String);

impl DeclarationId {
    /// Generate an identifier for today
    pub fn generate() -> Self {
        Self::generate_for(Local::now().date_naive(), &mut rand::rng())
    }

    /// Generate an identifier for a given date with a caller-supplied RNG
    pub fn generate_for<R: Rng>(date: NaiveDate, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();

        Self(format!("{}-{}-{}", PREFIX, date.format("%y%m%d"), suffix))
    }

    /// Accept an existing identifier if it has the expected shape
    pub fn parse(s: &str) -> Option<Self> {
        ID_PATTERN.is_match(s).then(|| Self(s.to_string()))
    }

    /// Whether a string has the identifier shape
    pub fn is_well_formed(s: &str) -> bool {
        ID_PATTERN.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
