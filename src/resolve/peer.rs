//! Peer dependency constraint evaluation
//!
//! A simplified reader, not a range parser. Each `||` alternative contributes
//! only its first number, read as a major version:
//! - `>=N` (anywhere in the alternative): satisfied when `target >= N`
//! - `^N` or `~N`: satisfied when `target == N`
//! - anything else: ignored
//!
//! `>=` alternatives admit every later major, including ones the package was
//! never tested against.

use crate::domain::TargetMajor;
use regex::Regex;
use std::sync::LazyLock;

static FIRST_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// How a single alternative constrains the target major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternative {
    /// `>=N`
    AtLeast(u64),
    /// `^N` / `~N`
    SameMajor(u64),
    /// Not understood by this reader
    Ignored,
}

impl Alternative {
    fn parse(text: &str) -> Self {
        let major = FIRST_NUMBER_RE
            .find(text)
            .and_then(|m| m.as_str().parse::<u64>().ok());

        let Some(major) = major else {
            return Alternative::Ignored;
        };

        if text.contains(">=") {
            Alternative::AtLeast(major)
        } else if text.contains('^') || text.contains('~') {
            Alternative::SameMajor(major)
        } else {
            Alternative::Ignored
        }
    }

    fn admits(&self, target: TargetMajor) -> bool {
        match *self {
            Alternative::AtLeast(major) => target.at_least(major),
            Alternative::SameMajor(major) => target.equals(major),
            Alternative::Ignored => false,
        }
    }
}

/// Returns true if the target major satisfies any alternative of the constraint
pub fn satisfies_peer(target: TargetMajor, constraint: &str) -> bool {
    constraint
        .split("||")
        .map(str::trim)
        .map(Alternative::parse)
        .any(|alternative| alternative.admits(target))
}
