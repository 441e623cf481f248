// outcome.rs — The closed CADF outcome taxonomy.
//
// This is the final list of top-level outcomes; only children may ever be
// added. Unlike actions and resource types, outcome decoding is total:
// anything outside the vocabulary classifies as `Unknown` rather than
// failing, because an outcome is a best-effort classification while
// action/resource membership is strict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::TaxonomyPath;

/// A CADF outcome — how the attempted action concluded.
///
/// Flat vocabulary of four members. The path abstraction would support
/// children, but none exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    Unknown,
    Pending,
}

impl Outcome {
    /// The canonical path segment of this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Unknown => "unknown",
            Outcome::Pending => "pending",
        }
    }

    /// The canonical taxonomy path of this outcome.
    pub fn path(self) -> TaxonomyPath {
        TaxonomyPath::root(self.as_str())
    }

    /// Decode a path string. Total: unrecognized input maps to
    /// [`Outcome::Unknown`].
    pub fn from_path(input: &str) -> Self {
        match input {
            "success" => Outcome::Success,
            "failure" => Outcome::Failure,
            "pending" => Outcome::Pending,
            _ => Outcome::Unknown,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Ok(Outcome::from_path(&input))
    }
}
