//! Permitted operations on a resource category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actions that can be granted on a resource category.
///
/// A closed enumeration: the evaluator matches it exhaustively, so
/// deny-by-default holds for every variant by construction. Any policy
/// implication (e.g. `Administer` covering the others) must be expanded
/// into explicit grants at grant time, never inferred here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// View records of the category.
    Read,
    /// Create new records.
    Create,
    /// Modify existing records.
    Modify,
    /// Delete records.
    Delete,
    /// Administrative operations on the category itself.
    Administer,
}

impl Action {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Modify => "modify",
            Self::Delete => "delete",
            Self::Administer => "administer",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = ledgerhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "create" => Ok(Self::Create),
            "modify" => Ok(Self::Modify),
            "delete" => Ok(Self::Delete),
            "administer" => Ok(Self::Administer),
            _ => Err(ledgerhub_core::AppError::validation(format!(
                "Invalid action: '{s}'"
            ))),
        }
    }
}
