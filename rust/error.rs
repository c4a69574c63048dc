// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

//! Error taxonomy shared by every roll table operation.

use thiserror::Error;

/// Failure modes of roll table construction, lookup and resolution.
///
/// Every variant is raised at the violated precondition. Nothing in the crate recovers from
/// these internally; the caller decides on retry or fallback.
#[derive(Debug, Error)]
pub enum RollTableError {
    /// Malformed construction input: wrong slot count, bad generic code, duplicate ticker, etc.
    #[error("invalid roll table: {0}")]
    InvalidTable(String),

    /// Bad specifier, commodity, month, year or roll convention at call time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A full contract name that does not parse as `<ticker><month letter><yyyy>`.
    #[error("invalid future name: {0}")]
    InvalidReference(String),

    /// The contract is not tradable under the roll table.
    #[error("future {0} is not in the rolltable")]
    NotInTable(String),

    /// The contract is further than nine forwards away from the current front month.
    #[error("future {0} is out of range")]
    OutOfRange(String),

    /// The distinct-contract walk stepped through `steps` calendar months without completing.
    #[error("could not resolve {forward} for {commodity} within {steps} months")]
    ResolutionExhausted {
        /// Commodity ticker being resolved.
        commodity: String,
        /// Requested forward specifier.
        forward: String,
        /// Calendar months stepped before giving up.
        steps: u32,
    },

    /// Reading a table source from disk failed.
    #[error("could not read roll table source: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RollTableError {
    fn from(err: serde_json::Error) -> Self {
        RollTableError::InvalidTable(err.to_string())
    }
}

impl From<std::convert::Infallible> for RollTableError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

#[cfg(feature = "python")]
impl From<RollTableError> for pyo3::PyErr {
    fn from(err: RollTableError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = RollTableError::NotInTable("CLZ2019".to_string());
        assert_eq!(e.to_string(), "future CLZ2019 is not in the rolltable");

        let e = RollTableError::ResolutionExhausted {
            commodity: "CL".to_string(),
            forward: "C3".to_string(),
            steps: 48,
        };
        assert_eq!(e.to_string(), "could not resolve C3 for CL within 48 months");
    }

    #[test]
    fn json_errors_are_invalid_tables() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        match RollTableError::from(err) {
            RollTableError::InvalidTable(_) => assert!(true),
            _ => assert!(false),
        }
    }
}
