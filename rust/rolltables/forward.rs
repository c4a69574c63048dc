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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RollTableError;

/// Specifier for whether a roll table lists the contract before or after a month's roll period.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollConvention {
    /// The contract listed for a month is the one prevailing after the roll period.
    #[serde(rename = "roll-in")]
    RollIn,
    /// The contract listed for a month is the one prevailing before the roll period.
    #[default]
    #[serde(rename = "roll-out")]
    RollOut,
}

impl RollConvention {
    pub(crate) fn roll_in_indicator(&self) -> i32 {
        match self {
            RollConvention::RollIn => 1,
            RollConvention::RollOut => 0,
        }
    }
}

impl FromStr for RollConvention {
    type Err = RollTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roll-in" => Ok(RollConvention::RollIn),
            "roll-out" => Ok(RollConvention::RollOut),
            _ => Err(RollTableError::InvalidArgument(format!(
                "which should be one of 'roll-in', 'roll-out', {s} given"
            ))),
        }
    }
}

impl fmt::Display for RollConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollConvention::RollIn => write!(f, "roll-in"),
            RollConvention::RollOut => write!(f, "roll-out"),
        }
    }
}

/// A generic forward relative to the front month of a given (month, year).
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Forward {
    /// `F<k>`: the front contract prevailing `k` calendar months away.
    Month(i32),
    /// `C<k>`: the `k`-th distinct contract away from the current front contract.
    Contract(i32),
}

/// Largest index, either sign, of a [`Forward`] specifier.
pub const MAX_FORWARD_INDEX: i32 = 9;

impl Forward {
    /// Create an `F<k>` forward, with `k` in [-9, 9].
    pub fn try_month(k: i32) -> Result<Self, RollTableError> {
        Forward::Month(k).checked()
    }

    /// Create a `C<k>` forward, with `k` in [-9, 9].
    pub fn try_contract(k: i32) -> Result<Self, RollTableError> {
        Forward::Contract(k).checked()
    }

    /// Return the forward if its index is in [-9, 9].
    pub fn checked(self) -> Result<Self, RollTableError> {
        if (-MAX_FORWARD_INDEX..=MAX_FORWARD_INDEX).contains(&self.index()) {
            Ok(self)
        } else {
            Err(RollTableError::InvalidArgument(format!(
                "expected forward to be one of F-9..F9 or C-9..C9, {self} given"
            )))
        }
    }

    /// The signed index `k`.
    pub fn index(&self) -> i32 {
        match self {
            Forward::Month(k) | Forward::Contract(k) => *k,
        }
    }
}

impl FromStr for Forward {
    type Err = RollTableError;

    /// Parse `F` or `C`, an optional minus sign and exactly one decimal digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            RollTableError::InvalidArgument(format!(
                "expected forward to be one of F-9..F9 or C-9..C9, {s} given"
            ))
        };
        let mut chars = s.chars();
        let kind = chars.next().ok_or_else(err)?;
        let rest = chars.as_str();
        let (sign, digits) = match rest.strip_prefix('-') {
            Some(d) => (-1, d),
            None => (1, rest),
        };
        let mut digits = digits.chars();
        let k = match (digits.next(), digits.next()) {
            (Some(d), None) => d.to_digit(10).ok_or_else(err)? as i32 * sign,
            _ => return Err(err()),
        };
        match kind {
            'F' => Ok(Forward::Month(k)),
            'C' => Ok(Forward::Contract(k)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Forward {
    type Error = RollTableError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Forward {
    type Error = RollTableError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Forward> for String {
    fn from(value: Forward) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Forward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forward::Month(k) => write!(f, "F{k}"),
            Forward::Contract(k) => write!(f, "C{k}"),
        }
    }
}
