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

/// The canonical futures month alphabet, January to December.
pub const MONTHS: &str = "FGHJKMNQUVXZ";

/// A single-letter futures month code.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonthCode {
    F = 1,
    G = 2,
    H = 3,
    J = 4,
    K = 5,
    M = 6,
    N = 7,
    Q = 8,
    U = 9,
    V = 10,
    X = 11,
    Z = 12,
}

impl MonthCode {
    /// Return the month code for a letter, if it is in [`MONTHS`].
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'F' => Some(MonthCode::F),
            'G' => Some(MonthCode::G),
            'H' => Some(MonthCode::H),
            'J' => Some(MonthCode::J),
            'K' => Some(MonthCode::K),
            'M' => Some(MonthCode::M),
            'N' => Some(MonthCode::N),
            'Q' => Some(MonthCode::Q),
            'U' => Some(MonthCode::U),
            'V' => Some(MonthCode::V),
            'X' => Some(MonthCode::X),
            'Z' => Some(MonthCode::Z),
            _ => None,
        }
    }

    /// Return the month code of a calendar month in [1, 12].
    pub fn try_from_month(month: u32) -> Result<Self, RollTableError> {
        match month {
            1..=12 => MonthCode::from_char(MONTHS.as_bytes()[(month - 1) as usize] as char)
                .ok_or_else(|| RollTableError::InvalidArgument(format!("month {month}"))),
            _ => Err(RollTableError::InvalidArgument(format!(
                "month should be one of 1..12, {month} given"
            ))),
        }
    }

    /// The calendar month in [1, 12].
    pub fn month(&self) -> u32 {
        *self as u32
    }

    /// The letter representation.
    pub fn letter(&self) -> char {
        MONTHS.as_bytes()[(self.month() - 1) as usize] as char
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A roll table slot: a month code with an optional year offset digit, e.g. *"Z0"* or *"F1"*.
///
/// The offset counts years after the year implied by the slot. A code written without a digit
/// has offset zero, but keeps its written form when displayed.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GenericContract {
    pub(crate) code: MonthCode,
    pub(crate) offset: Option<u8>,
}

impl GenericContract {
    /// Create a generic contract from its parts.
    pub fn new(code: MonthCode, offset: Option<u8>) -> Self {
        GenericContract { code, offset }
    }

    /// The month code of the target contract.
    pub fn code(&self) -> MonthCode {
        self.code
    }

    /// Years to add to the slot's base year.
    pub fn year_offset(&self) -> i32 {
        self.offset.unwrap_or(0) as i32
    }
}

impl FromStr for GenericContract {
    type Err = RollTableError;

    /// Parse `[FGHJKMNQUVXZ]` optionally followed by one decimal digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            RollTableError::InvalidTable(format!(
                "contracts should be of the form '[{MONTHS}]\\d?', '{s}' given"
            ))
        };
        let mut chars = s.chars();
        let code = chars.next().and_then(MonthCode::from_char).ok_or_else(err)?;
        let offset = match chars.next() {
            None => None,
            Some(c) => Some(c.to_digit(10).ok_or_else(err)? as u8),
        };
        if chars.next().is_some() {
            return Err(err());
        }
        Ok(GenericContract { code, offset })
    }
}

impl TryFrom<String> for GenericContract {
    type Error = RollTableError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GenericContract> for String {
    fn from(value: GenericContract) -> Self {
        value.to_string()
    }
}

impl fmt::Display for GenericContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(d) => write!(f, "{}{}", self.code, d),
            None => write!(f, "{}", self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_code_calendar_order() {
        for (i, c) in MONTHS.chars().enumerate() {
            let code = MonthCode::from_char(c).unwrap();
            assert_eq!(code.month(), i as u32 + 1);
            assert_eq!(code.letter(), c);
            assert_eq!(MonthCode::try_from_month(i as u32 + 1).unwrap(), code);
        }
        assert!(MonthCode::from_char('A').is_none());
        assert!(MonthCode::try_from_month(0).is_err());
        assert!(MonthCode::try_from_month(13).is_err());
    }

    #[test]
    fn generic_contract_parsing() {
        let options: Vec<(&str, Option<(MonthCode, i32)>)> = vec![
            ("G0", Some((MonthCode::G, 0))),
            ("F1", Some((MonthCode::F, 1))),
            ("Z", Some((MonthCode::Z, 0))),
            ("H9", Some((MonthCode::H, 9))),
            ("", None),
            ("A0", None),
            ("g0", None),
            ("F10", None),
            ("FX", None),
            ("F-1", None),
            ("0F", None),
        ];
        for option in options {
            let result = GenericContract::from_str(option.0);
            match option.1 {
                Some((code, offset)) => {
                    let g = result.unwrap();
                    assert_eq!(g.code(), code);
                    assert_eq!(g.year_offset(), offset);
                }
                None => assert!(result.is_err()),
            }
        }
    }

    #[test]
    fn generic_contract_display_keeps_written_form() {
        assert_eq!("G0".parse::<GenericContract>().unwrap().to_string(), "G0");
        assert_eq!("G".parse::<GenericContract>().unwrap().to_string(), "G");
    }

    #[test]
    fn generic_contract_serde() {
        let g: GenericContract = serde_json::from_str("\"F1\"").unwrap();
        assert_eq!(g, GenericContract::new(MonthCode::F, Some(1)));
        assert_eq!(serde_json::to_string(&g).unwrap(), "\"F1\"");
        assert!(serde_json::from_str::<GenericContract>("\"B1\"").is_err());
    }
}
