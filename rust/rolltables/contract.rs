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

use internment::Intern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RollTableError;
use crate::rolltables::month::{MonthCode, MONTHS};

/// A commodity ticker, e.g. *"CL"*. Case-sensitive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker {
    pub(crate) name: Intern<String>,
}

impl Ticker {
    /// Constructs a new `Ticker`.
    ///
    /// Tickers are compared exactly, so *"CL"* and *"cl"* are different commodities.
    pub fn try_new(name: &str) -> Result<Self, RollTableError> {
        if name.is_empty() {
            return Err(RollTableError::InvalidArgument(
                "`Ticker` cannot be empty.".to_string(),
            ));
        }
        Ok(Ticker {
            name: Intern::new(name.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dated futures contract, rendered as ticker, month letter and 4-digit year: *"CLZ2019"*.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullContract {
    pub ticker: Ticker,
    pub code: MonthCode,
    pub year: i32,
}

impl FullContract {
    pub fn new(ticker: Ticker, code: MonthCode, year: i32) -> Self {
        FullContract { ticker, code, year }
    }
}

impl FromStr for FullContract {
    type Err = RollTableError;

    /// Parse `<letters or spaces><month letter><4 digits>`.
    ///
    /// The ticker is everything before the last five characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            RollTableError::InvalidReference(format!(
                "'{s}' does not match '[A-Za-z ]+[{MONTHS}]\\d{{4}}'"
            ))
        };
        if !s.is_ascii() || s.len() < 6 {
            return Err(err());
        }
        let (ticker, tail) = s.split_at(s.len() - 5);
        if !ticker.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(err());
        }
        let mut tail = tail.chars();
        let code = tail.next().and_then(MonthCode::from_char).ok_or_else(err)?;
        let digits = tail.as_str();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        let year: i32 = digits.parse().map_err(|_| err())?;
        Ok(FullContract {
            ticker: Ticker::try_new(ticker).map_err(|_| err())?,
            code,
            year,
        })
    }
}

impl TryFrom<String> for FullContract {
    type Error = RollTableError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FullContract> for String {
    fn from(value: FullContract) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FullContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{:04}", self.ticker, self.code, self.year)
    }
}
