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

//! Reshape tabular data into a [`RollTable`].

use serde::{Deserialize, Serialize};

use crate::error::RollTableError;
use crate::rolltables::forward::RollConvention;
use crate::rolltables::table::RollTable;

/// Tabular roll table input, either one named column or a frame of labelled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSource {
    /// One commodity: its ticker and twelve values, January to December.
    Series { name: String, values: Vec<String> },
    /// Many commodities: twelve column labels and one `(ticker, values)` row per commodity.
    Frame {
        columns: Vec<String>,
        rows: Vec<(String, Vec<String>)>,
    },
}

impl TableSource {
    /// Validate the dimensions and build a [`RollTable`].
    pub fn into_table(self, table_type: RollConvention) -> Result<RollTable, RollTableError> {
        match self {
            TableSource::Series { name, values } => {
                if values.len() != 12 {
                    return Err(RollTableError::InvalidTable(format!(
                        "expected 12 points from series, received {}",
                        values.len()
                    )));
                }
                RollTable::try_new(vec![(name, values)], table_type)
            }
            TableSource::Frame { columns, rows } => {
                if columns.len() != 12 {
                    return Err(RollTableError::InvalidTable(format!(
                        "expected 12 columns from frame, received {}",
                        columns.len()
                    )));
                }
                if let Some((name, values)) = rows.iter().find(|(_, v)| v.len() != columns.len()) {
                    return Err(RollTableError::InvalidTable(format!(
                        "row '{}' has {} values for {} columns",
                        name,
                        values.len(),
                        columns.len()
                    )));
                }
                RollTable::try_new(rows, table_type)
            }
        }
    }

    /// Read a comma separated frame.
    ///
    /// The first line is a header, `ticker` followed by the column labels. Each following line is
    /// a ticker and its values. Cells are trimmed and blank lines skipped.
    pub fn from_csv_str(data: &str) -> Result<Self, RollTableError> {
        let mut lines = data.lines().map(str::trim).filter(|l| !l.is_empty());
        let header = lines
            .next()
            .ok_or_else(|| RollTableError::InvalidTable("empty csv".to_string()))?;
        let columns: Vec<String> = header.split(',').skip(1).map(|c| c.trim().to_string()).collect();
        let rows = lines
            .map(|line| {
                let mut cells = line.split(',').map(|c| c.trim().to_string());
                match cells.next() {
                    Some(name) if !name.is_empty() => Ok((name, cells.collect())),
                    _ => Err(RollTableError::InvalidTable(format!("missing ticker in '{line}'"))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TableSource::Frame { columns, rows })
    }
}
