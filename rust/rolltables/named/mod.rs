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

//! Static data for published index roll schedules.
//!

pub mod bcom;
pub mod gsci;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::RollTableError;
use crate::rolltables::forward::RollConvention;
use crate::rolltables::table::RollTable;

type NamedTable = (&'static [(&'static str, [&'static str; 12])], &'static str);

pub(crate) static NAMED_TABLES: LazyLock<HashMap<&'static str, NamedTable>> =
    LazyLock::new(|| {
        HashMap::from([
            ("BCOM", (bcom::TABLE, bcom::SOURCE)),
            ("GSCI", (gsci::TABLE, gsci::SOURCE)),
        ])
    });

/// Build and validate one of the published roll tables by name, *"BCOM"* or *"GSCI"*.
///
/// Both are roll-out tables and carry their methodology document as source.
pub fn get_table_by_name(name: &str) -> Result<RollTable, RollTableError> {
    match NAMED_TABLES.get(name) {
        None => Err(RollTableError::InvalidArgument(format!(
            "'{}' is not found in list of existing roll tables.",
            name
        ))),
        Some((table, source)) => Ok(RollTable::try_new(
            table.iter().copied(),
            RollConvention::RollOut,
        )?
        .with_source(source)),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_tables_validate() {
        for name in ["BCOM", "GSCI"] {
            let table = get_table_by_name(name).unwrap();
            assert_eq!(table.table_type(), RollConvention::RollOut);
            assert!(table.source().unwrap().starts_with("https://"));
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn test_named_table_missing() {
        assert!(get_table_by_name("DJUBS").is_err());
    }

    #[test]
    fn test_bcom_crude() {
        let table = get_table_by_name("BCOM").unwrap();
        assert_eq!(
            table.resolve("CL", "F0", 12, 2019, None).unwrap().to_string(),
            "CLF2020"
        );
        assert_eq!(
            table.resolve("CL", "C1", 12, 2019, None).unwrap().to_string(),
            "CLH2020"
        );
    }

    #[test]
    fn test_gsci_crude_is_monthly() {
        let table = get_table_by_name("GSCI").unwrap();
        for k in 0..=9 {
            let fwd = format!("F{k}");
            let c = table.resolve("CL", fwd.as_str(), 3, 2021, None).unwrap();
            assert_eq!(table.reverse(&c.to_string(), 3, 2021, None).unwrap().to_string(), fwd);
        }
    }
}
