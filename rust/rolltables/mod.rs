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

//! Resolve generic commodity futures forwards to dated contracts with a [`RollTable`].
//!
//! A roll table lists, for each commodity, the futures contract held through each calendar
//! month, written as a [`GenericContract`]: a month letter and an optional year offset digit.
//! From it, a generic [`Forward`] as of a given month and year can be resolved to a
//! [`FullContract`], and a [`FullContract`] can be reversed to its `F` forward.
//!
//! # Forwards
//!
//! - **F forwards** (*"F0"*, *"F3"*, *"F-2"*) shift the calendar by whole months and read the
//!   contract in the resulting month's slot. Neighbouring months may share a contract.
//! - **C forwards** (*"C1"*, *"C-1"*) count distinct contracts, stepping the calendar until the
//!   front contract has changed the requested number of times.
//!
//! Whether a slot lists the contract held before or after the roll period is the table's
//! [`RollConvention`]. Resolving under the other convention shifts the lookup by one slot.
//!
//! ### Example
//! ```rust
//! # use rolltables::rolltables::{RollTable, RollConvention, Forward};
//! let table = RollTable::try_new(
//!     vec![("CL", ["G0", "G0", "J0", "J0", "M0", "M0", "Q0", "U0", "V0", "Z0", "Z0", "F1"])],
//!     RollConvention::RollOut,
//! ).unwrap();
//! assert!(table.contains("CLZ2019").unwrap());
//! assert_eq!(table.resolve("CL", "C2", 12, 2019, None).unwrap().to_string(), "CLJ2020");
//! assert_eq!(
//!     table.resolve("CL", "F0", 12, 2019, Some(RollConvention::RollIn)).unwrap().to_string(),
//!     "CLG2020",
//! );
//! ```
//!
//! # Named tables
//!
//! The published *"BCOM"* and *"GSCI"* schedules ship as static data. They are registered with
//! the [`RollTableManager`] by an explicit call:
//! ```rust
//! # use rolltables::rolltables::RollTableManager;
//! let manager = RollTableManager::new();
//! manager.load_defaults().unwrap();
//! let gsci = manager.get("GSCI").unwrap();
//! assert_eq!(gsci.resolve("CL", "F1", 12, 2019, None).unwrap().to_string(), "CLG2020");
//! ```

mod contract;
mod convert;
mod forward;
mod manager;
mod month;
mod named;
mod table;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::rolltables::{
    contract::{FullContract, Ticker},
    convert::TableSource,
    forward::{Forward, RollConvention, MAX_FORWARD_INDEX},
    manager::{RollTableManager, ROLLTABLES_PATH},
    month::{GenericContract, MonthCode, MONTHS},
    named::get_table_by_name,
    table::{RollCycle, RollTable, MAX_REVERSE_INDEX, MAX_WALK_MONTHS, MAX_YEAR, MIN_YEAR},
};
