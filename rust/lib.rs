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

//! This is the documentation for rolltables-rs
//!
//! Commodity futures roll tables: resolve generic forwards such as *"F2"* or *"C1"* to dated
//! contracts such as *"CLG2020"*, and back. See [`rolltables`].

#[cfg(test)]
mod tests;

pub mod error;
pub mod json;
pub mod rolltables;

pub use crate::error::RollTableError;
pub use crate::rolltables::{
    Forward, FullContract, GenericContract, MonthCode, RollConvention, RollTable,
    RollTableManager, TableSource,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // JSON
    m.add_function(wrap_pyfunction!(json::json_py::from_json_py, m)?)?;

    // Roll tables
    m.add_class::<RollTable>()?;

    Ok(())
}
