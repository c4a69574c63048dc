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

use crate::json::{json_py::DeserializedObj, JSON};
use crate::rolltables::{RollConvention, RollTable};

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn parse_which(which: Option<&str>) -> PyResult<Option<RollConvention>> {
    Ok(which.map(str::parse::<RollConvention>).transpose()?)
}

#[pymethods]
impl RollTable {
    /// Create a roll table.
    ///
    /// Parameters
    /// ----------
    /// table: dict[str, list[str]]
    ///     A mapping of commodity tickers to a list of 12 contracts, e.g.
    ///     ``{"CL": ["G0","G0","J0","J0","M0","M0","Q0","U0","V0","Z0","Z0","F1"]}``.
    /// tabletype: str, optional
    ///     One of *'roll-in'* or *'roll-out'*.
    #[new]
    #[pyo3(signature = (table, tabletype="roll-out"))]
    fn new_py(table: &Bound<'_, PyDict>, tabletype: &str) -> PyResult<Self> {
        let mut rows: Vec<(String, Vec<String>)> = Vec::with_capacity(table.len());
        for (k, v) in table.iter() {
            let k: String = k.extract().map_err(|_| {
                PyValueError::new_err(
                    "table should be a mapping of commodity tickers to list of 12 contracts",
                )
            })?;
            let v: Vec<String> = v.extract().map_err(|_| {
                PyValueError::new_err(
                    "table should be a mapping of commodity tickers to list of 12 contracts",
                )
            })?;
            rows.push((k, v));
        }
        Ok(RollTable::try_new_str(rows, tabletype)?)
    }

    /// Whether the given future is eligible for trading under this roll table.
    fn __contains__(&self, future: &str) -> PyResult<bool> {
        Ok(self.contains(future)?)
    }

    // Equality
    fn __eq__(&self, other: PyRef<'_, RollTable>) -> bool {
        *self == *other
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "<rl.RollTable {} with {} commodities at {:p}>",
            self.table_type,
            self.len(),
            self
        )
    }

    /// The table type, *'roll-in'* or *'roll-out'*.
    #[getter]
    fn tabletype(&self) -> String {
        self.table_type.to_string()
    }

    /// The provenance of the table, if given.
    #[getter(source)]
    fn source_py(&self) -> Option<String> {
        self.source.clone()
    }

    /// Resolve a forward contract to its full name.
    ///
    /// Parameters
    /// ----------
    /// commodity: str
    ///     A commodity ticker in the roll table.
    /// forward: str
    ///     One of *F-9..F9* or *C-9..C9*.
    /// month: int
    ///     One of 1..12.
    /// year: int
    ///     One of 1950..2050.
    /// which: str, optional
    ///     One of *'roll-in'* or *'roll-out'*, defaulting to the table type.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "resolve", signature = (commodity, forward, month, year, which=None))]
    fn resolve_py(
        &self,
        commodity: &str,
        forward: &str,
        month: u32,
        year: i32,
        which: Option<&str>,
    ) -> PyResult<String> {
        let which = parse_which(which)?;
        Ok(self.resolve(commodity, forward, month, year, which)?.to_string())
    }

    /// Resolve the F-name of a future within nine forwards of the current F0.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "reverse", signature = (future, month, year, which=None))]
    fn reverse_py(
        &self,
        future: &str,
        month: u32,
        year: i32,
        which: Option<&str>,
    ) -> PyResult<String> {
        let which = parse_which(which)?;
        Ok(self.reverse(future, month, year, which)?.to_string())
    }

    /// Return a JSON representation of the object.
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::RollTable(self.clone()).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `RollTable` to JSON.",
            )),
        }
    }
}
