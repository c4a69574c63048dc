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

use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};
use tracing::{debug, info};

use crate::error::RollTableError;
use crate::json::JSON;
use crate::rolltables::named::{get_table_by_name, NAMED_TABLES};
use crate::rolltables::table::RollTable;

/// Environment variable naming a JSON file of additional tables, `{name: table}`.
pub const ROLLTABLES_PATH: &str = "ROLLTABLES_PATH";

// A single memory allocated space to maintain the roll tables with an associated name.
static ROLL_TABLES: LazyLock<RwLock<HashMap<String, Arc<RollTable>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A manager to register and share named [`RollTable`] objects.
///
/// Nothing is registered until the host application asks for it, e.g. with
/// [`RollTableManager::load_defaults`]. Tables are handed out behind an [`Arc`] so resolution
/// never holds the registry lock.
pub struct RollTableManager;

impl RollTableManager {
    /// Create an instance of the [`RollTableManager`] manager.
    pub fn new() -> Self {
        Self {}
    }

    /// Validate and register the published *"BCOM"* and *"GSCI"* tables.
    ///
    /// Tables already registered under those names are left in place.
    pub fn load_defaults(&self) -> Result<(), RollTableError> {
        let tables = NAMED_TABLES
            .keys()
            .sorted()
            .map(|name| get_table_by_name(name).map(|table| (*name, table)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut w = ROLL_TABLES.write().unwrap();
        for (name, table) in tables {
            if w.contains_key(name) {
                continue;
            }
            debug!(name, commodities = table.len(), "registering built-in roll table");
            w.insert(name.to_string(), Arc::new(table));
        }
        Ok(())
    }

    /// Register a table from its JSON representation.
    pub fn load_json(&self, name: &str, json: &str) -> Result<(), RollTableError> {
        let table = RollTable::from_json(json)?;
        self.add(name, table)
    }

    /// Register a table from a JSON file.
    pub fn load_file<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<(), RollTableError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        debug!(name, path = %path.as_ref().display(), "loading roll table");
        self.load_json(name, &json)
    }

    /// Register every table of the file named by `ROLLTABLES_PATH`, if the variable is set.
    ///
    /// Returns the number of tables registered.
    pub fn load_env(&self) -> Result<usize, RollTableError> {
        match std::env::var(ROLLTABLES_PATH) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)?;
                let tables: IndexMap<String, RollTable> = serde_json::from_str(&json)?;
                let n = tables.len();
                for (name, table) in tables {
                    self.add(&name, table)?;
                }
                info!(path = %path, tables = n, "loaded roll tables from environment");
                Ok(n)
            }
            Err(_) => Ok(0),
        }
    }

    /// Returns *true* if a table is registered under `name`.
    pub fn contains_key(&self, name: &str) -> bool {
        let r = ROLL_TABLES.read().unwrap();
        r.contains_key(name)
    }

    /// Return the sorted list of registered names.
    pub fn keys(&self) -> Vec<String> {
        let r = ROLL_TABLES.read().unwrap();
        r.keys().sorted().cloned().collect()
    }

    /// Add a [`RollTable`] to the manager.
    ///
    /// Data will not be overwritten, first `pop` the existing table.
    pub fn add(&self, name: &str, table: RollTable) -> Result<(), RollTableError> {
        match self.insert(name, table) {
            true => Ok(()),
            false => Err(RollTableError::InvalidArgument(format!(
                "roll table '{name}' already exists. Cannot overwrite, first `pop` the existing table."
            ))),
        }
    }

    /// Remove an existing [`RollTable`] from the manager.
    pub fn pop(&self, name: &str) -> Result<Arc<RollTable>, RollTableError> {
        let mut w = ROLL_TABLES.write().unwrap();
        w.remove(name).ok_or_else(|| missing(name))
    }

    /// Return the [`RollTable`] registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<RollTable>, RollTableError> {
        let r = ROLL_TABLES.read().unwrap();
        r.get(name).cloned().ok_or_else(|| missing(name))
    }

    // returns false when the name is already taken
    fn insert(&self, name: &str, table: RollTable) -> bool {
        let mut w = ROLL_TABLES.write().unwrap();
        if w.contains_key(name) {
            return false;
        }
        w.insert(name.to_string(), Arc::new(table));
        true
    }
}

impl Default for RollTableManager {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(name: &str) -> RollTableError {
    RollTableError::InvalidArgument(format!("roll table '{name}' does not exist."))
}
