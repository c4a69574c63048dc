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

use chrono::prelude::*;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::RollTableError;
use crate::rolltables::contract::{FullContract, Ticker};
use crate::rolltables::forward::{Forward, RollConvention};
use crate::rolltables::month::GenericContract;

/// Earliest year accepted as an as-of date.
pub const MIN_YEAR: i32 = 1950;
/// Latest year accepted as an as-of date.
pub const MAX_YEAR: i32 = 2050;
/// Furthest `F` index, either side of the front month, searched by [`RollTable::reverse`].
pub const MAX_REVERSE_INDEX: i32 = 9;
/// Calendar months the `C` walk may step for each distinct contract it must find.
pub const MAX_WALK_MONTHS: u32 = 12;

/// The twelve generic contracts of a commodity, January to December.
pub type RollCycle = [GenericContract; 12];

/// A commodity roll table.
///
/// Maps commodity tickers to twelve [`GenericContract`] slots, one per calendar month, and
/// resolves generic forwards (*"F2"*, *"C1"*) to dated contracts (*"CLG2020"*) and back.
///
/// ### Example
/// ```rust
/// # use rolltables::rolltables::{RollTable, RollConvention, Forward};
/// let table = RollTable::try_new(
///     vec![("CL", vec!["G0", "G0", "J0", "J0", "M0", "M0", "Q0", "U0", "V0", "Z0", "Z0", "F1"])],
///     RollConvention::RollOut,
/// ).unwrap();
/// assert_eq!(table.resolve("CL", "F2", 12, 2019, None).unwrap().to_string(), "CLG2020");
/// assert_eq!(table.reverse("CLF2020", 12, 2019, None).unwrap(), Forward::Month(0));
/// ```
#[cfg_attr(feature = "python", pyo3::pyclass(module = "rolltables.rs"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RollTableData", into = "RollTableData")]
pub struct RollTable {
    pub(crate) table: IndexMap<Ticker, RollCycle>,
    pub(crate) table_type: RollConvention,
    pub(crate) source: Option<String>,
}

// Serialized form, validated through `RollTable::try_new` on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct RollTableData {
    table: IndexMap<String, Vec<String>>,
    #[serde(default)]
    table_type: RollConvention,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl TryFrom<RollTableData> for RollTable {
    type Error = RollTableError;
    fn try_from(value: RollTableData) -> Result<Self, Self::Error> {
        let table = RollTable::try_new(value.table, value.table_type)?;
        Ok(match value.source {
            Some(s) => table.with_source(&s),
            None => table,
        })
    }
}

impl From<RollTable> for RollTableData {
    fn from(value: RollTable) -> Self {
        RollTableData {
            table: value
                .table
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|g| g.to_string()).collect()))
                .collect(),
            table_type: value.table_type,
            source: value.source,
        }
    }
}

impl RollTable {
    /// Create a roll table from a mapping of commodity tickers to twelve generic contracts.
    ///
    /// Validation is all-or-nothing: every ticker must be non-empty and unique, every sequence
    /// must hold exactly 12 entries and every entry must be of the form `[FGHJKMNQUVXZ]\d?`.
    pub fn try_new<I, K, V, S>(table: I, table_type: RollConvention) -> Result<Self, RollTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: Vec<(String, Vec<S>)> = Vec::new();
        for (k, v) in table {
            let slots: Vec<S> = v.into_iter().collect();
            if slots.len() != 12 {
                return Err(RollTableError::InvalidTable(format!(
                    "table should be a mapping of commodity tickers to list of 12 contracts, \
                     '{}' has {}",
                    k.as_ref(),
                    slots.len()
                )));
            }
            raw.push((k.as_ref().to_string(), slots));
        }

        let mut cycles: IndexMap<Ticker, RollCycle> = IndexMap::with_capacity(raw.len());
        for (k, slots) in raw {
            let ticker = Ticker::try_new(&k)
                .map_err(|_| RollTableError::InvalidTable("empty commodity ticker".to_string()))?;
            let codes = slots
                .iter()
                .map(|s| s.as_ref().parse::<GenericContract>())
                .collect::<Result<Vec<_>, _>>()?;
            let cycle: RollCycle = codes
                .try_into()
                .map_err(|_| RollTableError::InvalidTable(format!("'{k}' must have 12 slots")))?;
            if cycles.insert(ticker, cycle).is_some() {
                return Err(RollTableError::InvalidTable(format!(
                    "commodity '{k}' is given more than once"
                )));
            }
        }
        Ok(RollTable::from_cycles(cycles, table_type))
    }

    /// Create a roll table where the table type is given by name, *"roll-in"* or *"roll-out"*.
    pub fn try_new_str<I, K, V, S>(table: I, table_type: &str) -> Result<Self, RollTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table_type: RollConvention = table_type.parse().map_err(|_| {
            RollTableError::InvalidTable(format!(
                "tabletype should be one of 'roll-in', 'roll-out', {table_type} given"
            ))
        })?;
        RollTable::try_new(table, table_type)
    }

    /// Create a roll table from already validated cycles.
    pub fn from_cycles(table: IndexMap<Ticker, RollCycle>, table_type: RollConvention) -> Self {
        RollTable {
            table,
            table_type,
            source: None,
        }
    }

    /// Attach a provenance reference. It is documentation only and never used to resolve.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn table_type(&self) -> RollConvention {
        self.table_type
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Commodity tickers in the order they were given.
    pub fn commodities(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.keys().map(|t| t.as_str())
    }

    /// The twelve generic contracts of a commodity, if present.
    pub fn cycle(&self, commodity: &str) -> Option<&RollCycle> {
        let ticker = Ticker::try_new(commodity).ok()?;
        self.table.get(&ticker)
    }

    /// The generic contracts held through a calendar year, with consecutive repeats removed.
    pub fn distinct_contracts(&self, commodity: &str) -> Option<Vec<GenericContract>> {
        self.cycle(commodity)
            .map(|cycle| cycle.iter().copied().dedup().collect())
    }

    /// Whether a full contract name is eligible for trading under this roll table.
    ///
    /// The commodity must be in the table and one of its slots must carry the contract's month
    /// letter. The year is not checked.
    pub fn contains(&self, future: &str) -> Result<bool, RollTableError> {
        let future: FullContract = future.parse()?;
        Ok(self.contains_contract(&future))
    }

    /// Infallible form of [`RollTable::contains`] for an already parsed contract.
    pub fn contains_contract(&self, future: &FullContract) -> bool {
        self.table
            .get(&future.ticker)
            .is_some_and(|cycle| cycle.iter().any(|g| g.code == future.code))
    }

    /// Resolve a generic forward to its dated contract as of a given month and year.
    ///
    /// - `F<k>` returns the front contract prevailing `k` months from (`month`, `year`).
    /// - `C<k>` returns the `k`-th distinct contract away from the current front contract.
    ///
    /// `convention` states whether the requested forward is the one prevailing before
    /// (*roll-out*) or after (*roll-in*) the roll period, defaulting to the table type.
    pub fn resolve<F>(
        &self,
        commodity: &str,
        forward: F,
        month: u32,
        year: i32,
        convention: Option<RollConvention>,
    ) -> Result<FullContract, RollTableError>
    where
        F: TryInto<Forward>,
        RollTableError: From<F::Error>,
    {
        let forward: Forward = forward.try_into()?;
        let forward = forward.checked()?;
        let (ticker, cycle) = self.get_cycle(commodity)?;
        check_as_of(month, year)?;
        let convention = convention.unwrap_or(self.table_type);
        match forward {
            Forward::Month(k) => Ok(self.resolve_month(ticker, cycle, k, month, year, convention)),
            Forward::Contract(k) => {
                let max_steps = MAX_WALK_MONTHS * (k.unsigned_abs() + 1);
                self.walk_contracts(ticker, cycle, k, month, year, convention, max_steps)
            }
        }
    }

    /// [`RollTable::resolve`] taking the month and year of a date.
    pub fn resolve_on<F>(
        &self,
        commodity: &str,
        forward: F,
        date: &NaiveDateTime,
        convention: Option<RollConvention>,
    ) -> Result<FullContract, RollTableError>
    where
        F: TryInto<Forward>,
        RollTableError: From<F::Error>,
    {
        self.resolve(commodity, forward, date.month(), date.year(), convention)
    }

    /// Find the `F` forward of a full contract as of a given month and year.
    ///
    /// Searches *F0..F9* then *F-0..F-9* and returns the first match, so a contract held over
    /// several months gets the forward nearest to the current front month.
    pub fn reverse(
        &self,
        future: &str,
        month: u32,
        year: i32,
        convention: Option<RollConvention>,
    ) -> Result<Forward, RollTableError> {
        let contract: FullContract = future.parse()?;
        if !self.contains_contract(&contract) {
            return Err(RollTableError::NotInTable(future.to_string()));
        }
        let (ticker, cycle) = self.get_cycle(contract.ticker.as_str())?;
        check_as_of(month, year)?;
        let convention = convention.unwrap_or(self.table_type);

        // `F-0` repeats `F0` and can never match in the second pass.
        let indexes = (0..=MAX_REVERSE_INDEX).chain((0..=MAX_REVERSE_INDEX).map(|i| -i));
        for index in indexes {
            if self.resolve_month(ticker, cycle, index, month, year, convention) == contract {
                return Ok(Forward::Month(index));
            }
        }
        Err(RollTableError::OutOfRange(future.to_string()))
    }

    /// [`RollTable::reverse`] taking the month and year of a date.
    pub fn reverse_on(
        &self,
        future: &str,
        date: &NaiveDateTime,
        convention: Option<RollConvention>,
    ) -> Result<Forward, RollTableError> {
        self.reverse(future, date.month(), date.year(), convention)
    }

    fn get_cycle(&self, commodity: &str) -> Result<(Ticker, &RollCycle), RollTableError> {
        let err = || {
            RollTableError::InvalidArgument(format!("commodity {commodity} not in roll table"))
        };
        let ticker = Ticker::try_new(commodity).map_err(|_| err())?;
        self.table
            .get(&ticker)
            .map(|cycle| (ticker, cycle))
            .ok_or_else(err)
    }

    /// Shift (`month`, `year`) by `k` months, adjusted for the roll convention, and read the slot.
    ///
    /// `month` is in [1, 12]; the year is not range checked.
    pub(crate) fn resolve_month(
        &self,
        ticker: Ticker,
        cycle: &RollCycle,
        k: i32,
        month: u32,
        year: i32,
        convention: RollConvention,
    ) -> FullContract {
        let shift =
            k + convention.roll_in_indicator() - self.table_type.roll_in_indicator();
        let month = month as i32;
        let new_month = ((month - 1) + 12 * year + shift).rem_euclid(12) + 1;
        let new_year = year + (month + shift - 1).div_euclid(12);
        let generic = cycle[(new_month - 1) as usize];
        FullContract::new(ticker, generic.code, new_year + generic.year_offset())
    }

    /// Step the calendar one month at a time until `k` distinct front contracts have passed.
    pub(crate) fn walk_contracts(
        &self,
        ticker: Ticker,
        cycle: &RollCycle,
        k: i32,
        month: u32,
        year: i32,
        convention: RollConvention,
        max_steps: u32,
    ) -> Result<FullContract, RollTableError> {
        let (mut month, mut year) = (month, year);
        let mut remaining = k;
        let mut current = self.resolve_month(ticker, cycle, 0, month, year, convention);
        let mut steps: u32 = 0;
        while remaining != 0 {
            if steps >= max_steps {
                return Err(RollTableError::ResolutionExhausted {
                    commodity: ticker.to_string(),
                    forward: Forward::Contract(k).to_string(),
                    steps,
                });
            }
            steps += 1;
            (month, year) = step_month(month, year, remaining > 0);
            let next = self.resolve_month(ticker, cycle, 0, month, year, convention);
            if next != current {
                current = next;
                remaining -= remaining.signum();
            }
        }
        Ok(current)
    }
}

fn check_as_of(month: u32, year: i32) -> Result<(), RollTableError> {
    if !(1..=12).contains(&month) {
        return Err(RollTableError::InvalidArgument(format!(
            "month should be one of 1..12, {month} given"
        )));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(RollTableError::InvalidArgument(format!(
            "year should be one of {MIN_YEAR}..{MAX_YEAR}, {year} given"
        )));
    }
    Ok(())
}

fn step_month(month: u32, year: i32, forward: bool) -> (u32, i32) {
    match (forward, month) {
        (true, 12) => (1, year + 1),
        (true, m) => (m + 1, year),
        (false, 1) => (12, year - 1),
        (false, m) => (m - 1, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolltables::month::MonthCode;

    const CL: [&str; 12] = [
        "G0", "G0", "J0", "J0", "M0", "M0", "Q0", "U0", "V0", "Z0", "Z0", "F1",
    ];
    const NG: [&str; 12] = [
        "H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1",
    ];

    fn table() -> RollTable {
        RollTable::try_new(vec![("CL", CL), ("NG", NG)], RollConvention::RollOut).unwrap()
    }

    fn resolve(t: &RollTable, c: &str, f: &str, m: u32, y: i32) -> String {
        t.resolve(c, f, m, y, None).unwrap().to_string()
    }

    #[test]
    fn construction_rejects_bad_lengths() {
        let short: Vec<&str> = CL[..11].to_vec();
        let mut long: Vec<&str> = CL.to_vec();
        long.push("F1");
        for bad in [short, long] {
            match RollTable::try_new(vec![("NG", NG.to_vec()), ("CL", bad)], RollConvention::RollOut) {
                Err(RollTableError::InvalidTable(_)) => assert!(true),
                _ => assert!(false),
            }
        }
    }

    #[test]
    fn construction_rejects_bad_codes() {
        let mut bad = CL;
        bad[4] = "A0";
        assert!(RollTable::try_new(vec![("CL", bad)], RollConvention::RollOut).is_err());
        bad[4] = "M10";
        assert!(RollTable::try_new(vec![("CL", bad)], RollConvention::RollOut).is_err());
        assert!(RollTable::try_new(vec![("CL", CL), ("CL", CL)], RollConvention::RollOut).is_err());
        assert!(RollTable::try_new(vec![("", CL)], RollConvention::RollOut).is_err());
    }

    #[test]
    fn construction_table_type_names() {
        let t = RollTable::try_new_str(vec![("CL", CL)], "roll-in").unwrap();
        assert_eq!(t.table_type(), RollConvention::RollIn);
        match RollTable::try_new_str(vec![("CL", CL)], "roll-over") {
            Err(RollTableError::InvalidTable(_)) => assert!(true),
            _ => assert!(false),
        }
    }

    #[test]
    fn table_accessors() {
        let t = table().with_source("https://example.com/methodology.pdf");
        assert_eq!(t.len(), 2);
        assert_eq!(t.commodities().collect::<Vec<_>>(), vec!["CL", "NG"]);
        assert_eq!(t.source(), Some("https://example.com/methodology.pdf"));
        assert_eq!(t.cycle("CL").unwrap()[11].to_string(), "F1");
        assert!(t.cycle("XX").is_none());
        let distinct: Vec<String> = t
            .distinct_contracts("CL")
            .unwrap()
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(distinct, vec!["G0", "J0", "M0", "Q0", "U0", "V0", "Z0", "F1"]);
    }

    #[test]
    fn contains_ignores_year() {
        let t = table();
        assert!(t.contains("CLZ2019").unwrap());
        assert!(t.contains("CLZ1990").unwrap());
        assert!(!t.contains("CLH2019").unwrap());
        assert!(!t.contains("COZ2019").unwrap());
        assert!(t.contains("NGF2020").unwrap());
        match t.contains("CL2019") {
            Err(RollTableError::InvalidReference(_)) => assert!(true),
            _ => assert!(false),
        }
    }

    #[test]
    fn resolve_month_forwards() {
        let t = table();
        let options: Vec<(&str, &str, u32, i32, &str)> = vec![
            ("CL", "F0", 12, 2019, "CLF2020"),
            ("CL", "F1", 12, 2019, "CLG2020"),
            ("CL", "F2", 12, 2019, "CLG2020"),
            ("CL", "F3", 12, 2019, "CLJ2020"),
            ("CL", "F0", 1, 2020, "CLG2020"),
            ("CL", "F-1", 1, 2020, "CLF2020"),
            ("CL", "F-2", 1, 2020, "CLZ2019"),
            ("CL", "F-9", 1, 2020, "CLJ2019"),
            ("CL", "F9", 6, 2020, "CLJ2021"),
            ("CL", "F-0", 6, 2020, "CLM2020"),
            ("NG", "F0", 11, 2019, "NGF2020"),
            ("NG", "F0", 1, 2020, "NGH2020"),
            ("NG", "F-2", 1, 2020, "NGF2020"),
        ];
        for option in options {
            assert_eq!(resolve(&t, option.0, option.1, option.2, option.3), option.4);
        }
    }

    #[test]
    fn resolve_scenario() {
        assert_eq!(resolve(&table(), "CL", "F2", 12, 2019), "CLG2020");
    }

    #[test]
    fn negative_shift_across_year_boundary() {
        let t = table();
        // February 2020 back seven months lands in July 2019.
        let c = t.resolve("CL", "F-7", 2, 2020, None).unwrap();
        assert_eq!(c.code, MonthCode::Q);
        assert_eq!(c.year, 2019);
        // January 2020 back 9 months lands in April 2019, slot 3.
        assert_eq!(resolve(&t, "CL", "F-9", 1, 2020), "CLJ2019");
        // February 1950 back 9 months lands in May 1949.
        assert_eq!(resolve(&t, "CL", "F-9", 2, 1950), "CLM1949");
    }

    #[test]
    fn year_wrap_agreement() {
        let t = table();
        for y in [1950, 1999, 2019, 2049] {
            for c in ["CL", "NG"] {
                let a = resolve(&t, c, "F1", 12, y);
                assert_eq!(a, resolve(&t, c, "F0", 1, y + 1));
                assert_eq!(a, resolve(&t, c, "F-1", 2, y + 1));
                assert_eq!(resolve(&t, c, "F-1", 1, y + 1), resolve(&t, c, "F0", 12, y));
            }
        }
    }

    #[test]
    fn roll_convention_shifts_one_slot() {
        let t = table();
        for m in 1..=12 {
            let roll_in = t.resolve("CL", "F0", m, 2019, Some(RollConvention::RollIn)).unwrap();
            let roll_out = t.resolve("CL", "F1", m, 2019, Some(RollConvention::RollOut)).unwrap();
            assert_eq!(roll_in, roll_out);
        }
        assert_eq!(
            t.resolve("CL", "F0", 2, 2019, Some(RollConvention::RollIn)).unwrap().to_string(),
            "CLJ2019"
        );
        assert_eq!(resolve(&t, "CL", "F0", 2, 2019), "CLG2019");

        let t_in = RollTable::try_new(vec![("CL", CL)], RollConvention::RollIn).unwrap();
        assert_eq!(
            t_in.resolve("CL", "F0", 3, 2019, Some(RollConvention::RollOut)).unwrap().to_string(),
            "CLG2019"
        );
        assert_eq!(t_in.resolve("CL", "F0", 3, 2019, None).unwrap().to_string(), "CLJ2019");
    }

    #[test]
    fn resolve_argument_errors() {
        let t = table();
        let options: Vec<(&str, &str, u32, i32)> = vec![
            ("CL", "F10", 1, 2020),
            ("CL", "X1", 1, 2020),
            ("CO", "F0", 1, 2020),
            ("CL", "F0", 0, 2020),
            ("CL", "F0", 13, 2020),
            ("CL", "F0", 1, 1949),
            ("CL", "F0", 1, 2051),
        ];
        for option in options {
            match t.resolve(option.0, option.1, option.2, option.3, None) {
                Err(RollTableError::InvalidArgument(_)) => assert!(true),
                _ => assert!(false, "{:?} should fail", option),
            }
        }
    }

    #[test]
    fn resolve_contract_forwards() {
        let t = table();
        let options: Vec<(&str, &str, u32, i32, &str)> = vec![
            ("CL", "C0", 12, 2019, "CLF2020"),
            ("CL", "C1", 12, 2019, "CLG2020"),
            ("CL", "C2", 12, 2019, "CLJ2020"),
            ("CL", "C3", 12, 2019, "CLM2020"),
            ("CL", "C-1", 12, 2019, "CLZ2019"),
            ("CL", "C-2", 12, 2019, "CLV2019"),
            ("NG", "C1", 1, 2020, "NGK2020"),
            ("NG", "C-1", 1, 2020, "NGF2020"),
            ("NG", "C9", 1, 2020, "NGU2021"),
        ];
        for option in options {
            assert_eq!(resolve(&t, option.0, option.1, option.2, option.3), option.4);
        }
    }

    #[test]
    fn contract_forwards_always_advance() {
        let t = table();
        for c in ["CL", "NG"] {
            for m in 1..=12 {
                let c0 = resolve(&t, c, "C0", m, 2019);
                assert_ne!(c0, resolve(&t, c, "C1", m, 2019));
                assert_ne!(c0, resolve(&t, c, "C-1", m, 2019));
            }
        }
    }

    #[test]
    fn contract_walk_may_leave_year_bounds() {
        let t = table();
        assert_eq!(resolve(&t, "CL", "C1", 12, 2050), "CLG2051");
        assert_eq!(resolve(&t, "CL", "C-1", 1, 1950), "CLF1950");
    }

    #[test]
    fn contract_walk_is_capped() {
        let t = table();
        let (ticker, cycle) = t.get_cycle("NG").unwrap();
        // NG holds H through January and February, so one step cannot reach the next contract.
        let result = t.walk_contracts(ticker, cycle, 1, 1, 2020, RollConvention::RollOut, 1);
        match result {
            Err(RollTableError::ResolutionExhausted { steps, .. }) => assert_eq!(steps, 1),
            _ => assert!(false),
        }
        assert!(t
            .walk_contracts(ticker, cycle, 1, 1, 2020, RollConvention::RollOut, 2)
            .is_ok());
    }

    #[test]
    fn reverse_lookup() {
        let t = table();
        let options: Vec<(&str, u32, i32, Forward)> = vec![
            ("CLF2020", 12, 2019, Forward::Month(0)),
            ("CLG2020", 12, 2019, Forward::Month(1)),
            ("CLJ2020", 12, 2019, Forward::Month(3)),
            ("CLZ2019", 12, 2019, Forward::Month(-1)),
            ("CLZ2019", 11, 2019, Forward::Month(0)),
            ("CLQ2019", 12, 2019, Forward::Month(-5)),
        ];
        for option in options {
            assert_eq!(t.reverse(option.0, option.1, option.2, None).unwrap(), option.3);
        }
    }

    #[test]
    fn reverse_returns_nearest_forward() {
        // F1 and F2 both resolve to CLG2020 from December 2019.
        let t = table();
        let f = t.reverse("CLG2020", 12, 2019, None).unwrap();
        assert_eq!(f, Forward::Month(1));
        assert_eq!(resolve(&t, "CL", "F2", 12, 2019), "CLG2020");
    }

    #[test]
    fn reverse_errors() {
        let t = table();
        match t.reverse("CLH2020", 12, 2019, None) {
            Err(RollTableError::NotInTable(_)) => assert!(true),
            _ => assert!(false),
        }
        match t.reverse("COZ2019", 12, 2019, None) {
            Err(RollTableError::NotInTable(_)) => assert!(true),
            _ => assert!(false),
        }
        match t.reverse("CLZ2025", 12, 2019, None) {
            Err(RollTableError::OutOfRange(_)) => assert!(true),
            _ => assert!(false),
        }
        match t.reverse("CLZ25", 12, 2019, None) {
            Err(RollTableError::InvalidReference(_)) => assert!(true),
            _ => assert!(false),
        }
        match t.reverse("CLZ2019", 13, 2019, None) {
            Err(RollTableError::InvalidArgument(_)) => assert!(true),
            _ => assert!(false),
        }
    }

    #[test]
    fn date_overloads() {
        let t = table();
        let date = NaiveDate::from_ymd_opt(2019, 12, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(t.resolve_on("CL", "F2", &date, None).unwrap().to_string(), "CLG2020");
        assert_eq!(t.reverse_on("CLF2020", &date, None).unwrap(), Forward::Month(0));
    }

    #[test]
    fn typed_forward_outside_grammar() {
        let t = table();
        let options = vec![
            Forward::Month(10),
            Forward::Month(25),
            Forward::Contract(-10),
            Forward::Month(i32::MAX),
            Forward::Month(i32::MIN),
            Forward::Contract(i32::MIN),
            Forward::Contract(i32::MAX),
        ];
        for option in options {
            match t.resolve("CL", option, 12, 2019, None) {
                Err(RollTableError::InvalidArgument(_)) => assert!(true),
                _ => assert!(false, "{:?} should fail", option),
            }
        }
    }

    #[test]
    fn typed_forward_argument() {
        let t = table();
        let c = t.resolve("CL", Forward::Contract(2), 12, 2019, None).unwrap();
        assert_eq!(c.to_string(), "CLJ2020");
    }
}
