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

use crate::json::JSON;
use crate::rolltables::{Forward, FullContract, GenericContract, RollConvention, RollTable, TableSource};

impl JSON for RollTable {}
impl JSON for TableSource {}
impl JSON for FullContract {}
impl JSON for Forward {}
impl JSON for GenericContract {}
impl JSON for RollConvention {}
