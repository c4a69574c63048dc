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

//! Bloomberg Commodity Index roll schedule.

pub const SOURCE: &str = "https://data.bloomberglp.com/indices/sites/2/2018/02/BCOM-Methodology-January-2018_FINAL-2.pdf#page=38";

pub const TABLE: &[(&str, [&str; 12])] = &[
    ("NG", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("CL", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("CO", ["H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1", "H1"]),
    ("XB", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("HO", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("QS", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("C", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("S", ["H", "H", "K", "K", "N", "N", "X", "X", "X", "X", "F1", "F1"]),
    ("SM", ["H", "H", "K", "K", "N", "N", "Z", "Z", "Z", "Z", "F1", "F1"]),
    ("BO", ["H", "H", "K", "K", "N", "N", "Z", "Z", "Z", "Z", "F1", "F1"]),
    ("W", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("KW", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("SB", ["H", "H", "K", "K", "N", "N", "V", "V", "H1", "H1", "H1", "H1"]),
    ("KC", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("CT", ["H", "H", "K", "K", "N", "N", "Z", "Z", "Z", "Z", "Z", "H1"]),
    ("LC", ["G", "J", "J", "M", "M", "Q", "Q", "V", "V", "Z", "Z", "G1"]),
    ("LH", ["G", "J", "J", "M", "M", "N", "Q", "V", "V", "Z", "Z", "G1"]),
    ("GC", ["G", "J", "J", "M", "M", "Q", "Q", "Z", "Z", "Z", "Z", "G1"]),
    ("SI", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("HG", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("LA", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("LN", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("LX", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
];
