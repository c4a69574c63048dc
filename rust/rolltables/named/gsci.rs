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

//! S&P GSCI roll schedule.

pub const SOURCE: &str =
    "https://www.spindices.com/documents/methodologies/methodology-sp-gsci.pdf#page=27";

pub const TABLE: &[(&str, [&str; 12])] = &[
    ("W", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("KW", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("C", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("S", ["H", "H", "K", "K", "N", "N", "X", "X", "X", "X", "F1", "F1"]),
    ("KC", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("SB", ["H", "H", "K", "K", "N", "N", "V", "V", "H1", "H1", "H1", "H1"]),
    ("CC", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
    ("CT", ["H", "H", "K", "K", "N", "N", "Z", "Z", "Z", "Z", "Z", "H1"]),
    ("LH", ["G", "J", "J", "M", "M", "N", "Q", "V", "V", "Z", "Z", "G1"]),
    ("LC", ["G", "J", "J", "M", "M", "Q", "Q", "V", "V", "Z", "Z", "G1"]),
    ("FC", ["H", "H", "J", "K", "Q", "Q", "Q", "U", "V", "F1", "F1", "F1"]),
    ("CL", ["G", "H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1"]),
    ("HO", ["G", "H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1"]),
    ("XB", ["G", "H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1"]),
    ("QS", ["G", "H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1"]),
    ("CO", ["H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1", "G1"]),
    ("NG", ["G", "H", "J", "K", "M", "N", "Q", "U", "V", "X", "Z", "F1"]),
    ("IC", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("IA", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("IL", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("IN", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("IZ", ["H", "H", "K", "K", "N", "N", "U", "U", "X", "X", "F1", "F1"]),
    ("GC", ["G", "J", "J", "M", "M", "Q", "Q", "Z", "Z", "Z", "Z", "G1"]),
    ("SI", ["H", "H", "K", "K", "N", "N", "U", "U", "Z", "Z", "Z", "H1"]),
];
