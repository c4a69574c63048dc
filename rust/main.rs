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

use rolltables::{RollConvention, RollTableError, RollTableManager};
use std::process::ExitCode;
use tracing::{debug, error};

const USAGE: &str = "usage:
    rolltables resolve <TABLE> <COMMODITY> <FORWARD> <MONTH> <YEAR> [roll-in|roll-out]
    rolltables reverse <TABLE> <CONTRACT> <MONTH> <YEAR> [roll-in|roll-out]
    rolltables contains <TABLE> <CONTRACT>
    rolltables list";

fn parse<T: std::str::FromStr>(arg: &str, what: &str) -> Result<T, RollTableError> {
    arg.parse()
        .map_err(|_| RollTableError::InvalidArgument(format!("{what} '{arg}' is not valid")))
}

fn convention(arg: Option<&String>) -> Result<Option<RollConvention>, RollTableError> {
    arg.map(|s| s.parse::<RollConvention>()).transpose()
}

// Returns `None` when the arguments do not name a command.
fn run(args: &[String]) -> Result<Option<String>, RollTableError> {
    let manager = RollTableManager::new();
    manager.load_defaults()?;
    manager.load_env()?;
    debug!(tables = ?manager.keys(), "roll tables loaded");

    let out = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["resolve", table, commodity, forward, month, year, rest @ ..] if rest.len() <= 1 => {
            let table = manager.get(table)?;
            let c = table.resolve(
                commodity,
                *forward,
                parse(month, "month")?,
                parse(year, "year")?,
                convention(args.get(6))?,
            )?;
            c.to_string()
        }
        ["reverse", table, contract, month, year, rest @ ..] if rest.len() <= 1 => {
            let table = manager.get(table)?;
            let f = table.reverse(
                contract,
                parse(month, "month")?,
                parse(year, "year")?,
                convention(args.get(5))?,
            )?;
            f.to_string()
        }
        ["contains", table, contract] => {
            let table = manager.get(table)?;
            table.contains(contract)?.to_string()
        }
        ["list"] => manager
            .keys()
            .iter()
            .map(|name| match manager.get(name) {
                Ok(t) => format!(
                    "{name}\t{}\t{}",
                    t.table_type(),
                    t.commodities().collect::<Vec<_>>().join(",")
                ),
                Err(_) => name.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return Ok(None),
    };
    Ok(Some(out))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(Some(out)) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
