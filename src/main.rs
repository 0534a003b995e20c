// Copyright 2021 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use magicc_names::{
    DATA_HIERARCHY_SEPARATOR, Definitions, Direction, Mapping, Result, VariableCatalog,
};

const EXIT_FAILURE: i32 = 1;
const LOG_ENV: &str = "MAGICC_NAMES_LOG";

macro_rules! die(
    ($($arg:tt)*) => { {
        eprintln!($($arg)*);
        std::process::exit(EXIT_FAILURE)
    } }
);

#[derive(Parser)]
#[command(name = "magicc-names")]
#[command(version)]
#[command(about = "Translate MAGICC6, MAGICC7 and OpenSCM variable and region names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert names, one per line in input order (reads stdin if no names are given)
    Convert {
        #[command(flatten)]
        table: TableArgs,
        names: Vec<String>,
    },
    /// Print a whole table as tab separated old/new pairs
    Dump {
        #[command(flatten)]
        table: TableArgs,
    },
}

#[derive(Args)]
struct TableArgs {
    /// Which mapping to use: region, magicc7 or magicc6
    #[arg(long, short)]
    mapping: Mapping,
    /// Apply the mapping in reverse
    #[arg(long, short)]
    inverse: bool,
    /// Variable catalog CSV to use instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Separator between levels of OpenSCM names
    #[arg(long, default_value = DATA_HIERARCHY_SEPARATOR)]
    separator: String,
}

impl TableArgs {
    fn definitions(&self) -> Result<Definitions> {
        let catalog = match self.catalog {
            Some(ref path) => VariableCatalog::from_path(path)?,
            None => VariableCatalog::builtin()?,
        };
        Definitions::with_separator(&catalog, &self.separator)
    }

    fn direction(&self) -> Direction {
        Direction::from(self.inverse)
    }
}

fn read_names(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| line.map(|l| l.trim().to_owned()))
        .collect()
}

fn convert(table: &TableArgs, names: Vec<String>, out: &mut dyn Write) -> io::Result<()> {
    let defs = match table.definitions() {
        Ok(defs) => defs,
        Err(err) => die!("error: {}", err),
    };
    let names = if names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        names
    };
    debug!(count = names.len(), mapping = %table.mapping, "converting names");

    for name in defs.convert(&names, table.mapping, table.direction()) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn dump(table: &TableArgs, out: &mut dyn Write) -> io::Result<()> {
    let defs = match table.definitions() {
        Ok(defs) => defs,
        Err(err) => die!("error: {}", err),
    };
    for (old, new) in defs.dictionary(table.mapping, table.direction()).iter() {
        writeln!(out, "{old}\t{new}")?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = match cli.command {
        Command::Convert { table, names } => convert(&table, names, &mut out),
        Command::Dump { table } => dump(&table, &mut out),
    };
    if let Err(err) = result.and_then(|()| out.flush()) {
        die!("error: {}", err);
    }
}
