//! `find-clusters`: read newline-delimited fingerprints, emit clusters
//!
//! Reads newline-delimited decimal unsigned 64-bit integers (one
//! fingerprint per line) and emits one cluster per line, formatted as
//! `[h1, h2, ..., hk]`, where intra-cluster order is unspecified.

#![allow(clippy::print_stderr)]

#[path = "args.rs"]
mod args;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use args::ParsedArgs;
use neardup::cluster::{find_clusters, Cluster};

/// Exit code used when an input line is not a valid unsigned 64-bit decimal
/// integer. Not part of the option-parsing exit code table (1-6), and
/// distinct from the I/O codes (7-8): spec.md leaves this case
/// implementation-defined and asks implementations to "explicitly validate
/// and fail fast".
const EXIT_PARSE_FAILURE: u8 = 9;

fn read_hashes<R: BufRead>(reader: R) -> Result<BTreeSet<u64>, String> {
    let mut hashes = BTreeSet::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let hash: u64 = trimmed
            .parse()
            .map_err(|_| format!("line {}: not a valid u64: {trimmed:?}", line_number + 1))?;
        hashes.insert(hash);
    }
    Ok(hashes)
}

fn write_clusters<W: Write>(mut writer: W, clusters: &[Cluster]) -> io::Result<()> {
    for cluster in clusters {
        write!(writer, "[")?;
        for (i, member) in cluster.iter().enumerate() {
            if i > 0 {
                write!(writer, ", ")?;
            }
            write!(writer, "{member}")?;
        }
        writeln!(writer, "]")?;
    }
    writer.flush()
}

fn run() -> Result<(), u8> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| "find-clusters".to_string());
    let parsed = args::parse(
        &argv[1..],
        &program,
        "find all clusters using the provided distance threshold",
    )
    .map_err(|code| code as u8)?;

    let parsed = match parsed {
        ParsedArgs::Help => return Ok(()),
        ParsedArgs::Run(parsed) => parsed,
    };

    let hashes = if parsed.input == "-" {
        eprintln!("Reading hashes from stdin.");
        read_hashes(io::stdin().lock()).map_err(|e| {
            eprintln!("{e}");
            EXIT_PARSE_FAILURE
        })?
    } else {
        eprintln!("Reading hashes from {}", parsed.input);
        let file = File::open(&parsed.input).map_err(|_| 7u8)?;
        read_hashes(io::BufReader::new(file)).map_err(|e| {
            eprintln!("{e}");
            EXIT_PARSE_FAILURE
        })?
    };

    eprintln!("Computing clusters...");
    let clusters = find_clusters(&hashes, parsed.blocks, parsed.distance).map_err(|_| 6u8)?;

    if parsed.output == "-" {
        eprintln!("Writing results to stdout.");
        write_clusters(io::stdout().lock(), &clusters).map_err(|_| 8u8)?;
    } else {
        eprintln!("Writing results to {}", parsed.output);
        let file = File::create(&parsed.output).map_err(|_| 8u8)?;
        write_clusters(BufWriter::new(file), &clusters).map_err(|_| 8u8)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}
