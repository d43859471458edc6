//! `find-all`: read 64-bit fingerprints, emit every near-duplicate pair
//!
//! Reads a binary stream of 64-bit fingerprints in host byte order, finds
//! every pair within the given Hamming distance, and writes them out as a
//! binary stream of `{low, high}` 16-byte records, same byte order.

#![allow(clippy::print_stderr)]

#[path = "args.rs"]
mod args;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use args::ParsedArgs;
use neardup::matcher::{find_all, MatchPair};

fn read_hashes<R: Read>(mut reader: R) -> io::Result<BTreeSet<u64>> {
    let mut hashes = BTreeSet::new();
    let mut buf = [0u8; 8];
    loop {
        match reader.read_exact(&mut buf) {
            Ok(()) => {
                hashes.insert(u64::from_ne_bytes(buf));
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }
    Ok(hashes)
}

fn write_matches<W: Write>(mut writer: W, matches: &BTreeSet<MatchPair>) -> io::Result<()> {
    for pair in matches {
        writer.write_all(&pair.low.to_ne_bytes())?;
        writer.write_all(&pair.high.to_ne_bytes())?;
    }
    writer.flush()
}

fn run() -> Result<(), u8> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "find-all".to_string());
    let parsed = args::parse(&argv[1..], &program, "find all pairs within distance bits of each other")
        .map_err(|code| code as u8)?;

    let parsed = match parsed {
        ParsedArgs::Help => return Ok(()),
        ParsedArgs::Run(parsed) => parsed,
    };

    let hashes = if parsed.input == "-" {
        eprintln!("Reading hashes from stdin.");
        read_hashes(io::stdin().lock()).map_err(|_| 7u8)?
    } else {
        eprintln!("Reading hashes from {}", parsed.input);
        let file = File::open(&parsed.input).map_err(|_| 7u8)?;
        read_hashes(file).map_err(|_| 7u8)?
    };

    eprintln!("Computing matches...");
    let matches = find_all(&hashes, parsed.blocks, parsed.distance).map_err(|_| 6u8)?;

    if parsed.output == "-" {
        eprintln!("Writing results to stdout.");
        write_matches(io::stdout().lock(), &matches).map_err(|_| 8u8)?;
    } else {
        eprintln!("Writing matches to {}", parsed.output);
        let file = File::create(&parsed.output).map_err(|_| 8u8)?;
        write_matches(BufWriter::new(file), &matches).map_err(|_| 8u8)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}
