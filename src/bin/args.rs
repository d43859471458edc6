//! Shared command-line flag parsing for `find-all` and `find-clusters`
//!
//! Deliberately hand-rolled rather than pulled in from a crate: the library
//! this binary wraps treats argument parsing as an external collaborator
//! (see `neardup`'s crate documentation), and the original `simhash-find-all`
//! / `simhash-find-clusters` tools this CLI mirrors hand-roll their own
//! `getopt_long` loop rather than depending on a parsing library.

use std::io::Write;

/// Parsed, validated command-line arguments shared by both binaries
pub struct Args {
    /// Number of bit blocks to partition each fingerprint into
    pub blocks: usize,
    /// Maximum Hamming distance for two fingerprints to be considered a match
    pub distance: usize,
    /// Input path, or `-` for stdin
    pub input: String,
    /// Output path, or `-` for stdout
    pub output: String,
}

/// Outcome of a successful parse: either the caller asked for `--help`, or
/// we have a fully validated set of arguments to run with.
pub enum ParsedArgs {
    Help,
    Run(Args),
}

fn usage(program: &str, action: &str) -> String {
    format!(
        "usage: {program} --blocks BLOCKS --distance DISTANCE --input INPUT --output OUTPUT\n\n\
         Read fingerprints from input, {action}, writing them to output.\n\n\
         \x20 --blocks BLOCKS        Number of bit blocks to use\n\
         \x20 --distance DISTANCE    Maximum bit distance of matches\n\
         \x20 --input INPUT          Path to input ('-' for stdin)\n\
         \x20 --output OUTPUT        Path to output ('-' for stdout)\n\
         \x20 --help                 Show this message and exit\n"
    )
}

/// Parses `argv[1..]` into [`ParsedArgs`], or returns the process exit code
/// that should be used on failure, per the option table in the CLI
/// specification (unknown option = 1, missing blocks = 2, missing distance =
/// 3, missing input = 4, missing output = 5, blocks <= distance = 6).
pub fn parse(raw_args: &[String], program: &str, action: &str) -> Result<ParsedArgs, i32> {
    let mut blocks: usize = 0;
    let mut distance: usize = 0;
    let mut input = String::new();
    let mut output = String::new();

    let mut i = 0;
    while i < raw_args.len() {
        let arg = raw_args[i].as_str();

        match arg {
            "--blocks" | "-b" => {
                i += 1;
                let value = raw_args.get(i).ok_or(1)?;
                blocks = value.parse().map_err(|_| 1)?;
            }
            "--distance" | "-d" => {
                i += 1;
                let value = raw_args.get(i).ok_or(1)?;
                distance = value.parse().map_err(|_| 1)?;
            }
            "--input" | "-i" => {
                i += 1;
                input = raw_args.get(i).ok_or(1)?.clone();
            }
            "--output" | "-o" => {
                i += 1;
                output = raw_args.get(i).ok_or(1)?.clone();
            }
            "--help" | "-h" => {
                print!("{}", usage(program, action));
                std::io::stdout().flush().ok();
                return Ok(ParsedArgs::Help);
            }
            _ => {
                eprintln!("Unknown option: {arg}");
                return Err(1);
            }
        }
        i += 1;
    }

    if blocks == 0 {
        eprintln!("Blocks must be provided and > 0");
        return Err(2);
    }
    if distance == 0 {
        eprintln!("Distance must be provided and > 0");
        return Err(3);
    }
    if input.is_empty() {
        eprintln!("Input must be provided and non-empty.");
        return Err(4);
    }
    if output.is_empty() {
        eprintln!("Output must be provided and non-empty.");
        return Err(5);
    }
    if blocks <= distance {
        eprintln!("Blocks ({blocks}) must be greater than distance ({distance})");
        return Err(6);
    }

    Ok(ParsedArgs::Run(Args {
        blocks,
        distance,
        input,
        output,
    }))
}
