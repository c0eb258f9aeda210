/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Lodedigger.

Lodedigger is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Lodedigger is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Lodedigger. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a board for a puzzle specification. The board is saved in `puzzle-sol.desc`, in the
//! current directory:
//!
//! ```
//! $ lodedigger puzzle.cond
//! ./puzzle-sol.desc
//! ```
//!
//! Read the specification from the standard input, use a fixed seed, and print the board:
//!
//! ```
//! $ echo '1,1,10,4,8,0,0,1,0,0,0##(5,5)' | lodedigger --seed 7
//! (0,0),(10,0),(10,10),(0,10),(0,6),(6,6),(6,5),(0,5)#(4,0)##L(1,3)
//! ```
//!
//! Verify a board against its specification:
//!
//! ```
//! $ lodedigger puzzle.cond --check puzzle-sol.desc
//! puzzle-sol.desc: OK
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::{self, COPYRIGHT_NOTICE, PROGRAM_NAME};
use crate::generator::board::Board;
use crate::generator::check;
use crate::generator::digger::{Generator, GeneratorConfig};
use crate::generator::puzzle_spec::PuzzleSpec;
use crate::saver::board::SaverBoard;
use crate::saver::report::SaverReport;

/// Generate random cave boards for puzzle specifications.
#[derive(Parser)]
#[command(name = PROGRAM_NAME, about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Puzzle specification file (standard input when omitted or `-`)
    infile: Option<PathBuf>,

    /// Board file to write (default: `<infile>-sol.desc` in the current directory, or the
    /// standard output when reading the standard input)
    outfile: Option<PathBuf>,

    /// Seed for the random generator (random seed by default)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of attempts (0 retries forever)
    #[arg(short, long, default_value_t = config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Verify the given board file against the specification instead of generating a board
    #[arg(short, long, value_name = "BOARD")]
    check: Option<PathBuf>,

    /// Save a JSON report of the generation in the given file
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Read the specification from the given file, or from the standard input.
fn read_spec(infile: Option<&Path>) -> Result<PuzzleSpec, Box<dyn Error>> {
    let description: String = match infile {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut buffer: String = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let spec: PuzzleSpec = description.parse()?;
    Ok(spec)
}

/// Board file derived from the name of the specification file: `./<stem>-sol.desc`.
fn default_outfile(infile: &Path) -> Option<PathBuf> {
    if infile == Path::new("-") {
        return None;
    }
    let stem: &str = infile.file_stem()?.to_str()?;
    Some(Path::new(".").join(format!("{stem}{}", config::SOLUTION_SUFFIX)))
}

/// Verify the board file against the specification.
fn check_file(spec: &PuzzleSpec, board_file: PathBuf) -> u8 {
    let saver: SaverBoard = SaverBoard::new(board_file);
    let board: Board = match saver.get_board() {
        Ok(Some(b)) => b,
        Ok(None) => {
            eprintln!("{}: no such file", saver.path().display());
            return 1;
        }
        Err(e) => {
            eprintln!("{}: {e}", saver.path().display());
            return 1;
        }
    };
    match check::check_board(&board, spec) {
        Ok(()) => {
            println!("{}: OK", saver.path().display());
            0
        }
        Err(e) => {
            eprintln!("{}: {e}", saver.path().display());
            1
        }
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let spec: PuzzleSpec = match read_spec(args.infile.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Cannot read the puzzle specification: {e}");
            return 1;
        }
    };

    if let Some(board_file) = args.check {
        return check_file(&spec, board_file);
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Seed = {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut generator: Generator = Generator::new(GeneratorConfig {
        max_attempts: if args.max_attempts == 0 {
            None
        } else {
            Some(args.max_attempts)
        },
        ..Default::default()
    });

    let board: Board = match generator.generate(&spec, &mut rng) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let outfile: Option<PathBuf> = args
        .outfile
        .or_else(|| args.infile.as_deref().and_then(default_outfile));
    match outfile {
        Some(path) => {
            if let Err(e) = SaverBoard::new(path.clone()).save_board(&board) {
                eprintln!("Cannot save the board in {}: {e}", path.display());
                return 1;
            }
            eprintln!("{}", path.display());
        }
        None => println!("{board}"),
    }

    if let Some(path) = args.report
        && let Err(e) = SaverReport::new(path.clone()).save_report(&generator.report)
    {
        eprintln!("Cannot save the report in {}: {e}", path.display());
        return 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
        let args: Args =
            Args::try_parse_from(["lodedigger", "in.cond", "-s", "3", "-m", "0"]).unwrap();
        assert_eq!(args.infile, Some(PathBuf::from("in.cond")));
        assert_eq!(args.outfile, None);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.max_attempts, 0);
        assert!(!args.debug);
    }

    #[test]
    fn test_default_outfile() {
        assert_eq!(
            default_outfile(Path::new("/data/blocks/3/puzzle.cond")),
            Some(PathBuf::from("./puzzle-sol.desc"))
        );
        assert_eq!(default_outfile(Path::new("-")), None);
    }
}
