use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use hashi::{Board, Connectivity, SolverConfig};

/// Solve a Hashiwokakero board written as text: `.` for water, `1`-`8` for islands, `#` starts a comment.
#[derive(Parser, Debug)]
#[command(name = "hashi-solver", version)]
struct Cli {
    /// Board file; read from stdin when omitted.
    path: Option<PathBuf>,

    /// How strictly connectedness of the answer is enforced.
    #[arg(short, long, default_value_t = Connectivity::default())]
    connectivity: Connectivity,

    /// Stop after this many rounds of connectivity cuts.
    #[arg(short, long)]
    max_refinements: Option<usize>,

    /// Print one line per bridge after the drawing.
    #[arg(short, long)]
    list: bool,
}

fn read_board(path: Option<&PathBuf>) -> Result<Board> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("could not read stdin")?;
            text
        }
    };

    text.parse().context("malformed board")
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let board = read_board(cli.path.as_ref())?;
    let (rows, cols) = board.dims();
    info!("read {}x{} board with {} islands", rows, cols, board.islands().count());

    let config = SolverConfig {
        connectivity: cli.connectivity,
        max_refinements: cli.max_refinements,
    };

    match board.solve_with(&config) {
        Ok(solved) => {
            print!("{}", solved);
            if cli.list {
                println!();
                for bridge in solved.bridges() {
                    println!("{}", bridge);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            warn!("{}", failure);
            println!("no solution");
            Ok(ExitCode::FAILURE)
        }
    }
}
