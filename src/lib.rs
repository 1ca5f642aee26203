#![warn(missing_docs)]

//! # `hashi`
//!
//! A solver for [Hashiwokakero](https://en.wikipedia.org/wiki/Hashiwokakero), also sold as "Bridges".
//! Begin by building a [`Board`] using a [`BoardBuilder`], converting a grid of `Option<u8>` rows, or parsing text.
//! Then call [`solve()`](crate::Board::solve), yielding a [`SolvedBoard`] which lists the bridges and prints them.
//!
//! If all you need is the answer, [`solve`] takes a raw grid and returns the bridges or `None`.
//!
//! # Internals
//! This crate is driven by expressing the puzzle as a Boolean satisfiability problem (a "SAT"), handing it to [`varisat`], and reading the bridges back out of the model.
//!
//! A high level overview is as follows:
//!
//! Scan the board for islands, then for "slots": pairs of islands on one row or column with nothing between them.
//! Two slots overlap if one is horizontal, the other vertical, and their paths meet in an empty cell.
//!
//! We make the following assertions in SAT form:
//! 1. Every slot has exactly one weight: 0, 1 or 2 bridges.
//! 2. Overlapping slots are not both nonzero.
//! 3. Every island picks exactly one way to split its value among its slots.
//!    These splits are enumerated once per process for every value from 1 to 8 and every slot count from 1 to 4.
//! 4. Every nonzero slot points toward one of its ends, and every island except the first has something pointing at it.
//!
//! The last assertion rules out some, not all, disconnected answers.
//! So each answer is checked; if it falls apart into several components, a clause per component demands a bridge leaving it, and we solve again.
//! See [`Connectivity`] for the weaker modes.

pub use board::{Board, SolvedBoard};
pub use bridge::{Bridge, Weight};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use config::{Connectivity, SolverConfig};
pub use location::{Dimensions, Location};
pub use oracle::Oracle;
pub use solver::SolverFailure;

pub(crate) mod board;
pub(crate) mod bridge;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod config;
pub(crate) mod connectivity;
pub(crate) mod decoder;
pub(crate) mod degree;
pub(crate) mod encoder;
pub(crate) mod location;
pub(crate) mod logic;
pub(crate) mod oracle;
pub(crate) mod parser;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;

/// Solve a raw grid, where `None` is an empty cell and `Some(v)` is an island needing `v` bridges.
///
/// Returns `None` if the grid is malformed or has no solution; all [`SolverFailure`]s collapse into that one answer.
/// A grid without islands is solved by `Some(vec![])`.
pub fn solve(grid: &[Vec<Option<u8>>]) -> Option<Vec<Bridge>> {
    Board::try_from(grid).ok()?
        .solve()
        .ok()
        .map(SolvedBoard::into_bridges)
}
