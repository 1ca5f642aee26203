use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use varisat::Solver;

use crate::bridge::{Bridge, Weight};
use crate::builder::{BoardBuilder, BuilderInvalidReason};
use crate::cell::{Cell, IslandValue};
use crate::config::SolverConfig;
use crate::connectivity::bridge_graph;
use crate::location::{Dimensions, Location};
use crate::oracle::Oracle;
use crate::render;
use crate::solver::{self, SolverFailure};

/// A rectangular Hashiwokakero board: every cell is either empty or an island numbered `1..=8`.
///
/// [`Board`]s are built using a [`BoardBuilder`], converted from a raw grid of `Option<u8>` rows, or parsed from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
}

impl Board {
    /// The dimensions of this board, in `(rows, cols)` order.
    pub fn dims(&self) -> Dimensions {
        self.cells.dim()
    }

    /// The value of the island at `location`, or `None` if the cell is empty or out of bounds.
    pub fn island_at(&self, location: Location) -> Option<IslandValue> {
        self.cells.get(location.as_index()).and_then(Cell::island_value)
    }

    /// All islands on this board in row-major order.
    pub fn islands(&self) -> impl Iterator<Item = (Location, IslandValue)> + '_ {
        self.cells.indexed_iter()
            .filter_map(|(index, cell)| cell.island_value().map(|value| (Location::from(index), value)))
    }

    /// Solves this board with the default [`SolverConfig`].
    pub fn solve(&self) -> Result<SolvedBoard, SolverFailure> {
        self.solve_with(&SolverConfig::default())
    }

    /// Solves this board, deferring to a fresh [`varisat::Solver`] and returning a [`SolvedBoard`] holding a copy of `self`.
    ///
    /// See [`SolverFailure`] for the ways this can fail.
    pub fn solve_with(&self, config: &SolverConfig) -> Result<SolvedBoard, SolverFailure> {
        self.solve_using(config, Solver::new())
    }

    /// As [`solve_with`](Self::solve_with), but on a caller-supplied [`Oracle`].
    ///
    /// `oracle` should be empty; anything already added to it constrains the search.
    pub fn solve_using<O: Oracle>(&self, config: &SolverConfig, oracle: O) -> Result<SolvedBoard, SolverFailure> {
        let bridges = solver::solve(self, config, oracle)?;

        Ok(SolvedBoard {
            board: self.clone(),
            bridges,
        })
    }
}

impl TryFrom<&[Vec<Option<IslandValue>>]> for Board {
    type Error = BuilderInvalidReason;

    fn try_from(rows: &[Vec<Option<IslandValue>>]) -> Result<Self, Self::Error> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(BuilderInvalidReason::RaggedRows);
        }

        let mut builder = BoardBuilder::with_dims((rows.len(), width));
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = cell {
                    builder.add_island(Location(row, col), *value);
                }
            }
        }

        builder.build()
            .map_err(|reasons| reasons[0])
    }
}

impl TryFrom<Vec<Vec<Option<IslandValue>>>> for Board {
    type Error = BuilderInvalidReason;

    fn try_from(rows: Vec<Vec<Option<IslandValue>>>) -> Result<Self, Self::Error> {
        Self::try_from(rows.as_slice())
    }
}

impl FromStr for Board {
    type Err = BuilderInvalidReason;

    /// Parses a text grid: `.` is an empty cell and `1` through `8` are islands.
    /// Everything after a `#` on a line is a comment; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines()
            .map(|line| line.find('#').map_or(line, |index| &line[..index]).trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars()
                .map(|c| match c {
                    '.' => Ok(None),
                    '1'..='8' => Ok(Some(c as u8 - b'0')),
                    _ => Err(BuilderInvalidReason::UnexpectedCharacter(c)),
                })
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(BuilderInvalidReason::EmptyInput);
        }

        Self::try_from(rows)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render::print(render::freeze(self, &[]).map(|cell| cell.glyph())))
    }
}

/// A [`Board`] together with the bridges that solve it.
#[derive(Clone, Debug)]
pub struct SolvedBoard {
    board: Board,
    bridges: Vec<Bridge>,
}

impl SolvedBoard {
    /// The board that was solved.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The realized bridges, sorted by `(source, destination)`.
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Consume `self`, keeping only the bridges.
    pub fn into_bridges(self) -> Vec<Bridge> {
        self.bridges
    }

    /// The solution as an undirected graph whose nodes are island locations and whose edges are bridges.
    pub fn graph(&self) -> UnGraphMap<Location, Weight> {
        bridge_graph(self.board.islands().map(|(location, _)| location), &self.bridges)
    }
}

impl Display for SolvedBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render::print(render::freeze(&self.board, &self.bridges).map(|cell| cell.glyph())))
    }
}
