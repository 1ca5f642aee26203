//! Incremental construction of [`Board`]s.

use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::board::Board;
use crate::cell::{Cell, IslandValue, MAX_ISLAND_VALUE};
use crate::location::{Dimensions, Location};

/// Reasons a builder or raw grid may be rejected while building a [`Board`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// An island was placed outside the bounds specified by `dims` on a builder.
    #[error("island placed outside the board")]
    FeatureOutOfBounds,
    /// An island value outside `1..=8` was given.
    #[error("island value {0} is outside 1..=8")]
    IslandValueOutOfRange(IslandValue),
    /// Rows of a raw grid do not all have the same length.
    #[error("rows have unequal lengths")]
    RaggedRows,
    /// A text grid contained a character which is neither `.` nor an island digit.
    #[error("unexpected character {0:?} in board text")]
    UnexpectedCharacter(char),
    /// A text grid contained no rows after comments and blank lines were dropped.
    #[error("board text contains no rows")]
    EmptyInput,
}

/// Incrementally assembles a [`Board`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Every mutating call is a no-op once the builder has become invalid; [`build`](Self::build) then reports why.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // rows, cols
    dims: Dimensions,
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((7, 7))
    }
}

impl BoardBuilder {
    /// Construct a new builder with the specified dimensions, in `(rows, cols)` order.
    pub fn with_dims(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn(dims, Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    /// Place an island requiring `value` bridge endpoints at `location`, replacing whatever was there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds,
    /// or an [`IslandValueOutOfRange`](BuilderInvalidReason::IslandValueOutOfRange) state if `value` is not in `1..=8`.
    pub fn add_island(&mut self, location: Location, value: IslandValue) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if !(1..=MAX_ISLAND_VALUE).contains(&value) {
            self.invalid_reasons.push(BuilderInvalidReason::IslandValueOutOfRange(value));
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Island { value });
        self
    }

    /// Clear the cell at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn remove_island(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Empty);
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
        })
    }
}
