//! Contractions and free-standing decoration lines.

use tensorgram_core::{
    geometry::{Direction, Point},
    identifier::Id,
};

use super::TensorId;

/// An edge joining two same-named indices on two (possibly identical)
/// tensors.
///
/// The direction of the edge matters for layout only: the source's index
/// direction decides where the path leaves, the target's where it arrives.
/// `loop_direction` picks which side a curved path bulges toward when the
/// endpoints cannot be joined by a straight line (same-side exits, traces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contraction {
    source: TensorId,
    target: TensorId,
    name: Id,
    loop_direction: Direction,
}

impl Contraction {
    pub(crate) fn new(
        source: TensorId,
        target: TensorId,
        name: Id,
        loop_direction: Direction,
    ) -> Self {
        Self {
            source,
            target,
            name,
            loop_direction,
        }
    }

    pub fn source(&self) -> TensorId {
        self.source
    }

    pub fn target(&self) -> TensorId {
        self.target
    }

    /// The contracted index name, present on both endpoints.
    pub fn name(&self) -> Id {
        self.name
    }

    pub fn loop_direction(&self) -> Direction {
        self.loop_direction
    }
}

/// A free-standing straight segment in grid coordinates, unrelated to the
/// tensor structure. Used for diagram decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub(crate) fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}
