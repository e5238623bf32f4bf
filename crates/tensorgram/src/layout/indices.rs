//! Loose index placement.
//!
//! Every index not referenced by a contraction is drawn as a short stub
//! leaving its tensor, with the index label placed further out than the stub
//! tip so the text clears the line.

use tensorgram_core::{
    geometry::{Direction, Point},
    identifier::Id,
};

use crate::diagram::{Diagram, Index, Tensor, TensorId};

use super::Engine;

/// How far the stub reaches from the tensor center, in grid units.
const STUB_REACH: f32 = 0.75;
/// How far the label anchor sits from the tensor center, in grid units.
const LABEL_REACH: f32 = 1.4;

/// A drawable loose index: a stub line and an optional label anchor, in
/// pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LooseIndex {
    pub tensor: TensorId,
    pub name: Id,
    pub direction: Direction,
    /// Stub endpoints: tensor-side first.
    pub line: (Point, Point),
    /// Label anchor; `None` when the index label is hidden.
    pub label: Option<Point>,
}

/// Computes stubs for every uncontracted index, in tensor and index
/// declaration order.
pub(super) fn loose_indices(diagram: &Diagram, engine: &Engine) -> Vec<LooseIndex> {
    let contracted = diagram.contracted_names();

    diagram
        .tensors()
        .iter()
        .enumerate()
        .flat_map(|(position, tensor)| {
            tensor
                .indices()
                .iter()
                .filter(|index| !contracted.contains(&index.name()))
                .map(move |index| place(TensorId::new(position), tensor, index, engine))
        })
        .collect()
}

fn place(id: TensorId, tensor: &Tensor, index: &Index, engine: &Engine) -> LooseIndex {
    // Same-side siblings fan out downward by their declaration ordinal.
    let stack = if index.direction().is_horizontal() {
        index.order() as f32
    } else {
        0.0
    };
    // Downward stubs on a rectangle start past the stacked rows, not at the
    // nominal center row.
    let rect_down = if tensor.shape().is_rectangle() && index.direction() == Direction::Down {
        tensor.rect_height().max(1) as f32 - 1.0
    } else {
        0.0
    };

    let unit = index.direction().unit();
    let source = tensor.position().shift_y(stack);
    let target = tensor
        .position()
        .add_point(unit.scale(STUB_REACH))
        .shift_y(stack + rect_down);
    let label_anchor = tensor
        .position()
        .add_point(unit.scale(LABEL_REACH))
        .shift_y(stack + rect_down);

    LooseIndex {
        tensor: id,
        name: index.name(),
        direction: index.direction(),
        line: (engine.project(source), engine.project(target)),
        label: index.show_label().then(|| engine.project(label_anchor)),
    }
}
