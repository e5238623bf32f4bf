//! Contraction path classification and construction.
//!
//! A contraction between opposite-facing indices whose tensors actually lie
//! on the matching sides of each other is a straight line. Everything else
//! (same-side exits, inverted geometry, self-contractions) becomes a bundle
//! curve that leaves the source perpendicular to its exit side, travels via
//! bend points pushed toward the contraction's loop direction, and arrives
//! at the target symmetrically.

use tensorgram_core::geometry::{Direction, Point};

use crate::diagram::{Contraction, Diagram, Tensor};

use super::Engine;

/// Pixel length of the perpendicular stub leaving each endpoint of a curve.
const EXIT_STUB: f32 = 10.0;

/// A drawable contraction path, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractionPath {
    /// A straight two-point line.
    Straight { from: Point, to: Point },
    /// An 8-control-point bundle curve.
    Curved { points: [Point; 8] },
}

/// Classifies and constructs one path per contraction, in contraction order.
pub(super) fn contraction_paths(diagram: &Diagram, engine: &Engine) -> Vec<ContractionPath> {
    let contractions = diagram.contractions();

    contractions
        .iter()
        .enumerate()
        .map(|(position, contraction)| {
            let source = endpoint(diagram, contraction.source());
            let target = endpoint(diagram, contraction.target());
            let source_exit = exit_direction(source, contraction);
            let target_exit = exit_direction(target, contraction);

            if straight_line_fits(source, target, source_exit, target_exit) {
                // Parallel repeats of the same tensor pair shift down one grid
                // unit each so they do not overlap.
                let repeat = contractions[..position]
                    .iter()
                    .filter(|other| {
                        other.source() == contraction.source()
                            && other.target() == contraction.target()
                    })
                    .count() as f32;
                ContractionPath::Straight {
                    from: engine.project(source.position().shift_y(repeat)),
                    to: engine.project(target.position().shift_y(repeat)),
                }
            } else {
                curved(
                    engine,
                    source.position(),
                    target.position(),
                    source_exit,
                    target_exit,
                    contraction.loop_direction(),
                )
            }
        })
        .collect()
}

fn endpoint<'a>(diagram: &'a Diagram, id: crate::diagram::TensorId) -> &'a Tensor {
    diagram
        .tensor(id)
        .expect("contraction handles are validated at construction")
}

fn exit_direction(tensor: &Tensor, contraction: &Contraction) -> Direction {
    tensor
        .index(contraction.name())
        .expect("contraction names are validated at construction")
        .direction()
}

/// A straight path fits when the exits are exact opposites and the tensors
/// sit on the matching sides of each other, so the line does not cross
/// through either node.
fn straight_line_fits(
    source: &Tensor,
    target: &Tensor,
    source_exit: Direction,
    target_exit: Direction,
) -> bool {
    let s = source.position();
    let t = target.position();
    match (source_exit, target_exit) {
        (Direction::Right, Direction::Left) => s.x() < t.x(),
        (Direction::Left, Direction::Right) => s.x() > t.x(),
        (Direction::Down, Direction::Up) => s.y() < t.y(),
        (Direction::Up, Direction::Down) => s.y() > t.y(),
        _ => false,
    }
}

/// Builds the 8-control-point curve.
///
/// `o` and `i` are the unit outward vectors at the source exit and target
/// entry; `u` is the loop-direction unit vector. Intermediate bend points
/// sit at fixed grid fractions (0.2, 0.5, 0.7, 1.05) along combinations of
/// those vectors, with a 10px perpendicular stub at each end so the curve
/// meets the node squarely.
fn curved(
    engine: &Engine,
    source: Point,
    target: Point,
    source_exit: Direction,
    target_exit: Direction,
    loop_direction: Direction,
) -> ContractionPath {
    let u = loop_direction.unit();
    let o = source_exit.unit();
    let i = target_exit.unit();

    let p0 = engine.project(source);
    let p7 = engine.project(target);

    let points = [
        p0,
        p0.add_point(o.scale(EXIT_STUB)),
        engine
            .project(source.add_point(u.scale(0.2)).add_point(o.scale(0.5)))
            .add_point(o.scale(EXIT_STUB)),
        engine.project(source.add_point(u.scale(1.05)).add_point(o.scale(0.7))),
        engine.project(target.add_point(u.scale(1.05)).add_point(i.scale(0.7))),
        engine
            .project(target.add_point(u.scale(0.2)).add_point(i.scale(0.5)))
            .add_point(i.scale(EXIT_STUB)),
        p7.add_point(i.scale(EXIT_STUB)),
        p7,
    ];

    ContractionPath::Curved { points }
}
