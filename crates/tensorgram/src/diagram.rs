//! The tensor diagram model and its chainable construction API.
//!
//! A [`Diagram`] is built incrementally: `add_tensor` places nodes (absolute
//! or relative to the previous one), `add_contraction` joins same-named
//! indices, `add_summation` contracts every occurrence of a name at once.
//! Mutators return the diagram again so calls chain; a malformed call fails
//! fast with a [`DiagramError`] instead of producing a degenerate diagram.
//!
//! Once handed to the layout engine, formula generators, or a renderer the
//! diagram is frozen by convention: all derivation borrows `&self`.

mod contraction;
mod tensor;

use std::collections::HashSet;
use std::fmt;

use tensorgram_core::{
    color::{Color, ColorScale, ColorScheme},
    geometry::{Direction, Point},
    identifier::Id,
};

pub use contraction::{Contraction, Line};
pub use tensor::{Index, Tensor, TensorId, TensorOptions};

use crate::error::DiagramError;

/// Where to place a new tensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// At the grid origin. Only meaningful for the first tensor of a row of
    /// relative placements.
    Start,
    /// One grid unit right of the previously added tensor.
    Right,
    /// One grid unit below the previously added tensor.
    Down,
    /// At an absolute grid position.
    At(Point),
}

impl From<Point> for Placement {
    fn from(position: Point) -> Self {
        Self::At(position)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Right => write!(f, "right"),
            Self::Down => write!(f, "down"),
            Self::At(position) => write!(f, "({}, {})", position.x(), position.y()),
        }
    }
}

/// A tensor network diagram under construction.
///
/// Owns the tensors (insertion order is z-order and [`TensorId`]
/// addressing), the contractions, and any decoration lines.
///
/// # Examples
///
/// ```
/// use tensorgram::{Diagram, Placement, TensorId};
///
/// let mut diagram = Diagram::new();
/// diagram
///     .add_tensor("A", Placement::Start, &[], &["i"], &[], &[])?
///     .add_tensor("B", Placement::Right, &["i"], &[], &[], &[])?
///     .add_contraction(TensorId::new(0), TensorId::new(1), "i")?;
///
/// assert_eq!(diagram.tensors().len(), 2);
/// assert_eq!(diagram.contractions().len(), 1);
/// # Ok::<(), tensorgram::DiagramError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    tensors: Vec<Tensor>,
    contractions: Vec<Contraction>,
    lines: Vec<Line>,
    width: f32,
    height: f32,
    color_scale: ColorScale,
}

impl Diagram {
    /// Creates an empty diagram.
    ///
    /// The color scale starts with `dot` and `conv` pinned to black (so
    /// summation dots stay neutral) and the tensor-network palette appended.
    pub fn new() -> Self {
        let mut color_scale = ColorScale::new();
        color_scale.configure(
            &["dot", "conv"],
            vec![Color::default(), Color::default()],
            ColorScheme::TensorNetwork,
        );

        Self {
            tensors: Vec::new(),
            contractions: Vec::new(),
            lines: Vec::new(),
            width: 300.0,
            height: 300.0,
            color_scale,
        }
    }

    /// Adds a tensor with default options. See [`Diagram::add_tensor_with`].
    pub fn add_tensor(
        &mut self,
        name: &str,
        placement: impl Into<Placement>,
        left: &[&str],
        right: &[&str],
        up: &[&str],
        down: &[&str],
    ) -> Result<&mut Self, DiagramError> {
        self.add_tensor_with(name, placement, left, right, up, down, TensorOptions::default())
    }

    /// Adds a tensor, supplying index names per exit side.
    ///
    /// # Errors
    ///
    /// Fails with [`DiagramError::InvalidPosition`] when `placement` is
    /// `Right` or `Down` and no tensor has been added yet.
    pub fn add_tensor_with(
        &mut self,
        name: &str,
        placement: impl Into<Placement>,
        left: &[&str],
        right: &[&str],
        up: &[&str],
        down: &[&str],
        opts: TensorOptions,
    ) -> Result<&mut Self, DiagramError> {
        let position = self.resolve_placement(placement.into())?;
        self.tensors
            .push(Tensor::new(name, position, left, right, up, down, opts));
        Ok(self)
    }

    fn resolve_placement(&self, placement: Placement) -> Result<Point, DiagramError> {
        let relative_to_last = |offset: Point| {
            self.last_tensor()
                .map(|last| last.position().add_point(offset))
                .ok_or_else(|| DiagramError::InvalidPosition {
                    placement: placement.to_string(),
                })
        };

        match placement {
            Placement::Start => Ok(Point::default()),
            Placement::At(position) => Ok(position),
            Placement::Right => relative_to_last(Point::new(1.0, 0.0)),
            Placement::Down => relative_to_last(Point::new(0.0, 1.0)),
        }
    }

    /// Adds a contraction with the default upward loop direction.
    pub fn add_contraction(
        &mut self,
        source: TensorId,
        target: TensorId,
        name: &str,
    ) -> Result<&mut Self, DiagramError> {
        self.add_contraction_with_loop(source, target, name, Direction::Up)
    }

    /// Adds a contraction between two tensors sharing the index `name`.
    ///
    /// `loop_direction` picks the bulge side for curved paths (same-side
    /// exits and self-contractions); straight paths ignore it.
    ///
    /// # Errors
    ///
    /// Fails with [`DiagramError::UnknownTensor`] for an out-of-range handle
    /// and [`DiagramError::DanglingContractionName`] when either endpoint
    /// lacks an index called `name`.
    pub fn add_contraction_with_loop(
        &mut self,
        source: TensorId,
        target: TensorId,
        name: &str,
        loop_direction: Direction,
    ) -> Result<&mut Self, DiagramError> {
        let name = Id::new(name);
        self.ensure_index(source, name)?;
        self.ensure_index(target, name)?;
        self.contractions
            .push(Contraction::new(source, target, name, loop_direction));
        Ok(self)
    }

    fn ensure_index(&self, id: TensorId, name: Id) -> Result<(), DiagramError> {
        let tensor = self
            .tensor(id)
            .ok_or(DiagramError::UnknownTensor { id: id.index() })?;
        if tensor.index(name).is_none() {
            return Err(DiagramError::DanglingContractionName {
                tensor: tensor.name().to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Sums over every occurrence of the index `name`, placing any auxiliary
    /// dot at the centroid of the participants.
    pub fn add_summation(&mut self, name: &str) -> Result<&mut Self, DiagramError> {
        self.add_summation_impl(Id::new(name), None)
    }

    /// Sums over every occurrence of the index `name`, placing any auxiliary
    /// dot at an explicit grid position.
    pub fn add_summation_at(
        &mut self,
        name: &str,
        position: Point,
    ) -> Result<&mut Self, DiagramError> {
        self.add_summation_impl(Id::new(name), Some(position))
    }

    /// Summation policy, by the number of tensors exposing the index:
    /// zero is an error; one gets a stub dot one grid unit outward; two is a
    /// plain pairwise contraction; three or more fan into a Steiner dot with
    /// per-participant renamed indices.
    fn add_summation_impl(
        &mut self,
        name: Id,
        position: Option<Point>,
    ) -> Result<&mut Self, DiagramError> {
        let participants: Vec<TensorId> = self
            .tensors
            .iter()
            .enumerate()
            .filter(|(_, tensor)| tensor.index(name).is_some())
            .map(|(index, _)| TensorId::new(index))
            .collect();

        match participants.as_slice() {
            [] => Err(DiagramError::NoMatchingIndex {
                name: name.to_string(),
            }),
            [single] => self.sum_single(*single, name),
            [source, target] => {
                self.contractions
                    .push(Contraction::new(*source, *target, name, Direction::Up));
                Ok(self)
            }
            _ => self.sum_multiway(&participants, name, position),
        }
    }

    /// One participant: render the dangling index as contracted-with-nothing
    /// by wiring it to a zero-semantic dot one grid unit outward.
    fn sum_single(&mut self, id: TensorId, name: Id) -> Result<&mut Self, DiagramError> {
        let tensor = &self.tensors[id.index()];
        let direction = tensor
            .index(name)
            .expect("participants were selected by index presence")
            .direction();
        let dot_position = tensor.position().add_point(direction.unit());

        self.tensors.push(Tensor::with_indices(
            "dot",
            dot_position,
            vec![(name, direction.opposite(), true)],
            TensorOptions::dot(),
        ));
        let dot = TensorId::new(self.tensors.len() - 1);
        self.contractions
            .push(Contraction::new(id, dot, name, Direction::Up));
        Ok(self)
    }

    /// Three or more participants cannot share one pairwise line, so a
    /// Steiner dot fans them in. Every participant's index is renamed to a
    /// disambiguated `name + ordinal` so no two dot indices collide; the
    /// renames are computed up front and applied in a single pass before the
    /// dot and its contractions are constructed.
    fn sum_multiway(
        &mut self,
        participants: &[TensorId],
        name: Id,
        position: Option<Point>,
    ) -> Result<&mut Self, DiagramError> {
        let dot_position = position.unwrap_or_else(|| self.centroid(participants));

        let renames: Vec<(TensorId, Id, Direction)> = participants
            .iter()
            .enumerate()
            .map(|(ordinal, &id)| {
                let direction = self.tensors[id.index()]
                    .index(name)
                    .expect("participants were selected by index presence")
                    .direction();
                (id, name.with_suffix(ordinal), direction.opposite())
            })
            .collect();

        for (id, new_name, _) in &renames {
            self.tensors[id.index()].rename_index(name, *new_name);
        }

        let dot_indices = renames
            .iter()
            .map(|(_, new_name, dot_direction)| (*new_name, *dot_direction, false))
            .collect();
        self.tensors.push(Tensor::with_indices(
            "dot",
            dot_position,
            dot_indices,
            TensorOptions::dot(),
        ));

        let dot = TensorId::new(self.tensors.len() - 1);
        for (id, new_name, _) in renames {
            self.contractions
                .push(Contraction::new(id, dot, new_name, Direction::Up));
        }
        Ok(self)
    }

    fn centroid(&self, participants: &[TensorId]) -> Point {
        let sum = participants
            .iter()
            .fold(Point::default(), |accumulator, id| {
                accumulator.add_point(self.tensors[id.index()].position())
            });
        sum.scale(1.0 / participants.len() as f32)
    }

    /// Adds a free-standing decoration line in grid coordinates.
    pub fn add_line(&mut self, start: Point, end: Point) -> &mut Self {
        self.lines.push(Line::new(start, end));
        self
    }

    /// Sets the output canvas extent in pixels. Pure state, no geometry
    /// recompute.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Configures the name-to-color scale: `names` get `colors` in order,
    /// and the scheme's palette serves every other tensor name.
    pub fn set_color_scheme(
        &mut self,
        names: &[&str],
        colors: &[&str],
        scheme: ColorScheme,
    ) -> Result<&mut Self, DiagramError> {
        let parsed = colors
            .iter()
            .map(|color| Color::new(color))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DiagramError::InvalidColor)?;
        self.color_scale.configure(names, parsed, scheme);
        Ok(self)
    }

    /// The tensors in insertion order.
    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }

    /// The tensor behind a handle, if the handle is in range.
    pub fn tensor(&self, id: TensorId) -> Option<&Tensor> {
        self.tensors.get(id.index())
    }

    /// The most recently added tensor.
    pub fn last_tensor(&self) -> Option<&Tensor> {
        self.tensors.last()
    }

    pub fn contractions(&self) -> &[Contraction] {
        &self.contractions
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }

    /// The set of index names referenced by any contraction.
    pub fn contracted_names(&self) -> HashSet<Id> {
        self.contractions
            .iter()
            .map(Contraction::name)
            .collect()
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tensorgram_core::draw::Shape;

    use super::*;

    #[test]
    fn test_empty_diagram() {
        let diagram = Diagram::new();
        assert!(diagram.tensors().is_empty());
        assert!(diagram.contractions().is_empty());
        assert!(diagram.lines().is_empty());
        assert_eq!(diagram.width(), 300.0);
        assert_eq!(diagram.height(), 300.0);
    }

    #[test]
    fn test_adds_tensors_with_mixed_placements() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("v", Placement::Start, &[], &["i"], &[], &[])
            .unwrap()
            .add_tensor("A", Placement::Right, &["i"], &["j"], &[], &[])
            .unwrap()
            .add_tensor("B", Point::new(3.0, 0.0), &["j"], &["k"], &[], &[])
            .unwrap()
            .add_tensor("T", Placement::Down, &["k"], &["j", "l", "m"], &[], &[])
            .unwrap();

        assert_eq!(diagram.tensors().len(), 4);
        assert_eq!(diagram.tensors()[1].position(), Point::new(1.0, 0.0));
        assert_eq!(diagram.tensors()[3].position(), Point::new(3.0, 1.0));
    }

    #[test]
    fn test_relative_placement_requires_prior_tensor() {
        let mut diagram = Diagram::new();
        let err = diagram
            .add_tensor("A", Placement::Right, &[], &[], &[], &[])
            .unwrap_err();
        assert_eq!(
            err,
            DiagramError::InvalidPosition {
                placement: "right".to_string()
            }
        );
        assert!(diagram.tensors().is_empty());
    }

    #[test]
    fn test_contraction_count_and_validation() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &[], &["i"], &[], &[])
            .unwrap()
            .add_tensor("B", Placement::Right, &["i"], &[], &[], &[])
            .unwrap();

        diagram
            .add_contraction(TensorId::new(0), TensorId::new(1), "i")
            .unwrap();
        assert_eq!(diagram.contractions().len(), 1);
        assert_eq!(diagram.tensors().len(), 2);

        let dangling = diagram
            .add_contraction(TensorId::new(0), TensorId::new(1), "q")
            .unwrap_err();
        assert_eq!(
            dangling,
            DiagramError::DanglingContractionName {
                tensor: "A".to_string(),
                name: "q".to_string()
            }
        );

        let unknown = diagram
            .add_contraction(TensorId::new(0), TensorId::new(7), "i")
            .unwrap_err();
        assert_eq!(unknown, DiagramError::UnknownTensor { id: 7 });
    }

    #[test]
    fn test_summation_without_matches_fails() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &[], &["i"], &[], &[])
            .unwrap();
        let err = diagram.add_summation("z").unwrap_err();
        assert_eq!(
            err,
            DiagramError::NoMatchingIndex {
                name: "z".to_string()
            }
        );
    }

    #[test]
    fn test_summation_single_tensor_creates_stub_dot() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Point::new(2.0, 1.0), &[], &[], &["i"], &[])
            .unwrap();
        diagram.add_summation("i").unwrap();

        assert_eq!(diagram.tensors().len(), 2);
        assert_eq!(diagram.contractions().len(), 1);

        let dot = diagram.last_tensor().unwrap();
        assert_eq!(dot.name(), "dot");
        assert_eq!(dot.shape(), Shape::Dot);
        assert!(!dot.show_label());
        // index exits up, so the dot sits one unit above
        assert_eq!(dot.position(), Point::new(2.0, 0.0));
        // and its index enters from the opposite side
        assert_eq!(dot.indices()[0].direction(), Direction::Down);
        assert_eq!(dot.indices()[0].name(), "i");
    }

    #[test]
    fn test_summation_two_tensors_is_plain_contraction() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &[], &["j"], &[], &[])
            .unwrap()
            .add_tensor("B", Placement::Right, &["j"], &[], &[], &[])
            .unwrap();
        diagram.add_summation("j").unwrap();

        assert_eq!(diagram.tensors().len(), 2);
        assert_eq!(diagram.contractions().len(), 1);
        let contraction = &diagram.contractions()[0];
        assert_eq!(contraction.source(), TensorId::new(0));
        assert_eq!(contraction.target(), TensorId::new(1));
        assert_eq!(contraction.name(), "j");
    }

    #[test]
    fn test_summation_multiway_renames_and_fans_in() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Point::new(0.0, 0.0), &[], &["k"], &[], &[])
            .unwrap()
            .add_tensor("B", Point::new(2.0, 0.0), &["k"], &[], &[], &[])
            .unwrap()
            .add_tensor("C", Point::new(1.0, 3.0), &[], &[], &["k"], &[])
            .unwrap();
        diagram.add_summation("k").unwrap();

        assert_eq!(diagram.tensors().len(), 4);
        assert_eq!(diagram.contractions().len(), 3);

        // participants were renamed in one pass
        assert_eq!(diagram.tensors()[0].indices()[0].name(), "k0");
        assert_eq!(diagram.tensors()[1].indices()[0].name(), "k1");
        assert_eq!(diagram.tensors()[2].indices()[0].name(), "k2");

        // the dot sits at the participants' centroid
        let dot = diagram.last_tensor().unwrap();
        assert_eq!(dot.position(), Point::new(1.0, 1.0));

        // one hidden index per participant, entering from the opposite side
        assert_eq!(dot.indices().len(), 3);
        assert!(dot.indices().iter().all(|index| !index.show_label()));
        assert_eq!(dot.indices()[0].direction(), Direction::Left);
        assert_eq!(dot.indices()[1].direction(), Direction::Right);
        assert_eq!(dot.indices()[2].direction(), Direction::Down);

        // every contraction targets the dot under the renamed index
        for (ordinal, contraction) in diagram.contractions().iter().enumerate() {
            assert_eq!(contraction.target(), TensorId::new(3));
            assert_eq!(contraction.name().to_string(), format!("k{ordinal}"));
        }
    }

    #[test]
    fn test_summation_multiway_explicit_position() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Point::new(0.0, 0.0), &[], &["s"], &[], &[])
            .unwrap()
            .add_tensor("B", Point::new(2.0, 0.0), &["s"], &[], &[], &[])
            .unwrap()
            .add_tensor("C", Point::new(1.0, 2.0), &[], &[], &["s"], &[])
            .unwrap();
        diagram
            .add_summation_at("s", Point::new(4.0, 4.0))
            .unwrap();

        assert_eq!(
            diagram.last_tensor().unwrap().position(),
            Point::new(4.0, 4.0)
        );
    }

    #[test]
    fn test_set_size_and_lines() {
        let mut diagram = Diagram::new();
        diagram
            .set_size(600.0, 400.0)
            .add_line(Point::new(0.0, 1.0), Point::new(2.0, 1.0));

        assert_eq!(diagram.width(), 600.0);
        assert_eq!(diagram.height(), 400.0);
        assert_eq!(diagram.lines().len(), 1);
    }

    #[test]
    fn test_set_color_scheme_rejects_bad_colors() {
        let mut diagram = Diagram::new();
        assert!(diagram
            .set_color_scheme(&["A"], &["#123456"], ColorScheme::None)
            .is_ok());
        assert!(diagram
            .set_color_scheme(&["A"], &["definitely-not"], ColorScheme::None)
            .is_err());
    }

    #[test]
    fn test_contracted_names() {
        let mut diagram = Diagram::new();
        diagram
            .add_tensor("A", Placement::Start, &[], &["i", "j"], &[], &[])
            .unwrap()
            .add_tensor("B", Placement::Right, &["i"], &[], &[], &[])
            .unwrap()
            .add_contraction(TensorId::new(0), TensorId::new(1), "i")
            .unwrap();

        let contracted = diagram.contracted_names();
        assert!(contracted.contains(&Id::new("i")));
        assert!(!contracted.contains(&Id::new("j")));
    }
}
