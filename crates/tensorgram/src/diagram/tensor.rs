//! Tensor nodes and their indices.

use tensorgram_core::{
    color::Color,
    draw::Shape,
    geometry::{Direction, LabelPosition, Point},
    identifier::Id,
};

/// A stable handle to a tensor in a [`Diagram`](crate::Diagram).
///
/// Handles are positions in the insertion-ordered tensor arena; tensors are
/// never removed or reordered, so a handle stays valid for the lifetime of
/// the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TensorId(usize);

impl TensorId {
    /// Creates a handle for the tensor at the given insertion position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the insertion position this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named leg of a tensor.
///
/// Two tensors exposing an index with the same name can be contracted; an
/// index not referenced by any contraction is drawn as a loose stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index {
    name: Id,
    direction: Direction,
    show_label: bool,
    order: u32,
}

impl Index {
    /// The index name, shared across tensors to express connectivity.
    pub fn name(&self) -> Id {
        self.name
    }

    /// The side of the tensor this index exits through.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the index label is drawn next to its stub.
    pub fn show_label(&self) -> bool {
        self.show_label
    }

    /// Position among same-direction siblings on the owning tensor, 0-based.
    /// Used to fan out multiple indices exiting the same side.
    pub fn order(&self) -> u32 {
        self.order
    }
}

/// Optional attributes for a tensor, merged over defaults at construction.
#[derive(Debug, Clone)]
pub struct TensorOptions {
    pub shape: Shape,
    pub show_label: bool,
    pub label_position: LabelPosition,
    pub color: Option<Color>,
    /// Bounding box edge length in pixels.
    pub size: f32,
}

impl Default for TensorOptions {
    fn default() -> Self {
        Self {
            shape: Shape::Circle,
            show_label: true,
            label_position: LabelPosition::Up,
            color: None,
            size: 20.0,
        }
    }
}

impl TensorOptions {
    /// Options for the auxiliary dot tensors created by summation.
    pub(crate) fn dot() -> Self {
        Self {
            shape: Shape::Dot,
            show_label: false,
            ..Self::default()
        }
    }
}

/// A node in the diagram: a tensor at a grid position with named indices.
#[derive(Debug, Clone)]
pub struct Tensor {
    name: Id,
    position: Point,
    shape: Shape,
    show_label: bool,
    label_position: LabelPosition,
    color: Option<Color>,
    size: f32,
    indices: Vec<Index>,
    rect_height: u32,
}

impl Tensor {
    /// Builds a tensor from per-side index name lists.
    ///
    /// Indices are stored in left, right, up, down order (matching the
    /// argument order), each with `show_label = true`.
    pub(crate) fn new(
        name: &str,
        position: Point,
        left: &[&str],
        right: &[&str],
        up: &[&str],
        down: &[&str],
        opts: TensorOptions,
    ) -> Self {
        let sides = [
            (Direction::Left, left),
            (Direction::Right, right),
            (Direction::Up, up),
            (Direction::Down, down),
        ];
        let indices = sides
            .into_iter()
            .flat_map(|(direction, names)| {
                names
                    .iter()
                    .map(move |index_name| (Id::new(index_name), direction, true))
            })
            .collect();
        Self::with_indices(name, position, indices, opts)
    }

    /// Builds a tensor from explicit `(name, direction, show_label)` tuples.
    ///
    /// Sibling `order` and `rect_height` are derived here, once, from the
    /// declared index sequence.
    pub(crate) fn with_indices(
        name: &str,
        position: Point,
        indices: Vec<(Id, Direction, bool)>,
        opts: TensorOptions,
    ) -> Self {
        let mut per_direction = [0u32; 4];
        let indices: Vec<Index> = indices
            .into_iter()
            .map(|(index_name, direction, show_label)| {
                let slot = &mut per_direction[direction as usize];
                let order = *slot;
                *slot += 1;
                Index {
                    name: index_name,
                    direction,
                    show_label,
                    order,
                }
            })
            .collect();

        let count = |direction: Direction| {
            indices
                .iter()
                .filter(|index| index.direction == direction)
                .count() as u32
        };
        let rect_height = count(Direction::Left).max(count(Direction::Right));

        Self {
            name: Id::new(name),
            position,
            shape: opts.shape,
            show_label: opts.show_label,
            label_position: opts.label_position,
            color: opts.color,
            size: opts.size,
            indices,
            rect_height,
        }
    }

    pub fn name(&self) -> Id {
        self.name
    }

    /// Grid position of the tensor center.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn show_label(&self) -> bool {
        self.show_label
    }

    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    /// Explicit color, if one was set; otherwise the color scale decides.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Bounding box edge length in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The tensor's indices in declaration order.
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// The first index with the given name, if any.
    pub fn index(&self, name: Id) -> Option<&Index> {
        self.indices.iter().find(|index| index.name == name)
    }

    /// Max of left-side and right-side index counts; drives the rendered
    /// height of rectangle tensors and their index fan-out.
    pub fn rect_height(&self) -> u32 {
        self.rect_height
    }

    /// Renames the first index called `old` to `new`. Used by multi-way
    /// summation to disambiguate participants.
    pub(crate) fn rename_index(&mut self, old: Id, new: Id) {
        if let Some(index) = self.indices.iter_mut().find(|index| index.name == old) {
            index.name = new;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_keep_declaration_order() {
        let tensor = Tensor::new(
            "T",
            Point::new(1.0, 0.0),
            &["i"],
            &["j", "k"],
            &[],
            &["l"],
            TensorOptions::default(),
        );

        let names: Vec<String> = tensor
            .indices()
            .iter()
            .map(|index| index.name().to_string())
            .collect();
        assert_eq!(names, ["i", "j", "k", "l"]);
        assert_eq!(tensor.indices()[0].direction(), Direction::Left);
        assert_eq!(tensor.indices()[3].direction(), Direction::Down);
    }

    #[test]
    fn test_order_counts_same_direction_siblings() {
        let tensor = Tensor::new(
            "R",
            Point::default(),
            &["a", "b", "c"],
            &["d"],
            &[],
            &[],
            TensorOptions::default(),
        );

        let orders: Vec<u32> = tensor.indices().iter().map(Index::order).collect();
        assert_eq!(orders, [0, 1, 2, 0]);
    }

    #[test]
    fn test_rect_height_is_max_side_count() {
        let tensor = Tensor::new(
            "R",
            Point::default(),
            &["a", "b"],
            &["c", "d", "e"],
            &[],
            &[],
            TensorOptions::default(),
        );
        assert_eq!(tensor.rect_height(), 3);

        let bare = Tensor::new(
            "B",
            Point::default(),
            &[],
            &[],
            &["u"],
            &[],
            TensorOptions::default(),
        );
        assert_eq!(bare.rect_height(), 0);
    }

    #[test]
    fn test_index_lookup_first_match_wins() {
        let tensor = Tensor::new(
            "A",
            Point::default(),
            &["i"],
            &["i"],
            &[],
            &[],
            TensorOptions::default(),
        );
        let found = tensor.index(Id::new("i")).unwrap();
        assert_eq!(found.direction(), Direction::Left);
    }

    #[test]
    fn test_rename_first_match() {
        let mut tensor = Tensor::new(
            "A",
            Point::default(),
            &["k"],
            &["k"],
            &[],
            &[],
            TensorOptions::default(),
        );
        tensor.rename_index(Id::new("k"), Id::new("k0"));

        assert_eq!(tensor.indices()[0].name(), "k0");
        assert_eq!(tensor.indices()[1].name(), "k");
    }

    #[test]
    fn test_default_options() {
        let opts = TensorOptions::default();
        assert_eq!(opts.shape, Shape::Circle);
        assert!(opts.show_label);
        assert_eq!(opts.label_position, LabelPosition::Up);
        assert!(opts.color.is_none());
        assert_eq!(opts.size, 20.0);

        let dot = TensorOptions::dot();
        assert_eq!(dot.shape, Shape::Dot);
        assert!(!dot.show_label);
    }
}
