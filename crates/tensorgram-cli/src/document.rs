//! The declarative TOML diagram document.
//!
//! A document is a front-end over the construction API: tensors are applied
//! first (so relative placements and handle positions behave exactly as
//! chained library calls), then contractions, summations, and decoration
//! lines. Nothing here computes geometry; every semantic rule lives in the
//! `tensorgram` model.

use serde::Deserialize;

use tensorgram::{
    Diagram, Placement, TensorId, TensorOptions,
    draw::Shape,
    geometry::{Direction, LabelPosition, Point},
};

use crate::CliError;

/// A complete diagram document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    size: Option<SizeSpec>,

    #[serde(default, rename = "tensor")]
    tensors: Vec<TensorSpec>,

    #[serde(default, rename = "contraction")]
    contractions: Vec<ContractionSpec>,

    #[serde(default, rename = "summation")]
    summations: Vec<SummationSpec>,

    #[serde(default, rename = "line")]
    lines: Vec<LineSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct SizeSpec {
    width: f32,
    height: f32,
}

/// A tensor position: `[x, y]` coordinates or a relative tag.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum PositionSpec {
    Tag(PlacementTag),
    At([f32; 2]),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum PlacementTag {
    Start,
    Right,
    Down,
}

impl Default for PositionSpec {
    fn default() -> Self {
        Self::Tag(PlacementTag::Start)
    }
}

impl PositionSpec {
    fn to_placement(self) -> Placement {
        match self {
            Self::Tag(PlacementTag::Start) => Placement::Start,
            Self::Tag(PlacementTag::Right) => Placement::Right,
            Self::Tag(PlacementTag::Down) => Placement::Down,
            Self::At([x, y]) => Placement::At(Point::new(x, y)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TensorSpec {
    name: String,

    #[serde(default)]
    position: PositionSpec,

    #[serde(default)]
    left: Vec<String>,
    #[serde(default)]
    right: Vec<String>,
    #[serde(default)]
    up: Vec<String>,
    #[serde(default)]
    down: Vec<String>,

    #[serde(default)]
    shape: Option<Shape>,
    #[serde(default)]
    show_label: Option<bool>,
    #[serde(default)]
    label_position: Option<LabelPosition>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    size: Option<f32>,
}

impl TensorSpec {
    fn options(&self) -> Result<TensorOptions, CliError> {
        let defaults = TensorOptions::default();
        let color = self
            .color
            .as_deref()
            .map(tensorgram::color::Color::new)
            .transpose()
            .map_err(CliError::Document)?;

        Ok(TensorOptions {
            shape: self.shape.unwrap_or(defaults.shape),
            show_label: self.show_label.unwrap_or(defaults.show_label),
            label_position: self.label_position.unwrap_or(defaults.label_position),
            color,
            size: self.size.unwrap_or(defaults.size),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContractionSpec {
    source: usize,
    target: usize,
    name: String,

    #[serde(default, rename = "loop")]
    loop_direction: Option<Direction>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SummationSpec {
    name: String,

    #[serde(default)]
    position: Option<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LineSpec {
    start: [f32; 2],
    end: [f32; 2],
}

impl Document {
    /// Parses a document from TOML source.
    pub fn parse(source: &str) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|err| CliError::Document(err.to_string()))
    }

    /// Replays the document through the construction API.
    pub fn build(&self) -> Result<Diagram, CliError> {
        let mut diagram = Diagram::new();

        if let Some(size) = self.size {
            diagram.set_size(size.width, size.height);
        }

        fn as_refs(names: &[String]) -> Vec<&str> {
            names.iter().map(String::as_str).collect::<Vec<_>>()
        }
        for spec in &self.tensors {
            diagram.add_tensor_with(
                &spec.name,
                spec.position.to_placement(),
                &as_refs(&spec.left),
                &as_refs(&spec.right),
                &as_refs(&spec.up),
                &as_refs(&spec.down),
                spec.options()?,
            )?;
        }

        for spec in &self.contractions {
            let source = TensorId::new(spec.source);
            let target = TensorId::new(spec.target);
            match spec.loop_direction {
                Some(direction) => {
                    diagram.add_contraction_with_loop(source, target, &spec.name, direction)?
                }
                None => diagram.add_contraction(source, target, &spec.name)?,
            };
        }

        for spec in &self.summations {
            match spec.position {
                Some([x, y]) => diagram.add_summation_at(&spec.name, Point::new(x, y))?,
                None => diagram.add_summation(&spec.name)?,
            };
        }

        for spec in &self.lines {
            diagram.add_line(
                Point::new(spec.start[0], spec.start[1]),
                Point::new(spec.end[0], spec.end[1]),
            );
        }

        Ok(diagram)
    }
}
