//! Geometric primitives for diagram layout.
//!
//! Coordinates follow the screen convention: x grows to the right and y grows
//! downward, so [`Direction::Up`] maps to a negative y unit vector. Grid
//! coordinates (one unit per tensor spacing) are converted to pixel
//! coordinates through [`GridScale`].

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A point in grid or pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a copy of this point shifted vertically by `dy`.
    pub fn shift_y(self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

/// Dimensions of a drawing surface or element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }
}

/// The side of a tensor an index exits through.
///
/// Direction-dependent geometry goes through exhaustive matches on this enum,
/// so an unhandled direction is a compile error rather than a silent lookup
/// miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction. This is an involution:
    /// `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the unit vector for this direction in screen coordinates
    /// (y grows downward).
    pub fn unit(self) -> Point {
        match self {
            Self::Left => Point::new(-1.0, 0.0),
            Self::Right => Point::new(1.0, 0.0),
            Self::Up => Point::new(0.0, -1.0),
            Self::Down => Point::new(0.0, 1.0),
        }
    }

    /// Returns true for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{s}")
    }
}

/// Error returned when parsing an unrecognized direction string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction `{0}`, valid values: left, right, up, down")]
pub struct InvalidDirection(pub String);

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}

/// Where a tensor's name label is anchored relative to its center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    Left,
    Right,
    #[default]
    Up,
    Down,
    Center,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl LabelPosition {
    /// Returns the label anchor offset from the tensor center, in grid units.
    pub fn offset(self) -> Point {
        match self {
            Self::Left => Point::new(-0.4, 0.0),
            Self::Right => Point::new(0.4, 0.0),
            Self::Up => Point::new(0.0, -0.4),
            Self::Down => Point::new(0.0, 0.4),
            Self::Center => Point::new(0.0, 0.0),
            Self::UpLeft => Point::new(-0.4, -0.4),
            Self::UpRight => Point::new(0.4, -0.4),
            Self::DownLeft => Point::new(-0.4, 0.4),
            Self::DownRight => Point::new(0.4, 0.4),
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Center => "center",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        };
        write!(f, "{s}")
    }
}

/// Error returned when parsing an unrecognized label position string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid label position `{0}`")]
pub struct InvalidLabelPosition(pub String);

impl FromStr for LabelPosition {
    type Err = InvalidLabelPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "center" => Ok(Self::Center),
            "up-left" => Ok(Self::UpLeft),
            "up-right" => Ok(Self::UpRight),
            "down-left" => Ok(Self::DownLeft),
            "down-right" => Ok(Self::DownRight),
            _ => Err(InvalidLabelPosition(s.to_string())),
        }
    }
}

/// A linear map from grid coordinates to pixel coordinates.
///
/// Equivalent to an affine scale with a `domain` in grid units and a `range`
/// in pixels. The default scales place an 8-unit grid inside a 500px canvas
/// with a margin for labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl GridScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Default horizontal scale: grid `[0, 8]` to pixels `[20, 500]`.
    pub fn default_x() -> Self {
        Self::new((0.0, 8.0), (20.0, 500.0))
    }

    /// Default vertical scale: grid `[0, 8]` to pixels `[60, 500]`.
    pub fn default_y() -> Self {
        Self::new((0.0, 8.0), (60.0, 500.0))
    }

    /// Maps a grid coordinate to a pixel coordinate.
    pub fn map(self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Returns the pixel length of one grid unit.
    pub fn step(self) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        (r1 - r0) / (d1 - d0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add_sub_scale() {
        let p = Point::new(1.0, 2.0).add_point(Point::new(3.0, -1.0));
        assert_eq!(p, Point::new(4.0, 1.0));
        assert_eq!(p.sub_point(Point::new(4.0, 0.0)), Point::new(0.0, 1.0));
        assert_eq!(Point::new(2.0, -3.0).scale(0.5), Point::new(1.0, -1.5));
        assert_eq!(Point::new(2.0, 1.0).shift_y(2.0), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn test_unit_vectors_are_screen_oriented() {
        assert_eq!(Direction::Up.unit(), Point::new(0.0, -1.0));
        assert_eq!(Direction::Down.unit(), Point::new(0.0, 1.0));
        assert_eq!(Direction::Left.unit(), Point::new(-1.0, 0.0));
        assert_eq!(Direction::Right.unit(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_unit_of_opposite_is_negated() {
        for dir in Direction::ALL {
            let u = dir.unit();
            let v = dir.opposite().unit();
            assert_approx_eq!(f32, u.x(), -v.x());
            assert_approx_eq!(f32, u.y(), -v.y());
        }
    }

    #[test]
    fn test_direction_round_trips_through_strings() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err, InvalidDirection("north".to_string()));
    }

    #[test]
    fn test_label_position_offsets() {
        assert_eq!(LabelPosition::Up.offset(), Point::new(0.0, -0.4));
        assert_eq!(LabelPosition::Center.offset(), Point::new(0.0, 0.0));
        assert_eq!(LabelPosition::DownLeft.offset(), Point::new(-0.4, 0.4));
        assert_eq!(LabelPosition::default(), LabelPosition::Up);
    }

    #[test]
    fn test_label_position_parse() {
        assert_eq!(
            "up-right".parse::<LabelPosition>().unwrap(),
            LabelPosition::UpRight
        );
        assert!("upright".parse::<LabelPosition>().is_err());
    }

    #[test]
    fn test_grid_scale_maps_endpoints() {
        let scale = GridScale::default_x();
        assert_approx_eq!(f32, scale.map(0.0), 20.0);
        assert_approx_eq!(f32, scale.map(8.0), 500.0);
        assert_approx_eq!(f32, scale.step(), 60.0);
    }

    #[test]
    fn test_grid_scale_extrapolates() {
        // Values outside the domain extrapolate linearly, matching the
        // behavior of an unclamped linear scale.
        let scale = GridScale::new((0.0, 8.0), (60.0, 500.0));
        assert_approx_eq!(f32, scale.map(-1.0), 5.0);
        assert_approx_eq!(f32, scale.step(), 55.0);
    }
}
