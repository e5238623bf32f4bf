//! Visual definitions for diagram elements.
//!
//! This module provides the drawable vocabulary of a tensor diagram:
//! node shapes ([`Shape`]), stroke styles ([`StrokeDefinition`]), text
//! labels ([`Text`]), and the z-ordered layer system ([`RenderLayer`],
//! [`LayeredOutput`]) that keeps output stacking independent of paint
//! order.

mod layer;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{InvalidShape, Shape};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};
