//! Tensorgram Core Types and Definitions
//!
//! This crate provides the foundational types for Tensorgram tensor-network
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned names ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support and ordinal scales
//!   ([`color`] module)
//! - **Geometry**: Grid points, cardinal directions, and grid-to-pixel
//!   scales ([`geometry`] module)
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
