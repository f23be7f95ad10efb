//! Shared in-memory representation of perception results produced by an
//! inference pipeline, and their one-way text rendering.
//!
//! The value types live in [`perception`]; the traits and helpers used by the
//! upstream inference stage live in [`integration`].

pub mod error;
pub mod integration;
pub mod perception;

pub use error::PerceptionError;
pub use integration::{
    DetectionBuilder, IntoPerception, PerceptionPipeline, PerceptionSource, PostProcessConfig,
};
pub use perception::{
    BoundingBox, Detection, LabelTable, Parsing, Perception, PerceptionKind, PerceptionType,
};
