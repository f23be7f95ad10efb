//! Integration module for connecting inference stages with perception results.
//!
//! This module provides the traits an upstream inference stage implements,
//! a builder for detections, detection post-processing, and a pipeline that
//! ties them together.

mod builder;
mod pipeline;
pub mod postprocess;
mod source;

pub use builder::DetectionBuilder;
pub use pipeline::PerceptionPipeline;
pub use postprocess::PostProcessConfig;
pub use source::{IntoPerception, PerceptionSource};
