//! PerceptionPipeline for combining inference with post-processing.

use tracing::{debug, warn};

use super::{PerceptionSource, PostProcessConfig};
use crate::perception::Perception;

/// Runs a [`PerceptionSource`] and post-processes its detections.
///
/// Segmentation results pass through untouched.
pub struct PerceptionPipeline<S: PerceptionSource> {
    source: S,
    config: PostProcessConfig,
}

impl<S: PerceptionSource> PerceptionPipeline<S> {
    /// Create a new pipeline with the given source and post-processing config.
    pub fn new(source: S, config: PostProcessConfig) -> Self {
        Self { source, config }
    }

    /// Create a new pipeline with the default post-processing config.
    pub fn with_default_config(source: S) -> Self {
        Self::new(source, PostProcessConfig::default())
    }

    /// Process a single frame.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The frame's `Perception` with detections thresholded, ranked and
    /// suppressed, or the source's error.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Perception<'static>, S::Error> {
        let mut perception = self.source.perceive(input, width, height)?;

        if !(perception.w_base > 0.0 && perception.h_base > 0.0) {
            warn!(
                "non-positive scale factors w_base={} h_base={}",
                perception.w_base, perception.h_base
            );
        }

        if let Some(detections) = perception.detections_mut() {
            let raw = std::mem::take(detections);
            *detections = self.config.apply(raw);
        }

        debug!(
            "frame {}x{}: {:?} with {} entries",
            width,
            height,
            perception.perception_type(),
            perception.len()
        );
        Ok(perception)
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the post-processing config.
    pub fn config(&self) -> &PostProcessConfig {
        &self.config
    }

    /// Get a mutable reference to the post-processing config.
    pub fn config_mut(&mut self) -> &mut PostProcessConfig {
        &mut self.config
    }
}
