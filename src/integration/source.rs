//! Traits for the upstream inference stage that populates perception results.

use crate::perception::{Detection, Parsing, Perception};

/// Upstream inference stage producing one [`Perception`] per frame.
///
/// Class names are borrowed for `'static`, so sources resolve them against
/// a static label table.
///
/// # Example
///
/// ```
/// use perception_common::{BoundingBox, Detection, Perception, PerceptionSource};
///
/// struct FixedSource;
///
/// impl PerceptionSource for FixedSource {
///     type Error = std::convert::Infallible;
///
///     fn perceive(
///         &mut self,
///         _input: &[u8],
///         _width: u32,
///         _height: u32,
///     ) -> Result<Perception<'static>, Self::Error> {
///         let det = Detection::new(0, 0.9, BoundingBox::new(0.0, 0.0, 4.0, 4.0));
///         Ok(Perception::from_detections(vec![det.with_class_name("person")]))
///     }
/// }
///
/// let perception = FixedSource.perceive(&[], 4, 4).unwrap();
/// assert_eq!(perception.len(), 1);
/// ```
pub trait PerceptionSource {
    /// Error type for inference failures.
    type Error;

    /// Run inference on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn perceive(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Perception<'static>, Self::Error>;
}

/// Conversion from model-specific outputs into a [`Perception`].
pub trait IntoPerception<'a> {
    /// Convert the output into a perception result.
    fn into_perception(self) -> Perception<'a>;
}

impl<'a> IntoPerception<'a> for Perception<'a> {
    fn into_perception(self) -> Perception<'a> {
        self
    }
}

impl<'a> IntoPerception<'a> for Vec<Detection<'a>> {
    fn into_perception(self) -> Perception<'a> {
        Perception::from_detections(self)
    }
}

impl<'a> IntoPerception<'a> for Parsing {
    fn into_perception(self) -> Perception<'a> {
        Perception::from_parsing(self)
    }
}
