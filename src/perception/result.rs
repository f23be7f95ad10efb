//! Combined per-frame perception result.

use std::fmt;

use super::detection::Detection;
use super::kind::PerceptionType;
use super::parsing::Parsing;

/// Payload of a [`Perception`]: either detections or a segmentation map.
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptionKind<'a> {
    /// Object detections, in the order they are rendered
    Detections(Vec<Detection<'a>>),
    /// Segmentation map
    Segmentation(Parsing),
}

impl Default for PerceptionKind<'_> {
    fn default() -> Self {
        Self::Detections(Vec::new())
    }
}

/// One inference cycle's result.
///
/// `w_base` and `h_base` map model-output coordinates back to the input
/// resolution. They are carried as metadata only: rendering never applies
/// them, consumers do (see [`Perception::detections_in_input_space`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Perception<'a> {
    /// Detections or segmentation payload
    pub kind: PerceptionKind<'a>,
    /// Vertical scale from model output to input resolution
    pub h_base: f32,
    /// Horizontal scale from model output to input resolution
    pub w_base: f32,
}

impl Default for Perception<'_> {
    fn default() -> Self {
        Self {
            kind: PerceptionKind::default(),
            h_base: 1.0,
            w_base: 1.0,
        }
    }
}

impl<'a> Perception<'a> {
    /// Wrap detections with unit scale factors.
    pub fn from_detections(detections: Vec<Detection<'a>>) -> Self {
        Self {
            kind: PerceptionKind::Detections(detections),
            ..Self::default()
        }
    }

    /// Wrap a segmentation map with unit scale factors.
    pub fn from_parsing(parsing: Parsing) -> Self {
        Self {
            kind: PerceptionKind::Segmentation(parsing),
            ..Self::default()
        }
    }

    /// Set the model-output to input-space scale factors.
    pub fn with_scale(mut self, w_base: f32, h_base: f32) -> Self {
        self.w_base = w_base;
        self.h_base = h_base;
        self
    }

    /// The legacy tag matching the payload.
    pub fn perception_type(&self) -> PerceptionType {
        match self.kind {
            PerceptionKind::Detections(_) => PerceptionType::Det,
            PerceptionKind::Segmentation(_) => PerceptionType::Seg,
        }
    }

    /// The detections, `None` for a segmentation result.
    pub fn detections(&self) -> Option<&[Detection<'a>]> {
        match &self.kind {
            PerceptionKind::Detections(dets) => Some(dets.as_slice()),
            PerceptionKind::Segmentation(_) => None,
        }
    }

    /// Mutable detections, `None` for a segmentation result.
    pub fn detections_mut(&mut self) -> Option<&mut Vec<Detection<'a>>> {
        match &mut self.kind {
            PerceptionKind::Detections(dets) => Some(dets),
            PerceptionKind::Segmentation(_) => None,
        }
    }

    /// The segmentation map, `None` for a detection result.
    pub fn parsing(&self) -> Option<&Parsing> {
        match &self.kind {
            PerceptionKind::Detections(_) => None,
            PerceptionKind::Segmentation(parsing) => Some(parsing),
        }
    }

    /// Number of rendered entries: detections, or pixels of the class buffer.
    pub fn len(&self) -> usize {
        match &self.kind {
            PerceptionKind::Detections(dets) => dets.len(),
            PerceptionKind::Segmentation(parsing) => parsing.seg.len(),
        }
    }

    /// True when nothing would be rendered between the brackets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detections with boxes scaled by `w_base`/`h_base`; empty for
    /// segmentation results.
    pub fn detections_in_input_space(&self) -> Vec<Detection<'a>> {
        self.detections()
            .unwrap_or_default()
            .iter()
            .map(|det| det.rescaled(self.w_base, self.h_base))
            .collect()
    }
}

impl<'a> From<Vec<Detection<'a>>> for Perception<'a> {
    fn from(detections: Vec<Detection<'a>>) -> Self {
        Self::from_detections(detections)
    }
}

impl From<Parsing> for Perception<'_> {
    fn from(parsing: Parsing) -> Self {
        Self::from_parsing(parsing)
    }
}

/// Renders one bracketed, comma-joined list: detection objects in stored
/// order, or the raw class indices in raster order.
impl fmt::Display for Perception<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match &self.kind {
            PerceptionKind::Detections(dets) => {
                for (i, det) in dets.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", det)?;
                }
            }
            PerceptionKind::Segmentation(parsing) => {
                for (i, class) in parsing.seg.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", class)?;
                }
            }
        }
        f.write_str("]")
    }
}
