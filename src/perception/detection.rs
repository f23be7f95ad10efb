//! A single detected object instance.

use std::cmp::Ordering;
use std::fmt;

use super::bbox::BoundingBox;
use super::fixed::Fixed6;
use super::label::LabelTable;

/// One detected object.
///
/// `class_name` borrows from a label table owned elsewhere; `None` is the
/// unset state and renders as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Detection<'a> {
    /// Class id
    pub id: i32,
    /// Detection confidence score
    pub score: f32,
    /// Bounding box in TLBR format
    pub bbox: BoundingBox,
    /// Class name borrowed from a label table
    pub class_name: Option<&'a str>,
}

impl<'a> Detection<'a> {
    /// Create a detection without a class name.
    pub fn new(id: i32, score: f32, bbox: BoundingBox) -> Self {
        Self {
            id,
            score,
            bbox,
            class_name: None,
        }
    }

    /// Set the class name, borrowed from a label table.
    pub fn with_class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Resolve `class_name` from `table` using this detection's id.
    pub fn with_label_table(mut self, table: &LabelTable<'a>) -> Self {
        self.class_name = table.name(self.id);
        self
    }

    /// The class name, or `""` when unset.
    pub fn class_name_or_empty(&self) -> &'a str {
        self.class_name.unwrap_or("")
    }

    /// Strict score comparison: equal scores are neither greater nor less.
    #[inline]
    pub fn is_greater(&self, other: &Detection<'_>) -> bool {
        self.score > other.score
    }

    /// Comparator placing higher scores first.
    ///
    /// NaN scores rank below every other score so the ordering stays total.
    pub fn cmp_score_desc(&self, other: &Detection<'_>) -> Ordering {
        rank_key(other.score).total_cmp(&rank_key(self.score))
    }

    /// Map the box from model-output space to input space.
    pub fn rescaled(&self, w_base: f32, h_base: f32) -> Self {
        Self {
            bbox: self.bbox.scaled(w_base, h_base),
            ..*self
        }
    }
}

fn rank_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        // folds -0.0 into 0.0
        score + 0.0
    }
}

/// Renders `{"bbox":[..],"prob":p,"label":n,"class_name":"name"}` with the
/// keys in that fixed order.
impl fmt::Display for Detection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class_name =
            serde_json::to_string(self.class_name_or_empty()).map_err(|_| fmt::Error)?;
        write!(
            f,
            r#"{{"bbox":{},"prob":{},"label":{},"class_name":{}}}"#,
            self.bbox,
            Fixed6(self.score),
            self.id,
            class_name
        )
    }
}
