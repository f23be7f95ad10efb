//! Builder for creating Detection objects from various box formats.

use crate::perception::{BoundingBox, Detection, LabelTable};

/// Builder for creating [`Detection`] objects from various box formats.
///
/// An explicit `class_name` wins over a label table lookup.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder<'a> {
    bbox: BoundingBox,
    score: f32,
    id: i32,
    class_name: Option<&'a str>,
    labels: Option<LabelTable<'a>>,
}

impl<'a> DetectionBuilder<'a> {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = BoundingBox::new(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = BoundingBox::from_xywh(cx, cy, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = BoundingBox::from_tlwh(x, y, w, h);
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Set the class id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Set the class name explicitly.
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Resolve the class name from `labels` at build time.
    pub fn label_table(mut self, labels: LabelTable<'a>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection<'a> {
        let class_name = self
            .class_name
            .or_else(|| self.labels.and_then(|labels| labels.name(self.id)));
        Detection {
            id: self.id,
            score: self.score,
            bbox: self.bbox,
            class_name,
        }
    }
}
