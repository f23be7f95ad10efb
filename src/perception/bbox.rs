use std::fmt;

use ndarray::Array2;

use super::fixed::Fixed6;

/// Axis-aligned bounding box as a raw `(xmin, ymin, xmax, ymax)` quadruple.
///
/// No ordering is enforced between the corners; an inverted box is still a
/// valid value and simply has zero area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl BoundingBox {
    /// Create a box from its corners (TLBR format).
    #[inline]
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Create a box from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Create a box from its center and dimensions (XYWH format).
    #[inline]
    pub fn from_xywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(
            cx - width / 2.0,
            cy - height / 2.0,
            cx + width / 2.0,
            cy + height / 2.0,
        )
    }

    /// Corners as `[xmin, ymin, xmax, ymax]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }

    /// Signed width, negative for inverted boxes.
    #[inline]
    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    /// Signed height, negative for inverted boxes.
    #[inline]
    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    /// Center point `(cx, cy)`.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        ((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }

    /// Area of the box, zero when the corners are inverted.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Map the box from model-output space to input space.
    #[inline]
    pub fn scaled(&self, w_base: f32, h_base: f32) -> Self {
        Self::new(
            self.xmin * w_base,
            self.ymin * h_base,
            self.xmax * w_base,
            self.ymax * h_base,
        )
    }

    /// Calculate Intersection over Union (IoU) with another box.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        let x1 = self.xmin.max(other.xmin);
        let y1 = self.ymin.max(other.ymin);
        let x2 = self.xmax.min(other.xmax);
        let y2 = self.ymax.min(other.ymax);

        let inter_area = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from([xmin, ymin, xmax, ymax]: [f32; 4]) -> Self {
        Self::new(xmin, ymin, xmax, ymax)
    }
}

/// Renders `[xmin,ymin,xmax,ymax]`, six fractional digits each.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            Fixed6(self.xmin),
            Fixed6(self.ymin),
            Fixed6(self.xmax),
            Fixed6(self.ymax)
        )
    }
}

/// Calculate the IoU matrix between two sets of boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_batch(boxes_a: &[BoundingBox], boxes_b: &[BoundingBox]) -> Array2<f32> {
    let mut ious = Array2::zeros((boxes_a.len(), boxes_b.len()));
    for (i, a) in boxes_a.iter().enumerate() {
        for (j, b) in boxes_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(bbox.to_string(), "[0.000000,0.000000,10.000000,10.000000]");
    }

    #[test]
    fn test_display_ignores_ordering_and_sign() {
        let bbox = BoundingBox::new(5.5, -1.25, -3.0, 2.0);
        assert_eq!(bbox.to_string(), "[5.500000,-1.250000,-3.000000,2.000000]");
    }

    #[test]
    fn test_conversions() {
        let bbox = BoundingBox::from_tlwh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bbox.to_array(), [10.0, 20.0, 40.0, 60.0]);

        let bbox = BoundingBox::from_xywh(25.0, 40.0, 30.0, 40.0);
        assert_eq!(bbox.to_array(), [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(bbox.center(), (25.0, 40.0));
        assert_eq!(bbox.width(), 30.0);
        assert_eq!(bbox.height(), 40.0);
    }

    #[test]
    fn test_inverted_box_has_zero_area() {
        let bbox = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(bbox.area(), 0.0);
        assert_eq!(bbox.iou(&bbox), 0.0);
    }

    #[test]
    fn test_scaled() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0).scaled(2.0, 0.5);
        assert_eq!(bbox.to_array(), [2.0, 1.0, 6.0, 2.0]);
    }

    #[test]
    fn test_iou() {
        let a = BoundingBox::from_tlwh(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::from_tlwh(5.0, 5.0, 10.0, 10.0);

        // Intersection 25, union 175
        assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-6);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);

        let c = BoundingBox::from_tlwh(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.iou(&c), 0.0);
    }

    #[test]
    fn test_iou_batch_shape() {
        let a = [BoundingBox::new(0.0, 0.0, 1.0, 1.0); 2];
        let b = [BoundingBox::new(0.0, 0.0, 1.0, 1.0); 3];
        let ious = iou_batch(&a, &b);
        assert_eq!(ious.dim(), (2, 3));
        assert!((ious[[1, 2]] - 1.0).abs() < 1e-6);
    }
}
