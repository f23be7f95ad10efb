//! Dense per-pixel segmentation output.

use ndarray::{ArrayView2, s};

use crate::error::PerceptionError;

/// Segmentation map: one class index per pixel, row-major over
/// `width × height`.
///
/// Only the top-left `valid_w × valid_h` sub-region carries meaningful data;
/// the rest is padding. `data` optionally holds raw per-class scores in HWC
/// order (`channel` scores per pixel) and is empty when absent.
///
/// The default value (all zero, both buffers empty) is the unset state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsing {
    /// Class index per pixel
    pub seg: Vec<i8>,
    /// Raw per-class scores, parallel to `seg`
    pub data: Vec<f32>,
    /// Number of classes the model distinguishes
    pub num_classes: u32,
    /// Grid width in pixels
    pub width: u32,
    /// Grid height in pixels
    pub height: u32,
    /// Width of the meaningful, non-padded region
    pub valid_w: u32,
    /// Height of the meaningful, non-padded region
    pub valid_h: u32,
    /// Scores per pixel in `data`
    pub channel: u32,
}

impl Parsing {
    /// Create a map covering a full `width × height` grid.
    ///
    /// The valid region starts out as the whole grid.
    pub fn new(width: u32, height: u32, seg: Vec<i8>) -> Result<Self, PerceptionError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(PerceptionError::GridTooLarge {
                width,
                height,
                channel: 0,
            })?;
        if seg.len() != expected {
            return Err(PerceptionError::SegLengthMismatch {
                expected,
                got: seg.len(),
            });
        }

        Ok(Self {
            seg,
            width,
            height,
            valid_w: width,
            valid_h: height,
            ..Self::default()
        })
    }

    /// Restrict the meaningful region to the top-left `valid_w × valid_h` pixels.
    pub fn with_valid_region(
        mut self,
        valid_w: u32,
        valid_h: u32,
    ) -> Result<Self, PerceptionError> {
        if valid_w > self.width || valid_h > self.height {
            return Err(PerceptionError::ValidRegionOutOfBounds {
                valid_w,
                valid_h,
                width: self.width,
                height: self.height,
            });
        }
        self.valid_w = valid_w;
        self.valid_h = valid_h;
        Ok(self)
    }

    /// Attach raw scores, `channel` per pixel.
    pub fn with_scores(mut self, channel: u32, data: Vec<f32>) -> Result<Self, PerceptionError> {
        let expected = self
            .pixel_count()
            .and_then(|pixels| pixels.checked_mul(channel as usize))
            .ok_or(PerceptionError::GridTooLarge {
                width: self.width,
                height: self.height,
                channel,
            })?;
        if data.len() != expected {
            return Err(PerceptionError::ScoreLengthMismatch {
                expected,
                got: data.len(),
            });
        }
        self.channel = channel;
        self.data = data;
        Ok(self)
    }

    /// Set the number of classes the model distinguishes.
    pub fn with_num_classes(mut self, num_classes: u32) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// Number of grid cells, `None` when `width * height` overflows `usize`.
    #[inline]
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// True when no class indices are stored.
    pub fn is_empty(&self) -> bool {
        self.seg.is_empty()
    }

    /// True when raw scores are attached.
    pub fn has_scores(&self) -> bool {
        !self.data.is_empty()
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.valid_h.min(self.height) || col >= self.valid_w.min(self.width) {
            return None;
        }
        (row as usize)
            .checked_mul(self.width as usize)?
            .checked_add(col as usize)
    }

    /// Class index at `(row, col)`, `None` outside the valid region.
    pub fn class_at(&self, row: u32, col: u32) -> Option<i8> {
        self.index(row, col).and_then(|idx| self.seg.get(idx).copied())
    }

    /// Raw scores at `(row, col)`, `None` outside the valid region or when no
    /// scores are attached.
    pub fn scores_at(&self, row: u32, col: u32) -> Option<&[f32]> {
        let channel = self.channel as usize;
        if channel == 0 {
            return None;
        }
        let start = self.index(row, col)?.checked_mul(channel)?;
        let end = start.checked_add(channel)?;
        self.data.get(start..end)
    }

    /// The whole class buffer as a `height × width` array.
    pub fn seg_view(&self) -> Result<ArrayView2<'_, i8>, PerceptionError> {
        let shape = (self.height as usize, self.width as usize);
        Ok(ArrayView2::from_shape(shape, &self.seg)?)
    }

    /// The class buffer restricted to the valid region.
    pub fn valid_seg_view(&self) -> Result<ArrayView2<'_, i8>, PerceptionError> {
        if self.valid_w > self.width || self.valid_h > self.height {
            return Err(PerceptionError::ValidRegionOutOfBounds {
                valid_w: self.valid_w,
                valid_h: self.valid_h,
                width: self.width,
                height: self.height,
            });
        }
        let view = self.seg_view()?;
        Ok(view.slice_move(s![..self.valid_h as usize, ..self.valid_w as usize]))
    }

    /// Pixel count per class over the valid region.
    ///
    /// The result has `max(num_classes, largest index + 1)` entries; negative
    /// indices are skipped.
    pub fn class_histogram(&self) -> Result<Vec<usize>, PerceptionError> {
        let view = self.valid_seg_view()?;
        let mut counts = vec![0usize; self.num_classes as usize];
        for &class in view.iter() {
            let Ok(idx) = usize::try_from(class) else {
                continue;
            };
            if idx >= counts.len() {
                counts.resize(idx + 1, 0);
            }
            counts[idx] += 1;
        }
        Ok(counts)
    }
}
