//! Ranking, thresholding and non-maximum suppression for detections.

use tracing::{debug, trace};

use crate::perception::{BoundingBox, Detection, iou_batch};

/// Configuration for detection post-processing.
#[derive(Debug, Clone)]
pub struct PostProcessConfig {
    /// Minimum score kept; lower scores are dropped before NMS.
    pub score_thresh: f32,
    /// IoU at or above which the lower-scored box is suppressed; `None` skips NMS.
    pub nms_thresh: Option<f32>,
    /// Keep at most this many detections after NMS.
    pub top_k: Option<usize>,
    /// Suppress across classes instead of per class id.
    pub class_agnostic: bool,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            score_thresh: 0.25,
            nms_thresh: Some(0.45),
            top_k: None,
            class_agnostic: false,
        }
    }
}

impl PostProcessConfig {
    /// Threshold, rank, suppress and truncate. The output is sorted by
    /// descending score.
    pub fn apply<'a>(&self, detections: Vec<Detection<'a>>) -> Vec<Detection<'a>> {
        let mut detections = filter_by_score(detections, self.score_thresh);

        match self.nms_thresh {
            Some(iou_thresh) => {
                detections = non_max_suppression(detections, iou_thresh, self.class_agnostic)
            }
            None => sort_by_score(&mut detections),
        }

        if let Some(k) = self.top_k {
            top_k(&mut detections, k);
        }

        detections
    }
}

/// Stable sort by descending score; ties keep their relative order.
pub fn sort_by_score(detections: &mut [Detection<'_>]) {
    detections.sort_by(|a, b| a.cmp_score_desc(b));
}

/// Keep detections with `score >= thresh`. NaN scores are dropped.
pub fn filter_by_score<'a>(detections: Vec<Detection<'a>>, thresh: f32) -> Vec<Detection<'a>> {
    let before = detections.len();
    let kept: Vec<_> = detections
        .into_iter()
        .filter(|det| det.score >= thresh)
        .collect();
    trace!(
        "score filter kept {}/{} detections (thresh {})",
        kept.len(),
        before,
        thresh
    );
    kept
}

/// Greedy non-maximum suppression.
///
/// Detections are visited in descending score order; each kept box suppresses
/// every later box whose IoU with it is at least `iou_thresh`. Unless
/// `class_agnostic` is set, only boxes with the same class id compete.
pub fn non_max_suppression<'a>(
    mut detections: Vec<Detection<'a>>,
    iou_thresh: f32,
    class_agnostic: bool,
) -> Vec<Detection<'a>> {
    sort_by_score(&mut detections);

    let boxes: Vec<BoundingBox> = detections.iter().map(|det| det.bbox).collect();
    let ious = iou_batch(&boxes, &boxes);

    let mut suppressed = vec![false; detections.len()];
    let mut kept = Vec::with_capacity(detections.len());

    for i in 0..detections.len() {
        if suppressed[i] {
            continue;
        }
        kept.push(detections[i]);

        for j in (i + 1)..detections.len() {
            if suppressed[j] {
                continue;
            }
            if !class_agnostic && detections[i].id != detections[j].id {
                continue;
            }
            if ious[[i, j]] >= iou_thresh {
                suppressed[j] = true;
            }
        }
    }

    debug!(
        "nms suppressed {} of {} detections",
        detections.len() - kept.len(),
        detections.len()
    );
    kept
}

/// Keep the `k` highest-scored detections.
pub fn top_k(detections: &mut Vec<Detection<'_>>, k: usize) {
    sort_by_score(detections);
    if detections.len() > k {
        trace!("top-k dropped {} detections", detections.len() - k);
        detections.truncate(k);
    }
}
