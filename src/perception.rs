mod bbox;
mod detection;
mod fixed;
mod kind;
mod label;
mod parsing;
mod result;

pub use bbox::{BoundingBox, iou_batch};
pub use detection::Detection;
pub use kind::PerceptionType;
pub use label::LabelTable;
pub use parsing::Parsing;
pub use result::{Perception, PerceptionKind};
