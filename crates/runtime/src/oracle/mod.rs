//! Runtime implementations of the core's overlap oracle.
//!
//! The data is built once per room; placed instances are appended through the
//! shared [`InstanceRegistry`] and cleared on reset.
mod instances;
mod obb;
mod overlap;

pub use instances::InstanceRegistry;
pub use obb::OrientedBox;
pub use overlap::{BoxOverlapIndex, LayerMask};
