// Cloud layout: rank, size, opacity and tilt for a set of scored items.
// Pure and synchronous; every call recomputes from scratch.

pub mod builder;
pub mod item;
pub mod json;
pub mod style;

// Re-export the public API consumed at the crate root.
pub use builder::{build_layout, build_layout_with, normalize, tilt_for_index, try_build_layout};
pub use item::{RankedItem, Scored, ScoredItem};
pub use json::build_layout_json;
pub use style::CloudStyle;
