//! Importance cloud layout: turns labeled scores into ranked, sized, tinted and
//! tilted items that a rendering layer can draw directly.

pub mod cloud;
pub mod config;
pub mod errors;

pub use cloud::{
    build_layout, build_layout_json, build_layout_with, normalize, tilt_for_index,
    try_build_layout, CloudStyle, RankedItem, Scored, ScoredItem,
};
pub use errors::CloudError;
