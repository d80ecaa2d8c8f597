//! Cloud Layout Builder: ranks scored items and derives their visual treatment.
//!
//! # Algorithm
//! 1. Stable sort by score, descending (`sort_by` keeps equal scores in input order).
//! 2. Find the min and max score.
//! 3. Normalize each score to `t ∈ [0, 1]`; all-equal scores give `t = 1`.
//! 4. Map `t` onto the style's size and opacity ranges.
//! 5. Tilt cycles `-3, -1, 1, 3` degrees by sorted position.
//!
//! Non-finite scores are not validated by `build_layout`/`build_layout_with`;
//! whatever the float arithmetic produces is returned. `try_build_layout`
//! rejects them instead.

use tracing::{debug, warn};

use crate::cloud::item::{RankedItem, Scored};
use crate::cloud::style::CloudStyle;
use crate::errors::CloudError;

/// Number of distinct tilt values before the pattern repeats.
const TILT_CYCLE: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Builds the cloud layout with the default style (size 16–54 px, opacity 0.5–1.0).
pub fn build_layout<T: Scored + Clone>(items: &[T]) -> Vec<RankedItem<T>> {
    build_layout_with(items, &CloudStyle::default())
}

/// Builds the cloud layout with caller-supplied size and opacity ranges.
///
/// The input slice is left untouched; every output item owns a clone of its input.
pub fn build_layout_with<T: Scored + Clone>(items: &[T], style: &CloudStyle) -> Vec<RankedItem<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    if let Some(bad) = items.iter().find(|i| !i.score().is_finite()) {
        warn!(
            "Non-finite score {} for '{}' in cloud layout; sizes may be NaN",
            bad.score(),
            bad.label()
        );
    }

    let mut sorted: Vec<&T> = items.iter().collect();
    // Stable: equal scores keep their input order.
    sorted.sort_by(|a, b| sort_key(b.score()).total_cmp(&sort_key(a.score())));

    let (min_score, max_score) = score_range(items);
    debug!(
        "Building cloud layout for {} items (scores {min_score}..={max_score})",
        items.len()
    );

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let t = normalize(item.score(), min_score, max_score).clamp(0.0, 1.0);
            RankedItem {
                item: item.clone(),
                rank: index + 1,
                size: style.size_at(t),
                opacity: style.opacity_at(t),
                tilt: tilt_for_index(index),
            }
        })
        .collect()
}

/// Strict variant of `build_layout_with`.
///
/// Validates the style and rejects the first non-finite score (in input order)
/// before any layout work happens.
pub fn try_build_layout<T: Scored + Clone>(
    items: &[T],
    style: &CloudStyle,
) -> Result<Vec<RankedItem<T>>, CloudError> {
    style.validate()?;

    if let Some(bad) = items.iter().find(|i| !i.score().is_finite()) {
        return Err(CloudError::NonFiniteScore {
            label: bad.label().to_string(),
            score: bad.score(),
        });
    }

    Ok(build_layout_with(items, style))
}

// ────────────────────────────────────────────────────────────────────────────
// Layout math
// ────────────────────────────────────────────────────────────────────────────

/// Rescales `value` relative to `[min, max]`. Not clamped.
///
/// Returns 1.0 when `max == min`, so a cloud of equal scores renders every item
/// at full size instead of dividing by zero.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 1.0;
    }
    let span = max - min;
    if span.is_finite() {
        return (value - min) / span;
    }
    // Span overflowed (scores near ±f64::MAX); halving first keeps it finite.
    (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
}

/// Tilt in degrees for the item at 0-based sorted position `index`.
pub fn tilt_for_index(index: usize) -> f64 {
    ((index % TILT_CYCLE) as f64 - 1.5) * 2.0
}

/// `total_cmp` orders `-0.0` below `0.0`; adding `0.0` folds both zeros together
/// so they compare equal and keep input order.
fn sort_key(score: f64) -> f64 {
    score + 0.0
}

/// Min and max score. `f64::min`/`f64::max` skip NaN, so a NaN score does not
/// poison the range of the remaining items.
fn score_range<T: Scored>(items: &[T]) -> (f64, f64) {
    items.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), item| {
        (lo.min(item.score()), hi.max(item.score()))
    })
}
