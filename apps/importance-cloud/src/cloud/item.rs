use serde::{Deserialize, Serialize};

/// Anything that can be placed in a cloud: a display label and a numeric weight.
///
/// Implement this on your own type to carry extra fields through the layout;
/// they come back untouched inside `RankedItem::item`.
pub trait Scored {
    fn label(&self) -> &str;
    fn score(&self) -> f64;
}

impl<T: Scored + ?Sized> Scored for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn score(&self) -> f64 {
        (**self).score()
    }
}

/// The canonical input: one label and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(alias = "element")]
    pub label: String,
    pub score: f64,
}

impl ScoredItem {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl Scored for ScoredItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// An input item enriched with its layout.
///
/// Serializes flat: the wrapped item's fields sit next to `rank`, `size`,
/// `opacity` and `tilt`, so the output extends the input shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem<T> {
    #[serde(flatten)]
    pub item: T,
    /// 1-based position after the descending sort.
    pub rank: usize,
    /// Display size in px, within the style's size range.
    pub size: f64,
    /// Opacity within the style's alpha range.
    pub opacity: f64,
    /// Rotation in degrees: -3, -1, 1 or 3.
    pub tilt: f64,
}

impl<T: Scored> RankedItem<T> {
    pub fn label(&self) -> &str {
        self.item.label()
    }

    pub fn score(&self) -> f64 {
        self.item.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_alias_deserializes_as_label() {
        let item: ScoredItem = serde_json::from_value(json!({ "element": "Fire", "score": 7.5 })).unwrap();
        assert_eq!(item, ScoredItem::new("Fire", 7.5));
    }

    #[test]
    fn test_ranked_item_serializes_flat() {
        let ranked = RankedItem {
            item: ScoredItem::new("Earth", 3.0),
            rank: 2,
            size: 20.0,
            opacity: 0.75,
            tilt: -1.0,
        };
        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(
            value,
            json!({
                "label": "Earth",
                "score": 3.0,
                "rank": 2,
                "size": 20.0,
                "opacity": 0.75,
                "tilt": -1.0
            })
        );
    }

    #[test]
    fn test_accessors_delegate_to_item() {
        let ranked = RankedItem {
            item: ScoredItem::new("Air", -2.0),
            rank: 1,
            size: 54.0,
            opacity: 1.0,
            tilt: -3.0,
        };
        assert_eq!(ranked.label(), "Air");
        assert_eq!(ranked.score(), -2.0);
    }
}
