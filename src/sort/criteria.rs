//! Declarative sort keys for tracks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::library::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Title,
    #[serde(alias = "duration_seconds", alias = "durationSeconds")]
    Duration,
    #[serde(alias = "date_added", alias = "dateAdded")]
    DateAdded,
    #[serde(alias = "play_count", alias = "playCount", alias = "plays")]
    PlayCount,
    Rating,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub field: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortCriterion {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

fn compare_field(field: SortField, a: &Track, b: &Track) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Duration => a.duration_seconds.cmp(&b.duration_seconds),
        SortField::DateAdded => a.date_added.cmp(&b.date_added),
        SortField::PlayCount => a.play_count.cmp(&b.play_count),
        // Unrated tracks sort below any rating.
        SortField::Rating => a.rating.cmp(&b.rating),
    }
}

/// Comparator for a single `{field, order}` pair.
pub fn comparator(criterion: SortCriterion) -> impl Fn(&Track, &Track) -> Ordering {
    move |a, b| {
        let ord = compare_field(criterion.field, a, b);
        match criterion.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Lexicographic comparator: the first criterion that tells the tracks apart
/// decides. An empty list compares everything as equal.
pub fn chained(criteria: &[SortCriterion]) -> impl Fn(&Track, &Track) -> Ordering + '_ {
    move |a, b| {
        criteria
            .iter()
            .map(|c| comparator(*c)(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
