//! Column alignment between the reference and data datasets

use crate::dataset::Dataset;
use crate::distance::{levenshtein, strip_chars};
use crate::NAME_STRIP_CHARS;
use serde::{Deserialize, Serialize};

/// One reference column paired with one data column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPairing {
    pub reference_name: String,
    pub data_name: String,
}

/// Closest data-side name for a reference column that had no exact match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    pub unmatched_reference_name: String,
    /// `None` when the data side had no leftover name to offer
    pub best_effort_data_name: Option<String>,
}

/// Result of exact name alignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactAlignment {
    /// Names present on both sides, sorted
    pub matched: Vec<String>,
    /// Names only in the reference, sorted
    pub reference_only: Vec<String>,
    /// Names only in the data, sorted
    pub data_only: Vec<String>,
}

/// Rename of one data column, addressed by its position in the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRename {
    pub column_index: usize,
    pub new_name: String,
}

/// Everything needed to run the comparisons for one alignment mode
#[derive(Debug, Clone, Default)]
pub struct AlignmentPlan {
    /// Names to look up on both sides, in comparison order
    pub compare_names: Vec<String>,
    /// Renames to apply to the data dataset before comparing
    pub renames: Vec<ColumnRename>,
    pub suggestions: Vec<MatchSuggestion>,
}

/// Sorted intersection of the two name lists, plus leftovers on each side.
///
/// Matching is case-sensitive and exact. Duplicate names are matched as often
/// as they appear on both sides, and any extra copies of a matched name are
/// dropped from the leftovers.
pub fn exact_alignment(reference_names: &[String], data_names: &[String]) -> ExactAlignment {
    let mut reference = reference_names.to_vec();
    let mut data = data_names.to_vec();
    reference.sort();
    data.sort();

    let mut alignment = ExactAlignment::default();
    let (mut i, mut j) = (0, 0);
    while i < reference.len() && j < data.len() {
        match reference[i].cmp(&data[j]) {
            std::cmp::Ordering::Less => {
                alignment.reference_only.push(reference[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                alignment.data_only.push(data[j].clone());
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                alignment.matched.push(reference[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    alignment.reference_only.extend(reference[i..].iter().cloned());
    alignment.data_only.extend(data[j..].iter().cloned());

    let matched = &alignment.matched;
    alignment
        .reference_only
        .retain(|name| matched.binary_search(name).is_err());
    alignment
        .data_only
        .retain(|name| matched.binary_search(name).is_err());

    alignment
}

/// Closest candidate to `name` by edit distance.
///
/// Only a strictly smaller distance replaces the current best, so among equal
/// distances the first candidate wins. That tie-break is arbitrary and kept
/// as is.
pub fn closest_name<'a>(name: &str, candidates: &'a [String]) -> Option<&'a str> {
    let mut best: Option<(usize, &'a str)> = None;
    for candidate in candidates {
        let distance = levenshtein(name, candidate);
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, candidate.as_str())),
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Pair every reference name with its closest data name.
///
/// Both sides are compared with `[` and `]` removed, and the returned
/// pairings carry those stripped names. Several reference names may land on
/// the same data name.
pub fn best_pairings(reference_names: &[String], data_names: &[String]) -> Vec<ColumnPairing> {
    let data_stripped: Vec<String> = data_names
        .iter()
        .map(|name| strip_chars(name, NAME_STRIP_CHARS))
        .collect();

    reference_names
        .iter()
        .filter_map(|name| {
            let stripped = strip_chars(name, NAME_STRIP_CHARS);
            closest_name(&stripped, &data_stripped).map(|data_name| ColumnPairing {
                reference_name: stripped.clone(),
                data_name: data_name.to_string(),
            })
        })
        .collect()
}

/// Suggest a data column for each reference name left over by exact matching
pub fn suggest_for_leftovers(alignment: &ExactAlignment) -> Vec<MatchSuggestion> {
    let data_stripped: Vec<String> = alignment
        .data_only
        .iter()
        .map(|name| strip_chars(name, NAME_STRIP_CHARS))
        .collect();

    alignment
        .reference_only
        .iter()
        .map(|name| {
            let stripped = strip_chars(name, NAME_STRIP_CHARS);
            MatchSuggestion {
                unmatched_reference_name: stripped.clone(),
                best_effort_data_name: closest_name(&stripped, &data_stripped)
                    .map(str::to_string),
            }
        })
        .collect()
}

/// Plan for exact mode: compare the shared names, suggest fixes for the rest
pub fn plan_exact(reference: &Dataset, data: &Dataset) -> AlignmentPlan {
    let alignment = exact_alignment(&reference.column_names(), &data.column_names());
    log::debug!(
        "Exact alignment: {} matched, {} reference-only, {} data-only",
        alignment.matched.len(),
        alignment.reference_only.len(),
        alignment.data_only.len()
    );

    let suggestions = suggest_for_leftovers(&alignment);
    AlignmentPlan {
        compare_names: alignment.matched,
        renames: Vec::new(),
        suggestions,
    }
}

/// Plan for similarity mode.
///
/// Every reference column is compared, in header order. The data column
/// paired with each one is renamed to the reference header name so a plain
/// name lookup finds both sides.
pub fn plan_fuzzy(reference: &Dataset, data: &Dataset) -> AlignmentPlan {
    let reference_names = reference.column_names();
    let data_names = data.column_names();
    let pairings = best_pairings(&reference_names, &data_names);

    // one pairing per reference name, or none at all when data has no columns
    let mut renames = Vec::with_capacity(pairings.len());
    for (new_name, pairing) in reference_names.iter().zip(&pairings) {
        let data_index = data_names
            .iter()
            .position(|name| strip_chars(name, NAME_STRIP_CHARS) == pairing.data_name);

        if let Some(column_index) = data_index {
            log::debug!(
                "Matched reference '{}' with data '{}'",
                new_name,
                data_names[column_index]
            );
            renames.push(ColumnRename {
                column_index,
                new_name: new_name.clone(),
            });
        }
    }

    AlignmentPlan {
        compare_names: reference_names,
        renames,
        suggestions: Vec::new(),
    }
}
