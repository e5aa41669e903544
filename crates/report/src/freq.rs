//! Frequency counting with deterministic tie-breaking.
//!
//! All helpers here are total over their inputs and return `None` rather
//! than panicking when given nothing to count, so reports built on top of
//! them stay reproducible run to run.

use std::collections::HashMap;

/// Most frequent code in `values`; ties resolve to the smallest code.
///
/// Returns `None` over an empty slice.
pub(crate) fn mode_code(values: &[u8]) -> Option<u8> {
    let mut counts = [0u64; 256];
    for &value in values {
        counts[usize::from(value)] += 1;
    }

    // Ascending scan with a strict comparison, so the smallest code wins
    // among equally frequent ones.
    let mut best: Option<(u8, u64)> = None;
    for (code, &count) in counts.iter().enumerate() {
        if count > 0 && best.is_none_or(|(_, top)| count > top) {
            best = Some((code as u8, count));
        }
    }
    best.map(|(code, _)| code)
}

/// Most frequent value in `values`; ties resolve to the value whose first
/// occurrence comes earliest.
///
/// Returns `None` over an empty iterator.
pub(crate) fn mode_first_seen<'a, I>(values: I) -> Option<&'a str>
where
    I: Iterator<Item = &'a str> + Clone,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for value in values.clone() {
        *counts.entry(value).or_insert(0) += 1;
    }
    let top = counts.values().copied().max()?;

    // Re-scan in input order so equal counts resolve to the earliest value.
    values.clone().find(|value| counts[value] == top)
}

/// Most frequent year in `years`; ties resolve to the smallest year.
///
/// Returns `None` over an empty slice.
pub(crate) fn mode_year(years: &[i32]) -> Option<i32> {
    let mut counts: HashMap<i32, u64> = HashMap::new();
    for &year in years {
        *counts.entry(year).or_insert(0) += 1;
    }
    let top = counts.values().copied().max()?;

    counts
        .iter()
        .filter(|&(_, &count)| count == top)
        .map(|(&year, _)| year)
        .min()
}

/// Distinct values with their counts, ordered by descending count.
///
/// Equal counts keep first-occurrence order, so the ranking is stable
/// across runs over the same input.
pub(crate) fn ranked_counts<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, u64)> = order
        .into_iter()
        .map(|value| (value.to_string(), counts[value]))
        .collect();
    // Stable sort preserves first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
