pub(crate) mod fuzzy;
pub mod geo;

pub use geo::*;

use rayon::prelude::*;
use std::cmp::Ordering;

/// Records that can be found by name.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Anything scoring below this is noise, not a match.
const MIN_SCORE: f64 = 0.1;

/// Generic fuzzy search, scored in parallel and returned best first.
pub fn search<'a, T>(needle: &'a str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = needle.to_lowercase();
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = fuzzy::score(&normalized_needle, hay.normalized_name());
            if score > MIN_SCORE {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_unstable_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}
