//! Guess analysis command
//!
//! Splits the word list by the feedback a guess would produce against each
//! possible target, showing how much a guess narrows things down.

use crate::core::{Feedback, Word};
use crate::game::WordSource;
use anyhow::{Context, Result, bail};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub total_targets: usize,
    /// Number of distinct feedback rows the guess can produce
    pub distinct_feedback: usize,
    /// Expected number of targets left after seeing the feedback
    pub expected_remaining: f64,
    /// Most common feedback rows, largest first
    pub largest_buckets: Vec<(Feedback, usize)>,
}

/// Bucket every word in `source` by the feedback `guess` gets against it
///
/// # Errors
///
/// Returns an error if the word is malformed or not in the word list.
pub fn analyze_guess(guess: &str, source: &WordSource, show_progress: bool) -> Result<AnalysisResult> {
    let word = Word::new(guess).with_context(|| format!("invalid word '{guess}'"))?;
    if !source.contains(&word) {
        bail!("word '{guess}' not in word list");
    }

    let targets = source.words();
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let buckets = bucket_by_feedback(&word, targets, pb.clone());
    pb.finish_and_clear();

    let total_targets = targets.len();
    let expected_remaining = buckets
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / total_targets as f64;

    let mut largest_buckets: Vec<(Feedback, usize)> = buckets.into_iter().collect();
    let distinct_feedback = largest_buckets.len();
    largest_buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_emoji().cmp(&b.0.to_emoji())));
    largest_buckets.truncate(5);

    Ok(AnalysisResult {
        word: word.text().to_string(),
        total_targets,
        distinct_feedback,
        expected_remaining,
        largest_buckets,
    })
}

fn bucket_by_feedback(guess: &Word, targets: &[Word], pb: ProgressBar) -> FxHashMap<Feedback, usize> {
    targets
        .par_iter()
        .progress_with(pb)
        .map(|target| Feedback::evaluate(guess, target))
        .fold(FxHashMap::default, |mut counts, feedback| {
            *counts.entry(feedback).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, counts| {
            for (feedback, count) in counts {
                *merged.entry(feedback).or_insert(0) += count;
            }
            merged
        })
}
