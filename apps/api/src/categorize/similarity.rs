//! Embedding similarity — cosine similarity and nearest-category selection.

use thiserror::Error;
use tracing::debug;

use crate::categorize::models::Category;

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("vector lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("cannot compare empty vectors")]
    Empty,

    #[error("vector has zero magnitude")]
    ZeroMagnitude,
}

/// Representative description for each category, in `Category::ALL` order.
/// The input transaction is compared against the embedding of each of these.
pub const CATEGORY_EXAMPLES: [(Category, &str); 5] = [
    (
        Category::Food,
        "Groceries, restaurant meals, cafes, snacks and food delivery orders",
    ),
    (
        Category::Transport,
        "Taxi and ride-hailing trips, bus or train tickets, fuel and parking",
    ),
    (
        Category::Bills,
        "Electricity, water, internet, phone and rent payments or other recurring utility bills",
    ),
    (
        Category::Entertainment,
        "Movie tickets, concerts, streaming subscriptions, games and other leisure activities",
    ),
    (
        Category::Other,
        "Miscellaneous spending such as gifts, donations, medical costs or anything else",
    ),
];

/// Cosine similarity: `a · b / (|a| |b|)`, in [-1, 1].
///
/// Undefined inputs are errors rather than NaN: differing lengths, empty
/// vectors, and vectors with zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(SimilarityError::Empty);
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SimilarityError::ZeroMagnitude);
    }

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Picks the candidate most similar to `input`.
///
/// Starts from (`Other`, -1). A candidate replaces the running best only when
/// strictly greater, so ties keep the first one seen. Candidates that cannot
/// be compared are skipped.
pub fn best_match<'a, I>(input: &[f32], candidates: I) -> (Category, f32)
where
    I: IntoIterator<Item = (Category, &'a [f32])>,
{
    let mut best = (Category::Other, -1.0_f32);

    for (category, embedding) in candidates {
        match cosine_similarity(input, embedding) {
            Ok(score) => {
                debug!("Similarity to {category}: {score:.4}");
                if score > best.1 {
                    best = (category, score);
                }
            }
            Err(e) => debug!("Skipping {category}: {e}"),
        }
    }

    best
}
