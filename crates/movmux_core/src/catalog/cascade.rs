//! Tie-break cascade for picking the best audio track.
//!
//! Each step narrows the candidate set by one attribute. A step that
//! cannot be evaluated because some candidate lacks the attribute reports
//! `Unavailable`, and the caller carries the set forward unchanged. The
//! same happens when a step would leave no candidates.

use crate::models::{CompressionMode, Track};

/// Outcome of one refinement step.
#[derive(Debug, PartialEq)]
pub(crate) enum Refinement<'a> {
    /// Candidates that survived the step (possibly empty).
    Narrowed(Vec<&'a Track>),
    /// The attribute is missing on at least one candidate.
    Unavailable,
}

/// A named refinement step.
pub(crate) struct Step {
    pub name: &'static str,
    pub refine: for<'a> fn(&[&'a Track]) -> Refinement<'a>,
}

/// Steps in the order they are applied.
pub(crate) const STEPS: [Step; 3] = [
    Step {
        name: "channel count",
        refine: max_channels,
    },
    Step {
        name: "lossless compression",
        refine: lossless,
    },
    Step {
        name: "bit rate",
        refine: max_bit_rate,
    },
];

/// Run the cascade over a non-empty candidate list.
///
/// Returns `None` only when `candidates` is empty.
pub(crate) fn pick_best<'a>(mut candidates: Vec<&'a Track>) -> Option<&'a Track> {
    for step in &STEPS {
        if candidates.len() <= 1 {
            break;
        }
        match (step.refine)(&candidates) {
            Refinement::Narrowed(subset) if !subset.is_empty() => {
                tracing::trace!(
                    "{} narrowed {} candidates to {}",
                    step.name,
                    candidates.len(),
                    subset.len()
                );
                candidates = subset;
            }
            Refinement::Narrowed(_) => {
                tracing::trace!("{} matched no candidates, skipped", step.name);
            }
            Refinement::Unavailable => {
                tracing::trace!("{} missing on some candidates, skipped", step.name);
            }
        }
    }

    candidates.first().copied()
}

/// Keep tracks with the highest channel count.
pub(crate) fn max_channels<'a>(candidates: &[&'a Track]) -> Refinement<'a> {
    keep_max(candidates, |track| track.channels.map(u64::from))
}

/// Keep lossless tracks.
pub(crate) fn lossless<'a>(candidates: &[&'a Track]) -> Refinement<'a> {
    if candidates.iter().any(|track| track.compression.is_none()) {
        return Refinement::Unavailable;
    }
    Refinement::Narrowed(
        candidates
            .iter()
            .copied()
            .filter(|track| track.compression == Some(CompressionMode::Lossless))
            .collect(),
    )
}

/// Keep tracks with the highest bit rate.
pub(crate) fn max_bit_rate<'a>(candidates: &[&'a Track]) -> Refinement<'a> {
    keep_max(candidates, Track::bit_rate_value)
}

fn keep_max<'a>(candidates: &[&'a Track], key: impl Fn(&Track) -> Option<u64>) -> Refinement<'a> {
    let keys: Option<Vec<u64>> = candidates.iter().map(|track| key(*track)).collect();
    let Some(keys) = keys else {
        return Refinement::Unavailable;
    };
    let Some(max) = keys.iter().copied().max() else {
        return Refinement::Narrowed(Vec::new());
    };

    Refinement::Narrowed(
        candidates
            .iter()
            .zip(keys)
            .filter(|(_, value)| *value == max)
            .map(|(track, _)| *track)
            .collect(),
    )
}
