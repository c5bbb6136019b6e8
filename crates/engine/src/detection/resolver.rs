//! Overlap resolution
//!
//! Detection hands over raw candidates that may claim overlapping spans,
//! for example a postal code inside a street address or phone-shaped digit
//! groups inside an IBAN. Resolution reduces them to a non-overlapping set
//! deterministically: the same candidates always produce the same winners,
//! independent of pattern evaluation order.

use std::cmp::Ordering;

use deckname_domain::types::PatternMatch;

/// Reduces overlapping candidates to a non-overlapping winner set
pub struct OverlapResolver;

impl OverlapResolver {
    /// Resolve a page's candidates into non-overlapping matches.
    ///
    /// Candidates are first sorted by start position, longer span first on
    /// ties, registration order as the final tie-break. Each candidate is
    /// then checked against the already accepted set:
    ///
    /// - no overlap: the candidate is accepted
    /// - one overlap: the candidate replaces the accepted match only if it
    ///   has strictly higher confidence, or is a priority match while the
    ///   accepted one is not
    /// - several overlaps: the whole group (candidate plus every overlapped
    ///   accepted match) collapses to a single winner, ranked by confidence,
    ///   then priority, then earliest start
    ///
    /// The result is sorted by start position.
    pub fn resolve(mut candidates: Vec<PatternMatch>) -> Vec<PatternMatch> {
        if candidates.len() > 1 {
            candidates.sort_by(Self::candidate_order);
        }

        let mut accepted: Vec<PatternMatch> = Vec::new();
        for candidate in candidates {
            Self::resolve_against(&mut accepted, candidate);
        }

        accepted.sort_by_key(|m| m.start_position);
        accepted
    }

    /// Deterministic processing order for candidates
    fn candidate_order(a: &PatternMatch, b: &PatternMatch) -> Ordering {
        a.start_position
            .cmp(&b.start_position)
            .then_with(|| b.length().cmp(&a.length()))
            .then_with(|| a.registration_index.cmp(&b.registration_index))
    }

    /// Ranking within an overlap group; `Less` means "ranks better"
    fn group_order(a: &PatternMatch, b: &PatternMatch) -> Ordering {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.is_priority.cmp(&a.is_priority))
            .then_with(|| a.start_position.cmp(&b.start_position))
            .then_with(|| a.registration_index.cmp(&b.registration_index))
    }

    /// True if the candidate may replace a single overlapped accepted match
    fn outranks(candidate: &PatternMatch, accepted: &PatternMatch) -> bool {
        candidate.confidence > accepted.confidence
            || (candidate.is_priority && !accepted.is_priority)
    }

    /// Fold one candidate into the accepted set, which stays mutually
    /// non-overlapping
    fn resolve_against(accepted: &mut Vec<PatternMatch>, candidate: PatternMatch) {
        let overlapping: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, m)| m.overlaps_with(&candidate))
            .map(|(i, _)| i)
            .collect();

        match overlapping.as_slice() {
            [] => accepted.push(candidate),
            [index] => {
                if Self::outranks(&candidate, &accepted[*index]) {
                    accepted[*index] = candidate;
                }
            }
            _ => {
                let mut best = overlapping[0];
                for &index in &overlapping[1..] {
                    if Self::group_order(&accepted[index], &accepted[best]) == Ordering::Less {
                        best = index;
                    }
                }

                if Self::group_order(&candidate, &accepted[best]) == Ordering::Less {
                    for &index in overlapping.iter().rev() {
                        accepted.remove(index);
                    }
                    accepted.push(candidate);
                } else {
                    for &index in overlapping.iter().rev() {
                        if index != best {
                            accepted.remove(index);
                        }
                    }
                }
            }
        }
    }
}
