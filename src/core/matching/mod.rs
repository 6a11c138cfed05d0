use std::collections::HashSet;

use strsim::normalized_levenshtein;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq)]
pub struct TitleMatch {
    pub title: String,
    pub score: f64,
}

/// Approximate title lookup. Implementations return candidates best-first;
/// an empty list means nothing was close enough.
pub trait TitleMatcher {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<TitleMatch>;

    fn best(&self, query: &str, candidates: &[&str]) -> Option<TitleMatch> {
        self.rank(query, candidates).into_iter().next()
    }
}

/// Edit-distance matcher over normalized titles.
#[derive(Debug, Clone)]
pub struct FuzzyTitleMatcher {
    cutoff: f64,
    max_candidates: usize,
}

impl FuzzyTitleMatcher {
    pub fn new(cutoff: f64, max_candidates: usize) -> Self {
        Self {
            cutoff: cutoff.clamp(0.0, 1.0),
            max_candidates: max_candidates.max(1),
        }
    }

    pub fn from_config(config: &crate::config::MatcherConfig) -> Self {
        Self::new(config.cutoff, config.max_candidates)
    }
}

impl Default for FuzzyTitleMatcher {
    fn default() -> Self {
        Self::new(0.6, 3)
    }
}

impl TitleMatcher for FuzzyTitleMatcher {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<TitleMatch> {
        let needle = normalize_title(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let raw_query = query.trim();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut scored: Vec<(TitleMatch, f64)> = candidates
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .map(|c| {
                let folded = normalized_levenshtein(&needle, &normalize_title(c));
                let raw = normalized_levenshtein(raw_query, c);
                (TitleMatch { title: c.to_string(), score: folded }, raw)
            })
            .filter(|(m, _)| m.score >= self.cutoff)
            .collect();

        // folded ties go to the closer raw spelling, then candidate order (stable)
        scored.sort_by(|(a, a_raw), (b, b_raw)| {
            b.score.total_cmp(&a.score).then_with(|| b_raw.total_cmp(a_raw))
        });
        scored.truncate(self.max_candidates);
        scored.into_iter().map(|(m, _)| m).collect()
    }
}

/// Fold a title for comparison: NFKD, diacritics dropped, lowercased,
/// whitespace collapsed.
pub fn normalize_title(s: &str) -> String {
    let folded: String = s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
