use thiserror::Error;
use tracing::{debug, info};

use crate::core::catalog::filter_by_category;
use crate::core::matching::TitleMatcher;
use crate::core::vectorize::TfidfModel;
use crate::models::{Category, Record};

/// Outcomes that end a session early. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Sorry, no entries found for '{0}'.")]
    EmptyCategory(String),

    #[error("No close match found. Check the spelling and try again.")]
    NoTitleMatch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub record: Record,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct RecommendationList {
    /// Catalog title the query resolved to.
    pub matched_title: String,
    pub items: Vec<Recommendation>,
}

/// One category's records plus their TF-IDF rows, in file order.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    category: Category,
    records: Vec<Record>,
    model: TfidfModel,
}

impl CategoryIndex {
    /// Filter `records` to `category` and vectorize what is left. Nothing is
    /// vectorized when the category is empty.
    ///
    /// `label` is the user's own spelling of the category, echoed in the
    /// empty-category message.
    pub fn build(records: &[Record], category: Category, label: &str) -> Result<Self, RecommendError> {
        let filtered = filter_by_category(records, category);
        if filtered.is_empty() {
            info!(%category, "No records in category");
            return Err(RecommendError::EmptyCategory(label.to_string()));
        }

        let documents: Vec<String> = filtered.iter().map(Record::composite_text).collect();
        let model = TfidfModel::fit(&documents);
        debug!(
            %category,
            rows = model.len(),
            terms = model.vocabulary_size(),
            "Vectorized category"
        );

        Ok(Self { category, records: filtered, model })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// First `n` titles in file order.
    pub fn preview(&self, n: usize) -> Vec<&str> {
        self.records.iter().take(n).map(|r| r.title.as_str()).collect()
    }

    /// Resolve `query` to a catalog title and rank the category against it.
    /// Records sharing the matched title are left out; at most `limit` items.
    pub fn recommend(
        &self,
        query: &str,
        matcher: &dyn TitleMatcher,
        limit: usize,
    ) -> Result<RecommendationList, RecommendError> {
        let titles = self.titles();
        let best = matcher
            .best(query.trim(), &titles)
            .ok_or_else(|| RecommendError::NoTitleMatch(query.to_string()))?;
        debug!(query, matched = %best.title, score = best.score, "Resolved title");

        // duplicate titles: the first occurrence stands for the title
        let Some(anchor) = self.records.iter().position(|r| r.title == best.title) else {
            return Err(RecommendError::NoTitleMatch(query.to_string()));
        };

        let mut ranked: Vec<(usize, f64)> =
            self.model.similarities_to(anchor).into_iter().enumerate().collect();
        // stable: equal scores stay in file order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let items: Vec<Recommendation> = ranked
            .into_iter()
            .filter(|(idx, _)| self.records[*idx].title != best.title)
            .take(limit)
            .map(|(idx, score)| Recommendation { record: self.records[idx].clone(), score })
            .collect();

        info!(matched = %best.title, count = items.len(), "Recommendations ranked");
        Ok(RecommendationList { matched_title: best.title, items })
    }
}

/// One-shot pipeline: filter, vectorize, match, rank.
pub fn recommend(
    records: &[Record],
    category: Category,
    query: &str,
    matcher: &dyn TitleMatcher,
    limit: usize,
) -> Result<RecommendationList, RecommendError> {
    CategoryIndex::build(records, category, category.as_str())?.recommend(query, matcher, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matching::{FuzzyTitleMatcher, TitleMatch};
    use crate::core::synth::{Synthesizer, SynthesizerSettings, Vocabulary};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn movie(title: &str, genres: &str, cast: &str, director: &str) -> Record {
        Record {
            title: title.to_string(),
            kind: "Movie".to_string(),
            year: "2000".to_string(),
            genres: genres.to_string(),
            keywords: String::new(),
            tagline: String::new(),
            cast: cast.to_string(),
            director: director.to_string(),
            country: "USA".to_string(),
            sequence_index: None,
        }
    }

    fn synthetic(records: usize, seed: u64) -> Vec<Record> {
        let settings = SynthesizerSettings { records, ..SynthesizerSettings::default() };
        Synthesizer::new(Vocabulary::default(), settings)
            .expect("valid settings")
            .generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn most_similar_record_ranks_first() {
        let records = vec![
            movie("Heat", "Crime, Thriller", "Al Pacino", "Michael Mann"),
            movie("Up", "Animation, Family", "Ed Asner", "Pete Docter"),
            movie("Collateral", "Crime, Thriller", "Tom Cruise", "Michael Mann"),
            movie("Casablanca", "Romance", "Humphrey Bogart", "Michael Curtiz"),
        ];
        let list = recommend(&records, Category::Movie, "heat", &FuzzyTitleMatcher::default(), 30)
            .expect("recommendations");

        assert_eq!(list.matched_title, "Heat");
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].record.title, "Collateral");
        assert!(list.items.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn matched_title_never_recommended_and_limit_holds() {
        let records = synthetic(2_000, 11);
        let index = CategoryIndex::build(&records, Category::Movie, "movie").expect("movies exist");
        assert!(index.len() > 30);

        let list = index
            .recommend("Inception", &FuzzyTitleMatcher::default(), 30)
            .expect("recommendations");

        assert_eq!(list.matched_title, "Inception");
        assert_eq!(list.items.len(), 30);
        assert!(list.items.iter().all(|r| r.record.title != "Inception"));
        assert!(list.items.iter().all(|r| Category::Movie.matches(&r.record.kind)));
    }

    #[test]
    fn equal_scores_keep_file_order() {
        let records = vec![
            movie("Anchor", "War", "Tom Hanks", "Sam Mendes"),
            movie("First", "Comedy", "Zac Efron", "Ron Howard"),
            movie("Second", "Musical", "Emma Stone", "Wes Anderson"),
            movie("Third", "Horror", "Amy Adams", "Tim Burton"),
        ];
        let list = recommend(&records, Category::Movie, "Anchor", &FuzzyTitleMatcher::default(), 30)
            .expect("recommendations");

        let titles: Vec<&str> = list.items.iter().map(|r| r.record.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn duplicate_titles_use_first_occurrence_and_are_all_skipped() {
        let records = vec![
            movie("Joker", "Crime, Drama", "Joaquin Phoenix", "Todd Phillips"),
            movie("Taxi Driver", "Crime, Drama", "Robert De Niro", "Martin Scorsese"),
            movie("Joker", "Comedy", "Zac Efron", "Guy Ritchie"),
            movie("Snatch", "Comedy", "Brad Pitt", "Guy Ritchie"),
        ];
        let list = recommend(&records, Category::Movie, "Joker", &FuzzyTitleMatcher::default(), 30)
            .expect("recommendations");

        let titles: Vec<&str> = list.items.iter().map(|r| r.record.title.as_str()).collect();
        assert_eq!(titles, vec!["Taxi Driver", "Snatch"]);
    }

    #[test]
    fn case_twin_titles_anchor_on_typed_spelling() {
        let records = vec![
            movie("Up", "Animation, Family", "Ed Asner", "Pete Docter"),
            movie("Coco", "Animation, Family", "Anthony Gonzalez", "Lee Unkrich"),
            movie("UP", "Crime, Thriller", "Al Pacino", "Michael Mann"),
            movie("Heat", "Crime, Thriller", "Robert De Niro", "Michael Mann"),
        ];
        let list = recommend(&records, Category::Movie, "UP", &FuzzyTitleMatcher::default(), 30)
            .expect("recommendations");

        assert_eq!(list.matched_title, "UP");
        assert_eq!(list.items[0].record.title, "Heat");
        assert!(list.items.iter().all(|r| r.record.title != "UP"));
        assert!(list.items.iter().any(|r| r.record.title == "Up"));
    }

    #[test]
    fn empty_category_stops_before_vectorizing() {
        let records: Vec<Record> = synthetic(50, 5)
            .into_iter()
            .filter(|r| r.category() == Some(Category::Webseries))
            .collect();

        let err = CategoryIndex::build(&records, Category::Movie, "movie").unwrap_err();
        assert_eq!(err, RecommendError::EmptyCategory("movie".to_string()));
        assert_eq!(err.to_string(), "Sorry, no entries found for 'movie'.");
    }

    #[test]
    fn unmatched_title_is_reported() {
        let records = synthetic(200, 8);
        let err = recommend(&records, Category::Webseries, "zzzzzzzzzz", &FuzzyTitleMatcher::default(), 30)
            .unwrap_err();
        assert!(matches!(err, RecommendError::NoTitleMatch(_)));
        assert_eq!(err.to_string(), "No close match found. Check the spelling and try again.");
    }

    struct FirstCandidate;

    impl TitleMatcher for FirstCandidate {
        fn rank(&self, _query: &str, candidates: &[&str]) -> Vec<TitleMatch> {
            candidates
                .iter()
                .map(|c| TitleMatch { title: c.to_string(), score: 0.1 })
                .collect()
        }
    }

    #[test]
    fn matcher_is_pluggable() {
        let records = vec![
            movie("Alien", "Horror, Sci-Fi", "Sigourney Weaver", "Ridley Scott"),
            movie("Gladiator", "Action", "Russell Crowe", "Ridley Scott"),
        ];
        let list = recommend(&records, Category::Movie, "anything", &FirstCandidate, 30)
            .expect("recommendations");
        assert_eq!(list.matched_title, "Alien");
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn preview_is_capped_in_file_order() {
        let records = synthetic(300, 21);
        let index = CategoryIndex::build(&records, Category::Webseries, "Webseries").expect("series exist");
        let preview = index.preview(10);
        assert_eq!(preview.len(), 10);
        assert_eq!(preview, index.titles()[..10].to_vec());
        assert_eq!(index.category(), Category::Webseries);
    }
}
