pub mod vocab;

use std::ops::RangeInclusive;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::models::{Category, Record, YearSpan, LIST_SEPARATOR};
use crate::utils::{Error, RecommendarrResult};

pub use vocab::Vocabulary;

#[derive(Debug, Clone)]
pub struct SynthesizerSettings {
    pub records: usize,
    /// Release years drawn for movies.
    pub movie_years: RangeInclusive<u16>,
    /// First-season years drawn for webseries.
    pub series_start_years: RangeInclusive<u16>,
    /// Upper bound for the end year of a finished series.
    pub latest_year: u16,
    /// Chance a webseries is written as `start–Present` instead of a closed run.
    pub ongoing_probability: f64,
}

impl Default for SynthesizerSettings {
    fn default() -> Self {
        Self {
            records: 100_000,
            movie_years: 1960..=2023,
            series_start_years: 2000..=2023,
            latest_year: 2023,
            ongoing_probability: 0.5,
        }
    }
}

/// Produces catalog records by uniform sampling from a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct Synthesizer {
    vocab: Vocabulary,
    settings: SynthesizerSettings,
}

impl Synthesizer {
    pub fn new(vocab: Vocabulary, settings: SynthesizerSettings) -> RecommendarrResult<Self> {
        if let Some(list) = vocab.first_undersized() {
            return Err(Error::Other(format!("Vocabulary list '{list}' is too short to sample from")));
        }
        if settings.movie_years.is_empty() || settings.series_start_years.is_empty() {
            return Err(Error::Other("Year ranges must not be empty".to_string()));
        }
        if *settings.series_start_years.end() > settings.latest_year {
            return Err(Error::Other(format!(
                "Series start years end after latest_year {}",
                settings.latest_year
            )));
        }
        if !(0.0..=1.0).contains(&settings.ongoing_probability) {
            return Err(Error::Other(format!(
                "ongoing_probability must be within 0..=1, got {}",
                settings.ongoing_probability
            )));
        }
        Ok(Self { vocab, settings })
    }

    pub fn settings(&self) -> &SynthesizerSettings {
        &self.settings
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Record> {
        (0..self.settings.records)
            .map(|idx| self.generate_record(idx as u64, rng))
            .collect()
    }

    pub fn generate_record<R: Rng + ?Sized>(&self, index: u64, rng: &mut R) -> Record {
        let category = if rng.gen_bool(0.5) { Category::Movie } else { Category::Webseries };
        let title = pick(self.vocab.titles(category), rng);
        let year = self.sample_year(category, rng);

        let genre_count = rng.gen_range(1..=2);
        let genres = sample_distinct(&self.vocab.genres, genre_count, rng);
        let keyword_count = rng.gen_range(1..=3);
        let keywords = sample_distinct(&self.vocab.keywords, keyword_count, rng);
        let tagline = pick(&self.vocab.taglines, rng);
        let cast_count = rng.gen_range(2..=3);
        let cast = sample_distinct(&self.vocab.cast, cast_count, rng);
        let director = pick(&self.vocab.directors, rng);
        let country = pick(&self.vocab.countries, rng);

        Record {
            title,
            kind: category.to_string(),
            year: year.to_string(),
            genres,
            keywords,
            tagline,
            cast,
            director,
            country,
            sequence_index: Some(index),
        }
    }

    fn sample_year<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> YearSpan {
        match category {
            Category::Movie => YearSpan::Single(rng.gen_range(self.settings.movie_years.clone())),
            Category::Webseries => {
                let start = rng.gen_range(self.settings.series_start_years.clone());
                if rng.gen_bool(self.settings.ongoing_probability) {
                    YearSpan::Ongoing { start }
                } else {
                    YearSpan::Range { start, end: rng.gen_range(start..=self.settings.latest_year) }
                }
            }
        }
    }
}

fn pick<R: Rng + ?Sized>(list: &[String], rng: &mut R) -> String {
    list.choose(rng).cloned().unwrap_or_default()
}

/// `count` distinct entries of `list`, joined with [`LIST_SEPARATOR`].
fn sample_distinct<R: Rng + ?Sized>(list: &[String], count: usize, rng: &mut R) -> String {
    list.choose_multiple(rng, count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Generate the configured number of records and write them to `output`.
pub fn generate_to_file<R: Rng + ?Sized>(
    synthesizer: &Synthesizer,
    output: &Path,
    rng: &mut R,
) -> RecommendarrResult<usize> {
    debug!(records = synthesizer.settings().records, "Sampling synthetic catalog");
    let records = synthesizer.generate(rng);
    crate::core::catalog::write_records(output, &records)?;
    info!(path = %output.display(), rows = records.len(), "Synthetic catalog generated");
    Ok(records.len())
}
