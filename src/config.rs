use serde::Deserialize;

use crate::utils::RecommendarrResult;

impl Config {

    pub fn init() -> RecommendarrResult<Self> {
        // get config toml dir from env, with default
        let config_path = std::env::var("RECOMMENDARR_CONFIG_PATH")
            .unwrap_or_else(|_| String::from("./config.toml"));

        Self::load(&config_path)
    }

    pub fn load(config_path: &str) -> RecommendarrResult<Self> {
        let config = config::Config::builder()
            // Add in config toml (optional, every key has a default)
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of RECOMMENDARR)
            .add_source(config::Environment::with_prefix("RECOMMENDARR").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String { "info".to_string() }

// ===============================================================================
// Generate
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    /// CSV file written by `generate`.
    #[serde(default = "default_generate_output")]
    pub output: String,
    #[serde(default = "default_record_count")]
    pub records: usize,
    /// Fixed RNG seed. If None, the generator is seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: default_generate_output(),
            records: default_record_count(),
            seed: None,
        }
    }
}

fn default_generate_output() -> String { "final_100k_movies_webseries.csv".to_string() }
fn default_record_count() -> usize { 100_000 }

// ===============================================================================
// Recommend
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// CSV file read by `recommend`.
    #[serde(default = "default_recommend_input")]
    pub input: String,
    /// How many titles of the selected category are shown before the title prompt.
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            input: default_recommend_input(),
            preview_count: default_preview_count(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

fn default_recommend_input() -> String { "recommendations.csv".to_string() }
fn default_preview_count() -> usize { 10 }
fn default_max_recommendations() -> usize { 30 }

// ===============================================================================
// Matcher
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity (0.0..=1.0) a title needs to count as a match.
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_cutoff() -> f64 { 0.6 }
fn default_max_candidates() -> usize { 3 }
