use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separator used for the multi-value text columns (genres, keywords, cast).
pub const LIST_SEPARATOR: &str = ", ";

/// Marker written instead of an end year for series still airing.
pub const ONGOING_MARKER: &str = "Present";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Movie,
    Webseries,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Movie, Category::Webseries];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "Movie",
            Category::Webseries => "Webseries",
        }
    }

    /// Case-insensitive comparison against a raw `Type` column value.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}' (expected Movie or Webseries)", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.matches(s))
            .ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

// ===============================================================================
// Year
// ===============================================================================

static YEAR_SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<start>\d{4})(?:–(?:(?P<end>\d{4})|(?P<ongoing>Present)))?$").unwrap()
});

/// Release year of a title: a single year for movies, a run for series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSpan {
    Single(u16),
    Range { start: u16, end: u16 },
    Ongoing { start: u16 },
}

impl YearSpan {
    pub fn matches_category(&self, category: Category) -> bool {
        match (self, category) {
            (YearSpan::Single(_), Category::Movie) => true,
            (YearSpan::Range { start, end }, Category::Webseries) => start <= end,
            (YearSpan::Ongoing { .. }, Category::Webseries) => true,
            _ => false,
        }
    }
}

impl fmt::Display for YearSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSpan::Single(y) => write!(f, "{y}"),
            YearSpan::Range { start, end } => write!(f, "{start}–{end}"),
            YearSpan::Ongoing { start } => write!(f, "{start}–{ONGOING_MARKER}"),
        }
    }
}

impl FromStr for YearSpan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = YEAR_SPAN_RE
            .captures(s.trim())
            .ok_or_else(|| format!("malformed year '{s}'"))?;
        let parse = |v: &str| v.parse::<u16>().map_err(|e| format!("bad year '{v}': {e}"));

        let start = parse(&caps["start"])?;
        if let Some(end) = caps.name("end") {
            Ok(YearSpan::Range { start, end: parse(end.as_str())? })
        } else if caps.name("ongoing").is_some() {
            Ok(YearSpan::Ongoing { start })
        } else {
            Ok(YearSpan::Single(start))
        }
    }
}

// ===============================================================================
// Record
// ===============================================================================

/// One catalog row. Field order is the on-disk column order.
///
/// Every text column defaults to the empty string so files missing a column
/// (or a value) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub director: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "index", default)]
    pub sequence_index: Option<u64>,
}

impl Record {
    pub fn category(&self) -> Option<Category> {
        self.kind.parse().ok()
    }

    /// Text fed to the vectorizer: genres, keywords, tagline, cast, director.
    pub fn composite_text(&self) -> String {
        [
            self.genres.as_str(),
            self.keywords.as_str(),
            self.tagline.as_str(),
            self.cast.as_str(),
            self.director.as_str(),
        ]
        .join(" ")
    }

    pub fn genre_list(&self) -> Vec<&str> {
        split_list(&self.genres)
    }

    pub fn keyword_list(&self) -> Vec<&str> {
        split_list(&self.keywords)
    }

    pub fn cast_list(&self) -> Vec<&str> {
        split_list(&self.cast)
    }
}

fn split_list(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).filter(|v| !v.is_empty()).collect()
}
