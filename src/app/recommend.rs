use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::core::catalog;
use crate::core::matching::{FuzzyTitleMatcher, TitleMatcher};
use crate::core::recommend::{CategoryIndex, RecommendationList};
use crate::models::{Category, Record};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub preview_count: usize,
    pub max_recommendations: usize,
}

impl SessionOptions {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            preview_count: config.recommend.preview_count,
            max_recommendations: config.recommend.max_recommendations,
        }
    }
}

/// Answers supplied up front (CLI flags); missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub category: Option<String>,
    pub title: Option<String>,
}

/// Load the catalog and run one interactive session on stdin/stdout.
pub fn run(input_path: &Path, preset: &Preset, config: &crate::config::Config) -> crate::utils::RecommendarrResult<()> {
    let records = catalog::read_records(input_path)?;
    let matcher = FuzzyTitleMatcher::from_config(&config.matcher);
    let options = SessionOptions::from_config(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&records, &matcher, &options, preset, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// One recommendation session. Early stops (empty category, no match, end of
/// input) print their message and return `Ok`.
pub fn run_session<R: BufRead, W: Write>(
    records: &[Record],
    matcher: &dyn TitleMatcher,
    options: &SessionOptions,
    preset: &Preset,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some((category, label)) = resolve_category(preset.category.as_deref(), input, out)? else {
        tracing::debug!("Input closed before a category was chosen");
        return Ok(());
    };

    let index = match CategoryIndex::build(records, category, &label) {
        Ok(index) => index,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    writeln!(out, "\nHere are a few titles in the selected category:")?;
    for (i, title) in index.preview(options.preview_count).iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, title)?;
    }

    let query = match preset.title.as_deref() {
        Some(t) => t.trim().to_string(),
        None => {
            let prompt_text = "\nEnter your favorite title (from the list above or any known title): ";
            match prompt(input, out, prompt_text)? {
                Some(t) => t,
                None => return Ok(()),
            }
        }
    };

    match index.recommend(&query, matcher, options.max_recommendations) {
        Ok(list) => print_recommendations(&list, out),
        Err(e) => writeln!(out, "{e}"),
    }
}

/// Returns the category and the user's spelling of it; `None` on end of input.
fn resolve_category<R: BufRead, W: Write>(
    preset: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(Category, String)>> {
    if let Some(raw) = preset {
        match raw.parse::<Category>() {
            Ok(category) => return Ok(Some((category, raw.trim().to_string()))),
            Err(e) => tracing::warn!("Ignoring --category: {e}"),
        }
    }

    loop {
        let Some(answer) = prompt(input, out, "Enter your preferred content type (Movie/Webseries): ")? else {
            return Ok(None);
        };
        if let Ok(category) = answer.parse::<Category>() {
            return Ok(Some((category, answer)));
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_recommendations<W: Write>(list: &RecommendationList, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nWe matched your input to: {}\n", list.matched_title)?;
    writeln!(out, "Content recommendations for you:\n")?;
    for (i, item) in list.items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item.record.title)?;
        writeln!(out, "   Genres  : {}", item.record.genres)?;
        writeln!(out, "   Cast    : {}", item.record.cast)?;
        writeln!(out, "   Director: {}\n", item.record.director)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn record(title: &str, kind: &str, genres: &str, director: &str) -> Record {
        Record {
            title: title.to_string(),
            kind: kind.to_string(),
            genres: genres.to_string(),
            cast: "Keanu Reeves, Gal Gadot".to_string(),
            director: director.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Record> {
        vec![
            record("The Matrix", "Movie", "Sci-Fi, Action", "Lana Wachowski"),
            record("Dark", "Webseries", "Mystery", "Baran bo Odar"),
            record("Avatar", "Movie", "Sci-Fi, Adventure", "James Cameron"),
            record("Titanic", "Movie", "Romance, Drama", "James Cameron"),
        ]
    }

    fn options() -> SessionOptions {
        SessionOptions { preview_count: 10, max_recommendations: 30 }
    }

    fn session(records: &[Record], preset: &Preset, stdin: &str) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        run_session(records, &FuzzyTitleMatcher::default(), &options(), preset, &mut input, &mut out)
            .expect("session runs");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn reprompts_until_category_is_valid() {
        let out = session(&catalog(), &Preset::default(), "films\n\nMOVIE\nthe matrix\n");

        assert_eq!(out.matches("Enter your preferred content type").count(), 3);
        assert!(out.contains("1. The Matrix\n2. Avatar\n3. Titanic\n"));
        assert!(out.contains("We matched your input to: The Matrix"));
        assert!(out.contains("1. Avatar\n   Genres  : Sci-Fi, Adventure\n"));
        assert!(!out.contains("   Director: Lana Wachowski"));
        assert!(!out.contains("Dark"));
    }

    #[test]
    fn empty_category_prints_message_and_stops() {
        let movies_only: Vec<Record> = catalog().into_iter().filter(|r| r.kind == "Movie").collect();
        let out = session(&movies_only, &Preset::default(), "webseries\n");

        assert!(out.contains("Sorry, no entries found for 'webseries'."));
        assert!(!out.contains("Here are a few titles"));
        assert!(!out.contains("Enter your favorite title"));
    }

    #[test]
    fn unmatched_title_prints_message() {
        let preset = Preset { category: Some("movie".to_string()), title: None };
        let out = session(&catalog(), &preset, "qqqqqqqqqqqqqq\n");

        assert!(!out.contains("Enter your preferred content type"));
        assert!(out.contains("No close match found. Check the spelling and try again."));
        assert!(!out.contains("Content recommendations for you"));
    }

    #[test]
    fn presets_skip_prompts() {
        let preset = Preset { category: Some("Webseries".to_string()), title: Some("dark".to_string()) };
        let out = session(&catalog(), &preset, "");

        assert!(!out.contains("Enter your"));
        assert!(out.contains("We matched your input to: Dark"));
        assert!(!out.contains("1. Dark\n   Genres"));
    }

    #[test]
    fn invalid_preset_category_falls_back_to_prompt() {
        let preset = Preset { category: Some("anime".to_string()), title: None };
        let out = session(&catalog(), &preset, "movie\nAvatar\n");

        assert_eq!(out.matches("Enter your preferred content type").count(), 1);
        assert!(out.contains("We matched your input to: Avatar"));
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let out = session(&catalog(), &Preset::default(), "");
        assert_eq!(out, "Enter your preferred content type (Movie/Webseries): ");

        let out = session(&catalog(), &Preset::default(), "movie\n");
        assert!(out.contains("Here are a few titles"));
        assert!(!out.contains("We matched"));
    }
}
