use std::borrow::Cow;
use std::fmt;

use common::Well;
use regex::RegexBuilder;
use tracing::warn;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Project `wells` by site name and search term, preserving order.
///
/// - `site`: when present and non-empty, the well's resolved site name must
///   equal it exactly.
/// - `term`: when present and non-blank, must occur case-insensitively in the
///   well's name or gateway code.
pub fn filter_wells<'a>(
    wells: &'a [Well],
    site: Option<&str>,
    term: Option<&str>,
) -> Vec<&'a Well> {
    let site = site.filter(|s| !s.is_empty());
    let term = term
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    wells
        .iter()
        .filter(|well| site.is_none_or(|site| well.site_name() == site))
        .filter(|well| term.as_deref().is_none_or(|term| matches_term(well, term)))
        .collect()
}

/// `term` must already be lowercased.
fn matches_term(well: &Well, term: &str) -> bool {
    well.name.to_lowercase().contains(term)
        || well.gateway_code_or_empty().to_lowercase().contains(term)
}

/// Wrap every case-insensitive occurrence of `term` in `<mark>` tags.
///
/// `term` is matched literally; characters such as `.` or `(` carry no
/// pattern meaning. The matched text keeps its original casing.
pub fn highlight<'a>(text: &'a str, term: &str) -> Cow<'a, str> {
    if term.is_empty() {
        return Cow::Borrowed(text);
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            warn!(error = %err, "Search term could not be compiled for highlighting");
            return Cow::Borrowed(text);
        }
    };

    pattern.replace_all(text, format!("{MARK_OPEN}$0{MARK_CLOSE}").as_str())
}

/// How many wells a list shows relative to the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCount {
    All(usize),
    None,
    Partial { shown: usize, total: usize },
}

impl ResultCount {
    pub fn of(shown: usize, total: usize) -> Self {
        if shown == total {
            Self::All(total)
        } else if shown == 0 {
            Self::None
        } else {
            Self::Partial { shown, total }
        }
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All(total) => write!(f, "{total} wells"),
            Self::None => f.write_str("No results"),
            Self::Partial { shown, total } => write!(f, "{shown} of {total}"),
        }
    }
}
