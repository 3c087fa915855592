//! Submission language resolution
//!
//! Static tables translating editor language tags to judge languages and
//! judge languages to line-comment tokens, plus the fallback language set
//! used when a problem's accepted languages cannot be fetched.

use std::path::Path;

/// Languages offered when the accepted-language fetch fails
pub const DEFAULT_LANGUAGES: [&str; 6] = ["cpp", "python", "java", "c", "git", "verilog"];

/// Editor language tag → judge language identifier
const EDITOR_LANGUAGE_MAP: &[(&str, &str)] = &[
    ("cpp", "cpp"),
    ("c", "c"),
    ("python", "python"),
    ("java", "java"),
    ("verilog", "verilog"),
    ("systemverilog", "verilog"),
    ("plaintext", "git"),
];

/// Judge language identifier → line-comment token for directives
const LANGUAGE_COMMENT_MAP: &[(&str, &str)] = &[
    ("cpp", "//"),
    ("python", "#"),
    ("java", "//"),
    ("c", "//"),
    ("git", "#"),
    ("verilog", "//"),
];

/// File extension → editor language tag
const EXTENSION_TAG_MAP: &[(&str, &str)] = &[
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("c++", "cpp"),
    ("hpp", "cpp"),
    ("hh", "cpp"),
    ("hxx", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("py", "python"),
    ("java", "java"),
    ("v", "verilog"),
    ("vh", "verilog"),
    ("sv", "systemverilog"),
    ("svh", "systemverilog"),
    ("txt", "plaintext"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Map an editor language tag to one of `available` judge languages
///
/// Returns `None` when the tag is unknown or its judge language is not
/// accepted, meaning there is no confident default.
pub fn map_language_id<'a>(editor_tag: &str, available: &'a [String]) -> Option<&'a str> {
    let judge_language = lookup(EDITOR_LANGUAGE_MAP, &editor_tag.to_lowercase())?;
    available
        .iter()
        .find(|lang| lang.as_str() == judge_language)
        .map(String::as_str)
}

/// Line-comment token used when writing a directive for `language`
pub fn comment_token(language: &str) -> Option<&'static str> {
    lookup(LANGUAGE_COMMENT_MAP, language)
}

/// Editor language tag for a source file, derived from its extension
pub fn editor_tag_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    lookup(EXTENSION_TAG_MAP, &ext)
}

/// Accepted languages for a problem
///
/// Distinguishes a list confirmed by the judge from the best-effort default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptedLanguages {
    /// Fetched from the judge
    Confirmed(Vec<String>),
    /// Fetch failed; [`DEFAULT_LANGUAGES`] substituted
    Defaulted(Vec<String>),
}

impl AcceptedLanguages {
    /// The fallback set
    pub fn defaulted() -> Self {
        Self::Defaulted(DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect())
    }

    /// Languages in display order
    pub fn languages(&self) -> &[String] {
        match self {
            Self::Confirmed(langs) | Self::Defaulted(langs) => langs,
        }
    }

    /// Whether this is the fallback set
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}
