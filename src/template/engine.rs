// Mon Oct 19 2026 - Alex

use super::substitutions::Substitutions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const KEY_PATTERN: &str = r"[A-Za-z](?:[A-Za-z0-9_]*[A-Za-z0-9])?";

static FILENAME_SCANNER: Lazy<Regex> =
    Lazy::new(|| scanner_for(TokenSyntax::Filename.open(), TokenSyntax::Filename.close()));

static CONTENT_SCANNER: Lazy<Regex> =
    Lazy::new(|| scanner_for(TokenSyntax::Content.open(), TokenSyntax::Content.close()));

fn scanner_for(open: &str, close: &str) -> Regex {
    let pattern = format!("{}({}){}", regex::escape(open), KEY_PATTERN, regex::escape(close));
    Regex::new(&pattern).expect("token scanner pattern is valid")
}

/// The two placeholder forms a template can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSyntax {
    /// `__key__`, used in template filenames.
    Filename,
    /// `/*$key*/`, used in template contents.
    Content,
}

impl TokenSyntax {
    pub fn open(&self) -> &'static str {
        match self {
            TokenSyntax::Filename => "__",
            TokenSyntax::Content => "/*$",
        }
    }

    pub fn close(&self) -> &'static str {
        match self {
            TokenSyntax::Filename => "__",
            TokenSyntax::Content => "*/",
        }
    }

    fn scanner(&self) -> &'static Regex {
        match self {
            TokenSyntax::Filename => &FILENAME_SCANNER,
            TokenSyntax::Content => &CONTENT_SCANNER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Unknown placeholder keys left after substitution, first occurrence order.
    pub unresolved: Vec<String>,
}

impl Rendered {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replaces every token of one syntax in a single pass over the input.
///
/// Values are inserted verbatim, so a value that happens to look like another
/// key's token is never substituted a second time.
pub struct TemplateEngine {
    syntax: TokenSyntax,
    matcher: Option<Regex>,
    variables: Substitutions,
}

impl TemplateEngine {
    pub fn new(syntax: TokenSyntax, variables: &Substitutions) -> Result<Self, regex::Error> {
        let mut keys: Vec<&str> = variables.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let matcher = if keys.is_empty() {
            None
        } else {
            let alternation = keys
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(
                "{}({}){}",
                regex::escape(syntax.open()),
                alternation,
                regex::escape(syntax.close())
            );
            Some(Regex::new(&pattern)?)
        };

        Ok(Self {
            syntax,
            matcher,
            variables: variables.clone(),
        })
    }

    pub fn render_string(&self, input: &str) -> Rendered {
        // Checked against the template itself; substituted values are never scanned.
        let unresolved = Self::scan_unresolved(self.syntax, input)
            .into_iter()
            .filter(|key| !self.variables.contains_key(key))
            .collect();

        let text = match &self.matcher {
            Some(matcher) => matcher
                .replace_all(input, |caps: &Captures| {
                    self.variables.get(&caps[1]).unwrap_or(&caps[0]).to_string()
                })
                .into_owned(),
            None => input.to_string(),
        };

        Rendered { text, unresolved }
    }

    pub fn scan_unresolved(syntax: TokenSyntax, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for caps in syntax.scanner().captures_iter(text) {
            let key = caps[1].to_string();
            if !found.contains(&key) {
                found.push(key);
            }
        }
        found
    }
}
