/// Include directive recognition.
///
/// The recogniser is deliberately strict: a line must start with
/// `#include`, at least one whitespace character, then a target enclosed in
/// a matching pair of delimiters. Anything else (leading whitespace, no space
/// after the keyword, a missing or mismatched closing delimiter, an empty
/// target) is not a directive.
/// Missing a directive is preferred over mis-reading one.
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Which delimiter pair enclosed the include target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteKind {
    /// `#include "target"` — resolved next to the including file and followed.
    Quoted,
    /// `#include <target>` — system/library header, reported but never followed.
    AngleBracket,
}

impl QuoteKind {
    /// Short label used by the structured renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quoted => "quoted",
            Self::AngleBracket => "angle_bracket",
        }
    }
}

/// A recognised `#include` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeDirective {
    /// The full line as read from the file (terminator stripped).
    pub raw_line: String,
    /// Text between the delimiters.
    pub target: String,
    pub quote_kind: QuoteKind,
}

impl IncludeDirective {
    /// `true` if the traversal should follow this directive.
    #[inline]
    pub fn is_followable(&self) -> bool {
        self.quote_kind == QuoteKind::Quoted
    }
}

fn include_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^#include\s+(?:"([^"]+)"|<([^>]+)>)"#).expect("include pattern is valid")
    })
}

/// Recognise an include directive on a single line.
///
/// Returns `None` for every line that is not a well-formed directive.
pub fn scan_line(line: &str) -> Option<IncludeDirective> {
    let caps = include_pattern().captures(line)?;
    let (target, quote_kind) = match (caps.get(1), caps.get(2)) {
        (Some(m), _) => (m.as_str(), QuoteKind::Quoted),
        (None, Some(m)) => (m.as_str(), QuoteKind::AngleBracket),
        (None, None) => return None,
    };
    Some(IncludeDirective {
        raw_line: line.to_string(),
        target: target.to_string(),
        quote_kind,
    })
}
