//! Query-term highlighting.
//!
//! The query is matched literally and case-insensitively. Concatenating the
//! returned segments always gives back the input text.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A run of text, flagged when it matches the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }
}

/// A compiled query, reusable across every product on a page.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Compile the trimmed `query`. A blank query highlights nothing.
    pub fn new(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                tracing::warn!(error = %e, "query not usable for highlighting");
                Self { pattern: None }
            }
        }
    }

    /// Split `text` into alternating matched and unmatched runs.
    ///
    /// Adjacent matches merge into one segment; empty segments never appear
    /// unless `text` itself is empty.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut out: Vec<Segment> = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                out.push(Segment::plain(&text[last..m.start()]));
            }
            match out.last_mut() {
                Some(prev) if prev.is_match && m.start() == last => prev.text.push_str(m.as_str()),
                _ => out.push(Segment {
                    text: m.as_str().to_string(),
                    is_match: true,
                }),
            }
            last = m.end();
        }
        if last < text.len() || out.is_empty() {
            out.push(Segment::plain(&text[last..]));
        }
        out
    }
}

/// Highlight `query` in `text`.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    Highlighter::new(query).segments(text)
}
