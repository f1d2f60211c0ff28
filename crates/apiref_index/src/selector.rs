//! Query normalization and legacy id aliases.

use std::fmt;

/// A normalized resolver query.
///
/// Queries are trimmed, lose one trailing `()`, and compare lowercased.
///
/// # Example
///
/// ```
/// use apiref_index::Selector;
///
/// let selector = Selector::parse("  MyClass.myMethod()  ");
/// assert_eq!(selector.as_str(), "myclass.mymethod");
/// assert_eq!(selector.segments(), vec!["myclass", "mymethod"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    text: String,
}

impl Selector {
    /// Normalizes a raw query.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let trimmed = query.trim();
        let stripped = trimmed.strip_suffix("()").unwrap_or(trimmed).trim_end();
        Self {
            text: stripped.to_lowercase(),
        }
    }

    /// The normalized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing is left after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the query on `.` outside parentheses.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        split_segments(&self.text)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits an id or dotted path on `.` outside parentheses.
#[must_use]
pub fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&text[start..]);
    segments
}

/// Returns the current spelling of a legacy id segment.
///
/// Older ids left out the `,1` overload suffix on methods and constructors,
/// and spelled a function's first overload with the word `function`:
///
/// - `(name:instance)` becomes `(name:instance,1)`, likewise `static` and `constructor`
/// - `(name:function)` becomes `(name:1)`
#[must_use]
pub fn legacy_segment(segment: &str) -> Option<String> {
    let inner = segment.strip_prefix('(')?.strip_suffix(')')?;
    let (name, qualifier) = inner.rsplit_once(':')?;
    match qualifier {
        "instance" | "static" | "constructor" => Some(format!("({name}:{qualifier},1)")),
        "function" => Some(format!("({name}:1)")),
        _ => None,
    }
}
