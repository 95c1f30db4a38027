//! Wildcard experiment-name patterns.

use regex::Regex;

/// Translate a `*`/`?` wildcard into a regular expression.
///
/// Everything except the two wildcards is matched literally. A leading `*`
/// anchors the expression at the start with `^`.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    if pattern.starts_with('*') {
        out.push('^');
    }
    let mut literal = String::new();
    for c in pattern.chars() {
        match c {
            '*' | '?' => {
                out.push_str(&regex::escape(&literal));
                literal.clear();
                out.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    out.push_str(&regex::escape(&literal));
    out
}

/// A compiled wildcard pattern matched against whole experiment names.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", wildcard_to_regex(pattern)))?;
        Ok(Self { source: pattern.to_string(), regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Compile every space-separated pattern in `experiment_name`.
pub fn compile_all(experiment_name: &str) -> Result<Vec<WildcardPattern>, regex::Error> {
    experiment_name.split(' ').filter(|p| !p.is_empty()).map(WildcardPattern::new).collect()
}
