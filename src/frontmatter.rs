/*!
 * Flat frontmatter handling for documentation files.
 *
 * Only the subset of YAML that documentation headers actually use is
 * understood: one `key: value` pair per line, no nesting, no multi-line
 * values. Anything more structured is read as an opaque string.
 */

use regex::Regex;
use std::sync::LazyLock;

/// Leading `---` block, lazily matched up to the first closing delimiter.
/// The block may be empty; blank lines after the closing delimiter stay in the body.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*\r?\n")
        .expect("frontmatter regex is valid")
});

/// Ordered flat key-value metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, replacing the value in place if the key is already present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as a delimited block with every value wrapped in double quotes.
    ///
    /// Values are written verbatim. Splitting strips exactly one layer of
    /// matching quotes, so a rendered block reads back to the same values.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(": \"");
            out.push_str(value);
            out.push_str("\"\n");
        }
        out.push_str("---\n");
        out
    }
}

/// A document split into its metadata and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SplitDocument {
    /// True when there is neither metadata nor any non-whitespace body
    pub fn is_blank(&self) -> bool {
        self.frontmatter.is_empty() && self.body.trim().is_empty()
    }

    /// Rebuild the document text. The delimited block is always written,
    /// even when it holds no keys.
    pub fn assemble(&self) -> String {
        let mut out = self.frontmatter.render();
        out.push_str(&self.body);
        out
    }
}

/// Split raw document text into frontmatter and body.
///
/// Without a leading block, the mapping is empty and the body is the whole
/// text. Lines inside the block that have no colon are ignored.
pub fn split(content: &str) -> SplitDocument {
    let Some(captures) = FRONTMATTER_RE.captures(content) else {
        return SplitDocument {
            frontmatter: Frontmatter::new(),
            body: content.to_string(),
        };
    };

    // The block group is absent for an empty `---\n---\n` header
    let whole = captures.get(0).map_or(0, |m| m.end());
    let block = captures.get(1).map_or("", |m| m.as_str());

    let mut frontmatter = Frontmatter::new();
    for line in block.split('\n') {
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim(), strip_quotes(value.trim()));
        }
    }

    SplitDocument {
        frontmatter,
        body: content[whole..].to_string(),
    }
}

/// Remove one layer of matching single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
