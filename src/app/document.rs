//! The text document shown by the pager.
//!
//! One element per Markdown-style heading (`#` through `######` followed by a
//! space, outside fenced code blocks).  Each heading gets a GitHub-style slug
//! id so it can be addressed as `#getting-started`.
//!
//! Supported selectors:
//!
//! | selector        | matches                                  |
//! |-----------------|------------------------------------------|
//! | `#slug`         | heading with that id                     |
//! | `h1` .. `h6`    | first heading of that level              |
//! | `line:N`        | line `N` (1-based), if the document has it |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `#`, 6 for `######`.
    pub level: u8,
    /// Unique slug, without the leading `#`.
    pub id: String,
    pub title: String,
    /// 0-based line index.
    pub line: usize,
}

/// Something a selector can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Index into [`Document::headings`].
    Heading(usize),
    /// 0-based line index.
    Line(usize),
}

#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    lines: Vec<String>,
    headings: Vec<Heading>,
}

const SAMPLE: &str = "\
# Glide

A pager that scrolls the way a browser page does: wheel input glides toward
where you are heading, and jumps ease out instead of snapping.

## Keys

- j / k, arrows, mouse wheel: nudge the wheel target
- space / PgDn, b / PgUp: eased page jump
- g / Home, G / End: eased jump to top or bottom
- n / N: next or previous heading
- s: toggle wheel smoothing
- q: quit

## Eased jumps

Every jump starts from wherever the page currently sits.  Pressing a jump key
again mid-flight cancels the running animation and starts a new one, so the
last key always wins.

The curve is quartic ease-out by default: fast out of the gate, then a long
deceleration into the target.  Try `--easing linear` to compare.

## Wheel smoothing

Each wheel notch moves a target.  Every frame the view covers a tenth of the
remaining distance, and it stops asking for frames once it is within half a
row of the target.

The target never leaves the scrollable range, no matter how hard you spin
the wheel.

## Selectors

Start the pager with `--goto` to jump somewhere on launch:

```
glide README.md --goto '#installation'
glide notes.md --goto h2
glide log.txt --goto line:400
```

A selector that matches nothing is ignored.

## Configuration

Settings live in `~/.config/glide/config.toml`.  Run `glide --print-config`
to see every key with its current value.
";

impl Document {
    /// Parse `text` into lines and headings.
    pub fn parse(title: impl Into<String>, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        let mut headings = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut in_fence = false;

        for (line_no, line) in lines.iter().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }
            let Some((level, title)) = parse_heading(line) else {
                continue;
            };

            let base = slugify(title);
            let count = seen.entry(base.clone()).or_insert(0);
            let id = if *count == 0 {
                base
            } else {
                format!("{base}-{count}")
            };
            *count += 1;

            headings.push(Heading {
                level,
                id,
                title: title.to_string(),
                line: line_no,
            });
        }

        Self {
            title: title.into(),
            lines,
            headings,
        }
    }

    /// Read a UTF-8 text file.  Invalid sequences are replaced.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::parse(title, &text))
    }

    /// Built-in help document shown when no file is given.
    pub fn sample() -> Self {
        Self::parse("glide", SAMPLE)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Resolve a selector to an anchor.  See the module docs for the syntax.
    pub fn query(&self, selector: &str) -> Option<Anchor> {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            return self
                .headings
                .iter()
                .position(|h| h.id == id)
                .map(Anchor::Heading);
        }
        if let Some(n) = selector.strip_prefix("line:") {
            let n: usize = n.trim().parse().ok()?;
            return (n >= 1 && n <= self.lines.len()).then(|| Anchor::Line(n - 1));
        }
        let level = selector
            .strip_prefix(['h', 'H'])
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|l| (1..=6).contains(l))?;
        self.headings
            .iter()
            .position(|h| h.level == level)
            .map(Anchor::Heading)
    }

    /// Line an anchor points at, if it is still inside the document.
    pub fn anchor_line(&self, anchor: Anchor) -> Option<usize> {
        match anchor {
            Anchor::Heading(i) => self.headings.get(i).map(|h| h.line),
            Anchor::Line(n) => (n < self.lines.len()).then_some(n),
        }
    }

    /// Last heading at or above `line`.
    pub fn heading_at(&self, line: usize) -> Option<&Heading> {
        self.headings.iter().rev().find(|h| h.line <= line)
    }

    /// First heading strictly below `line`.
    pub fn next_heading(&self, line: usize) -> Option<usize> {
        self.headings.iter().position(|h| h.line > line)
    }

    /// Last heading strictly above `line`.
    pub fn prev_heading(&self, line: usize) -> Option<usize> {
        self.headings.iter().rposition(|h| h.line < line)
    }
}

/// `"## Title"` → `(2, "Title")`.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    let title = rest.trim().trim_end_matches('#').trim_end();
    if title.is_empty() {
        return None;
    }
    Some((hashes as u8, title))
}

/// GitHub-style anchor slug: lower-case, spaces become `-`, punctuation other
/// than `-` and `_` is dropped.
fn slugify(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                Some(c.to_lowercase().next().unwrap_or(c))
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}
