//! Boilerplate template
//!
//! Starter code handed out with an assignment shows up in every submission.
//! Lines whose trimmed text appears in the template are excluded before
//! comparison so shared boilerplate does not read as copying.

use std::collections::HashSet;

/// Trimmed non-empty lines of a template source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    lines: HashSet<String>,
}

/// Template-filtered source
///
/// Excluded lines are blanked rather than removed so line numbers still
/// refer to the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSource {
    pub text: String,
    pub excluded: usize,
}

impl Template {
    /// Build a template from boilerplate source text
    pub fn from_source(source: &str) -> Self {
        let lines = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    /// Whether a line belongs to the template
    pub fn contains(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && self.lines.contains(trimmed)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Blank every template line of `raw`
    pub fn filter(&self, raw: &str) -> FilteredSource {
        if self.is_empty() {
            return FilteredSource {
                text: raw.to_string(),
                excluded: 0,
            };
        }

        let mut excluded = 0;
        let kept: Vec<&str> = raw
            .lines()
            .map(|line| {
                if self.contains(line) {
                    excluded += 1;
                    ""
                } else {
                    line
                }
            })
            .collect();

        FilteredSource {
            text: kept.join("\n"),
            excluded,
        }
    }
}
