use std::ops;

use itertools::Itertools;
use serde::Serialize;
use tree_sitter::Node;

use super::FixError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub range: ops::Range<usize>,
    pub text: String,
}

/// Collects the edits a rule proposes for one violation, in the order the
/// rule makes them.
#[derive(Debug, Default)]
pub struct Fixer {
    edits: Vec<Edit>,
}

impl Fixer {
    pub fn replace_text(&mut self, node: Node, text: impl Into<String>) {
        self.replace_text_range(node.byte_range(), text);
    }

    pub fn replace_text_range(&mut self, range: ops::Range<usize>, text: impl Into<String>) {
        self.edits.push(Edit {
            range,
            text: text.into(),
        });
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

/// A single replacement of `range` with `text`, equivalent to applying a
/// violation's edits all at once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub range: ops::Range<usize>,
    pub text: String,
}

impl Fix {
    pub fn from_edits(mut edits: Vec<Edit>, source_text: &str) -> Result<Self, FixError> {
        if edits.is_empty() {
            return Err(FixError::NoEdits);
        }
        if let Some(edit) = edits
            .iter()
            .find(|edit| !is_valid_range(&edit.range, source_text))
        {
            return Err(FixError::InvalidRange {
                range: edit.range.clone(),
                len: source_text.len(),
            });
        }

        edits.sort_by_key(|edit| edit.range.start);
        if let Some((first, second)) = edits
            .iter()
            .tuple_windows()
            .find(|(first, second)| first.range.end > second.range.start)
        {
            return Err(FixError::OverlappingEdits {
                first: first.range.clone(),
                second: second.range.clone(),
            });
        }

        let start = edits[0].range.start;
        let mut end = start;
        let mut text = String::new();
        for edit in edits {
            text.push_str(&source_text[end..edit.range.start]);
            text.push_str(&edit.text);
            end = edit.range.end;
        }

        Ok(Self {
            range: start..end,
            text,
        })
    }
}

fn is_valid_range(range: &ops::Range<usize>, source_text: &str) -> bool {
    range.start <= range.end
        && range.end <= source_text.len()
        && source_text.is_char_boundary(range.start)
        && source_text.is_char_boundary(range.end)
}

/// Applies non-overlapping fixes in source order. A fix overlapping one
/// already applied is skipped.
pub fn apply_fixes<'a>(source_text: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> String {
    let mut output = String::with_capacity(source_text.len());
    let mut last_end = 0;
    for fix in fixes
        .into_iter()
        .sorted_by_key(|fix| fix.range.start)
    {
        if fix.range.start < last_end || !is_valid_range(&fix.range, source_text) {
            continue;
        }
        output.push_str(&source_text[last_end..fix.range.start]);
        output.push_str(&fix.text);
        last_end = fix.range.end;
    }
    output.push_str(&source_text[last_end..]);
    output
}
