//! Line model for properties files.
//!
//! Every physical line of a file lives in a [`LineList`] arena and is addressed
//! by a stable [`LineId`]. Each [`Line`] keeps `prev`/`next` links as optional
//! ids, so neighbour lookup and insertion are O(1) and never invalidate ids
//! handed out earlier.

use std::{collections::HashMap, ops::Index, sync::LazyLock};

use regex::Regex;

/// Matches blank lines and `#` comment lines.
static BLANK_OR_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#.*)?$").unwrap());

/// A single placeholder type description, with an optional `(note)` suffix.
const TYPE_DESC_PATTERN: &str = r"[-'A-Za-z. ]+( \([-A-Za-z 0-9]+\))?";

/// Matches `# 0: <type-desc>, 1: <type-desc>, ...`.
static INFO_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^# ([0-9]+: {desc}, )*[0-9]+: {desc}$",
        desc = TYPE_DESC_PATTERN
    ))
    .unwrap()
});

/// Classification of a line's text.
///
/// Every info comment is also a blank-or-comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub blank_or_comment: bool,
    pub info_comment: bool,
}

/// Classify a line of text.
pub fn classify(text: &str) -> LineClass {
    LineClass {
        blank_or_comment: is_blank_or_comment(text),
        info_comment: is_info_comment(text),
    }
}

pub fn is_blank_or_comment(text: &str) -> bool {
    BLANK_OR_COMMENT_REGEX.is_match(text)
}

pub fn is_info_comment(text: &str) -> bool {
    INFO_COMMENT_REGEX.is_match(text)
}

/// Stable handle to a [`Line`] inside the [`LineList`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(usize);

/// One physical line plus its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    prev: Option<LineId>,
    next: Option<LineId>,
}

impl Line {
    fn new(text: String) -> Self {
        Self {
            text,
            prev: None,
            next: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn prev(&self) -> Option<LineId> {
        self.prev
    }

    pub fn next(&self) -> Option<LineId> {
        self.next
    }

    /// True for a strictly empty line (no whitespace either).
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_blank_or_comment(&self) -> bool {
        is_blank_or_comment(&self.text)
    }

    pub fn is_info_comment(&self) -> bool {
        is_info_comment(&self.text)
    }

    /// True if the value carries on to the next line (trailing `\`).
    ///
    /// The last line of a file never has a continuation.
    pub fn has_continuation(&self) -> bool {
        self.next.is_some() && self.text.ends_with('\\')
    }
}

/// Arena of lines forming a doubly linked sequence.
#[derive(Debug, Clone, Default)]
pub struct LineList {
    lines: Vec<Line>,
    head: Option<LineId>,
    tail: Option<LineId>,
}

impl LineList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the end of the sequence.
    ///
    /// The first call creates the head line.
    pub fn push(&mut self, text: impl Into<String>) -> LineId {
        match self.tail {
            Some(tail) => self.insert_after(tail, text),
            None => {
                let id = self.alloc(text.into());
                self.head = Some(id);
                self.tail = Some(id);
                id
            }
        }
    }

    /// Insert a new line directly after `after` and return it.
    pub fn insert_after(&mut self, after: LineId, text: impl Into<String>) -> LineId {
        let id = self.alloc(text.into());
        let next = self.lines[after.0].next;

        self.lines[id.0].prev = Some(after);
        self.lines[id.0].next = next;
        match next {
            Some(next) => self.lines[next.0].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.lines[after.0].next = Some(id);

        id
    }

    /// Insert a new line directly before `before` and return it.
    pub fn insert_before(&mut self, before: LineId, text: impl Into<String>) -> LineId {
        let id = self.alloc(text.into());
        let prev = self.lines[before.0].prev;

        self.lines[id.0].next = Some(before);
        self.lines[id.0].prev = prev;
        match prev {
            Some(prev) => self.lines[prev.0].next = Some(id),
            None => self.head = Some(id),
        }
        self.lines[before.0].prev = Some(id);

        id
    }

    fn alloc(&mut self, text: String) -> LineId {
        let id = LineId(self.lines.len());
        self.lines.push(Line::new(text));
        id
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn head(&self) -> Option<LineId> {
        self.head
    }

    pub fn tail(&self) -> Option<LineId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines in file order, following `next` links from the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Iterate lines in reverse file order, following `prev` links from the tail.
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            list: self,
            current: self.tail,
        }
    }

    /// 1-based position of a line in file order.
    pub fn line_number(&self, id: LineId) -> usize {
        let mut number = 1;
        let mut current = self[id].prev;
        while let Some(prev) = current {
            number += 1;
            current = self[prev].prev;
        }
        number
    }

    /// 1-based positions of every line, built in one pass.
    ///
    /// Use this over [`LineList::line_number`] when numbering many lines.
    pub fn line_numbers(&self) -> HashMap<LineId, usize> {
        self.iter()
            .enumerate()
            .map(|(index, (id, _))| (id, index + 1))
            .collect()
    }
}

impl Index<LineId> for LineList {
    type Output = Line;

    fn index(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }
}

pub struct Iter<'a> {
    list: &'a LineList,
    current: Option<LineId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let list: &'a LineList = self.list;
        let line = &list[id];
        self.current = line.next;
        Some((id, line))
    }
}

pub struct IterRev<'a> {
    list: &'a LineList,
    current: Option<LineId>,
}

impl<'a> Iterator for IterRev<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let list: &'a LineList = self.list;
        let line = &list[id];
        self.current = line.prev;
        Some((id, line))
    }
}
