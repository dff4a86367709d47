//! Messages anchored in a [`LineList`].
//!
//! A [`Message`] only records its key and the line the key starts on. Its type
//! comment, value, placeholders and printable extent are all recovered from the
//! surrounding lines on demand.

use std::{cell::OnceCell, collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::core::lines::{LineId, LineList};
use crate::core::parsers::info::{Info, InfoError, parse_info_comment};

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([0-9]+)\}").unwrap());

/// Which comment lines before a message belong to its extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Only a type comment directly above the key line.
    ///
    /// No trailing empty line is taken, so the extent is just the comment,
    /// the key line and its continuations.
    #[default]
    InfoCommentOnly,
    /// Every blank or comment line back to the previous entry, minus leading
    /// empty lines, plus one trailing empty line.
    AllPrecedingComments,
}

impl CommentPolicy {
    pub fn from_include_all(include_all_preceding_comments: bool) -> Self {
        if include_all_preceding_comments {
            CommentPolicy::AllPrecedingComments
        } else {
            CommentPolicy::InfoCommentOnly
        }
    }
}

/// A keyed entry starting at `first_line`.
#[derive(Debug, Clone)]
pub struct Message {
    key: String,
    first_line: LineId,
    info: OnceCell<Info>,
}

impl Message {
    pub fn new(key: impl Into<String>, first_line: LineId) -> Self {
        Self {
            key: key.into(),
            first_line,
            info: OnceCell::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn first_line(&self) -> LineId {
        self.first_line
    }

    /// The type comment directly above the key line, if there is one.
    pub fn info_comment<'a>(&self, lines: &'a LineList) -> Option<&'a str> {
        let prev = lines[self.first_line].prev()?;
        let line = &lines[prev];
        line.is_info_comment().then(|| line.text())
    }

    /// Parsed type comment, computed on first access and cached.
    ///
    /// A message without a type comment gets [`Info::empty`].
    pub fn info(&self, lines: &LineList) -> Result<&Info, InfoError> {
        if let Some(info) = self.info.get() {
            return Ok(info);
        }
        let info = parse_info_comment(self.info_comment(lines))?;
        Ok(self.info.get_or_init(|| info))
    }

    /// Lines making up this message, in file order.
    ///
    /// The extent starts with the preceding comment lines selected by
    /// `policy`, then the key line and any continuation lines.
    /// [`CommentPolicy::AllPrecedingComments`] also takes one trailing empty line.
    pub fn lines(&self, lines: &LineList, policy: CommentPolicy) -> Vec<LineId> {
        let start = self.extent_start(lines, policy);
        let mut result = Vec::new();

        let mut current = start;
        while current != self.first_line {
            result.push(current);
            match lines[current].next() {
                Some(next) => current = next,
                None => break,
            }
        }

        let last = self.push_value_lines(lines, &mut result);

        if policy == CommentPolicy::AllPrecedingComments
            && let Some(next) = lines[last].next()
            && lines[next].is_blank()
        {
            result.push(next);
        }

        result
    }

    fn extent_start(&self, lines: &LineList, policy: CommentPolicy) -> LineId {
        let mut start = self.first_line;
        match policy {
            CommentPolicy::InfoCommentOnly => {
                if let Some(prev) = lines[start].prev()
                    && lines[prev].is_info_comment()
                {
                    start = prev;
                }
            }
            CommentPolicy::AllPrecedingComments => {
                // Back to the end of the previous entry.
                while let Some(prev) = lines[start].prev()
                    && lines[prev].is_blank_or_comment()
                {
                    start = prev;
                }
                while start != self.first_line && lines[start].is_blank() {
                    match lines[start].next() {
                        Some(next) => start = next,
                        None => break,
                    }
                }
            }
        }
        start
    }

    /// Push the key line and its continuation lines. Returns the last one.
    fn push_value_lines(&self, lines: &LineList, result: &mut Vec<LineId>) -> LineId {
        let mut current = self.first_line;
        loop {
            result.push(current);
            if !lines[current].has_continuation() {
                return current;
            }
            match lines[current].next() {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    /// Placeholder indices (`{0}`, `{1}`, ...) used in the value, sorted.
    pub fn placeholders(&self, lines: &LineList) -> BTreeSet<usize> {
        let mut value_lines = Vec::new();
        self.push_value_lines(lines, &mut value_lines);

        value_lines
            .into_iter()
            .flat_map(|id| {
                PLACEHOLDER_REGEX
                    .captures_iter(lines[id].text())
                    .filter_map(|caps| caps[1].parse::<usize>().ok())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// The logical value: text after `=`, with continuation lines joined.
    pub fn value(&self, lines: &LineList) -> String {
        let mut value_lines = Vec::new();
        self.push_value_lines(lines, &mut value_lines);

        let mut value = String::new();
        for (i, id) in value_lines.into_iter().enumerate() {
            let line = &lines[id];
            let text = if i == 0 {
                line.text()
                    .split_once('=')
                    .map(|(_, v)| v.trim_start())
                    .unwrap_or_default()
            } else {
                line.text().trim_start()
            };
            let text = if line.has_continuation() {
                text.strip_suffix('\\').unwrap_or(text)
            } else {
                text
            };
            value.push_str(text);
        }
        value
    }
}
