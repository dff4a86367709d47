//! Index of the messages in a properties file.
//!
//! Reading builds the full [`LineList`] in one pass and registers a
//! [`Message`] for every line that starts a key under the configured prefix
//! (`compiler.` for a prefix of `compiler`).

use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::core::lines::{Line, LineList};
use crate::core::message::{CommentPolicy, Message};
use crate::core::parsers::info::{Info, InfoError};

pub const DEFAULT_KEY_PREFIX: &str = "compiler";

/// All lines of a file plus its messages, ordered by key.
#[derive(Debug, Clone, Default)]
pub struct MessageFile {
    lines: LineList,
    messages: BTreeMap<String, Message>,
}

impl MessageFile {
    /// Build the index from raw lines.
    ///
    /// A later message with the same key replaces the earlier one.
    pub fn from_lines<I, S>(raw_lines: I, key_prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut file = Self::default();
        let key_start = format!("{}.", key_prefix);

        for raw in raw_lines {
            let text: String = raw.into();
            let key = message_key(&text, &key_start).map(str::to_string);
            let id = file.lines.push(text);
            if let Some(key) = key {
                file.messages.insert(key.clone(), Message::new(key, id));
            }
        }

        file
    }

    pub fn parse(content: &str, key_prefix: &str) -> Self {
        Self::from_lines(content.lines(), key_prefix)
    }

    /// Read from any buffered reader. I/O errors are returned as-is.
    pub fn read<R: BufRead>(reader: R, key_prefix: &str) -> io::Result<Self> {
        let raw_lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::from_lines(raw_lines, key_prefix))
    }

    pub fn open(path: &Path, key_prefix: &str) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open properties file: {:?}", path))?;
        Self::read(BufReader::new(file), key_prefix)
            .with_context(|| format!("Failed to read properties file: {:?}", path))
    }

    pub fn lines(&self) -> &LineList {
        &self.lines
    }

    pub fn get(&self, key: &str) -> Option<&Message> {
        self.messages.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Messages in key order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.messages.keys()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Parsed type comment of a message from this file.
    pub fn info<'a>(&self, message: &'a Message) -> Result<&'a Info, InfoError> {
        message.info(&self.lines)
    }

    /// Lines of a message from this file, in file order.
    pub fn message_lines(&self, message: &Message, policy: CommentPolicy) -> Vec<&Line> {
        message
            .lines(&self.lines, policy)
            .into_iter()
            .map(|id| &self.lines[id])
            .collect()
    }
}

/// Key of a `prefix.name=value` line, trimmed.
fn message_key<'a>(text: &'a str, key_start: &str) -> Option<&'a str> {
    if !text.starts_with(key_start) {
        return None;
    }
    match text.find('=') {
        Some(eq) if eq > 0 => Some(text[..eq].trim()),
        _ => None,
    }
}
