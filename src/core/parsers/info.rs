//! Parser for placeholder type comments.
//!
//! A type comment precedes a message and lists one type per placeholder:
//!
//! ```text
//! # 0: symbol, 1: list of type, 2: message segment (the detail)
//! compiler.err.foo=...
//! ```
//!
//! Segments are separated by `", "` and the placeholder index is implied by
//! position. The `N:` prefix is only there for readers and is discarded.
//! Within a segment, alternatives are tried in a fixed order:
//! custom (`'label'`), simple, compound (`list of ...`), named union.
//! `a or b` is split first, so an alternation can only appear at the top
//! level of a segment, never as the element of a compound type.

use std::fmt;

use thiserror::Error;

use crate::core::types::{ArgType, CompoundKind, SimpleType, UnionKind, UnionType};

/// Every type comment starts with this prefix.
pub const INFO_COMMENT_PREFIX: &str = "# ";

const SEGMENT_SEPARATOR: &str = ", ";
const INDEX_SEPARATOR: &str = ": ";
const OR_SEPARATOR: &str = " or ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    #[error("malformed type comment \"{text}\": expected it to start with \"# \"")]
    MalformedInfoComment { text: String },
}

/// Type text that matched no known type. Resolved to [`SimpleType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType {
    pub text: String,
}

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized type \"{}\"", self.text)
    }
}

/// Parsed type comment: one type per placeholder, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    types: Vec<ArgType>,
    warnings: Vec<UnknownType>,
}

impl Info {
    /// Info for a message without a type comment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a type comment. `None` yields [`Info::empty`].
    pub fn parse(text: Option<&str>) -> Result<Self, InfoError> {
        parse_info_comment(text)
    }

    pub fn types(&self) -> &[ArgType] {
        &self.types
    }

    /// Type of placeholder `{index}`.
    pub fn get(&self, index: usize) -> Option<&ArgType> {
        self.types.get(index)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Unrecognized type texts found while parsing.
    pub fn warnings(&self) -> &[UnknownType] {
        &self.warnings
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ty) in self.types.iter().enumerate() {
            if index > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write!(f, "{}: {}", index, ty)?;
        }
        Ok(())
    }
}

/// Parse a full type comment (`# 0: symbol, 1: type`).
pub fn parse_info_comment(text: Option<&str>) -> Result<Info, InfoError> {
    let Some(text) = text else {
        return Ok(Info::empty());
    };

    let Some(body) = text.strip_prefix(INFO_COMMENT_PREFIX) else {
        return Err(InfoError::MalformedInfoComment {
            text: text.to_string(),
        });
    };

    let mut info = Info::empty();
    if body.trim().is_empty() {
        return Ok(info);
    }

    for segment in body.split(SEGMENT_SEPARATOR) {
        let ty = parse_type(segment, &mut info.warnings);
        info.types.push(ty);
    }

    Ok(info)
}

/// Parse one segment (`0: symbol or type (some note)`).
pub fn parse_type(segment: &str, warnings: &mut Vec<UnknownType>) -> ArgType {
    // Parenthetical notes are documentation only.
    let segment = match segment.find('(') {
        Some(pos) => &segment[..pos],
        None => segment,
    };

    let desc = match segment.find(INDEX_SEPARATOR) {
        Some(pos) => &segment[pos + INDEX_SEPARATOR.len()..],
        None => segment,
    };

    let alternatives: Vec<&str> = desc.split(OR_SEPARATOR).collect();
    if alternatives.len() == 1 {
        parse_alternative(alternatives[0], warnings)
    } else {
        ArgType::or(
            alternatives
                .into_iter()
                .map(|alt| parse_alternative(alt, warnings))
                .collect(),
        )
    }
}

/// Parse a single alternative. Never fails: unknown text becomes
/// [`SimpleType::Unknown`] and is recorded in `warnings`.
pub fn parse_alternative(text: &str, warnings: &mut Vec<UnknownType>) -> ArgType {
    let text = text.trim();

    if let Some(quoted) = text.strip_prefix('\'') {
        let label = match quoted.find('\'') {
            Some(end) => &quoted[..end],
            None => quoted,
        };
        return ArgType::Custom(label.to_string());
    }

    if let Some(simple) = SimpleType::ALL.iter().find(|t| t.kind_name() == text) {
        return ArgType::Simple(*simple);
    }

    for kind in CompoundKind::ALL {
        if let Some(element) = text
            .strip_prefix(kind.kind_name())
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return ArgType::compound(*kind, parse_alternative(element, warnings));
        }
    }

    if let Some(kind) = UnionKind::ALL
        .iter()
        .find(|kind| text.starts_with(kind.kind_name()))
    {
        return ArgType::Union(UnionType::Named(*kind));
    }

    warnings.push(UnknownType {
        text: text.to_string(),
    });
    ArgType::unknown()
}
