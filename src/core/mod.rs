//! Core model: lines, placeholder types, messages and the file index.
//!
//! ## Module Structure
//!
//! - `lines`: line arena with prev/next navigation and line classification
//! - `types`: placeholder argument types
//! - `parsers`: type comment grammar producing [`Info`]
//! - `message`: a single keyed entry and its extent
//! - `message_file`: index of all messages in a file
//! - `stats`: type usage counts across a file

pub mod lines;
pub mod message;
pub mod message_file;
pub mod parsers;
pub mod stats;
pub mod types;

pub use lines::{Line, LineId, LineList};
pub use message::{CommentPolicy, Message};
pub use message_file::{DEFAULT_KEY_PREFIX, MessageFile};
pub use parsers::info::{Info, InfoError, UnknownType, parse_info_comment};
pub use stats::TypeStats;
pub use types::{ArgType, CompoundKind, SimpleType, UnionKind, UnionType};
