//! Proptypes - placeholder type comments in diagnostic properties files
//!
//! Proptypes indexes the messages of a line-oriented properties file and reads
//! the comment above each message that lists the type of every `{N}`
//! placeholder in its value:
//!
//! ```text
//! # 0: symbol, 1: type
//! compiler.err.cant.apply.symbol=\
//!     {0} cannot be applied to {1}
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Line model, type grammar, messages and the file index

pub mod cli;
pub mod config;
pub mod core;
