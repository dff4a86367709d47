//! Parsers for comment grammars found in properties files.
//!
//! - `info`: placeholder type comments (`# 0: symbol, 1: type`)

pub mod info;
