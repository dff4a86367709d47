use std::collections::BTreeMap;

use crate::core::parsers::info::Info;
use crate::core::types::{ArgType, UnionType};

/// Number of uses of each type kind name.
///
/// Compound types count both the container (`list of`) and the element type.
/// Alternations count each alternative. Custom types are counted under
/// their quoted label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeStats {
    counts: BTreeMap<String, usize>,
}

impl TypeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_info(&mut self, info: &Info) {
        for ty in info.types() {
            self.add_type(ty);
        }
    }

    pub fn add_type(&mut self, ty: &ArgType) {
        match ty {
            ArgType::Simple(simple) => self.bump(simple.kind_name()),
            ArgType::Custom(_) => self.bump(&ty.kind_name()),
            ArgType::Compound(kind, element) => {
                self.bump(kind.kind_name());
                self.add_type(element);
            }
            ArgType::Union(UnionType::Named(kind)) => self.bump(kind.kind_name()),
            ArgType::Union(UnionType::Or(alternatives)) => {
                for alternative in alternatives {
                    self.add_type(alternative);
                }
            }
        }
    }

    fn bump(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_default() += 1;
    }

    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Kind names and counts, most used first, ties by name.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
