//! Placeholder argument types.
//!
//! A type comment such as `# 0: list of symbol, 1: message segment` describes
//! one [`ArgType`] per placeholder. The model is a closed sum type:
//!
//! - [`ArgType::Simple`]: one of the predefined [`SimpleType`] keywords
//! - [`ArgType::Custom`]: free text written as `'label'`, for exploratory comments only
//! - [`ArgType::Compound`]: `collection of`, `list of` or `set of` an element type
//! - [`ArgType::Union`]: a predefined [`UnionKind`] or an explicit `a or b` alternation

use std::fmt;

/// Predefined simple argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimpleType {
    Annotation,
    Boolean,
    Collection,
    Diagnostic,
    File,
    FileObject,
    Flag,
    Fragment,
    KindName,
    List,
    Long,
    Modifier,
    Name,
    Number,
    Object,
    OptionName,
    Path,
    Set,
    Source,
    SourceVersion,
    String,
    Symbol,
    SymbolKind,
    Target,
    Token,
    TreeTag,
    Type,
    Url,
    Unused,
    /// Sentinel for text that matched nothing.
    Unknown,
}

impl SimpleType {
    /// All simple types in declaration order (the order used for matching).
    pub const ALL: &'static [SimpleType] = &[
        SimpleType::Annotation,
        SimpleType::Boolean,
        SimpleType::Collection,
        SimpleType::Diagnostic,
        SimpleType::File,
        SimpleType::FileObject,
        SimpleType::Flag,
        SimpleType::Fragment,
        SimpleType::KindName,
        SimpleType::List,
        SimpleType::Long,
        SimpleType::Modifier,
        SimpleType::Name,
        SimpleType::Number,
        SimpleType::Object,
        SimpleType::OptionName,
        SimpleType::Path,
        SimpleType::Set,
        SimpleType::Source,
        SimpleType::SourceVersion,
        SimpleType::String,
        SimpleType::Symbol,
        SimpleType::SymbolKind,
        SimpleType::Target,
        SimpleType::Token,
        SimpleType::TreeTag,
        SimpleType::Type,
        SimpleType::Url,
        SimpleType::Unused,
        SimpleType::Unknown,
    ];

    /// The keyword written in type comments.
    pub fn kind_name(self) -> &'static str {
        match self {
            SimpleType::Annotation => "annotation",
            SimpleType::Boolean => "boolean",
            SimpleType::Collection => "collection",
            SimpleType::Diagnostic => "diagnostic",
            SimpleType::File => "file",
            SimpleType::FileObject => "file object",
            SimpleType::Flag => "flag",
            SimpleType::Fragment => "fragment",
            SimpleType::KindName => "kind name",
            SimpleType::List => "list",
            SimpleType::Long => "long",
            SimpleType::Modifier => "modifier",
            SimpleType::Name => "name",
            SimpleType::Number => "number",
            SimpleType::Object => "object",
            SimpleType::OptionName => "option name",
            SimpleType::Path => "path",
            SimpleType::Set => "set",
            SimpleType::Source => "source",
            SimpleType::SourceVersion => "source version",
            SimpleType::String => "string",
            SimpleType::Symbol => "symbol",
            SimpleType::SymbolKind => "symbol kind",
            SimpleType::Target => "target",
            SimpleType::Token => "token",
            SimpleType::TreeTag => "tree tag",
            SimpleType::Type => "type",
            SimpleType::Url => "url",
            SimpleType::Unused => "unused",
            SimpleType::Unknown => "<unknown>",
        }
    }

    /// Name of the value a caller is expected to pass for this placeholder.
    pub fn implementation_hint(self) -> &'static str {
        match self {
            SimpleType::Annotation => "Annotation",
            SimpleType::Boolean => "boolean",
            SimpleType::Collection => "Collection",
            SimpleType::Diagnostic => "Diagnostic",
            SimpleType::File => "File",
            SimpleType::FileObject => "FileObject",
            SimpleType::Flag => "Flag",
            SimpleType::Fragment => "Fragment",
            SimpleType::KindName => "KindName",
            SimpleType::List => "List",
            SimpleType::Long => "long",
            SimpleType::Modifier => "Modifier",
            SimpleType::Name => "Name",
            SimpleType::Number => "int",
            SimpleType::Object => "Object",
            SimpleType::OptionName => "Option",
            SimpleType::Path => "Path",
            SimpleType::Set => "Set",
            SimpleType::Source => "Source",
            SimpleType::SourceVersion => "SourceVersion",
            SimpleType::String => "String",
            SimpleType::Symbol => "Symbol",
            SimpleType::SymbolKind => "SymbolKind",
            SimpleType::Target => "Target",
            SimpleType::Token => "Token",
            SimpleType::TreeTag => "TreeTag",
            SimpleType::Type => "Type",
            SimpleType::Url => "URL",
            SimpleType::Unused => "Void",
            SimpleType::Unknown => "UnknownType",
        }
    }
}

impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

/// Container kinds for compound types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompoundKind {
    Collection,
    List,
    Set,
}

impl CompoundKind {
    pub const ALL: &'static [CompoundKind] =
        &[CompoundKind::Collection, CompoundKind::List, CompoundKind::Set];

    /// The prefix written in type comments, e.g. `list of`.
    pub fn kind_name(self) -> &'static str {
        match self {
            CompoundKind::Collection => "collection of",
            CompoundKind::List => "list of",
            CompoundKind::Set => "set of",
        }
    }

    /// The simple type of the container itself.
    pub fn container(self) -> SimpleType {
        match self {
            CompoundKind::Collection => SimpleType::Collection,
            CompoundKind::List => SimpleType::List,
            CompoundKind::Set => SimpleType::Set,
        }
    }
}

/// Predefined unions with a fixed set of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnionKind {
    /// A nested diagnostic or a diagnostic fragment.
    MessageSegment,
    /// Anything that names a location on disk.
    FileLocation,
}

impl UnionKind {
    pub const ALL: &'static [UnionKind] = &[UnionKind::MessageSegment, UnionKind::FileLocation];

    pub fn kind_name(self) -> &'static str {
        match self {
            UnionKind::MessageSegment => "message segment",
            UnionKind::FileLocation => "file location",
        }
    }

    pub fn choices(self) -> &'static [SimpleType] {
        match self {
            UnionKind::MessageSegment => &[SimpleType::Diagnostic, SimpleType::Fragment],
            UnionKind::FileLocation => &[SimpleType::File, SimpleType::FileObject, SimpleType::Path],
        }
    }
}

/// A union type: either predefined, or an `a or b or c` alternation from the comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnionType {
    Named(UnionKind),
    Or(Vec<ArgType>),
}

impl UnionType {
    pub fn choices(&self) -> Vec<ArgType> {
        match self {
            UnionType::Named(kind) => kind.choices().iter().copied().map(ArgType::Simple).collect(),
            UnionType::Or(alternatives) => alternatives.clone(),
        }
    }
}

/// The type of a single placeholder argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgType {
    Simple(SimpleType),
    Custom(String),
    Compound(CompoundKind, Box<ArgType>),
    Union(UnionType),
}

impl ArgType {
    pub fn unknown() -> Self {
        ArgType::Simple(SimpleType::Unknown)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ArgType::Simple(SimpleType::Unknown))
    }

    /// Build a compound type, e.g. `ArgType::compound(CompoundKind::List, ArgType::Simple(SimpleType::Symbol))`.
    pub fn compound(kind: CompoundKind, element: ArgType) -> Self {
        ArgType::Compound(kind, Box::new(element))
    }

    /// Build an explicit alternation.
    pub fn or(alternatives: Vec<ArgType>) -> Self {
        ArgType::Union(UnionType::Or(alternatives))
    }

    /// The text form used in type comments.
    ///
    /// Parsing this text yields an equal type again, except that custom labels
    /// are written back with their quotes.
    pub fn kind_name(&self) -> String {
        match self {
            ArgType::Simple(simple) => simple.kind_name().to_string(),
            ArgType::Custom(label) => format!("'{}'", label),
            ArgType::Compound(kind, element) => {
                format!("{} {}", kind.kind_name(), element.kind_name())
            }
            ArgType::Union(UnionType::Named(kind)) => kind.kind_name().to_string(),
            ArgType::Union(UnionType::Or(alternatives)) => alternatives
                .iter()
                .map(ArgType::kind_name)
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }

    /// Hint for rendering the expected argument value, e.g. `List<Symbol>`.
    pub fn implementation_hint(&self) -> String {
        match self {
            ArgType::Simple(simple) => simple.implementation_hint().to_string(),
            ArgType::Custom(label) => label.clone(),
            ArgType::Compound(kind, element) => format!(
                "{}<{}>",
                kind.container().implementation_hint(),
                element.implementation_hint()
            ),
            ArgType::Union(union) => union
                .choices()
                .iter()
                .map(ArgType::implementation_hint)
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind_name())
    }
}

impl From<SimpleType> for ArgType {
    fn from(simple: SimpleType) -> Self {
        ArgType::Simple(simple)
    }
}
