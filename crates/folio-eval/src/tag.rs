//! The closed tag vocabulary.
//!
//! Every tag the markup language understands is a [`Tag`] variant. The
//! variant fixes the tag's markup name and its ordered parameter list;
//! handlers are selected by an exhaustive `match` on the variant.

use std::fmt;

/// A tag of the documentation markup language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    // Generic construction
    Tag,
    Meta,

    // Predicates and operators
    Not,
    IsBoolean,
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,

    // Accessors
    /// Reads the label of a symbol. Exposed as `symbol-name` because the
    /// markup name `name` belongs to the metadata setter [`Tag::Name`].
    SymbolName,
    First,
    Last,
    Nth,

    // Inline content
    Raw,
    Paragraph,
    Text,
    Bold,
    Italic,
    SoftBreak,
    Line,

    // Declarations
    Declaration,
    Section,
    Function,
    Method,
    ClassMethod,
    Class,

    // Blocks
    Code,
    Example,
    List,
    OrderedList,

    // Metadata
    Private,
    Public,
    Name,
    Type,
    Portability,
    Synopsis,
    Platform,
    Returns,
    Signature,
    Stability,
    Throws,

    // Text blocks
    Literal,
    Link,
    Ref,
    Note,
    Warning,
    VersionAdded,
    VersionChanged,
    Deprecated,
}

impl Tag {
    /// Every tag, in vocabulary order.
    pub const ALL: [Tag; 53] = [
        Tag::Tag,
        Tag::Meta,
        Tag::Not,
        Tag::IsBoolean,
        Tag::Add,
        Tag::Subtract,
        Tag::Multiply,
        Tag::Divide,
        Tag::Less,
        Tag::LessEqual,
        Tag::Greater,
        Tag::GreaterEqual,
        Tag::Equal,
        Tag::SymbolName,
        Tag::First,
        Tag::Last,
        Tag::Nth,
        Tag::Raw,
        Tag::Paragraph,
        Tag::Text,
        Tag::Bold,
        Tag::Italic,
        Tag::SoftBreak,
        Tag::Line,
        Tag::Declaration,
        Tag::Section,
        Tag::Function,
        Tag::Method,
        Tag::ClassMethod,
        Tag::Class,
        Tag::Code,
        Tag::Example,
        Tag::List,
        Tag::OrderedList,
        Tag::Private,
        Tag::Public,
        Tag::Name,
        Tag::Type,
        Tag::Portability,
        Tag::Synopsis,
        Tag::Platform,
        Tag::Returns,
        Tag::Signature,
        Tag::Stability,
        Tag::Throws,
        Tag::Literal,
        Tag::Link,
        Tag::Ref,
        Tag::Note,
        Tag::Warning,
        Tag::VersionAdded,
        Tag::VersionChanged,
        Tag::Deprecated,
    ];

    /// Resolve a markup tag name.
    pub fn from_name(name: &str) -> Option<Tag> {
        let tag = match name {
            "tag" => Tag::Tag,
            "meta" => Tag::Meta,
            "not" => Tag::Not,
            "boolean?" => Tag::IsBoolean,
            "+" => Tag::Add,
            "-" => Tag::Subtract,
            "*" => Tag::Multiply,
            "/" => Tag::Divide,
            "<" => Tag::Less,
            "<=" => Tag::LessEqual,
            ">" => Tag::Greater,
            ">=" => Tag::GreaterEqual,
            "=" => Tag::Equal,
            "symbol-name" => Tag::SymbolName,
            "first" => Tag::First,
            "last" => Tag::Last,
            "nth" => Tag::Nth,
            "raw" => Tag::Raw,
            "paragraph" => Tag::Paragraph,
            "text" => Tag::Text,
            "bold" => Tag::Bold,
            "italic" => Tag::Italic,
            "soft-break" => Tag::SoftBreak,
            "line" => Tag::Line,
            "declaration" => Tag::Declaration,
            "section" => Tag::Section,
            "function" => Tag::Function,
            "method" => Tag::Method,
            "classmethod" => Tag::ClassMethod,
            "class" => Tag::Class,
            "code" => Tag::Code,
            "example" => Tag::Example,
            "list" => Tag::List,
            "ordered-list" => Tag::OrderedList,
            "private" => Tag::Private,
            "public" => Tag::Public,
            "name" => Tag::Name,
            "type" => Tag::Type,
            "portability" => Tag::Portability,
            "synopsis" => Tag::Synopsis,
            "platform" => Tag::Platform,
            "returns" => Tag::Returns,
            "signature" => Tag::Signature,
            "stability" => Tag::Stability,
            "throws" => Tag::Throws,
            "literal" => Tag::Literal,
            "link" => Tag::Link,
            "ref" => Tag::Ref,
            "note" => Tag::Note,
            "warning" => Tag::Warning,
            "version-added" => Tag::VersionAdded,
            "version-changed" => Tag::VersionChanged,
            "deprecated" => Tag::Deprecated,
            _ => return None,
        };
        Some(tag)
    }

    /// The markup name of this tag.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Tag => "tag",
            Tag::Meta => "meta",
            Tag::Not => "not",
            Tag::IsBoolean => "boolean?",
            Tag::Add => "+",
            Tag::Subtract => "-",
            Tag::Multiply => "*",
            Tag::Divide => "/",
            Tag::Less => "<",
            Tag::LessEqual => "<=",
            Tag::Greater => ">",
            Tag::GreaterEqual => ">=",
            Tag::Equal => "=",
            Tag::SymbolName => "symbol-name",
            Tag::First => "first",
            Tag::Last => "last",
            Tag::Nth => "nth",
            Tag::Raw => "raw",
            Tag::Paragraph => "paragraph",
            Tag::Text => "text",
            Tag::Bold => "bold",
            Tag::Italic => "italic",
            Tag::SoftBreak => "soft-break",
            Tag::Line => "line",
            Tag::Declaration => "declaration",
            Tag::Section => "section",
            Tag::Function => "function",
            Tag::Method => "method",
            Tag::ClassMethod => "classmethod",
            Tag::Class => "class",
            Tag::Code => "code",
            Tag::Example => "example",
            Tag::List => "list",
            Tag::OrderedList => "ordered-list",
            Tag::Private => "private",
            Tag::Public => "public",
            Tag::Name => "name",
            Tag::Type => "type",
            Tag::Portability => "portability",
            Tag::Synopsis => "synopsis",
            Tag::Platform => "platform",
            Tag::Returns => "returns",
            Tag::Signature => "signature",
            Tag::Stability => "stability",
            Tag::Throws => "throws",
            Tag::Literal => "literal",
            Tag::Link => "link",
            Tag::Ref => "ref",
            Tag::Note => "note",
            Tag::Warning => "warning",
            Tag::VersionAdded => "version-added",
            Tag::VersionChanged => "version-changed",
            Tag::Deprecated => "deprecated",
        }
    }

    /// The ordered parameter names arguments are bound to.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Tag::Tag => &["tag", "value"],
            Tag::Meta => &["key", "value"],
            Tag::Not | Tag::IsBoolean | Tag::SymbolName | Tag::First | Tag::Last => &["value"],
            Tag::Add
            | Tag::Subtract
            | Tag::Multiply
            | Tag::Divide
            | Tag::Less
            | Tag::LessEqual
            | Tag::Greater
            | Tag::GreaterEqual
            | Tag::Equal => &["left", "right"],
            Tag::Nth => &["value", "index"],
            Tag::Raw => &["format", "block"],
            Tag::Paragraph | Tag::Text | Tag::Bold | Tag::Italic | Tag::SoftBreak | Tag::Line => {
                &["value"]
            }
            Tag::Declaration => &["kind", "children"],
            Tag::Section => &["title", "children"],
            Tag::Function | Tag::Method | Tag::ClassMethod | Tag::Class => {
                &["signature", "children"]
            }
            Tag::Code => &["language", "block"],
            Tag::Example => &[
                "language",
                "block",
                "line-numbers",
                "emphasise-lines",
                "caption",
            ],
            Tag::List | Tag::OrderedList => &["items"],
            Tag::Private | Tag::Public => &[],
            Tag::Name
            | Tag::Type
            | Tag::Portability
            | Tag::Synopsis
            | Tag::Platform
            | Tag::Returns
            | Tag::Signature
            | Tag::Stability
            | Tag::Literal
            | Tag::Note
            | Tag::Warning => &["block"],
            Tag::Throws => &["name", "block"],
            Tag::Link => &["text", "url"],
            Tag::Ref => &["id", "block"],
            Tag::VersionAdded | Tag::VersionChanged | Tag::Deprecated => &["version", "block"],
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}
