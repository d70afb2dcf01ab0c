//! Document nodes.
//!
//! Every label of the document vocabulary is a [`Node`] variant carrying its
//! own payload record. Payloads are built once by a tag handler and expose
//! read-only accessors afterwards.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{meta::MetaEntry, signature::Signature, value::Value};

/// A labeled, typed unit of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Node {
    Declaration(Declaration),
    Section(Section),
    Code(Code),
    Example(Example),
    List(List),
    OrderedList(List),
    Literal(Literal),
    Link(Link),
    Ref(Ref),
    Note(Note),
    VersionNote(VersionNote),
    Paragraph(Inline),
    Text(Inline),
    Bold(Inline),
    Italic(Inline),
    SoftBreak(Inline),
    Line(Inline),
    Meta(MetaEntry),
    Raw(Raw),
    Tagged(Tagged),
}

impl Node {
    /// The label this node is known by in the document vocabulary.
    pub fn label(&self) -> &str {
        match self {
            Node::Declaration(_) => "declaration",
            Node::Section(_) => "section",
            Node::Code(_) => "code",
            Node::Example(_) => "example",
            Node::List(_) => "list",
            Node::OrderedList(_) => "ordered-list",
            Node::Literal(_) => "literal",
            Node::Link(_) => "link",
            Node::Ref(_) => "ref",
            Node::Note(_) => "note",
            Node::VersionNote(_) => "version-note",
            Node::Paragraph(_) => "paragraph",
            Node::Text(_) => "text",
            Node::Bold(_) => "bold",
            Node::Italic(_) => "italic",
            Node::SoftBreak(_) => "soft-break",
            Node::Line(_) => "line",
            Node::Meta(_) => "meta",
            Node::Raw(_) => "raw",
            Node::Tagged(tagged) => tagged.label(),
        }
    }

    /// Returns `true` if this node is a metadata marker.
    pub fn is_meta(&self) -> bool {
        matches!(self, Node::Meta(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A documented entity: a function, class, module or any custom kind.
///
/// `meta` starts out empty, or seeded from the parsed signature; the
/// document assembler folds metadata markers found among `children` into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<Signature>,
    meta: IndexMap<String, Value>,
    children: Vec<Value>,
}

impl Declaration {
    pub fn new(kind: impl Into<String>, children: Vec<Value>) -> Self {
        Self {
            kind: kind.into(),
            signature: None,
            meta: IndexMap::new(),
            children,
        }
    }

    /// Attach a parsed signature to this declaration.
    ///
    /// The signature parts are also stored in `meta` under `name`,
    /// `signature` and, for classes with parents, `parents`.
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.meta
            .insert("name".to_string(), Value::from(signature.name()));
        self.meta
            .insert("signature".to_string(), Value::from(signature.signature()));
        if let Some(parents) = signature.parents() {
            self.meta
                .insert("parents".to_string(), Value::from(parents));
        }
        self.signature = Some(signature);
        self
    }

    /// Return a copy of this declaration with one more metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// The declared name, when a signature was parsed.
    pub fn name(&self) -> Option<&str> {
        self.signature.as_ref().map(Signature::name)
    }

    pub fn meta(&self) -> &IndexMap<String, Value> {
        &self.meta
    }

    pub fn children(&self) -> &[Value] {
        &self.children
    }
}

/// A titled grouping of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    title: String,
    meta: IndexMap<String, Value>,
    children: Vec<Value>,
}

impl Section {
    pub fn new(title: impl Into<String>, children: Vec<Value>) -> Self {
        Self {
            title: title.into(),
            meta: IndexMap::new(),
            children,
        }
    }

    /// Return a copy of this section with one more metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta(&self) -> &IndexMap<String, Value> {
        &self.meta
    }

    pub fn children(&self) -> &[Value] {
        &self.children
    }
}

/// A block of source code in a given language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Code {
    language: String,
    code: String,
}

impl Code {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A code block presented as a worked example.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Example {
    language: String,
    code: String,
    line_numbers: bool,
    emphasise_lines: Option<Value>,
    caption: String,
}

impl Example {
    /// Caption used when the markup does not supply one.
    pub const DEFAULT_CAPTION: &'static str = "Example";

    /// Create an example with line numbers on, no emphasis and the default caption.
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            line_numbers: true,
            emphasise_lines: None,
            caption: Self::DEFAULT_CAPTION.to_string(),
        }
    }

    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn with_emphasised_lines(mut self, lines: Value) -> Self {
        self.emphasise_lines = Some(lines);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn emphasised_lines(&self) -> Option<&Value> {
        self.emphasise_lines.as_ref()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Items of a bulleted or ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

/// Text reproduced verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A hyperlink. Both parts may be arbitrary content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    url: Value,
    text: Value,
}

impl Link {
    pub fn new(url: Value, text: Value) -> Self {
        Self { url, text }
    }

    pub fn url(&self) -> &Value {
        &self.url
    }

    pub fn text(&self) -> &Value {
        &self.text
    }
}

/// A named reference to a URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ref {
    id: String,
    url: String,
}

impl Ref {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Flavor of an admonition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Note,
    Warning,
}

/// An admonition block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    kind: NoteKind,
    text: String,
}

impl Note {
    pub fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// What happened to an API in a given version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionKind {
    Added,
    Changed,
    Deprecated,
}

/// A versioned change note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionNote {
    kind: VersionKind,
    version: String,
    text: String,
}

impl VersionNote {
    pub fn new(kind: VersionKind, version: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            version: version.into(),
            text: text.into(),
        }
    }

    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Inline formatting wrapper around arbitrary content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inline {
    value: Value,
}

impl Inline {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Content passed through untouched to renderers of `format`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raw {
    format: String,
    content: String,
}

impl Raw {
    pub fn new(format: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            content: content.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A node with a caller-chosen label, for vocabulary outside the closed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tagged {
    label: String,
    value: Value,
}

impl Tagged {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
