//! Tag handlers.
//!
//! [`apply`] validates bound arguments against the contract of each tag
//! and builds the resulting value. Validation happens here and nowhere
//! else: once a node is constructed its payload is statically typed.

use folio_core::{
    MetaEntry, Node, Stability, Value,
    node::{
        Code, Declaration, Example, Inline, Link, List, Literal, Note, NoteKind, Raw, Ref,
        Section, Tagged, VersionKind, VersionNote,
    },
};

use crate::{
    arguments::Arguments,
    error::{ErrorCode, Result, Violation},
    signature::{parse_class_signature, parse_function_signature},
    tag::Tag,
};

/// Run the handler for `tag` over already bound arguments.
pub(crate) fn apply(tag: Tag, mut args: Arguments) -> Result<Value> {
    let value = match tag {
        Tag::Tag => {
            let label = match args.take("tag")? {
                Value::String(s) | Value::Symbol(s) => s,
                other => other.to_string(),
            };
            let value = args.take("value")?;
            node(Node::Tagged(Tagged::new(label, value)))
        }
        Tag::Meta => {
            let key = args.take("key")?;
            let value = args.take("value")?;
            meta(MetaEntry::Custom { key, value })
        }

        Tag::Not => Value::Bool(args.take("value")?.is_falsy()),
        Tag::IsBoolean => Value::Bool(matches!(args.take("value")?, Value::Bool(_))),
        // `-` is addition in this vocabulary.
        Tag::Add | Tag::Subtract => arithmetic(&mut args, |l, r| l + r)?,
        Tag::Multiply => arithmetic(&mut args, |l, r| l * r)?,
        Tag::Divide => arithmetic(&mut args, |l, r| l / r)?,
        Tag::Less => comparison(&mut args, |l, r| l < r)?,
        Tag::LessEqual => comparison(&mut args, |l, r| l <= r)?,
        Tag::Greater => comparison(&mut args, |l, r| l > r)?,
        Tag::GreaterEqual => comparison(&mut args, |l, r| l >= r)?,
        Tag::Equal => {
            let left = args.take("left")?;
            let right = args.take("right")?;
            Value::Bool(left == right)
        }

        Tag::SymbolName => Value::String(args.take_symbol("value")?),
        Tag::First => args
            .take_list("value")?
            .into_iter()
            .next()
            .unwrap_or_else(Value::empty_list),
        Tag::Last => args
            .take_list("value")?
            .pop()
            .unwrap_or_else(Value::empty_list),
        Tag::Nth => {
            let items = args.take_list("value")?;
            let index = args.take_number("index")?;
            nth(items, index)?
        }

        Tag::Raw => {
            let format = args.take_string("format")?;
            let content = args.take_string("block")?;
            node(Node::Raw(Raw::new(format, content)))
        }
        Tag::Paragraph => node(Node::Paragraph(inline(&mut args)?)),
        Tag::Text => node(Node::Text(inline(&mut args)?)),
        Tag::Bold => node(Node::Bold(inline(&mut args)?)),
        Tag::Italic => node(Node::Italic(inline(&mut args)?)),
        Tag::SoftBreak => node(Node::SoftBreak(inline(&mut args)?)),
        Tag::Line => node(Node::Line(inline(&mut args)?)),

        Tag::Declaration => {
            let kind = args.take_string("kind")?;
            let children = args.take_list("children")?;
            node(Node::Declaration(Declaration::new(kind, children)))
        }
        Tag::Section => {
            let title = args.take_string("title")?;
            let children = args.take_list("children")?;
            node(Node::Section(Section::new(title, children)))
        }
        Tag::Function | Tag::Method | Tag::ClassMethod => {
            let signature = parse_function_signature(&args.take_string("signature")?)?;
            let children = args.take_list("children")?;
            node(Node::Declaration(
                Declaration::new(tag.name(), children).with_signature(signature),
            ))
        }
        Tag::Class => {
            let signature = parse_class_signature(&args.take_string("signature")?)?;
            let children = args.take_list("children")?;
            node(Node::Declaration(
                Declaration::new(tag.name(), children).with_signature(signature),
            ))
        }

        Tag::Code => {
            let language = args.take_string("language")?;
            let code = args.take_string("block")?;
            node(Node::Code(Code::new(language, code)))
        }
        Tag::Example => {
            let language = args.take_string("language")?;
            let code = args.take_string("block")?;
            let line_numbers = args.take_bool_or("line-numbers", true)?;
            let caption = args.take_string_or("caption", Example::DEFAULT_CAPTION)?;
            let mut example = Example::new(language, code)
                .with_line_numbers(line_numbers)
                .with_caption(caption);
            if let Some(lines) = args.take_optional("emphasise-lines") {
                example = example.with_emphasised_lines(lines);
            }
            node(Node::Example(example))
        }
        Tag::List => node(Node::List(List::new(args.take_list("items")?))),
        Tag::OrderedList => node(Node::OrderedList(List::new(args.take_list("items")?))),

        Tag::Private => meta(MetaEntry::Private),
        Tag::Public => meta(MetaEntry::Public),
        Tag::Name => meta(MetaEntry::Name(args.take_string("block")?)),
        Tag::Type => meta(MetaEntry::Type(args.take_string("block")?)),
        Tag::Portability => meta(MetaEntry::Portability(args.take_string("block")?)),
        Tag::Synopsis => meta(MetaEntry::Synopsis(args.take_string("block")?)),
        Tag::Platform => meta(MetaEntry::Platform(args.take_string("block")?)),
        Tag::Returns => meta(MetaEntry::Returns(args.take_string("block")?)),
        Tag::Signature => meta(MetaEntry::Signature(args.take_string("block")?)),
        Tag::Stability => {
            let level = args
                .take_string("block")?
                .parse::<Stability>()
                .map_err(|message| Violation::new(ErrorCode::E202, message))?;
            meta(MetaEntry::Stability(level))
        }
        Tag::Throws => {
            let name = args.take("name")?;
            let description = args.take_string("block")?;
            meta(MetaEntry::Throws { name, description })
        }

        Tag::Literal => node(Node::Literal(Literal::new(args.take_string("block")?))),
        Tag::Link => {
            let text = args.take("text")?;
            let url = args.take("url")?;
            node(Node::Link(Link::new(url, text)))
        }
        Tag::Ref => {
            let id = args.take_string("id")?;
            let url = args.take_string("block")?;
            node(Node::Ref(Ref::new(id, url)))
        }
        Tag::Note => node(Node::Note(Note::new(
            NoteKind::Note,
            args.take_string("block")?,
        ))),
        Tag::Warning => node(Node::Note(Note::new(
            NoteKind::Warning,
            args.take_string("block")?,
        ))),
        Tag::VersionAdded => version_note(&mut args, VersionKind::Added)?,
        Tag::VersionChanged => version_note(&mut args, VersionKind::Changed)?,
        Tag::Deprecated => version_note(&mut args, VersionKind::Deprecated)?,
    };

    Ok(value)
}

fn node(node: Node) -> Value {
    Value::Node(Box::new(node))
}

fn meta(entry: MetaEntry) -> Value {
    node(Node::Meta(entry))
}

fn inline(args: &mut Arguments) -> Result<Inline> {
    Ok(Inline::new(args.take("value")?))
}

fn arithmetic(args: &mut Arguments, op: impl FnOnce(f64, f64) -> f64) -> Result<Value> {
    let left = args.take_number("left")?;
    let right = args.take_number("right")?;
    Ok(Value::Number(op(left, right)))
}

fn comparison(args: &mut Arguments, op: impl FnOnce(f64, f64) -> bool) -> Result<Value> {
    let left = args.take_number("left")?;
    let right = args.take_number("right")?;
    Ok(Value::Bool(op(left, right)))
}

fn nth(items: Vec<Value>, index: f64) -> Result<Value> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(Violation::new(
            ErrorCode::E200,
            format!("index {index} is not an integer"),
        ));
    }
    let len = items.len();
    if index < 0.0 || index >= len as f64 {
        return Err(Violation::new(
            ErrorCode::E201,
            format!("index {index} is out of range for a sequence of length {len}"),
        )
        .with_help("indices start at 0"));
    }
    // Bounds checked above.
    Ok(items.into_iter().nth(index as usize).unwrap_or_else(Value::empty_list))
}

fn version_note(args: &mut Arguments, kind: VersionKind) -> Result<Value> {
    let version = args.take_string("version")?;
    let text = args.take_string_or("block", "")?;
    Ok(node(Node::VersionNote(VersionNote::new(kind, version, text))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::Invocation;

    fn run(tag: Tag, invocation: Invocation) -> Result<Value> {
        apply(tag, Arguments::bind(tag.parameters(), invocation)?)
    }

    fn run_node(tag: Tag, invocation: Invocation) -> Node {
        match run(tag, invocation).unwrap() {
            Value::Node(node) => *node,
            other => panic!("expected node, got {other}"),
        }
    }

    fn list(items: &[f64]) -> Value {
        Value::List(items.iter().copied().map(Value::from).collect())
    }

    #[test]
    fn test_subtract_adds() {
        let value = run(Tag::Subtract, Invocation::new().with_arg(5.0).with_arg(3.0)).unwrap();
        assert_eq!(value, Value::Number(8.0));
    }

    #[test]
    fn test_arithmetic_and_comparison() {
        let product = run(Tag::Multiply, Invocation::new().with_arg(4.0).with_arg(2.5)).unwrap();
        assert_eq!(product, Value::Number(10.0));

        let quotient = run(Tag::Divide, Invocation::new().with_arg(9.0).with_arg(3.0)).unwrap();
        assert_eq!(quotient, Value::Number(3.0));

        let less = run(Tag::LessEqual, Invocation::new().with_arg(2.0).with_arg(2.0)).unwrap();
        assert_eq!(less, Value::Bool(true));

        let greater = run(Tag::Greater, Invocation::new().with_arg(1.0).with_arg(2.0)).unwrap();
        assert_eq!(greater, Value::Bool(false));
    }

    #[test]
    fn test_arithmetic_rejects_strings() {
        let err = run(Tag::Add, Invocation::new().with_arg("1").with_arg(2.0)).unwrap_err();

        assert_eq!(err.code(), ErrorCode::E200);
        assert_eq!(
            err.message(),
            "argument `left` expected number value, found string"
        );
    }

    #[test]
    fn test_not_and_boolean_predicate() {
        assert_eq!(
            run(Tag::Not, Invocation::new().with_arg(Value::empty_list())).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            run(Tag::Not, Invocation::new().with_arg(0.0)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            run(Tag::IsBoolean, Invocation::new().with_arg(false)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            run(Tag::IsBoolean, Invocation::new().with_arg("false")).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let value = run(
            Tag::Equal,
            Invocation::new()
                .with_arg(list(&[1.0, 2.0]))
                .with_arg(list(&[1.0, 2.0])),
        )
        .unwrap();
        assert_eq!(value, Value::Bool(true));

        let value = run(
            Tag::Equal,
            Invocation::new().with_arg("1").with_arg(1.0),
        )
        .unwrap();
        assert_eq!(value, Value::Bool(false));

        let value = run(
            Tag::Equal,
            Invocation::new()
                .with_arg(list(&[1.0, 2.0]))
                .with_arg(list(&[2.0, 1.0])),
        )
        .unwrap();
        assert_eq!(value, Value::Bool(false));
    }

    #[test]
    fn test_first_and_last_require_a_sequence() {
        for tag in [Tag::First, Tag::Last] {
            let err = run(tag, Invocation::new().with_arg("abc")).unwrap_err();
            assert_eq!(err.code(), ErrorCode::E200);
            assert_eq!(
                err.message(),
                "argument `value` expected sequence value, found string"
            );
        }
    }

    #[test]
    fn test_first_and_last() {
        let items = list(&[1.0, 2.0, 3.0]);
        assert_eq!(
            run(Tag::First, Invocation::new().with_arg(items.clone())).unwrap(),
            Value::Number(1.0)
        );
        assert_eq!(
            run(Tag::Last, Invocation::new().with_arg(items)).unwrap(),
            Value::Number(3.0)
        );
        assert_eq!(
            run(Tag::First, Invocation::new().with_arg(Value::empty_list())).unwrap(),
            Value::empty_list()
        );
    }

    #[test]
    fn test_nth_bounds() {
        let items = list(&[10.0, 20.0, 30.0]);

        let value = run(Tag::Nth, Invocation::new().with_arg(items.clone()).with_arg(2.0));
        assert_eq!(value.unwrap(), Value::Number(30.0));

        let err = run(Tag::Nth, Invocation::new().with_arg(items.clone()).with_arg(3.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::E201);
        assert_eq!(
            err.message(),
            "index 3 is out of range for a sequence of length 3"
        );

        let err = run(Tag::Nth, Invocation::new().with_arg(items.clone()).with_arg(-1.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::E201);

        let err = run(Tag::Nth, Invocation::new().with_arg(items).with_arg(0.5)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E200);
    }

    #[test]
    fn test_tag_label_from_any_value() {
        let node = run_node(
            Tag::Tag,
            Invocation::new()
                .with_arg(Value::Symbol("figure".to_string()))
                .with_arg("body"),
        );
        assert_eq!(node.label(), "figure");

        let node = run_node(Tag::Tag, Invocation::new().with_arg(3.0).with_arg(true));
        assert_eq!(node.label(), "3");
    }

    #[test]
    fn test_example_defaults() {
        let node = run_node(Tag::Example, Invocation::new().with_arg("js").with_arg("f()"));
        let Node::Example(example) = node else {
            panic!("expected example");
        };

        assert!(example.line_numbers());
        assert_eq!(example.caption(), "Example");
        assert_eq!(example.emphasised_lines(), None);
    }

    #[test]
    fn test_example_keywords() {
        let node = run_node(
            Tag::Example,
            Invocation::new()
                .with_arg("js")
                .with_arg("f()")
                .with_keyword("line-numbers", false)
                .with_keyword("emphasise-lines", list(&[1.0]))
                .with_keyword("caption", "Calling f"),
        );
        let Node::Example(example) = node else {
            panic!("expected example");
        };

        assert!(!example.line_numbers());
        assert_eq!(example.caption(), "Calling f");
        assert_eq!(example.emphasised_lines(), Some(&list(&[1.0])));
    }

    #[test]
    fn test_stability_is_lowercased() {
        let node = run_node(Tag::Stability, Invocation::new().with_arg("EXPERIMENTAL"));
        assert_eq!(node, Node::Meta(MetaEntry::Stability(Stability::Experimental)));
    }

    #[test]
    fn test_stability_rejects_unknown_level() {
        let err = run(Tag::Stability, Invocation::new().with_arg("alpha")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E202);
    }

    #[test]
    fn test_class_declaration() {
        let node = run_node(
            Tag::Class,
            Invocation::new()
                .with_arg("Foo(a) < Bar, Baz")
                .with_arg(Value::empty_list()),
        );
        let Node::Declaration(declaration) = node else {
            panic!("expected declaration");
        };

        assert_eq!(declaration.kind(), "class");
        assert_eq!(declaration.name(), Some("Foo"));
        assert_eq!(declaration.meta()["name"], Value::from("Foo"));
        assert_eq!(declaration.meta()["signature"], Value::from("Foo(a)"));
        assert_eq!(declaration.meta()["parents"], Value::from("Bar, Baz"));
        let signature = declaration.signature().unwrap();
        assert_eq!(signature.signature(), "Foo(a)");
        assert_eq!(signature.parents(), Some("Bar, Baz"));
    }

    #[test]
    fn test_method_kind_is_tag_name() {
        let node = run_node(
            Tag::ClassMethod,
            Invocation::new()
                .with_arg("create(options)")
                .with_arg(Value::empty_list()),
        );
        let Node::Declaration(declaration) = node else {
            panic!("expected declaration");
        };

        assert_eq!(declaration.kind(), "classmethod");
        assert_eq!(declaration.name(), Some("create"));
        assert_eq!(declaration.meta()["name"], Value::from("create"));
        assert_eq!(
            declaration.meta()["signature"],
            Value::from("create(options)")
        );
    }

    #[test]
    fn test_function_meta_is_parsed_signature() {
        let node = run_node(
            Tag::Function,
            Invocation::new()
                .with_arg("foo(a, b)")
                .with_arg(Value::empty_list()),
        );
        let Node::Declaration(declaration) = node else {
            panic!("expected declaration");
        };

        assert_eq!(declaration.meta()["name"], Value::from("foo"));
        assert_eq!(declaration.meta()["signature"], Value::from("foo(a, b)"));
        assert!(!declaration.meta().contains_key("parents"));
    }

    #[test]
    fn test_node_handlers() {
        let text = || Value::from("body");
        let cases: Vec<(Tag, Invocation, Node)> = vec![
            (
                Tag::Raw,
                Invocation::new().with_arg("html").with_arg("<br>"),
                Node::Raw(Raw::new("html", "<br>")),
            ),
            (
                Tag::Literal,
                Invocation::new().with_arg("a  b"),
                Node::Literal(Literal::new("a  b")),
            ),
            (
                Tag::List,
                Invocation::new().with_arg(list(&[1.0, 2.0])),
                Node::List(List::new(vec![Value::from(1.0), Value::from(2.0)])),
            ),
            (
                Tag::OrderedList,
                Invocation::new().with_keyword("items", list(&[3.0])),
                Node::OrderedList(List::new(vec![Value::from(3.0)])),
            ),
            (
                Tag::Declaration,
                Invocation::new()
                    .with_arg("module")
                    .with_arg(Value::from(vec![text()])),
                Node::Declaration(Declaration::new("module", vec![text()])),
            ),
            (
                Tag::Section,
                Invocation::new().with_arg("Usage").with_arg(Value::empty_list()),
                Node::Section(Section::new("Usage", vec![])),
            ),
            (
                Tag::Code,
                Invocation::new().with_arg("js").with_arg("x = 1"),
                Node::Code(Code::new("js", "x = 1")),
            ),
            (
                Tag::Paragraph,
                Invocation::new().with_arg(text()),
                Node::Paragraph(Inline::new(text())),
            ),
            (
                Tag::Text,
                Invocation::new().with_arg(text()),
                Node::Text(Inline::new(text())),
            ),
            (
                Tag::Bold,
                Invocation::new().with_arg(text()),
                Node::Bold(Inline::new(text())),
            ),
            (
                Tag::Italic,
                Invocation::new().with_arg(text()),
                Node::Italic(Inline::new(text())),
            ),
            (
                Tag::SoftBreak,
                Invocation::new().with_arg(Value::empty_list()),
                Node::SoftBreak(Inline::new(Value::empty_list())),
            ),
            (
                Tag::Line,
                Invocation::new().with_arg(text()),
                Node::Line(Inline::new(text())),
            ),
            (
                Tag::Note,
                Invocation::new().with_arg("careful"),
                Node::Note(Note::new(NoteKind::Note, "careful")),
            ),
            (
                Tag::Warning,
                Invocation::new().with_arg("careful"),
                Node::Note(Note::new(NoteKind::Warning, "careful")),
            ),
            (
                Tag::VersionAdded,
                Invocation::new().with_arg("1.0").with_arg("First release."),
                Node::VersionNote(VersionNote::new(VersionKind::Added, "1.0", "First release.")),
            ),
            (
                Tag::VersionChanged,
                Invocation::new().with_arg("1.1"),
                Node::VersionNote(VersionNote::new(VersionKind::Changed, "1.1", "")),
            ),
        ];

        for (tag, invocation, expected) in cases {
            assert_eq!(run_node(tag, invocation), expected, "@{}", tag.name());
        }
    }

    #[test]
    fn test_meta_handlers() {
        let cases = [
            (Tag::Private, Invocation::new(), MetaEntry::Private),
            (Tag::Public, Invocation::new(), MetaEntry::Public),
            (
                Tag::Name,
                Invocation::new().with_arg("inc"),
                MetaEntry::Name("inc".to_string()),
            ),
            (
                Tag::Type,
                Invocation::new().with_arg("function"),
                MetaEntry::Type("function".to_string()),
            ),
            (
                Tag::Portability,
                Invocation::new().with_arg("node only"),
                MetaEntry::Portability("node only".to_string()),
            ),
            (
                Tag::Synopsis,
                Invocation::new().with_arg("inc(1)"),
                MetaEntry::Synopsis("inc(1)".to_string()),
            ),
            (
                Tag::Platform,
                Invocation::new().with_arg("linux"),
                MetaEntry::Platform("linux".to_string()),
            ),
            (
                Tag::Returns,
                Invocation::new().with_arg("number"),
                MetaEntry::Returns("number".to_string()),
            ),
            (
                Tag::Signature,
                Invocation::new().with_arg("inc(x: number)"),
                MetaEntry::Signature("inc(x: number)".to_string()),
            ),
        ];

        for (tag, invocation, entry) in cases {
            assert_eq!(run_node(tag, invocation), Node::Meta(entry), "@{}", tag.name());
        }
    }

    #[test]
    fn test_meta_handlers_require_strings() {
        for tag in [Tag::Type, Tag::Returns, Tag::Signature, Tag::Literal, Tag::Note] {
            let err = run(tag, Invocation::new().with_arg(1.0)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::E200, "@{}", tag.name());
        }
    }

    #[test]
    fn test_version_note_default_text() {
        let node = run_node(Tag::Deprecated, Invocation::new().with_arg("2.0"));
        let Node::VersionNote(note) = node else {
            panic!("expected version note");
        };

        assert_eq!(note.kind(), VersionKind::Deprecated);
        assert_eq!(note.version(), "2.0");
        assert_eq!(note.text(), "");
    }

    #[test]
    fn test_ref_uses_block_as_url() {
        let node = run_node(
            Tag::Ref,
            Invocation::new().with_arg("rfc").with_arg("https://example.org/rfc"),
        );
        assert_eq!(
            node,
            Node::Ref(Ref::new("rfc", "https://example.org/rfc"))
        );
    }

    #[test]
    fn test_link_keeps_any_values() {
        let node = run_node(
            Tag::Link,
            Invocation::new()
                .with_keyword("url", "https://example.org")
                .with_keyword("text", list(&[1.0])),
        );
        assert_eq!(
            node,
            Node::Link(Link::new(Value::from("https://example.org"), list(&[1.0])))
        );
    }

    #[test]
    fn test_throws_meta() {
        let node = run_node(
            Tag::Throws,
            Invocation::new()
                .with_arg(Value::Symbol("TypeError".to_string()))
                .with_arg("when x is not a number"),
        );
        assert_eq!(
            node,
            Node::Meta(MetaEntry::Throws {
                name: Value::Symbol("TypeError".to_string()),
                description: "when x is not a number".to_string(),
            })
        );
    }
}
