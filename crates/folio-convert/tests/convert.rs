use folio_convert::{
    JAVASCRIPT, LIVESCRIPT, LineClassification, Preset, convert, merge, render,
};

#[test]
fn test_doc_only_input_joins_comment_bodies() {
    let converter = JAVASCRIPT.converter().expect("Failed to build converter");

    let markup = converter.convert("// hello\n// world\n");

    assert_eq!(markup, "hello\nworld");
}

#[test]
fn test_code_only_input_is_one_block() {
    let converter = JAVASCRIPT.converter().expect("Failed to build converter");

    let markup = converter.convert("x = 1\n\ny = 2\n");

    assert_eq!(markup, "@code(language: \"js\" \"x = 1\n\ny = 2\")");
}

#[test]
fn test_windows_line_endings() {
    let converter = JAVASCRIPT.converter().expect("Failed to build converter");

    let markup = converter.convert("// Title\r\n\r\n// Body\r\nrun();\r\n");

    assert_eq!(markup, "Title\n\n\nBody\n@code(language: \"js\" \"run();\")");
}

#[test]
fn test_blank_lines_inside_code_are_absorbed() {
    let runs = merge([
        LineClassification::Code {
            line_number: 1,
            language: "js".to_string(),
            lines: vec!["a".to_string()],
        },
        LineClassification::Blank {
            line_number: 2,
            text: " ".to_string(),
        },
        LineClassification::Code {
            line_number: 3,
            language: "js".to_string(),
            lines: vec!["b".to_string()],
        },
    ]);

    assert_eq!(
        runs,
        vec![LineClassification::Code {
            line_number: 1,
            language: "js".to_string(),
            lines: vec!["a".to_string(), " ".to_string(), "b".to_string()],
        }]
    );
    assert_eq!(render(&runs[0]), "@code(language: \"js\" \"a\n \nb\")\n");
}

#[test]
fn test_custom_language_needs_only_a_pattern() {
    let markup = convert(r"^\s*--\s?(.*)$", "sql", "-- All users.\nSELECT * FROM \"users\";")
        .expect("Failed to convert");

    assert_eq!(
        markup,
        "All users.\n@code(language: \"sql\" \"SELECT * FROM \\\"users\\\";\")"
    );
}

#[test]
fn test_presets_are_distinct() {
    let source = "# heading?\n// comment?";

    let js = JAVASCRIPT.converter().expect("Failed to build converter");
    let ls = LIVESCRIPT.converter().expect("Failed to build converter");

    assert_eq!(
        js.convert(source),
        "@code(language: \"js\" \"# heading?\")\n\ncomment?"
    );
    assert_eq!(
        ls.convert(source),
        "heading?\n@code(language: \"livescript\" \"// comment?\")"
    );
    assert_ne!(Preset::find("javascript"), Preset::find("livescript"));
}
