//! Whole-file conversion.

use log::{debug, trace};
use regex::Regex;

use crate::{
    classification::{LineClassification, classify, merge, render},
    error::ConvertError,
};

/// Converts source text of one language into documentation markup.
///
/// A converter is a documentation-comment pattern with exactly one capture
/// group (the comment body) plus the language identifier attached to code
/// blocks.
///
/// # Examples
///
/// ```
/// # use folio_convert::Converter;
/// let converter = Converter::new(r"^\s*--\s?(.*)$", "lua").unwrap();
/// assert_eq!(converter.convert("-- Docs\nprint(1)"), "Docs\n@code(language: \"lua\" \"print(1)\")");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    pattern: Regex,
    language: String,
}

impl Converter {
    /// Compile a converter from a comment pattern and a language identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidPattern`] when `comment_pattern` is not
    /// a valid regular expression and [`ConvertError::CaptureGroups`] when it
    /// does not have exactly one capture group.
    pub fn new(comment_pattern: &str, language: impl Into<String>) -> Result<Self, ConvertError> {
        let pattern =
            Regex::new(comment_pattern).map_err(|source| ConvertError::InvalidPattern {
                pattern: comment_pattern.to_string(),
                source,
            })?;

        // Group 0 is the implicit whole-match group.
        let found = pattern.captures_len() - 1;
        if found != 1 {
            return Err(ConvertError::CaptureGroups {
                pattern: comment_pattern.to_string(),
                found,
            });
        }

        Ok(Self {
            pattern,
            language: language.into(),
        })
    }

    /// The documentation-comment pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The language identifier attached to code blocks.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Classify every line of `input` and merge adjacent runs.
    pub fn classify_all(&self, input: &str) -> Vec<LineClassification> {
        let lines = split_lines(input);
        let line_count = lines.len();

        let merged = merge(
            lines
                .into_iter()
                .enumerate()
                .map(|(index, line)| classify(&self.pattern, &self.language, line, index + 1)),
        );

        debug!(
            language = self.language.as_str(),
            line_count,
            run_count = merged.len();
            "Classified source lines",
        );
        merged
    }

    /// Convert `input` into documentation markup.
    ///
    /// The newline that terminates a trailing code or blank block is not
    /// part of the output.
    pub fn convert(&self, input: &str) -> String {
        let runs = self.classify_all(input);

        let rendered: Vec<String> = runs
            .iter()
            .map(|run| {
                trace!(line_number = run.line_number(); "Rendering run");
                render(run)
            })
            .collect();
        let mut markup = rendered.join("\n");

        if matches!(
            runs.last(),
            Some(LineClassification::Code { .. } | LineClassification::Blank { .. })
        ) {
            markup.pop();
        }

        markup
    }
}

/// Convert `input` with a one-off converter built from `comment_pattern` and `language`.
///
/// # Errors
///
/// Fails only when the converter cannot be built; see [`Converter::new`].
pub fn convert(comment_pattern: &str, language: &str, input: &str) -> Result<String, ConvertError> {
    Ok(Converter::new(comment_pattern, language)?.convert(input))
}

/// Split text on `\r\n`, `\r` and `\n`.
///
/// A terminator at the very end of the text does not start another line,
/// and empty text has no lines.
pub fn split_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&input[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&input[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }

    if start < input.len() {
        lines.push(&input[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLASH: &str = r"^\s*//\s?(.*)$";

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_keeps_multibyte_text() {
        assert_eq!(split_lines("é\r\nü"), vec!["é", "ü"]);
    }

    #[test]
    fn test_new_rejects_invalid_pattern() {
        let err = Converter::new(r"^(//", "js").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPattern { .. }));
    }

    #[test]
    fn test_new_requires_one_capture_group() {
        let err = Converter::new(r"^\s*//.*$", "js").unwrap_err();
        assert!(matches!(err, ConvertError::CaptureGroups { found: 0, .. }));

        let err = Converter::new(r"^(\s*)//(.*)$", "js").unwrap_err();
        assert!(matches!(err, ConvertError::CaptureGroups { found: 2, .. }));

        assert!(Converter::new(r"^\s*(?://)\s?(.*)$", "js").is_ok());
    }

    #[test]
    fn test_convert_doc_only() {
        let markup = convert(SLASH, "js", "// hello\n// world\n").unwrap();
        assert_eq!(markup, "hello\nworld");
    }

    #[test]
    fn test_convert_code_only_merges_blank_lines() {
        let markup = convert(SLASH, "js", "x = 1\n\ny = 2\n").unwrap();
        assert_eq!(markup, "@code(language: \"js\" \"x = 1\n\ny = 2\")");
    }

    #[test]
    fn test_convert_mixed() {
        let source = "// Greets.\nfunction hi() {\n  return \"hi\";\n}\n\n// Done.";
        let markup = convert(SLASH, "js", source).unwrap();
        assert_eq!(
            markup,
            "Greets.\n@code(language: \"js\" \"function hi() {\n  return \\\"hi\\\";\n}\n\")\n\nDone."
        );
    }

    #[test]
    fn test_convert_blank_between_docs() {
        let markup = convert(SLASH, "js", "// a\n\n// b").unwrap();
        assert_eq!(markup, "a\n\n\nb");
    }

    #[test]
    fn test_convert_empty_input() {
        assert_eq!(convert(SLASH, "js", "").unwrap(), "");
    }

    #[test]
    fn test_convert_trailing_empty_comment_body_is_kept() {
        let markup = convert(SLASH, "js", "// a\n//").unwrap();
        assert_eq!(markup, "a\n");
    }

    #[test]
    fn test_classify_all_line_numbers() {
        let converter = Converter::new(SLASH, "js").unwrap();
        let runs = converter.classify_all("// a\nx\n\n// b");
        let starts: Vec<usize> = runs.iter().map(LineClassification::line_number).collect();
        assert_eq!(starts, vec![1, 2, 4]);
    }
}
