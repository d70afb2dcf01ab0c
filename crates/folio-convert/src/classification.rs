//! Line classification, assimilation and rendering.
//!
//! A source file is read one line at a time. Each line becomes a
//! [`LineClassification`]; [`merge`] then folds the sequence left to right,
//! assimilating every new classification into the one produced just before
//! it. The surviving runs are turned back into markup text by [`render`].

use regex::Regex;

/// The kind of a run of source lines.
///
/// `line_number` is the 1-based position of the first line of the run and
/// is never changed by merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClassification {
    /// Documentation comment lines with the comment syntax stripped.
    Doc {
        line_number: usize,
        lines: Vec<String>,
    },
    /// Source code lines in `language`.
    Code {
        line_number: usize,
        language: String,
        lines: Vec<String>,
    },
    /// One empty or whitespace-only line, kept verbatim.
    Blank { line_number: usize, text: String },
}

impl LineClassification {
    /// Position of the first line of this run.
    pub fn line_number(&self) -> usize {
        match self {
            LineClassification::Doc { line_number, .. }
            | LineClassification::Code { line_number, .. }
            | LineClassification::Blank { line_number, .. } => *line_number,
        }
    }
}

/// Outcome of assimilating one classification into its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assimilation {
    /// Both classifications collapsed into one run.
    Merged(LineClassification),
    /// The classifications stay apart, in their original order.
    Separate(LineClassification, LineClassification),
}

impl Assimilation {
    /// The resulting classifications, in order.
    pub fn into_vec(self) -> Vec<LineClassification> {
        match self {
            Assimilation::Merged(one) => vec![one],
            Assimilation::Separate(first, second) => vec![first, second],
        }
    }
}

/// Classify a single source line.
///
/// Blank lines win over everything else; lines matching `comment_pattern`
/// become documentation holding the pattern's first capture group (or an
/// empty string when that group did not participate); anything else is
/// code in `language`.
pub fn classify(
    comment_pattern: &Regex,
    language: &str,
    line: &str,
    line_number: usize,
) -> LineClassification {
    if line.trim().is_empty() {
        return LineClassification::Blank {
            line_number,
            text: line.to_string(),
        };
    }

    match comment_pattern.captures(line) {
        Some(captures) => LineClassification::Doc {
            line_number,
            lines: vec![
                captures
                    .get(1)
                    .map_or("", |body| body.as_str())
                    .to_string(),
            ],
        },
        None => LineClassification::Code {
            line_number,
            language: language.to_string(),
            lines: vec![line.to_string()],
        },
    }
}

/// Assimilate `next` into `previous`.
///
/// Documentation always coalesces, code coalesces with code of the same
/// language, and a blank line following code is absorbed into the code run.
/// Every other pairing stays apart.
pub fn assimilate(previous: LineClassification, next: LineClassification) -> Assimilation {
    use LineClassification::{Blank, Code, Doc};

    match (previous, next) {
        (
            Doc {
                line_number,
                mut lines,
            },
            Doc { lines: more, .. },
        ) => {
            lines.extend(more);
            Assimilation::Merged(Doc { line_number, lines })
        }
        (
            Code {
                line_number,
                language,
                mut lines,
            },
            Code {
                language: other,
                lines: more,
                ..
            },
        ) if language == other => {
            lines.extend(more);
            Assimilation::Merged(Code {
                line_number,
                language,
                lines,
            })
        }
        (
            Code {
                line_number,
                language,
                mut lines,
            },
            Blank { text, .. },
        ) => {
            lines.push(text);
            Assimilation::Merged(Code {
                line_number,
                language,
                lines,
            })
        }
        (previous, next) => Assimilation::Separate(previous, next),
    }
}

/// Fold classifications left to right with one element of lookback.
///
/// Only the most recently produced run is ever assimilated against; runs
/// before it are final.
pub fn merge(
    classifications: impl IntoIterator<Item = LineClassification>,
) -> Vec<LineClassification> {
    let mut merged = Vec::new();
    let mut pending: Option<LineClassification> = None;

    for next in classifications {
        pending = Some(match pending.take() {
            None => next,
            Some(previous) => match assimilate(previous, next) {
                Assimilation::Merged(run) => run,
                Assimilation::Separate(done, run) => {
                    merged.push(done);
                    run
                }
            },
        });
    }

    merged.extend(pending);
    merged
}

/// Render a classification as documentation markup.
pub fn render(classification: &LineClassification) -> String {
    match classification {
        LineClassification::Doc { lines, .. } => lines.join("\n"),
        LineClassification::Blank { text, .. } => format!("{text}\n"),
        LineClassification::Code {
            language, lines, ..
        } => {
            let source = lines.join("\n").replace('"', "\\\"");
            format!("@code(language: \"{language}\" \"{source}\")\n")
        }
    }
}
