use crate::errors::ExtractError;
use crate::model::{Extraction, FunctionDescriptor, SkipReason, SkippedLine};
use crate::naming::find_matching_paren;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod parameters;


// -- Regex patterns -----------------------------------------------------------

#[expect(clippy::unwrap_used, reason = "pattern is a literal")]
static RE_EXPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//export\s+(\w+)").unwrap());

// `//export` with no usable name: a tooling directive, never documentation
#[expect(clippy::unwrap_used, reason = "pattern is a literal")]
static RE_EXPORT_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//export\b").unwrap());

#[expect(clippy::unwrap_used, reason = "pattern is a literal")]
static RE_FUNC_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^func\s+(\w+)\s*\(").unwrap());

const COMMENT_TOKEN: &str = "//";
const GO_DIRECTIVE_PREFIX: &str = "//go:";

// -- Line classification ------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Marker(&'a str),
    Directive,
    Comment(&'a str),
    Function,
    Blank,
    Other,
}

fn classify(trimmed: &str) -> LineKind<'_> {
    if let Some(caps) = RE_EXPORT.captures(trimmed) {
        if let Some(name) = caps.get(1) {
            return LineKind::Marker(name.as_str());
        }
    }

    if let Some(text) = trimmed.strip_prefix(COMMENT_TOKEN) {
        if trimmed.starts_with(GO_DIRECTIVE_PREFIX) || RE_EXPORT_DIRECTIVE.is_match(trimmed) {
            return LineKind::Directive;
        }
        return LineKind::Comment(text.trim());
    }

    if trimmed
        .strip_prefix("func")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    {
        return LineKind::Function;
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Other
    }
}

/// Split a declaration line into name, raw parameter text and raw return text
///
/// The parameter text is everything inside the first balanced parentheses
/// after the name. Returns `None` when the line does not have that shape.
fn split_declaration(trimmed: &str) -> Option<(&str, &str, &str)> {
    let caps = RE_FUNC_HEAD.captures(trimmed)?;
    let name = caps.get(1)?.as_str();
    let after_open = &trimmed[caps.get(0)?.end()..];
    let close = find_matching_paren(after_open)?;
    Some((name, &after_open[..close], &after_open[close + 1..]))
}

// -- Scanner ------------------------------------------------------------------

struct PendingMarker {
    name: String,
    line: usize,
    text: String,
}

#[derive(Default)]
struct ScanState {
    comment: String,
    marker: Option<PendingMarker>,
    seen: HashMap<String, usize>,
    extraction: Extraction,
}

impl ScanState {
    fn drop_marker(&mut self) {
        if let Some(marker) = self.marker.take() {
            debug!(
                "Export marker for '{}' on line {} has no declaration",
                marker.name, marker.line
            );
            self.extraction.skipped.push(SkippedLine {
                line: marker.line,
                text: marker.text,
                reason: SkipReason::MarkerWithoutDeclaration,
            });
        }
    }

    fn process_line(&mut self, line_no: usize, raw: &str) -> Result<(), ExtractError> {
        let trimmed = raw.trim();

        match classify(trimmed) {
            LineKind::Marker(name) => {
                self.drop_marker();
                self.marker = Some(PendingMarker {
                    name: name.to_string(),
                    line: line_no,
                    text: trimmed.to_string(),
                });
            }
            LineKind::Directive | LineKind::Blank => {}
            LineKind::Comment(text) => {
                if !text.is_empty() {
                    self.comment.push_str(text);
                    self.comment.push(' ');
                }
            }
            LineKind::Function => {
                let Some(marker) = self.marker.take() else {
                    // Only explicitly marked functions are bound
                    return Ok(());
                };
                self.process_declaration(line_no, trimmed, &marker)?;
                self.comment.clear();
            }
            LineKind::Other => {
                self.drop_marker();
                self.comment.clear();
            }
        }

        Ok(())
    }

    fn process_declaration(
        &mut self,
        line_no: usize,
        trimmed: &str,
        marker: &PendingMarker,
    ) -> Result<(), ExtractError> {
        let Some((name, params_str, return_str)) = split_declaration(trimmed) else {
            debug!("Skipping unrecognised declaration on line {}: {}", line_no, trimmed);
            self.extraction.skipped.push(SkippedLine {
                line: line_no,
                text: trimmed.to_string(),
                reason: SkipReason::MalformedDeclaration,
            });
            return Ok(());
        };

        if marker.name != name {
            warn!(
                "Export marker '{}' (line {}) precedes function '{}'",
                marker.name, marker.line, name
            );
        }

        if let Some(&first_line) = self.seen.get(name) {
            return Err(ExtractError::DuplicateExport {
                name: name.to_string(),
                first_line,
                line: line_no,
            });
        }

        let params = parameters::parse_params(params_str, name, line_no)?;
        let return_type = parameters::parse_return_type(return_str);

        debug!(
            "Extracted '{}' with {} params returning {}",
            name,
            params.len(),
            return_type
        );

        self.seen.insert(name.to_string(), line_no);
        self.extraction.functions.push(FunctionDescriptor {
            name: name.to_string(),
            comment: self.comment.trim().to_string(),
            params,
            return_type,
            line: line_no,
        });

        Ok(())
    }
}

/// Extracts `//export`-marked function signatures from Go source text
pub struct ExportExtractor {
    pub(crate) source_path: Option<PathBuf>,
    pub(crate) content: String,
}

impl ExportExtractor {
    /// Read a Go source file for extraction
    pub fn new(source_path: &Path) -> Result<Self, ExtractError> {
        debug!("Initializing export extractor for: {:?}", source_path);

        let content = fs::read_to_string(source_path).map_err(|source| ExtractError::Read {
            path: source_path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            source_path: Some(source_path.to_path_buf()),
            content,
        })
    }

    /// Extract from source text already in memory
    pub fn from_source(content: impl Into<String>) -> Self {
        Self {
            source_path: None,
            content: content.into(),
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Run the single forward pass over the source lines
    pub fn extract(&self) -> Result<Extraction, ExtractError> {
        let mut state = ScanState::default();

        for (idx, line) in self.content.lines().enumerate() {
            state.process_line(idx + 1, line)?;
        }
        state.drop_marker();

        Ok(state.extraction)
    }
}
