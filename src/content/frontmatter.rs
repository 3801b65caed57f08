//! Front-matter segmentation, parsing and serialization

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::config::OutputConfig;

/// Marker line bounding the front-matter block
pub const DELIMITER: &str = "---";

/// Front-matter parsing and rendering errors
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),

    #[error("missing closing `---` delimiter")]
    Unterminated,

    #[error("rendered front-matter does not read back as written")]
    RoundTrip,
}

/// Position of the classifier relative to the front-matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Only blank lines seen so far
    Leading,
    /// Between the opening and the closing delimiter
    Inside,
    /// Past the closing delimiter, or past content that rules out front-matter
    Body,
}

/// A file's lines split into the front-matter block and the document body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Lines strictly between the opening and closing delimiter
    pub front_matter: Vec<&'a str>,
    /// Every other line except the two delimiters, in order
    pub body: Vec<&'a str>,
    /// Number of delimiter lines consumed (0, 1 or 2)
    pub delimiters: usize,
}

impl Segments<'_> {
    /// Whether the file opened a front-matter block at all
    pub fn has_front_matter(&self) -> bool {
        self.delimiters > 0
    }

    /// Whether the front-matter block was opened but never closed
    pub fn is_unterminated(&self) -> bool {
        self.delimiters == 1
    }

    /// Front-matter lines joined back into YAML text
    pub fn front_matter_text(&self) -> String {
        self.front_matter.join("\n")
    }
}

fn is_opening_delimiter(line: &str) -> bool {
    line.trim().starts_with(DELIMITER)
}

/// Inside the block only an unindented marker closes it; indented `---`
/// lines belong to YAML block scalars.
fn is_closing_delimiter(line: &str) -> bool {
    line.starts_with(DELIMITER)
}

/// Split lines into front-matter and body in a single pass
///
/// The first delimiter opens the block only if nothing but blank lines
/// precede it, and the next unindented delimiter closes it. After the
/// closing delimiter every line is body, so a later `---` (a markdown
/// horizontal rule) stays in the document untouched.
pub fn split_lines<'a, I>(lines: I) -> Segments<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segments = Segments::default();
    let mut region = Region::Leading;

    for line in lines {
        match region {
            Region::Leading if is_opening_delimiter(line) => {
                region = Region::Inside;
                segments.delimiters += 1;
            }
            Region::Leading => {
                if !line.trim().is_empty() {
                    region = Region::Body;
                }
                segments.body.push(line);
            }
            Region::Inside if is_closing_delimiter(line) => {
                region = Region::Body;
                segments.delimiters += 1;
            }
            Region::Inside => segments.front_matter.push(line),
            Region::Body => segments.body.push(line),
        }
    }

    segments
}

/// Parse front-matter text into an ordered mapping
///
/// Empty text (or text holding only comments) yields an empty mapping.
pub fn parse(text: &str) -> Result<Mapping, FrontMatterError> {
    let blank = text
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if blank {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(FrontMatterError::NotAMapping(value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Serialize a mapping as block-style YAML, always newline-terminated
pub fn to_yaml(mapping: &Mapping, options: &OutputConfig) -> Result<String, FrontMatterError> {
    if mapping.is_empty() && options.omit_empty_mapping {
        return Ok(String::new());
    }

    let mut yaml = serde_yaml::to_string(mapping)?;
    if !yaml.ends_with('\n') {
        yaml.push('\n');
    }
    Ok(yaml)
}

/// Reassemble a full document from a mapping and the body lines
///
/// A document without body lines ends right after the closing delimiter.
pub fn render<S: AsRef<str>>(
    mapping: &Mapping,
    body: &[S],
    options: &OutputConfig,
) -> Result<String, FrontMatterError> {
    let yaml = to_yaml(mapping, options)?;
    let has_body = !body.is_empty();
    let body = body
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");

    let mut out = String::with_capacity(yaml.len() + body.len() + 2 * DELIMITER.len() + 3);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    out.push_str(DELIMITER);
    out.push('\n');
    if has_body {
        out.push_str(&body);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_file() {
        let segments = split_lines(["---", "a: 1", "---", "body"]);
        assert_eq!(segments.front_matter, vec!["a: 1"]);
        assert_eq!(segments.body, vec!["body"]);
        assert_eq!(segments.delimiters, 2);
    }

    #[test]
    fn test_split_delimiter_with_whitespace() {
        let segments = split_lines(["  ---  ", "title: x", "---  ", "text"]);
        assert_eq!(segments.front_matter, vec!["title: x"]);
        assert_eq!(segments.body, vec!["text"]);
    }

    #[test]
    fn test_indented_dashes_stay_in_front_matter() {
        let segments = split_lines([
            "---",
            "summary: |-",
            "  first",
            "  ---",
            "  second",
            "image: /a.png",
            "---",
            "Body",
        ]);
        assert_eq!(
            segments.front_matter,
            vec!["summary: |-", "  first", "  ---", "  second", "image: /a.png"]
        );
        assert_eq!(segments.body, vec!["Body"]);
        assert_eq!(segments.delimiters, 2);
    }

    #[test]
    fn test_horizontal_rule_stays_in_body() {
        let content = "---\ntitle: x\n---\nintro\n---\nmore: text\n---\nend";
        let segments = split_lines(content.lines());
        assert_eq!(segments.front_matter, vec!["title: x"]);
        assert_eq!(
            segments.body,
            vec!["intro", "---", "more: text", "---", "end"]
        );
        assert_eq!(segments.delimiters, 2);
    }

    #[test]
    fn test_leading_blank_lines_are_body() {
        let segments = split_lines(["", "  ", "---", "a: 1", "---", "body"]);
        assert_eq!(segments.front_matter, vec!["a: 1"]);
        assert_eq!(segments.body, vec!["", "  ", "body"]);
        assert!(segments.has_front_matter());
    }

    #[test]
    fn test_no_front_matter() {
        let content = "# Title\n\nSome text\n\n---\n\nafter rule";
        let segments = split_lines(content.lines());
        assert!(!segments.has_front_matter());
        assert!(segments.front_matter.is_empty());
        assert_eq!(segments.body.len(), content.lines().count());
    }

    #[test]
    fn test_unterminated_front_matter() {
        let segments = split_lines(["---", "a: 1", "b: 2"]);
        assert!(segments.is_unterminated());
        assert_eq!(segments.front_matter, vec!["a: 1", "b: 2"]);
        assert!(segments.body.is_empty());
    }

    #[test]
    fn test_parse_mapping_keeps_order() {
        let mapping = parse("zeta: 1\nalpha: two\nmid: true").unwrap();
        let keys: Vec<&str> = mapping.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty_and_comment_only() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n  \n").unwrap().is_empty());
        assert!(parse("# just a comment").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = parse("- a\n- b").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping("a sequence")));

        let err = parse("just prose").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping("a string")));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = parse("title: [unclosed").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn test_to_yaml_uses_block_style() {
        let mapping = parse("tags: [a, b]\nmetadata: {pagetitle: y}").unwrap();
        let yaml = to_yaml(&mapping, &OutputConfig::default()).unwrap();
        assert_eq!(yaml, "tags:\n- a\n- b\nmetadata:\n  pagetitle: y\n");
    }

    #[test]
    fn test_to_yaml_empty_mapping() {
        let empty = Mapping::new();
        assert_eq!(to_yaml(&empty, &OutputConfig::default()).unwrap(), "");

        let keep = OutputConfig {
            omit_empty_mapping: false,
        };
        assert_eq!(to_yaml(&empty, &keep).unwrap(), "{}\n");
    }

    #[test]
    fn test_render_document() {
        let mapping = parse("title: Hello").unwrap();
        let out = render(&mapping, &["", "Body line"], &OutputConfig::default()).unwrap();
        assert_eq!(out, "---\ntitle: Hello\n---\n\nBody line\n");
    }

    #[test]
    fn test_render_empty_body() {
        let mapping = parse("title: Hello").unwrap();
        let out = render::<&str>(&mapping, &[], &OutputConfig::default()).unwrap();
        assert_eq!(out, "---\ntitle: Hello\n---\n");

        let out = render(&mapping, &[""], &OutputConfig::default()).unwrap();
        assert_eq!(out, "---\ntitle: Hello\n---\n\n");
    }
}
