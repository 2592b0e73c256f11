//! README block scanning.
//!
//! A README is split into plain lines and `automdrs` blocks:
//!
//! ```text
//! <!-- automdrs:badges version docs -->   ← opening tag (own line)
//! ...body, replaced on update...
//! <!-- /automdrs -->                      ← closing tag (own line)
//! ```
//!
//! Tags inside fenced code blocks are plain text. An opening tag inside a
//! block is body text.

use crate::error::{Error, Result};

use super::options::{TagOptions, parse_tag_options};

pub(crate) const OPEN_PREFIX: &str = "<!-- automdrs:";
pub(crate) const OPEN_SUFFIX: &str = "-->";
pub(crate) const CLOSE_TAG: &str = "<!-- /automdrs -->";

/// One block found in the README (name + full opening tag line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest {
    pub name: String,
    pub open_tag_line: String,
    /// 1-based line number of the opening tag.
    pub line: usize,
}

impl BlockRequest {
    /// Options given on the opening tag.
    pub fn options(&self) -> TagOptions {
        parse_tag_options(&self.open_tag_line, &self.name)
    }
}

/// Extract block name from an opening tag line.
///
/// `<!-- automdrs:badges version -->` → `Some("badges")`
pub fn parse_block_name(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix(OPEN_PREFIX)?
        .strip_suffix(OPEN_SUFFIX)?
        .split_whitespace()
        .next()
}

/// Whether `line` is a closing tag.
pub fn is_close_tag(line: &str) -> bool {
    line.trim() == CLOSE_TAG
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug)]
pub(crate) enum Segment<'a> {
    Line(&'a str),
    Block(Block<'a>),
}

#[derive(Debug)]
pub(crate) struct Block<'a> {
    pub request: BlockRequest,
    pub open: &'a str,
    pub body: Vec<&'a str>,
    pub close: &'a str,
}

/// README content split into lines and blocks, with its line ending style.
#[derive(Debug)]
pub struct ReadmeDocument<'a> {
    pub(crate) segments: Vec<Segment<'a>>,
    pub(crate) line_ending: &'static str,
    pub(crate) trailing_newline: bool,
}

impl<'a> ReadmeDocument<'a> {
    /// Scan `content` into segments.
    ///
    /// Fails with [`Error::UnclosedBlock`] when an opening tag has no
    /// matching closing tag.
    pub fn parse(content: &'a str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut fence = FenceState::default();
        let mut body_fence = FenceState::default();
        let mut open: Option<Block<'a>> = None;

        for (idx, line) in content.lines().enumerate() {
            if let Some(mut block) = open.take() {
                // A close tag inside a fence opened within the body is body text
                if !body_fence.update(line) && !body_fence.is_open() && is_close_tag(line) {
                    block.close = line;
                    segments.push(Segment::Block(block));
                } else {
                    block.body.push(line);
                    open = Some(block);
                }
                continue;
            }

            if fence.update(line) {
                segments.push(Segment::Line(line));
                continue;
            }

            match parse_block_name(line) {
                Some(name) if !fence.is_open() => {
                    body_fence = FenceState::default();
                    open = Some(Block {
                        request: BlockRequest {
                            name: name.to_string(),
                            open_tag_line: line.to_string(),
                            line: idx + 1,
                        },
                        open: line,
                        body: Vec::new(),
                        close: "",
                    });
                }
                _ => segments.push(Segment::Line(line)),
            }
        }

        if let Some(block) = open {
            return Err(Error::UnclosedBlock {
                name: block.request.name,
                line: block.request.line,
            });
        }

        Ok(Self {
            segments,
            line_ending: if content.contains("\r\n") { "\r\n" } else { "\n" },
            trailing_newline: content.ends_with('\n'),
        })
    }

    /// Blocks in document order.
    pub fn requests(&self) -> Vec<BlockRequest> {
        self.blocks().map(|b| b.request.clone()).collect()
    }

    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }

    pub(crate) fn blocks(&self) -> impl Iterator<Item = &Block<'a>> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Block(b) => Some(b),
            Segment::Line(_) => None,
        })
    }
}

/// Collect all block requests in document order.
pub fn parse_readme_blocks(content: &str) -> Result<Vec<BlockRequest>> {
    Ok(ReadmeDocument::parse(content)?.requests())
}

// ============================================================================
// Code fences
// ============================================================================

/// Tracks whether we are inside a ``` / ~~~ fenced code block.
#[derive(Debug, Default)]
struct FenceState {
    /// Fence character and length of the open fence.
    open: Option<(char, usize)>,
}

impl FenceState {
    const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Feed a line; returns true if the line is a fence marker.
    fn update(&mut self, line: &str) -> bool {
        let Some((ch, len)) = fence_marker(line) else {
            return false;
        };
        match self.open {
            None => {
                self.open = Some((ch, len));
                true
            }
            // Closing fence: same char, at least as long, nothing after it
            Some((open_ch, open_len))
                if ch == open_ch && len >= open_len && line.trim()[len..].trim().is_empty() =>
            {
                self.open = None;
                true
            }
            Some(_) => false,
        }
    }
}

fn fence_marker(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    // More than three spaces of indentation is an indented code line
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_name() {
        assert_eq!(
            parse_block_name("  <!-- automdrs:badges version -->  "),
            Some("badges")
        );
        assert_eq!(
            parse_block_name("<!-- automdrs:contributors -->"),
            Some("contributors")
        );
        assert_eq!(parse_block_name("<!-- automdrs:foo a b -->"), Some("foo"));
        assert_eq!(parse_block_name("<!-- automdrs: -->"), None);
        assert_eq!(parse_block_name("<!-- other:tag -->"), None);
        assert_eq!(parse_block_name("not a tag"), None);
        assert_eq!(parse_block_name(CLOSE_TAG), None);
    }

    #[test]
    fn test_parse_readme_blocks_order() {
        let content = "A\n<!-- automdrs:badges version -->\n<!-- /automdrs -->\nB\n<!-- automdrs:contributors -->\n<!-- /automdrs -->\n";
        let reqs = parse_readme_blocks(content).unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].name, "badges");
        assert_eq!(reqs[0].line, 2);
        assert_eq!(reqs[1].name, "contributors");
        assert_eq!(reqs[1].line, 5);
    }

    #[test]
    fn test_block_options() {
        let reqs =
            parse_readme_blocks("<!-- automdrs:badges version docs -->\n<!-- /automdrs -->")
                .unwrap();
        let opts = reqs[0].options();
        assert!(opts.flag(&["version"]));
        assert!(opts.flag(&["docs"]));
        assert!(!opts.flag(&["downloads"]));
    }

    #[test]
    fn test_nested_open_is_body() {
        let content = "<!-- automdrs:a -->\n<!-- automdrs:b -->\n<!-- /automdrs -->";
        let reqs = parse_readme_blocks(content).unwrap();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].name, "a");
    }

    #[test]
    fn test_unclosed_block() {
        let content = "# Title\n\n<!-- automdrs:badges version -->\nstale";
        let err = parse_readme_blocks(content).unwrap_err();
        assert!(matches!(
            err,
            Error::UnclosedBlock { ref name, line: 3 } if name == "badges"
        ));
    }

    #[test]
    fn test_tags_in_code_fence_ignored() {
        let content = "```md\n<!-- automdrs:badges version -->\n<!-- /automdrs -->\n```\n\n~~~~\n<!-- automdrs:file -->\n~~~\n~~~~\n<!-- automdrs:cargo-install -->\n<!-- /automdrs -->\n";
        let reqs = parse_readme_blocks(content).unwrap();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].name, "cargo-install");
    }

    #[test]
    fn test_close_tag_in_body_fence_is_body() {
        let content = "<!-- automdrs:file src=usage.md -->\n```md\n<!-- automdrs:badges -->\n<!-- /automdrs -->\n```\n<!-- /automdrs -->\n<!-- automdrs:cargo-install -->\n<!-- /automdrs -->\n";
        let doc = ReadmeDocument::parse(content).unwrap();
        let blocks: Vec<_> = doc.blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body.len(), 4);
        assert_eq!(blocks[1].request.name, "cargo-install");
    }

    #[test]
    fn test_fence_marker() {
        assert_eq!(fence_marker("```rust"), Some(('`', 3)));
        assert_eq!(fence_marker("  ~~~~"), Some(('~', 4)));
        assert_eq!(fence_marker("``"), None);
        assert_eq!(fence_marker("    ```"), None);
        assert_eq!(fence_marker("text ```"), None);
    }

    #[test]
    fn test_line_ending_detection() {
        let doc = ReadmeDocument::parse("a\r\nb\r\n").unwrap();
        assert_eq!(doc.line_ending, "\r\n");
        assert!(doc.trailing_newline);

        let doc = ReadmeDocument::parse("a\nb").unwrap();
        assert_eq!(doc.line_ending, "\n");
        assert!(!doc.trailing_newline);
    }
}
