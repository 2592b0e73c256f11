//! Single-pass block body replacement.

use super::block::{ReadmeDocument, Segment};
use crate::error::Result;

/// Render `doc` with each block body replaced by the matching entry of
/// `generated` (document order).
///
/// `None` (or a missing entry) keeps the existing body. Open and close tag
/// lines, plain lines, line endings and the trailing newline are preserved.
pub fn render(doc: &ReadmeDocument<'_>, generated: &[Option<Vec<String>>]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut index = 0usize;

    for segment in &doc.segments {
        match segment {
            Segment::Line(line) => lines.push((*line).to_string()),
            Segment::Block(block) => {
                lines.push(block.open.to_string());
                match generated.get(index).and_then(Option::as_ref) {
                    Some(body) => lines.extend(split_lines(body)),
                    None => lines.extend(block.body.iter().map(|l| (*l).to_string())),
                }
                lines.push(block.close.to_string());
                index += 1;
            }
        }
    }

    let mut rendered = lines.join(doc.line_ending);
    if doc.trailing_newline && !lines.is_empty() {
        rendered.push_str(doc.line_ending);
    }
    rendered
}

/// Generated entries may hold embedded newlines; split them into lines.
fn split_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|l| {
            if l.is_empty() {
                vec![String::new()]
            } else {
                l.lines().map(str::to_string).collect()
            }
        })
        .collect()
}

/// Replace block bodies in `content` with `generated` in one pass.
pub fn replace_blocks_once(content: &str, generated: &[Option<Vec<String>>]) -> Result<String> {
    let doc = ReadmeDocument::parse(content)?;
    Ok(render(&doc, generated))
}
