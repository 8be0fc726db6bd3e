//! Argument capture for `[component: name]` tags.
//!
//! Arguments live in an optional parenthesised block that can sit on the tag
//! line (`[component: x](args)`), open on the tag line and close on a later
//! line, or open on its own line after the tag. Inside an open block only a
//! bare `)` line ends the capture; blank lines are kept so the block can be
//! split into paragraphs afterwards.

use crate::ast::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLayout {
    /// No argument block at all.
    None,
    /// Text after the tag that is not parenthesised.
    Trailing,
    /// `(args)` opened and closed on the tag line.
    SingleLine,
    /// `(` on the tag line, bare `)` on a later line.
    Inline,
    /// `(` on its own line after the tag.
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub raw: String,
    pub layout: ArgLayout,
    /// Index of the first line the capture did not consume.
    pub cursor: usize,
    pub terminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Scanning,
    CapturingInline,
    CapturingBlock,
}

impl Capture {
    fn finished(raw: String, layout: ArgLayout, cursor: usize) -> Self {
        Self {
            raw,
            layout,
            cursor,
            terminated: true,
        }
    }
}

/// Capture the arguments of a component tag. `remainder` is the tag line
/// after `]`, `cursor` the index of the line following the tag.
pub fn capture(remainder: &str, lines: &[Line], cursor: usize) -> Capture {
    let mut state = CaptureState::Scanning;
    let mut cursor = cursor;
    let mut opener = remainder.trim();

    loop {
        state = match state {
            CaptureState::Scanning if opener.starts_with('(') => CaptureState::CapturingInline,
            CaptureState::Scanning if !opener.is_empty() => {
                return Capture::finished(opener.to_string(), ArgLayout::Trailing, cursor);
            }
            CaptureState::Scanning => {
                let Some(idx) = next_non_blank(lines, cursor) else {
                    return Capture::finished(String::new(), ArgLayout::None, cursor);
                };
                let candidate = lines[idx].raw.trim();
                if !candidate.starts_with('(') {
                    return Capture::finished(String::new(), ArgLayout::None, cursor);
                }
                opener = candidate;
                cursor = idx + 1;
                CaptureState::CapturingBlock
            }
            CaptureState::CapturingInline | CaptureState::CapturingBlock => {
                let inline = state == CaptureState::CapturingInline;
                let open = opener.strip_prefix('(').unwrap_or(opener);

                if let Some(close) = open.rfind(')') {
                    let layout = if inline {
                        ArgLayout::SingleLine
                    } else {
                        ArgLayout::Block
                    };
                    return Capture::finished(open[..close].to_string(), layout, cursor);
                }

                let layout = if inline {
                    ArgLayout::Inline
                } else {
                    ArgLayout::Block
                };
                return capture_until_close(open, lines, cursor, layout);
            }
        };
    }
}

fn capture_until_close(open: &str, lines: &[Line], cursor: usize, layout: ArgLayout) -> Capture {
    let mut cursor = cursor;
    let mut captured: Vec<&str> = Vec::new();
    if !open.trim().is_empty() {
        captured.push(open);
    }

    while cursor < lines.len() {
        let raw = lines[cursor].raw.as_str();
        cursor += 1;
        if raw.trim() == ")" {
            return Capture::finished(captured.join("\n"), layout, cursor);
        }
        captured.push(raw);
    }

    Capture {
        raw: captured.join("\n"),
        layout,
        cursor,
        terminated: false,
    }
}

fn next_non_blank(lines: &[Line], cursor: usize) -> Option<usize> {
    lines
        .get(cursor..)?
        .iter()
        .position(|line| !line.is_blank())
        .map(|offset| cursor + offset)
}

/// Split on runs of whitespace-only lines. Each paragraph is trimmed and
/// empty ones are dropped.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut out, &mut current);
        } else {
            current.push(line);
        }
    }
    push_paragraph(&mut out, &mut current);

    out
}

pub(crate) fn push_paragraph<S: AsRef<str>>(out: &mut Vec<String>, current: &mut Vec<S>) {
    if current.is_empty() {
        return;
    }
    let joined = current
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    current.clear();
    let paragraph = joined.trim();
    if !paragraph.is_empty() {
        out.push(paragraph.to_string());
    }
}
