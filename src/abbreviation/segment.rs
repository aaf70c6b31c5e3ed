/// A piece of a title, either outside or inside a pair of parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any parenthesized group
    Plain(&'a str),
    /// Content between a `(` and the next `)`, parentheses excluded
    Parenthesized(&'a str),
}

/// Split a title into plain and parenthesized segments, in order.
///
/// A delimiter runs from a `(` to the first `)` after it on the same line, so
/// delimiters never nest: `a (b (c) d)` yields `a `, `(b (c)`, ` d)`. An
/// opening parenthesis with no closing partner on its line is left in the
/// text between delimiters.
///
/// Every piece that starts with `(` and ends with `)` is a group, including
/// text between delimiters such as `(a\nb)` that spans a line break. Empty
/// pieces are dropped, while an empty group `()` is kept.
#[must_use]
pub fn split_segments(title: &str) -> Vec<Segment<'_>> {
    let bytes = title.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'(') {
        let open = pos + offset;
        let close = bytes[open + 1..]
            .iter()
            .position(|&b| b == b')' || b == b'\n')
            .map(|o| open + 1 + o)
            .filter(|&idx| bytes[idx] == b')');

        match close {
            Some(close) => {
                push_between(&mut segments, &title[plain_start..open]);
                segments.push(Segment::Parenthesized(&title[open + 1..close]));
                plain_start = close + 1;
                pos = close + 1;
            }
            None => pos = open + 1,
        }
    }

    push_between(&mut segments, &title[plain_start..]);

    segments
}

/// Push the text between two delimiters, classifying it by its outer characters
fn push_between<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if text.is_empty() {
        return;
    }
    let segment = match text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        Some(inner) => Segment::Parenthesized(inner),
        None => Segment::Plain(text),
    };
    segments.push(segment);
}
