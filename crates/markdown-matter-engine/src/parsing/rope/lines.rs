use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, newline included.
    pub text: String,
}

impl LineRef {
    /// Length of the line terminator (`\n`, `\r\n` or nothing at end of input).
    pub fn terminator_len(&self) -> usize {
        if self.text.ends_with("\r\n") {
            2
        } else if self.text.ends_with('\n') {
            1
        } else {
            0
        }
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing. A trailing newline does not
/// start an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_does_not_add_line() {
        let rope = Rope::from("a\nb\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].span, Span { start: 2, end: 4 });
    }

    #[test]
    fn last_line_without_newline() {
        let rope = Rope::from("a\r\nbc");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].terminator_len(), 2);
        assert_eq!(lines[1].terminator_len(), 0);
        assert_eq!(lines[1].span, Span { start: 3, end: 5 });
    }
}
