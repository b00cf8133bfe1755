// rust/tetris_cli/src/console/input.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead};

use tetris_stack_engine::Input;

/// Reads menu selections token by token, the way `scanf("%d")` does.
///
/// - Whitespace (including newlines) between selections is skipped.
/// - A token with a numeric prefix (`[+-]?[0-9]+`) yields that number; any rest
///   of the token stays pending for the next read.
/// - A token without a numeric prefix yields `Input::Unparseable` and the rest
///   of the current line is discarded.
/// - Bytes that are not UTF-8 are read as U+FFFD, so they land in an
///   unparseable token instead of failing the read.
pub struct SelectionReader<R> {
    src: R,
    raw: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> SelectionReader<R> {
    pub fn new(src: R) -> Self {
        Self {
            src,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    /// Next selection, or `None` at end of input.
    pub fn next_input(&mut self) -> io::Result<Option<Input>> {
        loop {
            let rest = &self.line[self.pos..];
            self.pos += rest.len() - rest.trim_start().len();

            if self.pos >= self.line.len() {
                self.discard_line();
                self.raw.clear();
                if self.src.read_until(b'\n', &mut self.raw)? == 0 {
                    return Ok(None);
                }
                self.line = String::from_utf8_lossy(&self.raw).into_owned();
                continue;
            }

            let rest = &self.line[self.pos..];
            let token_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let token = &rest[..token_len];

            let parsed = numeric_prefix_len(token)
                .and_then(|n| token[..n].parse::<i64>().ok().map(|code| (n, code)));
            if let Some((n, code)) = parsed {
                self.pos += n;
                return Ok(Some(Input::Code(code)));
            }

            let text = token.to_string();
            self.discard_line();
            return Ok(Some(Input::Unparseable(text)));
        }
    }

    fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }
}

fn numeric_prefix_len(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(sign + digits)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read_all(text: &str) -> Vec<Input> {
        let mut r = SelectionReader::new(Cursor::new(text.to_string()));
        let mut out = Vec::new();
        while let Some(i) = r.next_input().unwrap() {
            out.push(i);
        }
        out
    }

    #[test]
    fn one_code_per_line() {
        assert_eq!(
            read_all("1\n2\n0\n"),
            vec![Input::Code(1), Input::Code(2), Input::Code(0)]
        );
    }

    #[test]
    fn blank_lines_and_padding_are_skipped() {
        assert_eq!(read_all("\n   \n  2  \n"), vec![Input::Code(2)]);
    }

    #[test]
    fn several_codes_on_one_line_are_read_in_turn() {
        assert_eq!(
            read_all("1 2\t-3\n"),
            vec![Input::Code(1), Input::Code(2), Input::Code(-3)]
        );
    }

    #[test]
    fn garbage_discards_rest_of_line() {
        assert_eq!(
            read_all("abc 1 2\n2\n"),
            vec![Input::Unparseable("abc".into()), Input::Code(2)]
        );
    }

    #[test]
    fn numeric_prefix_leaves_suffix_pending() {
        assert_eq!(
            read_all("2abc 1\n"),
            vec![Input::Code(2), Input::Unparseable("abc".into())]
        );
    }

    #[test]
    fn lone_sign_and_overflow_are_unparseable() {
        assert_eq!(
            read_all("-\n99999999999999999999\n"),
            vec![
                Input::Unparseable("-".into()),
                Input::Unparseable("99999999999999999999".into())
            ]
        );
    }

    #[test]
    fn invalid_utf8_line_is_unparseable_and_reading_continues() {
        let mut r = SelectionReader::new(Cursor::new(b"\xff\xfe 2\n1\n0\n".to_vec()));
        let mut inputs = Vec::new();
        while let Some(i) = r.next_input().unwrap() {
            inputs.push(i);
        }
        assert_eq!(
            inputs,
            vec![
                Input::Unparseable("\u{FFFD}\u{FFFD}".into()),
                Input::Code(1),
                Input::Code(0)
            ]
        );
    }

    #[test]
    fn last_line_without_newline_is_read() {
        assert_eq!(read_all("1\n0"), vec![Input::Code(1), Input::Code(0)]);
    }
}
