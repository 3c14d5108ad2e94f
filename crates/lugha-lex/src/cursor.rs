//! Character cursor for traversing source code.

/// A cursor for traversing source code character by character.
///
/// Maintains byte position plus 1-based line/column, and handles UTF-8
/// correctly since identifiers are drawn from the Arabic letter block.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_over_ascii() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.current_char(), 'a');
        c.advance();
        assert_eq!(c.current_char(), 'b');
    }

    #[test]
    fn advances_over_arabic_letters() {
        let mut c = Cursor::new("عرف");
        assert_eq!(c.current_char(), 'ع');
        c.advance();
        assert_eq!(c.current_char(), 'ر');
        c.advance();
        assert_eq!(c.current_char(), 'ف');
    }

    #[test]
    fn tracks_line_and_column() {
        let mut c = Cursor::new("a\nb");
        c.advance();
        assert_eq!(c.line(), 1);
        c.advance();
        assert_eq!(c.line(), 2);
        assert_eq!(c.column(), 1);
    }
}
