use crate::ast::{Key, Node, Pair};
use crate::error::SyntaxError;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Deepest array/object nesting accepted before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Turns object-rooted JSON text into a parse tree.
///
/// The value model only ever walks the returned [`Node`], so any implementation
/// honouring this contract can stand in for the built-in [`DefaultParser`].
pub trait ParseObjectText {
    fn parse_object_text(&self, text: &str) -> Result<Node>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultParser;

impl ParseObjectText for DefaultParser {
    fn parse_object_text(&self, text: &str) -> Result<Node> {
        Parser::new(text).parse_document()
    }
}

pub struct Parser {
    pos: usize,
    chars: Vec<char>,
    line_number: usize,
    depth: usize,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        Self {
            pos: 0,
            chars: text.chars().collect(),
            line_number: 1,
            depth: 0,
        }
    }
    fn error(&self, message: String) -> SyntaxError {
        tracing::trace!(line = self.line_number, %message, "syntax error");
        SyntaxError::new(message, self.line_number)
    }
    fn succ(&mut self) {
        if self.get_cur_char() == Some('\n') {
            self.line_number += 1;
        }
        self.pos += 1;
    }
    fn get_cur_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }
    fn cur_char_is(&self, ch: char) -> bool {
        self.get_cur_char() == Some(ch)
    }
    fn expect_char(&self, expect: char) -> Result<()> {
        match self.get_cur_char() {
            Some(actual) if actual == expect => Ok(()),
            Some(actual) => Err(self.error(format!(
                "expected: `{}`, found: `{}`",
                expect, actual
            ))),
            None => Err(self.error(format!("expected `{}`", expect))),
        }
    }
    // check current token and skip it
    fn consume_char(&mut self, ch: char) -> Result<()> {
        self.expect_char(ch)?;
        self.succ();
        Ok(())
    }
    fn skip_whitespace(&mut self) {
        // JSON whitespace only, not `char::is_whitespace`
        while matches!(
            self.get_cur_char(),
            Some(' ') | Some('\t') | Some('\n') | Some('\r')
        ) {
            self.succ();
        }
    }
    fn parse_hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .get_cur_char()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| self.error("expected 4 hex digits after `\\u`".to_string()))?;
            code = code * 16 + digit;
            self.succ();
        }
        Ok(code)
    }
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let high = self.parse_hex4()?;
        let code = if (0xD800..0xDC00).contains(&high) {
            self.consume_char('\\')?;
            self.consume_char('u')?;
            let low = self.parse_hex4()?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(self.error(format!("invalid low surrogate: `\\u{:04x}`", low)));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };
        char::from_u32(code)
            .ok_or_else(|| self.error(format!("invalid unicode escape: `\\u{:04x}`", code)))
    }
    fn parse_escape(&mut self) -> Result<char> {
        self.consume_char('\\')?;
        let ch = self
            .get_cur_char()
            .ok_or_else(|| self.error("unterminated escape sequence".to_string()))?;
        self.succ();
        let decoded = match ch {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.parse_unicode_escape(),
            other => return Err(self.error(format!("invalid escape: `\\{}`", other))),
        };
        Ok(decoded)
    }
    fn parse_inner_string(&mut self) -> Result<String> {
        self.consume_char('"')?; // left quotes
        let mut s = String::new();
        loop {
            match self.get_cur_char() {
                Some('"') => break,
                Some('\\') => s.push(self.parse_escape()?),
                Some(ch) if ch < '\u{20}' => {
                    return Err(self.error(format!(
                        "unescaped control character in string: {:?}",
                        ch
                    )))
                }
                Some(ch) => {
                    s.push(ch);
                    self.succ();
                }
                None => return Err(self.error("unterminated string".to_string())),
            }
        }
        self.consume_char('"')?; // right quotes
        Ok(s)
    }
    fn parse_string_value(&mut self) -> Result<Node> {
        let s = self.parse_inner_string()?;
        Ok(Node::String(s))
    }
    fn parse_string_key(&mut self) -> Result<Key> {
        let s = self.parse_inner_string()?;
        Ok(Key(s))
    }
    fn push_digits(&mut self, num: &mut String) -> Result<()> {
        match self.get_cur_char() {
            Some(ch) if ch.is_ascii_digit() => {}
            Some(other) => return Err(self.error(format!("expected digit, found: `{}`", other))),
            None => return Err(self.error("expected digit".to_string())),
        }
        while let Some(ch) = self.get_cur_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            num.push(ch);
            self.succ();
        }
        Ok(())
    }
    fn parse_number(&mut self) -> Result<Node> {
        let mut num = String::new();
        if self.cur_char_is('-') {
            num.push('-');
            self.succ();
        }
        if self.cur_char_is('0') {
            num.push('0');
            self.succ();
        } else {
            self.push_digits(&mut num)?;
        }
        if self.cur_char_is('.') {
            num.push('.');
            self.succ();
            self.push_digits(&mut num)?;
        }
        if let Some(e @ 'e') | Some(e @ 'E') = self.get_cur_char() {
            num.push(e);
            self.succ();
            if let Some(sign @ '+') | Some(sign @ '-') = self.get_cur_char() {
                num.push(sign);
                self.succ();
            }
            self.push_digits(&mut num)?;
        }
        Ok(Node::Number(num))
    }
    fn parse_literal(&mut self, word: &str, node: Node) -> Result<Node> {
        for expected in word.chars() {
            match self.get_cur_char() {
                Some(ch) if ch == expected => self.succ(),
                _ => return Err(self.error(format!("invalid literal, expected `{}`", word))),
            }
        }
        Ok(node)
    }
    // runs `parse` one nesting level deeper, failing past MAX_NESTING_DEPTH
    fn nested<F>(&mut self, parse: F) -> Result<Node>
    where
        F: FnOnce(&mut Self) -> Result<Node>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "nesting too deep, limit is {}",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
    fn parse_object(&mut self) -> Result<Node> {
        self.nested(Self::parse_object_body)
    }
    fn parse_object_body(&mut self) -> Result<Node> {
        self.consume_char('{')?;
        self.skip_whitespace();
        if self.cur_char_is('}') {
            self.succ();
            return Ok(Node::Object(Vec::new()));
        }
        let mut pairs = vec![];
        loop {
            self.skip_whitespace();
            let key = self.parse_string_key()?;
            self.skip_whitespace();
            self.consume_char(':')?;
            let value = self.parse_value()?;
            self.skip_whitespace();
            pairs.push(Pair::new(key, value));
            match self.get_cur_char() {
                Some(',') => self.succ(),
                Some('}') => break,
                Some(other) => {
                    return Err(self.error(format!("expected: `,` or `}}`, found: `{}`", other)))
                }
                None => return Err(self.error("expected `,` or `}`".to_string())),
            }
        }
        self.consume_char('}')?;
        Ok(Node::Object(pairs))
    }
    fn parse_array(&mut self) -> Result<Node> {
        self.nested(Self::parse_array_body)
    }
    fn parse_array_body(&mut self) -> Result<Node> {
        self.consume_char('[')?;
        self.skip_whitespace();
        if self.cur_char_is(']') {
            self.succ();
            return Ok(Node::Array(Vec::new()));
        }
        let mut values = vec![];
        loop {
            let value = self.parse_value()?;
            self.skip_whitespace();
            values.push(value);
            match self.get_cur_char() {
                Some(',') => self.succ(),
                Some(']') => break,
                Some(other) => {
                    return Err(self.error(format!("expected: `,` or `]`, found: `{}`", other)))
                }
                None => return Err(self.error("expected `,` or `]`".to_string())),
            }
        }
        self.consume_char(']')?;
        Ok(Node::Array(values))
    }
    pub fn parse_value(&mut self) -> Result<Node> {
        self.skip_whitespace();
        match self.get_cur_char() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => self.parse_string_value(),
            Some('t') => self.parse_literal("true", Node::Bool(true)),
            Some('f') => self.parse_literal("false", Node::Bool(false)),
            Some('n') => self.parse_literal("null", Node::Null),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(other) => Err(self.error(format!("invalid token: `{}`", other))),
            None => Err(self.error("no token found".to_string())),
        }
    }
    /// Parses a whole document whose root must be an object.
    pub fn parse_document(&mut self) -> Result<Node> {
        self.skip_whitespace();
        if !self.cur_char_is('{') {
            return Err(match self.get_cur_char() {
                Some(other) => self.error(format!("expected object, found: `{}`", other)),
                None => self.error("expected object".to_string()),
            });
        }
        let object = self.parse_object()?;
        self.skip_whitespace();
        match self.get_cur_char() {
            Some(other) => Err(self.error(format!(
                "unexpected `{}` after end of object",
                other
            ))),
            None => Ok(object),
        }
    }
}
