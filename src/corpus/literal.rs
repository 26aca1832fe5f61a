//! Parser for the Python-literal subset found in exported movie metadata,
//! e.g. `[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}]`.

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Bytes(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a string key in a dict literal.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        match self {
            // Later duplicates win, as they do when the dict is built.
            Literal::Dict(entries) => entries
                .iter()
                .rev()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?} at offset {1}")]
    UnexpectedChar(char, usize),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
    #[error("trailing input at offset {0}")]
    TrailingInput(usize),
    #[error("nesting deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Containers nested deeper than this are rejected rather than recursed into.
pub const MAX_DEPTH: usize = 64;

pub fn parse_literal(input: &str) -> Result<Literal, LiteralError> {
    let mut parser = Parser {
        chars: input.char_indices().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if let Some(&(offset, _)) = parser.chars.get(parser.pos) {
        return Err(LiteralError::TrailingInput(offset));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<(usize, char)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.chars.get(self.pos).map(|&(o, _)| o).unwrap_or(usize::MAX)
    }

    fn next(&mut self) -> Result<char, LiteralError> {
        let c = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        self.skip_whitespace();
        let offset = self.offset();
        match self.next()? {
            c if c == expected => Ok(()),
            c => Err(LiteralError::UnexpectedChar(c, offset)),
        }
    }

    fn parse_value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_whitespace();
        let offset = self.offset();
        match self.peek().ok_or(LiteralError::UnexpectedEnd)? {
            open @ ('[' | '(' | '{') => {
                self.pos += 1;
                self.depth += 1;
                if self.depth > MAX_DEPTH {
                    return Err(LiteralError::TooDeep);
                }
                let value = match open {
                    '[' => self.parse_sequence(']').map(Literal::List),
                    '(' => self.parse_sequence(')').map(Literal::Tuple),
                    _ => self.parse_dict(),
                };
                self.depth -= 1;
                value
            }
            '\'' | '"' => self.parse_string(false).map(Literal::Str),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.parse_number(),
            c if c.is_alphabetic() || c == '_' => {
                let word = self.take_while(|c| c.is_alphanumeric() || c == '_');
                let quoted = matches!(self.peek(), Some('\'' | '"'));
                match word.as_str() {
                    "True" => Ok(Literal::Bool(true)),
                    "False" => Ok(Literal::Bool(false)),
                    "None" => Ok(Literal::None),
                    // String prefixes.
                    "u" | "U" if quoted => self.parse_string(false).map(Literal::Str),
                    "r" | "R" if quoted => self.parse_string(true).map(Literal::Str),
                    "b" | "B" if quoted => self.parse_string(false).map(Literal::Bytes),
                    "br" | "rb" | "Br" | "bR" | "BR" | "rB" | "Rb" | "RB" if quoted => {
                        self.parse_string(true).map(Literal::Bytes)
                    }
                    _ => Err(LiteralError::UnexpectedChar(c, offset)),
                }
            }
            c => Err(LiteralError::UnexpectedChar(c, offset)),
        }
    }

    // Elements separated by commas, trailing comma allowed.
    fn parse_sequence(&mut self, close: char) -> Result<Vec<Literal>, LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(items);
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            let offset = self.offset();
            match self.next()? {
                ',' => continue,
                c if c == close => return Ok(items),
                c => return Err(LiteralError::UnexpectedChar(c, offset)),
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Literal, LiteralError> {
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Literal::Dict(entries));
            }
            let key = self.parse_value()?;
            self.expect(':')?;
            let value = self.parse_value()?;
            entries.push((key, value));
            self.skip_whitespace();
            let offset = self.offset();
            match self.next()? {
                ',' => continue,
                '}' => return Ok(Literal::Dict(entries)),
                c => return Err(LiteralError::UnexpectedChar(c, offset)),
            }
        }
    }

    fn parse_string(&mut self, raw: bool) -> Result<String, LiteralError> {
        let quote = self.next()?;
        let mut out = String::new();
        loop {
            let offset = self.offset();
            match self.next()? {
                c if c == quote => return Ok(out),
                '\n' => return Err(LiteralError::UnexpectedChar('\n', offset)),
                // Raw strings keep the backslash and the character after it.
                '\\' if raw => {
                    out.push('\\');
                    out.push(self.next()?);
                }
                '\\' => self.parse_escape(&mut out, offset)?,
                c => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String, offset: usize) -> Result<(), LiteralError> {
        match self.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            '\n' => {}
            'x' => out.push(self.parse_hex(2, offset)?),
            'u' => out.push(self.parse_hex(4, offset)?),
            'U' => out.push(self.parse_hex(8, offset)?),
            // Unknown escapes keep their backslash.
            c => {
                out.push('\\');
                out.push(c);
            }
        }
        Ok(())
    }

    fn parse_hex(&mut self, digits: usize, offset: usize) -> Result<char, LiteralError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .next()?
                .to_digit(16)
                .ok_or(LiteralError::InvalidEscape(offset))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(LiteralError::InvalidEscape(offset))
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let text = self.take_while(|c| {
            c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '_'
        });
        let cleaned = text.replace('_', "");
        if let Ok(n) = cleaned.parse::<i64>() {
            return Ok(Literal::Int(n));
        }
        // Rust accepts "inf"/"nan" spellings that are names, not numbers, in Python.
        let is_numeric = cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        match cleaned.parse::<f64>() {
            Ok(f) if is_numeric => Ok(Literal::Float(f)),
            _ => Err(LiteralError::InvalidNumber(text)),
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.pos += 1;
        }
        out
    }
}
