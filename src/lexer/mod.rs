mod lexmap;
mod token;
mod tokens;

pub use lexmap::*;
pub use token::*;
pub use tokens::*;

use once_cell::sync::Lazy;
use std::{error::Error, fmt::Display, iter::Peekable, str::Chars};

#[macro_export]
macro_rules! terminal {
    ($map:ident, $name:ident, $value:expr) => {
        $map.insert($value, TokenKind::$name);
    };
}

static KEYWORDS: Lazy<LexMap> = Lazy::new(|| {
    let mut m = LexMap::default();

    terminal!(m, Datum, "datum");
    terminal!(m, Verify, "verify");
    terminal!(m, Then, "then");
    terminal!(m, Otherwise, "otherwise");
    terminal!(m, Conclude, "conclude");
    terminal!(m, Cycle, "cycle");
    terminal!(m, Do, "do");
    terminal!(m, Algorithm, "algorithm");
    terminal!(m, Begin, "begin");
    terminal!(m, End, "end");
    terminal!(m, Result, "result");
    terminal!(m, Reveal, "reveal");
    terminal!(m, Inquire, "inquire");
    terminal!(m, Incorporate, "incorporate");
    terminal!(m, Structure, "structure");
    terminal!(m, And, "and");
    terminal!(m, Or, "or");
    terminal!(m, Not, "not");
    terminal!(m, Whole, "whole");
    terminal!(m, Precise, "precise");
    terminal!(m, Series, "series");
    terminal!(m, State, "state");
    terminal!(m, Sequence, "sequence");
    terminal!(m, BooleanLiteral, "true");
    terminal!(m, BooleanLiteral, "false");

    m
});

static PUNCTUATION: Lazy<LexMap> = Lazy::new(|| {
    let mut m = LexMap::default();

    terminal!(m, Plus, "+");
    terminal!(m, Minus, "-");
    terminal!(m, Star, "*");
    terminal!(m, Slash, "/");
    terminal!(m, Percent, "%");
    terminal!(m, Assign, "=");
    terminal!(m, Dot, ".");
    terminal!(m, Colon, ":");
    terminal!(m, Semicolon, ";");
    terminal!(m, Comma, ",");
    terminal!(m, LParen, "(");
    terminal!(m, RParen, ")");
    terminal!(m, LBracket, "[");
    terminal!(m, RBracket, "]");
    terminal!(m, Greater, ">");
    terminal!(m, Less, "<");
    terminal!(m, Arrow, "->");
    terminal!(m, Equal, "==");
    terminal!(m, GreaterEqual, ">=");
    terminal!(m, LessEqual, "<=");
    terminal!(m, NotEqual, "!=");

    m
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError(String);

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Error for LexError {}

/// Single pass scanner turning source text into a token sequence.
///
/// The cursor state (iterator, line, column) only ever moves through the
/// private helpers, so line and column can not drift apart from the
/// consumed characters.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    iterator: Peekable<Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iterator = input.chars().peekable();

        Self {
            tokens: vec![],
            iterator,
            line: 1,
            col: 1,
        }
    }

    fn peek(&mut self) -> Option<&char> {
        self.iterator.peek()
    }

    fn next(&mut self) -> Option<char> {
        self.iterator.next()
    }

    fn next_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        self.iterator.next_if(func)
    }

    fn eat_whitespace(&mut self) {
        while let Some(next) = self.next_if(|item| item.is_whitespace()) {
            match next {
                '\n' => {
                    self.col = 1;
                    self.line += 1;
                }
                _ => self.col += 1,
            }
        }
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.eat_whitespace();

            let Some(&next) = self.peek() else {
                break;
            };

            match next {
                'a'..='z' | 'A'..='Z' | '_' => self.lex_alphanumeric(),
                '0'..='9' => self.lex_numeric(),
                '"' => self.lex_string()?,
                '/' => self.lex_slash(),
                _ => self.lex_special()?,
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", self.line, self.col));

        Ok(self.tokens)
    }

    fn lex_alphanumeric(&mut self) {
        let position = (self.line, self.col);
        let mut stack = vec![];

        while let Some(next) = self.next_if(|item| item.is_alphanumeric() || *item == '_') {
            self.col += 1;
            stack.push(next);
        }

        let read = stack.iter().collect::<String>();

        let kind = KEYWORDS
            .get(read.as_str())
            .unwrap_or(TokenKind::Identifier);
        self.tokens
            .push(Token::new(kind, read, position.0, position.1));
    }

    fn lex_numeric(&mut self) {
        let position = (self.line, self.col);
        let mut stack = vec![];
        let mut dot_seen = false;

        while let Some(&next) = self.peek() {
            if next.is_ascii_digit() {
                stack.push(next);
            } else if next == '.' && !dot_seen {
                dot_seen = true;
                stack.push(next);
            } else {
                break;
            }
            self.next();
            self.col += 1;
        }

        let read = stack.iter().collect::<String>();

        let kind = if dot_seen {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.tokens
            .push(Token::new(kind, read, position.0, position.1));
    }

    fn lex_string(&mut self) -> LexResult<()> {
        let position = (self.line, self.col);

        // opening quote
        self.next();
        self.col += 1;

        let mut stack = vec![];
        loop {
            let Some(next) = self.next() else {
                return Err(LexError(format!(
                    "Unterminated string literal at line {}",
                    self.line
                )));
            };

            match next {
                '"' => {
                    self.col += 1;
                    break;
                }
                '\n' => {
                    self.line += 1;
                    self.col = 1;
                    stack.push(next);
                }
                _ => {
                    self.col += 1;
                    stack.push(next);
                }
            }
        }

        let read = stack.iter().collect::<String>();
        self.tokens
            .push(Token::new(TokenKind::StringLiteral, read, self.line, position.1));

        Ok(())
    }

    /// A `/` is either the start of a `//` comment or a plain operator.
    fn lex_slash(&mut self) {
        let position = (self.line, self.col);

        self.next();
        self.col += 1;

        if self.next_if(|item| *item == '/').is_some() {
            self.col += 1;
            while self.next_if(|item| *item != '\n').is_some() {
                self.col += 1;
            }
            return;
        }

        self.tokens
            .push(Token::new(TokenKind::Slash, "/", position.0, position.1));
    }

    fn lex_special(&mut self) -> LexResult<()> {
        let position = (self.line, self.col);
        let mut stack = vec![];

        while let Some(next) = self.next() {
            self.col += 1;
            stack.push(next);

            let read = stack.iter().collect::<String>();

            let can_read_next = self
                .peek()
                .map(|item| {
                    let mut attempt = stack.clone();
                    attempt.push(*item);
                    let attempt = attempt.iter().collect::<String>();
                    PUNCTUATION.can_match(attempt.as_str())
                })
                .unwrap_or(false);

            if can_read_next {
                continue;
            }

            let Some(kind) = PUNCTUATION.get(read.as_str()) else {
                return Err(LexError(format!(
                    "Unexpected character '{read}' at line {line}, column {col}",
                    line = position.0,
                    col = position.1
                )));
            };

            self.tokens
                .push(Token::new(kind, read, position.0, position.1));
            break;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .lex()
            .expect("lexing failed")
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_lex_alphabetic_id() {
        let lexer = Lexer::new("letter");

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::Identifier, "letter", 1, 1),
                Token::new(TokenKind::Eof, "", 1, 7)
            ]),
            lexer.lex()
        )
    }

    #[test]
    fn test_lex_numeric() {
        let lexer = Lexer::new("1337");

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::IntegerLiteral, "1337", 1, 1),
                Token::new(TokenKind::Eof, "", 1, 5)
            ]),
            lexer.lex()
        )
    }

    #[test]
    fn test_lex_float() {
        let lexer = Lexer::new("13.37");

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::FloatLiteral, "13.37", 1, 1),
                Token::new(TokenKind::Eof, "", 1, 6)
            ]),
            lexer.lex()
        )
    }

    #[test]
    fn test_second_dot_ends_number() {
        assert_eq!(
            vec![
                TokenKind::FloatLiteral,
                TokenKind::Dot,
                TokenKind::IntegerLiteral,
                TokenKind::Eof
            ],
            kinds("1.2.3")
        );
    }

    #[test]
    fn test_lex_declaration() {
        let lexer = Lexer::new("datum foo: whole = 42;");

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::Datum, "datum", 1, 1),
                Token::new(TokenKind::Identifier, "foo", 1, 7),
                Token::new(TokenKind::Colon, ":", 1, 10),
                Token::new(TokenKind::Whole, "whole", 1, 12),
                Token::new(TokenKind::Assign, "=", 1, 18),
                Token::new(TokenKind::IntegerLiteral, "42", 1, 20),
                Token::new(TokenKind::Semicolon, ";", 1, 22),
                Token::new(TokenKind::Eof, "", 1, 23)
            ]),
            lexer.lex()
        );
    }

    #[test]
    fn test_keyword_precedence() {
        let words = [
            ("datum", TokenKind::Datum),
            ("verify", TokenKind::Verify),
            ("then", TokenKind::Then),
            ("otherwise", TokenKind::Otherwise),
            ("conclude", TokenKind::Conclude),
            ("cycle", TokenKind::Cycle),
            ("do", TokenKind::Do),
            ("algorithm", TokenKind::Algorithm),
            ("begin", TokenKind::Begin),
            ("end", TokenKind::End),
            ("result", TokenKind::Result),
            ("reveal", TokenKind::Reveal),
            ("inquire", TokenKind::Inquire),
            ("incorporate", TokenKind::Incorporate),
            ("structure", TokenKind::Structure),
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("not", TokenKind::Not),
            ("whole", TokenKind::Whole),
            ("precise", TokenKind::Precise),
            ("series", TokenKind::Series),
            ("state", TokenKind::State),
            ("sequence", TokenKind::Sequence),
            ("true", TokenKind::BooleanLiteral),
            ("false", TokenKind::BooleanLiteral),
        ];

        for (word, expected) in words {
            assert_eq!(vec![expected, TokenKind::Eof], kinds(word), "for '{word}'");
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(vec![TokenKind::Identifier, TokenKind::Eof], kinds("database"));
        assert_eq!(vec![TokenKind::Identifier, TokenKind::Eof], kinds("ending"));
        assert_eq!(vec![TokenKind::Identifier, TokenKind::Eof], kinds("not_done"));
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(
            vec![
                TokenKind::Arrow,
                TokenKind::Equal,
                TokenKind::GreaterEqual,
                TokenKind::LessEqual,
                TokenKind::NotEqual,
                TokenKind::Eof
            ],
            kinds("-> == >= <= !=")
        );
    }

    #[test]
    fn test_longest_match_without_spaces() {
        assert_eq!(
            vec![
                TokenKind::Equal,
                TokenKind::IntegerLiteral,
                TokenKind::Eof
            ],
            kinds("==5")
        );
        assert_eq!(
            vec![TokenKind::LessEqual, TokenKind::Less, TokenKind::Eof],
            kinds("<=<")
        );
        assert_eq!(
            vec![TokenKind::Minus, TokenKind::Greater, TokenKind::Eof],
            kinds("- >")
        );
    }

    #[test]
    fn test_comment_consumed_to_end_of_line() {
        let lexer = Lexer::new("1 // everything here is skipped ;;;\n2");

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::IntegerLiteral, "1", 1, 1),
                Token::new(TokenKind::IntegerLiteral, "2", 2, 1),
                Token::new(TokenKind::Eof, "", 2, 2)
            ]),
            lexer.lex()
        );
    }

    #[test]
    fn test_single_slash_is_operator() {
        assert_eq!(
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::Slash,
                TokenKind::IntegerLiteral,
                TokenKind::Eof
            ],
            kinds("10 / 2")
        );
    }

    #[test]
    fn test_string_literal_is_verbatim() {
        let tokens = Lexer::new("\"hi // there\"").lex().expect("lexing failed");

        assert_eq!(
            Token::new(TokenKind::StringLiteral, "hi // there", 1, 1),
            tokens[0]
        );
    }

    #[test]
    fn test_string_with_newline_updates_line() {
        let tokens = Lexer::new("\"a\nb\" x").lex().expect("lexing failed");

        assert_eq!(Token::new(TokenKind::StringLiteral, "a\nb", 2, 1), tokens[0]);
        assert_eq!(Token::new(TokenKind::Identifier, "x", 2, 4), tokens[1]);
    }

    #[test]
    fn test_unterminated_string() {
        let error = Lexer::new("\"oops").lex().expect_err("should not lex");

        assert!(error
            .to_string()
            .contains("Unterminated string literal at line 1"));
    }

    #[test]
    fn test_unexpected_character() {
        let error = Lexer::new("datum @").lex().expect_err("should not lex");

        assert_eq!(
            "Unexpected character '@' at line 1, column 7",
            error.to_string()
        );
    }

    #[test]
    fn test_lexing_is_deterministic() {
        let input = "algorithm main() -> whole begin reveal(\"hi\"); result 0; end";

        assert_eq!(Lexer::new(input).lex(), Lexer::new(input).lex());
    }

    #[test]
    fn test_line_tracking() {
        let tokens = Lexer::new("datum x: whole;\ndatum y: whole;")
            .lex()
            .expect("lexing failed");

        assert_eq!((1, 1), tokens[0].position());
        assert_eq!((2, 1), tokens[5].position());
        assert_eq!((2, 7), tokens[6].position());
    }
}
