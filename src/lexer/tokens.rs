use super::{Token, TokenKind};

/// Struct for iterating over the token stream produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
    index: usize,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Peek at the current token (if present).
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Kind of the current token; a drained stream reads as end-of-file.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().map(|token| token.kind).unwrap_or(TokenKind::Eof)
    }

    /// Consume and return the current token.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Whether the stream has reached the end-of-file sentinel.
    pub fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Line of the current token, for diagnostics.
    pub fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|token| token.line)
            .unwrap_or(1)
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Self::new(value)
    }
}
