use logos::Logos;
use std::fmt;

/// The closed set of token kinds produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex("[0-9]+")]
    Int,
    /// Reserved. Never produced by the lexer.
    String,

    // identifiers
    /// Keywords are identified later with [`TokenKind::lookup_ident`].
    #[regex("[a-zA-Z_][a-zA-Z_!?]*")]
    Ident,

    // operators
    #[token("=")]
    Assign,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be prefix
    #[token("*")]
    Multi,
    #[token("/")]
    Divide,
    #[token("!")]
    Bang,
    #[token("?")]
    What,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    // punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,

    // misc
    #[regex(r"[ \t\n\r]+", logos::skip)]
    #[error]
    Illegal,

    /// Only generated by the lexer once the input is exhausted.
    Eof,
}

impl TokenKind {
    /// Maps a word to its keyword kind or [`TokenKind::Ident`] if it is not a keyword.
    pub fn lookup_ident(word: &str) -> TokenKind {
        match word {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }

    /// Returns the binding precedence of the token when it appears after an expression.
    /// Tokens that cannot continue an expression (including `;`, `)` and `}`) return [`Precedence::Lowest`].
    pub fn precedence(self) -> Precedence {
        match self {
            TokenKind::Eq | TokenKind::Ne => Precedence::Equals,
            TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge => {
                Precedence::LessGreater
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Multi | TokenKind::Divide => Precedence::Product,
            TokenKind::PlusPlus | TokenKind::MinusMinus | TokenKind::What => Precedence::Suffix,
            TokenKind::LParen => Precedence::LParen,
            _ => Precedence::Lowest,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multi => "*",
            TokenKind::Divide => "/",
            TokenKind::Bang => "!",
            TokenKind::What => "?",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        f.write_str(spelling)
    }
}

/// Binding power of an operator, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<`, `<=`, `>` and `>=`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// `++`, `--` and `?`
    Suffix,
    /// Completes the ladder. No token returns it: `(` after an expression binds at [`Precedence::LParen`].
    Call,
    LParen,
}

/// A token kind together with the exact source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(TokenKind::lookup_ident("fn"), TokenKind::Function);
        assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
        assert_eq!(TokenKind::lookup_ident("returns"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("true?"), TokenKind::Ident);
    }

    #[test]
    fn test_precedence_ladder() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(TokenKind::Eq.precedence() < TokenKind::Lt.precedence());
        assert!(TokenKind::Lt.precedence() < TokenKind::Plus.precedence());
        assert!(TokenKind::Plus.precedence() < TokenKind::Divide.precedence());
        assert!(TokenKind::Multi.precedence() < Precedence::Prefix);
        assert!(Precedence::Prefix < TokenKind::What.precedence());
        assert!(TokenKind::MinusMinus.precedence() < TokenKind::LParen.precedence());
        assert_eq!(TokenKind::Semicolon.precedence(), Precedence::Lowest);
        assert_eq!(TokenKind::RBrace.precedence(), Precedence::Lowest);
        assert_eq!(TokenKind::Bang.precedence(), Precedence::Lowest);
    }

    #[test]
    fn test_call_binds_tightest() {
        assert!(Precedence::Suffix < Precedence::Call);
        assert!(Precedence::Call < TokenKind::LParen.precedence());
        assert_eq!(TokenKind::LParen.precedence(), Precedence::LParen);
    }

    #[test]
    fn test_display_matches_diagnostics() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
        assert_eq!(TokenKind::Ge.to_string(), ">=");
    }
}
