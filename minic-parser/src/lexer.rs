use logos::{Filter, Lexer, Logos};
use std::fmt;

/// Skips a `/* ... */` comment. An unterminated comment swallows the rest of the input and becomes [`Token::Error`].
fn block_comment<'s>(lex: &mut Lexer<'s, Token>) -> Filter<()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Filter::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            Filter::Emit(())
        }
    }
}

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum Token {
    // literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    NumberLit(i32),

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    // - ordering
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    // - assignment
    #[token("=")]
    Equals,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,

    // keywords
    #[token("int")]
    Int,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[token("/*", block_comment)] // block comments
    #[error]
    Error,

    /// Only generated in parse phase when `lexer.next()` returns `None`.
    Eof,
}

impl Token {
    /// Returns the binary binding power or `None` if invalid binop token.
    /// Binding power `0` is reserved for accepting any expression.
    /// All binary operators are left associative.
    pub fn binop_bp(&self) -> Option<(u8, u8)> {
        match self {
            /* Ordering */
            Token::LessThan | Token::GreaterThan => Some((2, 3)),
            /* Additive */
            Token::Plus | Token::Minus => Some((4, 5)),
            /* Multiplicative */
            Token::Asterisk | Token::Slash | Token::Percent => Some((6, 7)),
            _ => None,
        }
    }

    /// Returns the operator character stored in [`crate::ast::Node::BinaryOp`] or `None` if not a binop token.
    pub fn as_operator(&self) -> Option<char> {
        match self {
            Token::Plus => Some('+'),
            Token::Minus => Some('-'),
            Token::Asterisk => Some('*'),
            Token::Slash => Some('/'),
            Token::Percent => Some('%'),
            Token::LessThan => Some('<'),
            Token::GreaterThan => Some('>'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::NumberLit(val) => write!(f, "number `{}`", val),
            Token::Identifier(ident) => write!(f, "identifier `{}`", ident),
            Token::Plus => f.write_str("`+`"),
            Token::Minus => f.write_str("`-`"),
            Token::Asterisk => f.write_str("`*`"),
            Token::Slash => f.write_str("`/`"),
            Token::Percent => f.write_str("`%`"),
            Token::LessThan => f.write_str("`<`"),
            Token::GreaterThan => f.write_str("`>`"),
            Token::Equals => f.write_str("`=`"),
            Token::OpenParen => f.write_str("`(`"),
            Token::CloseParen => f.write_str("`)`"),
            Token::OpenBrace => f.write_str("`{`"),
            Token::CloseBrace => f.write_str("`}`"),
            Token::Comma => f.write_str("`,`"),
            Token::Semi => f.write_str("`;`"),
            Token::Int => f.write_str("`int`"),
            Token::Return => f.write_str("`return`"),
            Token::If => f.write_str("`if`"),
            Token::Else => f.write_str("`else`"),
            Token::While => f.write_str("`while`"),
            Token::Error => f.write_str("invalid token"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            lex("int integer return returned if iffy else while _w1"),
            vec![
                Token::Int,
                Token::Identifier("integer".to_string()),
                Token::Return,
                Token::Identifier("returned".to_string()),
                Token::If,
                Token::Identifier("iffy".to_string()),
                Token::Else,
                Token::While,
                Token::Identifier("_w1".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(
            lex("x=(1+2)*3-4/5%6<7>8;{f(a,b)}"),
            vec![
                Token::Identifier("x".to_string()),
                Token::Equals,
                Token::OpenParen,
                Token::NumberLit(1),
                Token::Plus,
                Token::NumberLit(2),
                Token::CloseParen,
                Token::Asterisk,
                Token::NumberLit(3),
                Token::Minus,
                Token::NumberLit(4),
                Token::Slash,
                Token::NumberLit(5),
                Token::Percent,
                Token::NumberLit(6),
                Token::LessThan,
                Token::NumberLit(7),
                Token::GreaterThan,
                Token::NumberLit(8),
                Token::Semi,
                Token::OpenBrace,
                Token::Identifier("f".to_string()),
                Token::OpenParen,
                Token::Identifier("a".to_string()),
                Token::Comma,
                Token::Identifier("b".to_string()),
                Token::CloseParen,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            lex("1 // line comment\n/* block\n * comment **/ 2"),
            vec![Token::NumberLit(1), Token::NumberLit(2)]
        );
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(lex("/* a */ 1"), vec![Token::NumberLit(1)]);
        assert_eq!(lex("/**/ 1"), vec![Token::NumberLit(1)]);
        assert_eq!(lex("/* x * y / z */ 1"), vec![Token::NumberLit(1)]);
        assert_eq!(
            lex("1 /* first */ + /* second\n line */ 2"),
            vec![Token::NumberLit(1), Token::Plus, Token::NumberLit(2)]
        );
        // comments do not nest
        assert_eq!(
            lex("/* /* */ 1 */"),
            vec![Token::NumberLit(1), Token::Asterisk, Token::Slash]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut lexer = Token::lexer("1 /* never closed\n2");
        assert_eq!(lexer.next(), Some(Token::NumberLit(1)));
        assert_eq!(lexer.next(), Some(Token::Error));
        assert_eq!(lexer.span(), 2..19);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(lex("@"), vec![Token::Error]);
        // Does not fit in an `int`.
        assert_eq!(lex("99999999999"), vec![Token::Error]);
    }

    #[test]
    fn test_binop() {
        assert_eq!(Token::Plus.as_operator(), Some('+'));
        assert_eq!(Token::Equals.as_operator(), None);
        assert_eq!(Token::Equals.binop_bp(), None);
        assert!(Token::Asterisk.binop_bp() > Token::Plus.binop_bp());
        assert!(Token::Plus.binop_bp() > Token::LessThan.binop_bp());
    }
}
