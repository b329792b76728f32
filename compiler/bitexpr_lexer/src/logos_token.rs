use logos::Logos;

use crate::literal::parse_literal;
use crate::token::{Operator, TokenType};

/// Raw token type used by the logos lexer.
///
/// Spaces and tabs between tokens are skipped; nothing else is.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
pub enum LogosToken {
    // --- Literals ---
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_literal(lex.slice()))]
    HexLiteral(u64),
    #[regex(r"0[bB][01]+", |lex| parse_literal(lex.slice()))]
    BinLiteral(u64),
    #[regex(r"0[0-7]+", |lex| parse_literal(lex.slice()))]
    OctLiteral(u64),
    #[regex(r"[1-9][0-9]*|0", |lex| parse_literal(lex.slice()))]
    IntLiteral(u64),

    // --- Operators (two-character first) ---
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("~")]
    BitNot,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("&")]
    BitAnd,
    #[token("^")]
    BitXor,
    #[token("|")]
    BitOr,

    // --- Delimiters ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl LogosToken {
    /// The semantic token this raw token stands for.
    pub fn token_type(&self) -> TokenType {
        let op = match *self {
            LogosToken::HexLiteral(v)
            | LogosToken::BinLiteral(v)
            | LogosToken::OctLiteral(v)
            | LogosToken::IntLiteral(v) => return TokenType::Integer(v),
            LogosToken::Shl => Operator::ShiftLeft,
            LogosToken::Shr => Operator::ShiftRight,
            LogosToken::BitNot => Operator::BitNot,
            LogosToken::Star => Operator::Multiply,
            LogosToken::Slash => Operator::Divide,
            LogosToken::Percent => Operator::Modulo,
            LogosToken::Plus => Operator::Add,
            LogosToken::Minus => Operator::Subtract,
            LogosToken::BitAnd => Operator::BitAnd,
            LogosToken::BitXor => Operator::BitXor,
            LogosToken::BitOr => Operator::BitOr,
            LogosToken::LParen => Operator::LeftParen,
            LogosToken::RParen => Operator::RightParen,
        };
        TokenType::Operator(op)
    }
}
