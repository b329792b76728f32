use std::fmt;

/// Where a token sits in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 0-based byte offset of the first character
    pub offset: usize,
    /// Length of the lexeme in bytes
    pub len: usize,
}

/// Every operator an expression can contain, including the structural
/// parenthesis markers.
///
/// `-` always lexes as [`Operator::Subtract`]; the tree builder decides from
/// context whether it negates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    LeftParen,
    RightParen,
    BitNot,
    Negate,
    Multiply,
    Divide,
    Modulo,
    Add,
    Subtract,
    ShiftLeft,
    ShiftRight,
    BitAnd,
    BitXor,
    BitOr,
}

impl Operator {
    /// The operator's source spelling.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
            Operator::BitNot => "~",
            Operator::Negate | Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Add => "+",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::BitAnd => "&",
            Operator::BitXor => "^",
            Operator::BitOr => "|",
        }
    }

    /// Operators that only ever take one operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Operator::BitNot | Operator::Negate)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What a lexed token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Unsigned literal magnitude
    Integer(u64),
    Operator(Operator),
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Integer(value) => write!(f, "{value}"),
            TokenType::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// A token together with its place in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub location: Location,
}

impl Token {
    pub fn new(token_type: TokenType, location: Location) -> Self {
        Self {
            token_type,
            location,
        }
    }
}
