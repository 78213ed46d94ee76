use std::fmt::Display;

// Digraphs ('<:', ':>', '<%', '%>', '%:', '%:%:') are recognized by the
// lexer and collapse to these same variants, so no digraph variants exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Punctuator {
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Colon,
    Semicolon,
    Multiply,
    Assign,
    Ellipses,
    Hash,
    Dot,
    Arrow,
    Increment,
    Decrement,
    HashConcat,
    Ampersand,
    Add,
    Subtract,
    BitComplement,
    Not,
    Divide,
    Modulus,
    LeftShift,
    RightShift,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanEq,
    GreaterThanEq,
    DoubleEquals,
    BitXor,
    BitOr,
    LogicalAnd,
    LogicalOr,
    Ternary,
    MultiplyAssign,
    DivideAssign,
    ModulusAssign,
    AddAssign,
    SubtractAssign,
    LeftShiftAssign,
    RightShiftAssign,
    BitAndAssign,
    BitXorAssign,
    BitOrAssign,
}

impl Punctuator {
    pub fn as_str(self) -> &'static str {
        match self {
            Punctuator::OpenBracket => "[",
            Punctuator::CloseBracket => "]",
            Punctuator::OpenParen => "(",
            Punctuator::CloseParen => ")",
            Punctuator::OpenCurly => "{",
            Punctuator::CloseCurly => "}",
            Punctuator::Comma => ",",
            Punctuator::Colon => ":",
            Punctuator::Semicolon => ";",
            Punctuator::Multiply => "*",
            Punctuator::Assign => "=",
            Punctuator::Ellipses => "...",
            Punctuator::Hash => "#",
            Punctuator::Dot => ".",
            Punctuator::Arrow => "->",
            Punctuator::Increment => "++",
            Punctuator::Decrement => "--",
            Punctuator::HashConcat => "##",
            Punctuator::Ampersand => "&",
            Punctuator::Add => "+",
            Punctuator::Subtract => "-",
            Punctuator::BitComplement => "~",
            Punctuator::Not => "!",
            Punctuator::Divide => "/",
            Punctuator::Modulus => "%",
            Punctuator::LeftShift => "<<",
            Punctuator::RightShift => ">>",
            Punctuator::NotEquals => "!=",
            Punctuator::LessThan => "<",
            Punctuator::GreaterThan => ">",
            Punctuator::LessThanEq => "<=",
            Punctuator::GreaterThanEq => ">=",
            Punctuator::DoubleEquals => "==",
            Punctuator::BitXor => "^",
            Punctuator::BitOr => "|",
            Punctuator::LogicalAnd => "&&",
            Punctuator::LogicalOr => "||",
            Punctuator::Ternary => "?",
            Punctuator::MultiplyAssign => "*=",
            Punctuator::DivideAssign => "/=",
            Punctuator::ModulusAssign => "%=",
            Punctuator::AddAssign => "+=",
            Punctuator::SubtractAssign => "-=",
            Punctuator::LeftShiftAssign => "<<=",
            Punctuator::RightShiftAssign => ">>=",
            Punctuator::BitAndAssign => "&=",
            Punctuator::BitXorAssign => "^=",
            Punctuator::BitOrAssign => "|=",
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
