//! Formula operators with precedence information

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Precedence 1
    /// Addition
    Add,
    /// Subtraction
    Subtract,

    // Precedence 2
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl BinaryOp {
    /// Look up the operator spelled by `symbol`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Get the precedence level (higher binds tighter)
    ///
    /// Every operator is above zero, which is the precedence of any token
    /// that is not an operator.
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}
