use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary operators accepted by `OpCall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCallOperator {
    // Comparison
    /// Equal (`==`)
    #[serde(rename = "==")]
    Equal,
    /// Not equal (`!=`)
    #[serde(rename = "!=")]
    NotEqual,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    GreaterThan,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Less than (`<`)
    #[serde(rename = "<")]
    LessThan,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    LessEqual,

    // Arithmetic
    /// Addition or concatenation (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Multiply,
    /// Division (`/`)
    #[serde(rename = "/")]
    Divide,
    /// Modulo (`%`)
    #[serde(rename = "%")]
    Modulo,
    /// Exponentiation (`**`)
    #[serde(rename = "**")]
    Power,

    // Membership and matching
    /// Membership (`in`)
    #[serde(rename = "in")]
    In,
    /// Full-text match (`match`)
    #[serde(rename = "match")]
    Match,
}

impl OpCallOperator {
    /// The operator token as written in query text.
    pub fn as_str(self) -> &'static str {
        match self {
            OpCallOperator::Equal => "==",
            OpCallOperator::NotEqual => "!=",
            OpCallOperator::GreaterThan => ">",
            OpCallOperator::GreaterEqual => ">=",
            OpCallOperator::LessThan => "<",
            OpCallOperator::LessEqual => "<=",
            OpCallOperator::Add => "+",
            OpCallOperator::Subtract => "-",
            OpCallOperator::Multiply => "*",
            OpCallOperator::Divide => "/",
            OpCallOperator::Modulo => "%",
            OpCallOperator::Power => "**",
            OpCallOperator::In => "in",
            OpCallOperator::Match => "match",
        }
    }

    /// Keyword operators fuse with their operands unless spaced.
    pub fn is_keyword(self) -> bool {
        matches!(self, OpCallOperator::In | OpCallOperator::Match)
    }
}

impl fmt::Display for OpCallOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
