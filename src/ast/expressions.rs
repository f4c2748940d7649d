use serde::{Deserialize, Serialize};

use crate::ast::{ArrayElement, NodeKind, ObjectAttribute, OpCallOperator, SelectAlternative};

/// Abstract Syntax Tree node representing a GROQ expression.
///
/// The union is closed: every tool in this crate matches on it exhaustively,
/// so adding a kind forces the builder, the comparator and the transformer
/// to handle it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExprNode {
    // Boolean combination
    /// Logical AND
    ///
    /// # Example
    /// ```text
    /// a==1&&b==2
    /// ```
    And {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },

    /// Logical OR
    Or {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },

    /// Range membership test
    ///
    /// # Examples
    /// ```text
    /// year in 1980..1989     // inclusive
    /// year in 1980...1990    // exclusive
    /// ```
    InRange {
        base: Box<ExprNode>,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
        #[serde(rename = "isInclusive")]
        is_inclusive: bool,
    },

    /// Array slice with literal bounds
    ///
    /// # Example
    /// ```text
    /// *[_type=="post"][0..10]
    /// ```
    Slice {
        base: Box<ExprNode>,
        left: i64,
        right: i64,
        #[serde(rename = "isInclusive")]
        is_inclusive: bool,
    },

    // Unary wraps
    /// Arithmetic negation (`-x`)
    Neg { base: Box<ExprNode> },

    /// Unary plus (`+x`)
    Pos { base: Box<ExprNode> },

    /// Logical negation (`!x`)
    Not { base: Box<ExprNode> },

    /// Parenthesized sub-expression.
    ///
    /// Carries precedence that the tree shape alone cannot express, so it is
    /// kept as a node rather than dropped after parsing.
    Group { base: Box<ExprNode> },

    /// Reference dereferencing (`ref->`)
    Deref { base: Box<ExprNode> },

    /// Array coercion (`x[]`)
    ArrayCoerce { base: Box<ExprNode> },

    /// Descending sort key inside `order()`
    Desc { base: Box<ExprNode> },

    /// Ascending sort key inside `order()`
    Asc { base: Box<ExprNode> },

    // Calls
    /// Pipe function application
    ///
    /// # Example
    /// ```text
    /// *[_type=="post"]|order(publishedAt desc)
    /// ```
    PipeFuncCall {
        base: Box<ExprNode>,
        name: String,
        args: Vec<ExprNode>,
    },

    /// Named function call, optionally namespaced
    ///
    /// # Examples
    /// ```text
    /// count(*)
    /// pt::text(body)
    /// ```
    FuncCall {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        name: String,
        args: Vec<ExprNode>,
    },

    /// Guarded multi-branch selection
    ///
    /// # Example
    /// ```text
    /// select(score>90=>"A",score>80=>"B","C")
    /// ```
    Select {
        alternatives: Vec<SelectAlternative>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<Box<ExprNode>>,
    },

    /// Binary operator application
    OpCall {
        op: OpCallOperator,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },

    // Construction
    /// Object construction
    ///
    /// # Example
    /// ```text
    /// {_id,"title":name,...}
    /// ```
    Object { attributes: Vec<ObjectAttribute> },

    /// Array construction
    ///
    /// # Example
    /// ```text
    /// [1,...tags,"x"]
    /// ```
    Array { elements: Vec<ArrayElement> },

    /// Comma-joined grouping of members
    Tuple { members: Vec<ExprNode> },

    // Traversal
    /// Projection of a base onto an object expression
    Projection {
        base: Box<ExprNode>,
        expr: Box<ExprNode>,
    },

    /// Per-element mapping over a base
    Map {
        base: Box<ExprNode>,
        expr: Box<ExprNode>,
    },

    /// Per-element mapping that flattens the results
    FlatMap {
        base: Box<ExprNode>,
        expr: Box<ExprNode>,
    },

    /// Predicate filter (`base[expr]`)
    Filter {
        base: Box<ExprNode>,
        expr: Box<ExprNode>,
    },

    /// Indexed access (`base[3]`)
    AccessElement { base: Box<ExprNode>, index: i64 },

    /// Named attribute access
    ///
    /// Without a base this is a reference to an attribute of the current
    /// scope (`title`); with a base it is chained access (`author.name`).
    AccessAttribute {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base: Option<Box<ExprNode>>,
        name: String,
    },

    // Leaves
    /// Embedded constant
    Value { value: serde_json::Value },

    /// Reserved selector kind. No textual syntax exists for it.
    Selector,

    /// Ancestor scope reference, `n` levels up (`^.^`)
    Parent { n: u32 },

    /// Bound parameter reference (`$name`)
    Parameter { name: String },

    /// All documents (`*`)
    Everything,

    /// The current scope value
    This,

    /// Pipeline context lookup (`before()`, `after()`)
    Context { key: String },
}

impl ExprNode {
    /// The discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            ExprNode::And { .. } => NodeKind::And,
            ExprNode::Or { .. } => NodeKind::Or,
            ExprNode::InRange { .. } => NodeKind::InRange,
            ExprNode::Slice { .. } => NodeKind::Slice,
            ExprNode::Neg { .. } => NodeKind::Neg,
            ExprNode::Pos { .. } => NodeKind::Pos,
            ExprNode::Not { .. } => NodeKind::Not,
            ExprNode::Group { .. } => NodeKind::Group,
            ExprNode::Deref { .. } => NodeKind::Deref,
            ExprNode::ArrayCoerce { .. } => NodeKind::ArrayCoerce,
            ExprNode::Desc { .. } => NodeKind::Desc,
            ExprNode::Asc { .. } => NodeKind::Asc,
            ExprNode::PipeFuncCall { .. } => NodeKind::PipeFuncCall,
            ExprNode::FuncCall { .. } => NodeKind::FuncCall,
            ExprNode::Select { .. } => NodeKind::Select,
            ExprNode::OpCall { .. } => NodeKind::OpCall,
            ExprNode::Object { .. } => NodeKind::Object,
            ExprNode::Array { .. } => NodeKind::Array,
            ExprNode::Tuple { .. } => NodeKind::Tuple,
            ExprNode::Projection { .. } => NodeKind::Projection,
            ExprNode::Map { .. } => NodeKind::Map,
            ExprNode::FlatMap { .. } => NodeKind::FlatMap,
            ExprNode::Filter { .. } => NodeKind::Filter,
            ExprNode::AccessElement { .. } => NodeKind::AccessElement,
            ExprNode::AccessAttribute { .. } => NodeKind::AccessAttribute,
            ExprNode::Value { .. } => NodeKind::Value,
            ExprNode::Selector => NodeKind::Selector,
            ExprNode::Parent { .. } => NodeKind::Parent,
            ExprNode::Parameter { .. } => NodeKind::Parameter,
            ExprNode::Everything => NodeKind::Everything,
            ExprNode::This => NodeKind::This,
            ExprNode::Context { .. } => NodeKind::Context,
        }
    }

    /// Embedded constant.
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        ExprNode::Value {
            value: value.into(),
        }
    }

    /// Root attribute reference (`name`).
    pub fn attribute(name: impl Into<String>) -> Self {
        ExprNode::AccessAttribute {
            base: None,
            name: name.into(),
        }
    }

    /// Chained attribute access (`base.name`).
    pub fn access(base: ExprNode, name: impl Into<String>) -> Self {
        ExprNode::AccessAttribute {
            base: Some(Box::new(base)),
            name: name.into(),
        }
    }

    pub fn op(op: OpCallOperator, left: ExprNode, right: ExprNode) -> Self {
        ExprNode::OpCall {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn group(base: ExprNode) -> Self {
        ExprNode::Group {
            base: Box::new(base),
        }
    }

    pub fn array_coerce(base: ExprNode) -> Self {
        ExprNode::ArrayCoerce {
            base: Box::new(base),
        }
    }

    pub fn filter(base: ExprNode, expr: ExprNode) -> Self {
        ExprNode::Filter {
            base: Box::new(base),
            expr: Box::new(expr),
        }
    }

    pub fn projection(base: ExprNode, expr: ExprNode) -> Self {
        ExprNode::Projection {
            base: Box::new(base),
            expr: Box::new(expr),
        }
    }

    /// Call in the global namespace.
    pub fn call(name: impl Into<String>, args: Vec<ExprNode>) -> Self {
        ExprNode::FuncCall {
            namespace: None,
            name: name.into(),
            args,
        }
    }

    pub fn object(attributes: Vec<ObjectAttribute>) -> Self {
        ExprNode::Object { attributes }
    }

    /// Whether this is a base-less `AccessAttribute` named `name`.
    pub fn is_root_attribute(&self, name: &str) -> bool {
        matches!(self, ExprNode::AccessAttribute { base: None, name: n } if n == name)
    }
}

impl PartialEq for ExprNode {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::is_equal(self, other)
    }
}
