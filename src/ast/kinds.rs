use std::fmt;

/// Discriminant of an [`ExprNode`](crate::ast::ExprNode).
///
/// The string form is the `type` tag used in the JSON interchange shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    And,
    Or,
    InRange,
    Slice,
    Neg,
    Pos,
    Not,
    Group,
    Deref,
    ArrayCoerce,
    Desc,
    Asc,
    PipeFuncCall,
    FuncCall,
    Select,
    OpCall,
    Object,
    Array,
    Tuple,
    Projection,
    Map,
    FlatMap,
    Filter,
    AccessElement,
    AccessAttribute,
    Value,
    Selector,
    Parent,
    Parameter,
    Everything,
    This,
    Context,
}

impl NodeKind {
    pub const ALL: [NodeKind; 32] = [
        NodeKind::And,
        NodeKind::Or,
        NodeKind::InRange,
        NodeKind::Slice,
        NodeKind::Neg,
        NodeKind::Pos,
        NodeKind::Not,
        NodeKind::Group,
        NodeKind::Deref,
        NodeKind::ArrayCoerce,
        NodeKind::Desc,
        NodeKind::Asc,
        NodeKind::PipeFuncCall,
        NodeKind::FuncCall,
        NodeKind::Select,
        NodeKind::OpCall,
        NodeKind::Object,
        NodeKind::Array,
        NodeKind::Tuple,
        NodeKind::Projection,
        NodeKind::Map,
        NodeKind::FlatMap,
        NodeKind::Filter,
        NodeKind::AccessElement,
        NodeKind::AccessAttribute,
        NodeKind::Value,
        NodeKind::Selector,
        NodeKind::Parent,
        NodeKind::Parameter,
        NodeKind::Everything,
        NodeKind::This,
        NodeKind::Context,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::And => "And",
            NodeKind::Or => "Or",
            NodeKind::InRange => "InRange",
            NodeKind::Slice => "Slice",
            NodeKind::Neg => "Neg",
            NodeKind::Pos => "Pos",
            NodeKind::Not => "Not",
            NodeKind::Group => "Group",
            NodeKind::Deref => "Deref",
            NodeKind::ArrayCoerce => "ArrayCoerce",
            NodeKind::Desc => "Desc",
            NodeKind::Asc => "Asc",
            NodeKind::PipeFuncCall => "PipeFuncCall",
            NodeKind::FuncCall => "FuncCall",
            NodeKind::Select => "Select",
            NodeKind::OpCall => "OpCall",
            NodeKind::Object => "Object",
            NodeKind::Array => "Array",
            NodeKind::Tuple => "Tuple",
            NodeKind::Projection => "Projection",
            NodeKind::Map => "Map",
            NodeKind::FlatMap => "FlatMap",
            NodeKind::Filter => "Filter",
            NodeKind::AccessElement => "AccessElement",
            NodeKind::AccessAttribute => "AccessAttribute",
            NodeKind::Value => "Value",
            NodeKind::Selector => "Selector",
            NodeKind::Parent => "Parent",
            NodeKind::Parameter => "Parameter",
            NodeKind::Everything => "Everything",
            NodeKind::This => "This",
            NodeKind::Context => "Context",
        }
    }

    /// Look up a kind by its interchange tag.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of an [`ObjectAttribute`](crate::ast::ObjectAttribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    AttributeValue,
    ConditionalSplat,
    Splat,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::AttributeValue,
        AttributeKind::ConditionalSplat,
        AttributeKind::Splat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::AttributeValue => "ObjectAttributeValue",
            AttributeKind::ConditionalSplat => "ObjectConditionalSplat",
            AttributeKind::Splat => "ObjectSplat",
        }
    }

    pub fn from_tag(tag: &str) -> Option<AttributeKind> {
        AttributeKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
