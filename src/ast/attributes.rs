use serde::{Deserialize, Serialize};

use crate::ast::{AttributeKind, ExprNode};

/// One entry of an `Object` expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectAttribute {
    /// Named attribute
    ///
    /// # Examples
    /// ```text
    /// "title":name
    /// title          // shorthand for "title":title
    /// tags[]         // shorthand for "tags":tags[]
    /// ```
    #[serde(rename = "ObjectAttributeValue")]
    AttributeValue { name: String, value: ExprNode },

    /// Splat applied only when the condition holds (`cond=>{...}`)
    #[serde(rename = "ObjectConditionalSplat")]
    ConditionalSplat {
        condition: ExprNode,
        value: ExprNode,
    },

    /// Unconditional splat (`...value`)
    #[serde(rename = "ObjectSplat")]
    Splat { value: ExprNode },
}

impl ObjectAttribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            ObjectAttribute::AttributeValue { .. } => AttributeKind::AttributeValue,
            ObjectAttribute::ConditionalSplat { .. } => AttributeKind::ConditionalSplat,
            ObjectAttribute::Splat { .. } => AttributeKind::Splat,
        }
    }

    /// `"name":value`, or the shorthand when `value` allows it.
    pub fn named(name: impl Into<String>, value: ExprNode) -> Self {
        ObjectAttribute::AttributeValue {
            name: name.into(),
            value,
        }
    }

    /// Shorthand attribute `name`, i.e. `"name":name`.
    pub fn shorthand(name: impl Into<String>) -> Self {
        let name = name.into();
        ObjectAttribute::AttributeValue {
            value: ExprNode::attribute(name.clone()),
            name,
        }
    }
}

/// Array member, optionally spread into its parent (`...value`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct ArrayElement {
    pub value: ExprNode,
    #[serde(rename = "isSplat")]
    pub is_splat: bool,
}

impl ArrayElement {
    pub fn new(value: ExprNode) -> Self {
        ArrayElement {
            value,
            is_splat: false,
        }
    }

    pub fn splat(value: ExprNode) -> Self {
        ArrayElement {
            value,
            is_splat: true,
        }
    }
}

/// One `condition=>value` branch of a `Select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct SelectAlternative {
    pub condition: ExprNode,
    pub value: ExprNode,
}
