//! Query text rendering for GROQ expression trees.
//!
//! This module turns an [`ExprNode`] back into GROQ source. Output for any
//! tree a GROQ parser produced re-parses to a structurally equal tree, so
//! `parse -> build -> parse` is stable.
//!
//! # Features
//!
//! - **Compact output** via [`build()`] - no optional whitespace at all
//! - **Spaced output** via [`build_pretty()`] - single spaces around binary
//!   operators and separators, one object attribute per line
//! - **Shorthand attributes** - `{"a":a}` renders as `{a}`, `{"a":a[]}` as `{a[]}`
//! - **Fail fast** - trees holding a kind without syntax are rejected whole
//!
//! # Examples
//!
//! ```
//! use groq_ast::ExprNode;
//! use groq_ast::builder::{build, build_pretty};
//!
//! let node = ExprNode::and(ExprNode::value(1), ExprNode::value(true));
//!
//! assert_eq!(build(&node).unwrap(), "1&&true");
//! assert_eq!(build_pretty(&node).unwrap(), "1 && true");
//! ```
//!
//! Rendering recurses once per nesting level, so stack use grows with the
//! depth of the tree.

use serde::Deserialize;
use serde_json::Value;

use crate::ast::{ArrayElement, ExprNode, ObjectAttribute, OpCallOperator, SelectAlternative};
use crate::error::AstError;

/// Largest integer an f64 holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rendering options.
///
/// Loads from a JSON fragment such as `{"whitespace": true}`; missing keys
/// fall back to compact output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Insert single spaces around operators and separators.
    pub whitespace: bool,
}

impl BuilderOptions {
    pub fn compact() -> Self {
        BuilderOptions { whitespace: false }
    }

    pub fn pretty() -> Self {
        BuilderOptions { whitespace: true }
    }
}

pub struct Builder {
    options: BuilderOptions,
}

impl Builder {
    pub fn new(options: BuilderOptions) -> Self {
        Builder { options }
    }

    pub fn build(&self, node: &ExprNode) -> Result<String, AstError> {
        tracing::trace!(
            kind = %node.kind(),
            whitespace = self.options.whitespace,
            "building query text"
        );
        self.build_node(node)
    }

    fn ws(&self) -> &'static str {
        if self.options.whitespace { " " } else { "" }
    }

    fn comma(&self) -> &'static str {
        if self.options.whitespace { ", " } else { "," }
    }

    fn attribute_separator(&self) -> &'static str {
        if self.options.whitespace { ",\n" } else { "," }
    }

    fn range(is_inclusive: bool) -> &'static str {
        if is_inclusive { ".." } else { "..." }
    }

    fn build_node(&self, node: &ExprNode) -> Result<String, AstError> {
        let ws = self.ws();

        match node {
            ExprNode::And { left, right } => self.binary(left, "&&", right),
            ExprNode::Or { left, right } => self.binary(left, "||", right),
            ExprNode::OpCall { op, left, right } => self.op_call(*op, left, right),

            ExprNode::InRange {
                base,
                left,
                right,
                is_inclusive,
            } => Ok(format!(
                "{} in {}{ws}{}{ws}{}",
                self.build_node(base)?,
                self.build_node(left)?,
                Self::range(*is_inclusive),
                self.build_node(right)?,
            )),

            ExprNode::Slice {
                base,
                left,
                right,
                is_inclusive,
            } => Ok([
                self.build_node(base)?,
                "[".to_string(),
                left.to_string(),
                Self::range(*is_inclusive).to_string(),
                right.to_string(),
                "]".to_string(),
            ]
            .join(ws)),

            ExprNode::Neg { base } => Ok(format!("-{}", self.build_node(base)?)),
            ExprNode::Pos { base } => Ok(format!("+{}", self.build_node(base)?)),
            ExprNode::Not { base } => Ok(format!("!{}", self.build_node(base)?)),
            ExprNode::Group { base } => Ok(format!("({})", self.build_node(base)?)),
            ExprNode::Deref { base } => Ok(format!("{}->", self.build_node(base)?)),
            ExprNode::ArrayCoerce { base } => Ok(format!("{}[]", self.build_node(base)?)),
            // Sort direction keeps its space in compact output too
            ExprNode::Desc { base } => Ok(format!("{} desc", self.build_node(base)?)),
            ExprNode::Asc { base } => Ok(format!("{} asc", self.build_node(base)?)),

            ExprNode::PipeFuncCall { base, name, args } => Ok([
                self.build_node(base)?,
                "|".to_string(),
                name.clone(),
                "(".to_string(),
                self.build_list(args, self.comma())?,
                ")".to_string(),
            ]
            .join(ws)),

            ExprNode::FuncCall {
                namespace,
                name,
                args,
            } => {
                let prefix = match namespace.as_deref() {
                    Some(ns) if ns != "global" => format!("{ns}::"),
                    _ => String::new(),
                };
                // Arguments never take the whitespace option
                Ok(format!("{prefix}{name}({})", self.build_list(args, ",")?))
            }

            ExprNode::Select {
                alternatives,
                fallback,
            } => self.select(alternatives, fallback.as_deref()),

            ExprNode::Object { attributes } => self.object(attributes),
            ExprNode::Array { elements } => self.array(elements),
            ExprNode::Tuple { members } => self.build_list(members, ","),

            ExprNode::Projection { base, expr }
            | ExprNode::Map { base, expr }
            | ExprNode::FlatMap { base, expr } => Ok(format!(
                "{}{ws}{}",
                self.build_node(base)?,
                self.build_node(expr)?
            )),

            ExprNode::Filter { base, expr } => Ok(format!(
                "{}[{}]",
                self.build_node(base)?,
                self.build_node(expr)?
            )),

            ExprNode::AccessElement { base, index } => {
                Ok(format!("{}[{index}]", self.build_node(base)?))
            }

            ExprNode::AccessAttribute { base, name } => match base {
                Some(base) => Ok(format!("{}.{name}", self.build_node(base)?)),
                None => Ok(name.clone()),
            },

            ExprNode::Value { value } => Ok(literal(value).to_string()),

            ExprNode::Selector => {
                tracing::debug!(kind = %node.kind(), "node kind has no query syntax");
                Err(AstError::UnsupportedNodeKind(node.kind().to_string()))
            }

            ExprNode::Parent { n } => Ok(vec!["^"; *n as usize].join(".")),
            ExprNode::Parameter { name } => Ok(format!("${name}")),
            ExprNode::Everything => Ok("*".to_string()),
            ExprNode::This => Ok(String::new()),
            ExprNode::Context { key } => Ok(format!("{key}()")),
        }
    }

    fn binary(&self, left: &ExprNode, token: &str, right: &ExprNode) -> Result<String, AstError> {
        let ws = self.ws();
        Ok(format!(
            "{}{ws}{token}{ws}{}",
            self.build_node(left)?,
            self.build_node(right)?
        ))
    }

    fn op_call(
        &self,
        op: OpCallOperator,
        left: &ExprNode,
        right: &ExprNode,
    ) -> Result<String, AstError> {
        if op.is_keyword() {
            return Ok(format!(
                "{} {op} {}",
                self.build_node(left)?,
                self.build_node(right)?
            ));
        }
        self.binary(left, op.as_str(), right)
    }

    fn build_list(&self, nodes: &[ExprNode], separator: &str) -> Result<String, AstError> {
        let items = nodes
            .iter()
            .map(|node| self.build_node(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items.join(separator))
    }

    fn select(
        &self,
        alternatives: &[SelectAlternative],
        fallback: Option<&ExprNode>,
    ) -> Result<String, AstError> {
        let ws = self.ws();
        let mut branches = alternatives
            .iter()
            .map(|alt| -> Result<String, AstError> {
                Ok(format!(
                    "{}{ws}=>{ws}{}",
                    self.build_node(&alt.condition)?,
                    self.build_node(&alt.value)?
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(fallback) = fallback {
            branches.push(self.build_node(fallback)?);
        }

        Ok(format!("select({})", branches.join(self.comma())))
    }

    fn object(&self, attributes: &[ObjectAttribute]) -> Result<String, AstError> {
        let items = attributes
            .iter()
            .map(|attr| self.object_attribute(attr))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{{{}}}", items.join(self.attribute_separator())))
    }

    fn object_attribute(&self, attr: &ObjectAttribute) -> Result<String, AstError> {
        let ws = self.ws();

        match attr {
            ObjectAttribute::AttributeValue { name, value } => {
                if value.is_root_attribute(name) {
                    return Ok(name.clone());
                }
                if let ExprNode::ArrayCoerce { base } = value
                    && base.is_root_attribute(name)
                {
                    return Ok(format!("{name}[]"));
                }
                Ok(format!("{}:{}", quote(name), self.build_node(value)?))
            }
            ObjectAttribute::ConditionalSplat { condition, value } => Ok(format!(
                "{}{ws}=>{ws}{}",
                self.build_node(condition)?,
                self.build_node(value)?
            )),
            ObjectAttribute::Splat { value } => Ok(format!("...{}", self.build_node(value)?)),
        }
    }

    fn array(&self, elements: &[ArrayElement]) -> Result<String, AstError> {
        let items = elements
            .iter()
            .map(|element| -> Result<String, AstError> {
                let value = self.build_node(&element.value)?;
                Ok(if element.is_splat {
                    format!("...{value}")
                } else {
                    value
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("[{}]", items.join(",")))
    }
}

/// Integral floats lose their fraction (`1.0` renders `1`), so the text
/// re-parses to the same number the query language sees.
fn literal(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(literal).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), literal(field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Attribute names go out as JSON string literals.
fn quote(name: &str) -> String {
    Value::String(name.to_string()).to_string()
}

// Convenience functions

/// Renders a tree as compact query text.
///
/// # Errors
///
/// [`AstError::UnsupportedNodeKind`] if the tree holds a `Selector`.
pub fn build(node: &ExprNode) -> Result<String, AstError> {
    Builder::new(BuilderOptions::compact()).build(node)
}

/// Renders a tree with single spaces around operators and separators and
/// one object attribute per line.
pub fn build_pretty(node: &ExprNode) -> Result<String, AstError> {
    Builder::new(BuilderOptions::pretty()).build(node)
}

pub fn build_with(node: &ExprNode, options: &BuilderOptions) -> Result<String, AstError> {
    Builder::new(*options).build(node)
}
