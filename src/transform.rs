use std::convert::Infallible;

use crate::ast::{ArrayElement, ExprNode, ObjectAttribute, SelectAlternative};

/// Rebuild a tree bottom-up, passing every node through `f`.
///
/// Children are rewritten first, depth-first and left to right; the parent is
/// then reassembled from the rewritten children plus its own scalar fields and
/// handed to `f`. Whatever `f` returns takes the node's place. Leaves (`Value`,
/// `Selector`, `Parent`, `Parameter`, `Everything`, `This`, `Context` and a
/// root `AccessAttribute`) go to `f` as they are.
///
/// The input is left untouched; the result is a new tree. Returning the node
/// unchanged from `f` means "no change".
///
/// # Examples
///
/// ```
/// use groq_ast::{ExprNode, transform};
///
/// // $type -> "movie"
/// let tree = ExprNode::and(
///     ExprNode::Parameter { name: "type".into() },
///     ExprNode::value(true),
/// );
/// let bound = transform(&tree, |node| match node {
///     ExprNode::Parameter { name } if name == "type" => ExprNode::value("movie"),
///     other => other,
/// });
/// assert_eq!(bound, ExprNode::and(ExprNode::value("movie"), ExprNode::value(true)));
/// ```
///
/// Recursion depth equals tree depth.
pub fn transform<F>(node: &ExprNode, mut f: F) -> ExprNode
where
    F: FnMut(ExprNode) -> ExprNode,
{
    match try_transform(node, |node| Ok::<_, Infallible>(f(node))) {
        Ok(node) => node,
        Err(never) => match never {},
    }
}

/// Like [`transform`], with a fallible callback.
///
/// The first error returned by `f` aborts the rebuild and is handed back; no
/// partially rebuilt tree escapes.
pub fn try_transform<F, E>(node: &ExprNode, mut f: F) -> Result<ExprNode, E>
where
    F: FnMut(ExprNode) -> Result<ExprNode, E>,
{
    tracing::trace!(kind = %node.kind(), "transforming expression tree");
    rebuild(node, &mut f)
}

fn rebuild<F, E>(node: &ExprNode, f: &mut F) -> Result<ExprNode, E>
where
    F: FnMut(ExprNode) -> Result<ExprNode, E>,
{
    let rebuilt = match node {
        ExprNode::And { left, right } => ExprNode::And {
            left: rebuild_boxed(left, f)?,
            right: rebuild_boxed(right, f)?,
        },
        ExprNode::Or { left, right } => ExprNode::Or {
            left: rebuild_boxed(left, f)?,
            right: rebuild_boxed(right, f)?,
        },

        ExprNode::InRange {
            base,
            left,
            right,
            is_inclusive,
        } => ExprNode::InRange {
            base: rebuild_boxed(base, f)?,
            left: rebuild_boxed(left, f)?,
            right: rebuild_boxed(right, f)?,
            is_inclusive: *is_inclusive,
        },

        ExprNode::Slice {
            base,
            left,
            right,
            is_inclusive,
        } => ExprNode::Slice {
            base: rebuild_boxed(base, f)?,
            left: *left,
            right: *right,
            is_inclusive: *is_inclusive,
        },

        ExprNode::Neg { base } => ExprNode::Neg {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Pos { base } => ExprNode::Pos {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Not { base } => ExprNode::Not {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Group { base } => ExprNode::Group {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Deref { base } => ExprNode::Deref {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::ArrayCoerce { base } => ExprNode::ArrayCoerce {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Desc { base } => ExprNode::Desc {
            base: rebuild_boxed(base, f)?,
        },
        ExprNode::Asc { base } => ExprNode::Asc {
            base: rebuild_boxed(base, f)?,
        },

        ExprNode::PipeFuncCall { base, name, args } => ExprNode::PipeFuncCall {
            base: rebuild_boxed(base, f)?,
            name: name.clone(),
            args: rebuild_all(args, f)?,
        },

        ExprNode::FuncCall {
            namespace,
            name,
            args,
        } => ExprNode::FuncCall {
            namespace: namespace.clone(),
            name: name.clone(),
            args: rebuild_all(args, f)?,
        },

        ExprNode::Select {
            alternatives,
            fallback,
        } => {
            let alternatives = alternatives
                .iter()
                .map(|alt| -> Result<SelectAlternative, E> {
                    Ok(SelectAlternative {
                        condition: rebuild(&alt.condition, f)?,
                        value: rebuild(&alt.value, f)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let fallback = match fallback {
                Some(fallback) => Some(rebuild_boxed(fallback, f)?),
                None => None,
            };
            ExprNode::Select {
                alternatives,
                fallback,
            }
        }

        ExprNode::OpCall { op, left, right } => ExprNode::OpCall {
            op: *op,
            left: rebuild_boxed(left, f)?,
            right: rebuild_boxed(right, f)?,
        },

        ExprNode::Object { attributes } => ExprNode::Object {
            attributes: attributes
                .iter()
                .map(|attr| rebuild_attribute(attr, f))
                .collect::<Result<Vec<_>, _>>()?,
        },

        ExprNode::Array { elements } => ExprNode::Array {
            elements: elements
                .iter()
                .map(|element| -> Result<ArrayElement, E> {
                    Ok(ArrayElement {
                        value: rebuild(&element.value, f)?,
                        is_splat: element.is_splat,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        },

        ExprNode::Tuple { members } => ExprNode::Tuple {
            members: rebuild_all(members, f)?,
        },

        ExprNode::Projection { base, expr } => ExprNode::Projection {
            base: rebuild_boxed(base, f)?,
            expr: rebuild_boxed(expr, f)?,
        },
        ExprNode::Map { base, expr } => ExprNode::Map {
            base: rebuild_boxed(base, f)?,
            expr: rebuild_boxed(expr, f)?,
        },
        ExprNode::FlatMap { base, expr } => ExprNode::FlatMap {
            base: rebuild_boxed(base, f)?,
            expr: rebuild_boxed(expr, f)?,
        },
        ExprNode::Filter { base, expr } => ExprNode::Filter {
            base: rebuild_boxed(base, f)?,
            expr: rebuild_boxed(expr, f)?,
        },

        ExprNode::AccessElement { base, index } => ExprNode::AccessElement {
            base: rebuild_boxed(base, f)?,
            index: *index,
        },

        ExprNode::AccessAttribute {
            base: Some(base),
            name,
        } => ExprNode::AccessAttribute {
            base: Some(rebuild_boxed(base, f)?),
            name: name.clone(),
        },

        // Leaves
        ExprNode::AccessAttribute { base: None, .. }
        | ExprNode::Value { .. }
        | ExprNode::Selector
        | ExprNode::Parent { .. }
        | ExprNode::Parameter { .. }
        | ExprNode::Everything
        | ExprNode::This
        | ExprNode::Context { .. } => node.clone(),
    };

    f(rebuilt)
}

fn rebuild_boxed<F, E>(node: &ExprNode, f: &mut F) -> Result<Box<ExprNode>, E>
where
    F: FnMut(ExprNode) -> Result<ExprNode, E>,
{
    rebuild(node, f).map(Box::new)
}

fn rebuild_all<F, E>(nodes: &[ExprNode], f: &mut F) -> Result<Vec<ExprNode>, E>
where
    F: FnMut(ExprNode) -> Result<ExprNode, E>,
{
    nodes.iter().map(|node| rebuild(node, f)).collect()
}

fn rebuild_attribute<F, E>(attr: &ObjectAttribute, f: &mut F) -> Result<ObjectAttribute, E>
where
    F: FnMut(ExprNode) -> Result<ExprNode, E>,
{
    Ok(match attr {
        ObjectAttribute::AttributeValue { name, value } => ObjectAttribute::AttributeValue {
            name: name.clone(),
            value: rebuild(value, f)?,
        },
        ObjectAttribute::ConditionalSplat { condition, value } => {
            ObjectAttribute::ConditionalSplat {
                condition: rebuild(condition, f)?,
                value: rebuild(value, f)?,
            }
        }
        ObjectAttribute::Splat { value } => ObjectAttribute::Splat {
            value: rebuild(value, f)?,
        },
    })
}
