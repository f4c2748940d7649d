use crate::ast::{ArrayElement, ExprNode, ObjectAttribute, SelectAlternative};

/// Check whether two trees denote the same expression.
///
/// Nodes only ever match nodes of the same kind; `Map` and `Projection` are
/// never equal even when they would evaluate alike. Scalar fields compare by
/// value, children recursively, and ordered sequences position by position,
/// so reordering attributes, elements or arguments breaks equality.
///
/// Never fails: anything not matched below is simply unequal.
///
/// # Examples
///
/// ```
/// use groq_ast::{ExprNode, is_equal};
///
/// let a = ExprNode::access(ExprNode::Everything, "title");
/// let b = ExprNode::access(ExprNode::Everything, "title");
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&a, &ExprNode::attribute("title")));
/// ```
pub fn is_equal(lhs: &ExprNode, rhs: &ExprNode) -> bool {
    use ExprNode::*;

    match (lhs, rhs) {
        (And { left: l1, right: r1 }, And { left: l2, right: r2 })
        | (Or { left: l1, right: r1 }, Or { left: l2, right: r2 }) => {
            is_equal(l1, l2) && is_equal(r1, r2)
        }

        (
            InRange {
                base: b1,
                left: l1,
                right: r1,
                is_inclusive: i1,
            },
            InRange {
                base: b2,
                left: l2,
                right: r2,
                is_inclusive: i2,
            },
        ) => i1 == i2 && is_equal(b1, b2) && is_equal(l1, l2) && is_equal(r1, r2),

        (
            Slice {
                base: b1,
                left: l1,
                right: r1,
                is_inclusive: i1,
            },
            Slice {
                base: b2,
                left: l2,
                right: r2,
                is_inclusive: i2,
            },
        ) => l1 == l2 && r1 == r2 && i1 == i2 && is_equal(b1, b2),

        (Neg { base: b1 }, Neg { base: b2 })
        | (Pos { base: b1 }, Pos { base: b2 })
        | (Not { base: b1 }, Not { base: b2 })
        | (Group { base: b1 }, Group { base: b2 })
        | (Deref { base: b1 }, Deref { base: b2 })
        | (ArrayCoerce { base: b1 }, ArrayCoerce { base: b2 })
        | (Desc { base: b1 }, Desc { base: b2 })
        | (Asc { base: b1 }, Asc { base: b2 }) => is_equal(b1, b2),

        (
            PipeFuncCall {
                base: b1,
                name: n1,
                args: a1,
            },
            PipeFuncCall {
                base: b2,
                name: n2,
                args: a2,
            },
        ) => n1 == n2 && is_equal(b1, b2) && all_equal(a1, a2),

        (
            FuncCall {
                namespace: ns1,
                name: n1,
                args: a1,
            },
            FuncCall {
                namespace: ns2,
                name: n2,
                args: a2,
            },
        ) => ns1 == ns2 && n1 == n2 && all_equal(a1, a2),

        (
            Select {
                alternatives: a1,
                fallback: f1,
            },
            Select {
                alternatives: a2,
                fallback: f2,
            },
        ) => {
            pairwise(a1, a2, alternative_equal)
                && match (f1, f2) {
                    (Some(f1), Some(f2)) => is_equal(f1, f2),
                    (None, None) => true,
                    _ => false,
                }
        }

        (
            OpCall {
                op: o1,
                left: l1,
                right: r1,
            },
            OpCall {
                op: o2,
                left: l2,
                right: r2,
            },
        ) => o1 == o2 && is_equal(l1, l2) && is_equal(r1, r2),

        (Object { attributes: a1 }, Object { attributes: a2 }) => {
            pairwise(a1, a2, attribute_equal)
        }
        (Array { elements: e1 }, Array { elements: e2 }) => pairwise(e1, e2, element_equal),
        (Tuple { members: m1 }, Tuple { members: m2 }) => all_equal(m1, m2),

        (Projection { base: b1, expr: e1 }, Projection { base: b2, expr: e2 })
        | (Map { base: b1, expr: e1 }, Map { base: b2, expr: e2 })
        | (FlatMap { base: b1, expr: e1 }, FlatMap { base: b2, expr: e2 })
        | (Filter { base: b1, expr: e1 }, Filter { base: b2, expr: e2 }) => {
            is_equal(b1, b2) && is_equal(e1, e2)
        }

        (AccessElement { base: b1, index: i1 }, AccessElement { base: b2, index: i2 }) => {
            i1 == i2 && is_equal(b1, b2)
        }

        (AccessAttribute { base: b1, name: n1 }, AccessAttribute { base: b2, name: n2 }) => {
            n1 == n2
                && match (b1, b2) {
                    (Some(b1), Some(b2)) => is_equal(b1, b2),
                    (None, None) => true,
                    // root reference vs chained access
                    _ => false,
                }
        }

        (Value { value: v1 }, Value { value: v2 }) => v1 == v2,
        (Parent { n: n1 }, Parent { n: n2 }) => n1 == n2,
        (Parameter { name: n1 }, Parameter { name: n2 }) => n1 == n2,
        (Context { key: k1 }, Context { key: k2 }) => k1 == k2,
        (Everything, Everything) | (This, This) | (Selector, Selector) => true,

        _ => false,
    }
}

fn all_equal(lhs: &[ExprNode], rhs: &[ExprNode]) -> bool {
    pairwise(lhs, rhs, is_equal)
}

fn pairwise<T>(lhs: &[T], rhs: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| eq(l, r))
}

fn alternative_equal(lhs: &SelectAlternative, rhs: &SelectAlternative) -> bool {
    is_equal(&lhs.condition, &rhs.condition) && is_equal(&lhs.value, &rhs.value)
}

fn element_equal(lhs: &ArrayElement, rhs: &ArrayElement) -> bool {
    lhs.is_splat == rhs.is_splat && is_equal(&lhs.value, &rhs.value)
}

fn attribute_equal(lhs: &ObjectAttribute, rhs: &ObjectAttribute) -> bool {
    match (lhs, rhs) {
        (
            ObjectAttribute::AttributeValue {
                name: n1,
                value: v1,
            },
            ObjectAttribute::AttributeValue {
                name: n2,
                value: v2,
            },
        ) => n1 == n2 && is_equal(v1, v2),
        (
            ObjectAttribute::ConditionalSplat {
                condition: c1,
                value: v1,
            },
            ObjectAttribute::ConditionalSplat {
                condition: c2,
                value: v2,
            },
        ) => is_equal(c1, c2) && is_equal(v1, v2),
        (ObjectAttribute::Splat { value: v1 }, ObjectAttribute::Splat { value: v2 }) => {
            is_equal(v1, v2)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_requires_equal_length() {
        let one = vec![ExprNode::value(1)];
        let two = vec![ExprNode::value(1), ExprNode::value(2)];
        assert!(!all_equal(&one, &two));
        assert!(!all_equal(&two, &one));
        assert!(all_equal(&[], &[]));
    }

    #[test]
    fn test_attribute_kinds_must_match() {
        let splat = ObjectAttribute::Splat {
            value: ExprNode::This,
        };
        let named = ObjectAttribute::named("a", ExprNode::This);
        assert!(!attribute_equal(&splat, &named));
        assert!(attribute_equal(&splat, &splat.clone()));
    }

    #[test]
    fn test_fieldless_kinds() {
        assert!(is_equal(&ExprNode::Selector, &ExprNode::Selector));
        assert!(is_equal(&ExprNode::This, &ExprNode::This));
        assert!(!is_equal(&ExprNode::This, &ExprNode::Everything));
    }
}
