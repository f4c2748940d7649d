#[cfg(test)]
mod tests {
    use groq_ast::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attr(name: &str) -> ExprNode {
        ExprNode::attribute(name)
    }

    fn param(name: &str) -> ExprNode {
        ExprNode::Parameter {
            name: name.to_string(),
        }
    }

    fn eq(left: ExprNode, right: ExprNode) -> ExprNode {
        ExprNode::op(OpCallOperator::Equal, left, right)
    }

    /// *[_type==$type && slug.current in $slugs]{..., "authors": authors[]->{name}, ...select($full=>body)}
    fn movie_query() -> ExprNode {
        let filter = ExprNode::and(
            eq(attr("_type"), param("type")),
            ExprNode::op(
                OpCallOperator::In,
                ExprNode::access(attr("slug"), "current"),
                param("slugs"),
            ),
        );
        ExprNode::projection(
            ExprNode::filter(ExprNode::Everything, filter),
            ExprNode::object(vec![
                ObjectAttribute::Splat {
                    value: ExprNode::This,
                },
                ObjectAttribute::named(
                    "authors",
                    ExprNode::projection(
                        ExprNode::Deref {
                            base: Box::new(ExprNode::array_coerce(attr("authors"))),
                        },
                        ExprNode::object(vec![ObjectAttribute::shorthand("name")]),
                    ),
                ),
                ObjectAttribute::ConditionalSplat {
                    condition: param("full"),
                    value: ExprNode::Select {
                        alternatives: vec![SelectAlternative {
                            condition: param("full"),
                            value: attr("body"),
                        }],
                        fallback: Some(Box::new(param("fallback"))),
                    },
                },
            ]),
        )
    }

    // ========================================================================
    // Identity
    // ========================================================================

    #[test]
    fn test_identity_transform_preserves_structure() {
        let tree = movie_query();
        let result = transform(&tree, |node| node);
        assert_eq!(result, tree);
        assert_eq!(build(&result).unwrap(), build(&tree).unwrap());
    }

    #[test]
    fn test_identity_on_leaves() {
        for leaf in [
            ExprNode::value(json!({"a": 1})),
            ExprNode::Selector,
            ExprNode::Parent { n: 2 },
            param("p"),
            ExprNode::Everything,
            ExprNode::This,
            ExprNode::Context { key: "after".into() },
            attr("a"),
        ] {
            assert_eq!(transform(&leaf, |node| node), leaf);
        }
    }

    // ========================================================================
    // Traversal Order
    // ========================================================================

    #[test]
    fn test_children_before_parent() {
        // *[a==1]
        let tree = ExprNode::filter(ExprNode::Everything, eq(attr("a"), ExprNode::value(1)));
        let mut visited = Vec::new();
        transform(&tree, |node| {
            visited.push(node.kind());
            node
        });
        assert_eq!(
            visited,
            vec![
                NodeKind::Everything,
                NodeKind::AccessAttribute,
                NodeKind::Value,
                NodeKind::OpCall,
                NodeKind::Filter,
            ]
        );
    }

    #[test]
    fn test_sequences_visited_left_to_right() {
        let tree = ExprNode::call("coalesce", vec![param("a"), param("b"), param("c")]);
        let mut names = Vec::new();
        transform(&tree, |node| {
            if let ExprNode::Parameter { name } = &node {
                names.push(name.clone());
            }
            node
        });
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parent_sees_rewritten_children() {
        let tree = ExprNode::and(param("x"), param("y"));
        let result = transform(&tree, |node| match node {
            ExprNode::Parameter { .. } => ExprNode::value(true),
            ExprNode::And { left, right } => {
                // both sides already replaced
                assert_eq!(*left, ExprNode::value(true));
                assert_eq!(*right, ExprNode::value(true));
                ExprNode::value(true)
            }
            other => other,
        });
        assert_eq!(result, ExprNode::value(true));
    }

    #[test]
    fn test_every_parameter_reached() {
        let mut count = 0;
        transform(&movie_query(), |node| {
            if matches!(node, ExprNode::Parameter { .. }) {
                count += 1;
            }
            node
        });
        // $type, $slugs, $full (twice), $fallback
        assert_eq!(count, 5);
    }

    // ========================================================================
    // Rewrites
    // ========================================================================

    #[test]
    fn test_bind_parameters() {
        let tree = eq(attr("_type"), param("type"));
        let bound = transform(&tree, |node| match node {
            ExprNode::Parameter { name } if name == "type" => ExprNode::value("movie"),
            other => other,
        });
        assert_eq!(build(&bound).unwrap(), r#"_type=="movie""#);
    }

    #[test]
    fn test_rewrite_keeps_attribute_order() {
        let tree = ExprNode::object(vec![
            ObjectAttribute::shorthand("b"),
            ObjectAttribute::shorthand("a"),
            ObjectAttribute::Splat {
                value: attr("meta"),
            },
        ]);
        let renamed = transform(&tree, |node| match node {
            ExprNode::AccessAttribute { base: None, name } => attr(&name.to_uppercase()),
            other => other,
        });
        assert_eq!(build(&renamed).unwrap(), r#"{"b":B,"a":A,...META}"#);
    }

    #[test]
    fn test_rewrite_array_keeps_splat_flags() {
        let tree = ExprNode::Array {
            elements: vec![
                ArrayElement::new(param("a")),
                ArrayElement::splat(param("b")),
            ],
        };
        let result = transform(&tree, |node| match node {
            ExprNode::Parameter { name } => attr(&name),
            other => other,
        });
        assert_eq!(build(&result).unwrap(), "[a,...b]");
    }

    #[test]
    fn test_input_left_untouched() {
        let tree = movie_query();
        let snapshot = tree.clone();
        let _ = transform(&tree, |_| ExprNode::Everything);
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_replace_whole_tree() {
        let result = transform(&movie_query(), |_| ExprNode::Everything);
        assert_eq!(result, ExprNode::Everything);
    }

    #[test]
    fn test_scalar_fields_carried_over() {
        let tree = ExprNode::Slice {
            base: Box::new(param("items")),
            left: 2,
            right: 5,
            is_inclusive: false,
        };
        let result = transform(&tree, |node| match node {
            ExprNode::Parameter { .. } => ExprNode::array_coerce(ExprNode::Everything),
            other => other,
        });
        assert_eq!(build(&result).unwrap(), "*[][2...5]");
    }

    // ========================================================================
    // Fallible Rewrites
    // ========================================================================

    #[test]
    fn test_try_transform_reports_unbound_parameter() {
        let params = json!({"type": "movie", "slugs": ["a", "b"], "full": true});
        let result = try_transform(&movie_query(), |node| match node {
            ExprNode::Parameter { name } => params
                .get(&name)
                .cloned()
                .map(ExprNode::value)
                .ok_or(name),
            other => Ok(other),
        });
        assert_eq!(result.unwrap_err(), "fallback");
    }

    #[test]
    fn test_try_transform_success() {
        let tree = eq(attr("_type"), param("type"));
        let result: Result<ExprNode, String> = try_transform(&tree, |node| match node {
            ExprNode::Parameter { .. } => Ok(ExprNode::value("post")),
            other => Ok(other),
        });
        assert_eq!(
            result.unwrap(),
            eq(attr("_type"), ExprNode::value("post"))
        );
    }
}
