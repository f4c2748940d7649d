//! JSON interchange for expression trees.
//!
//! GROQ tooling hands trees around as JSON objects tagged by `type`:
//!
//! ```text
//! {"type": "Filter",
//!  "base": {"type": "Everything"},
//!  "expr": {"type": "OpCall", "op": "==",
//!           "left": {"type": "AccessAttribute", "name": "_type"},
//!           "right": {"type": "Value", "value": "movie"}}}
//! ```
//!
//! Decoding reports unknown tags as [`AstError::UnsupportedNodeKind`] or
//! [`AstError::UnsupportedAttributeKind`] so callers see which kind the tree
//! used rather than a bare serde message.

use serde::Deserialize;
use serde_json::Value;

use crate::ast::{AttributeKind, ExprNode, NodeKind};
use crate::error::AstError;

/// Tags of records nested in nodes that are not themselves nodes.
const RECORD_TAGS: [&str; 2] = ["ArrayElement", "SelectAlternative"];

pub fn from_value(value: &Value) -> Result<ExprNode, AstError> {
    ExprNode::deserialize(value).map_err(|err| {
        let classified = find_unknown_tag(value, false).unwrap_or(AstError::Malformed(err));
        tracing::debug!(error = %classified, "rejected expression tree");
        classified
    })
}

pub fn from_str(input: &str) -> Result<ExprNode, AstError> {
    let value: Value = serde_json::from_str(input)?;
    from_value(&value)
}

pub fn to_value(node: &ExprNode) -> Result<Value, AstError> {
    Ok(serde_json::to_value(node)?)
}

/// First `type` tag in `value` that names no known node or attribute kind.
fn find_unknown_tag(value: &Value, in_attributes: bool) -> Option<AstError> {
    match value {
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_unknown_tag(item, in_attributes)),
        Value::Object(fields) => {
            let tag = fields.get("type").and_then(Value::as_str);

            if let Some(tag) = tag {
                if in_attributes {
                    if AttributeKind::from_tag(tag).is_none() {
                        return Some(AstError::UnsupportedAttributeKind(tag.to_string()));
                    }
                } else if NodeKind::from_tag(tag).is_none() && !RECORD_TAGS.contains(&tag) {
                    return Some(AstError::UnsupportedNodeKind(tag.to_string()));
                }
            }

            // Literals may hold arbitrary objects, `type` keys included
            if tag == Some(NodeKind::Value.as_str()) {
                return None;
            }

            fields.iter().find_map(|(key, child)| match child {
                Value::Object(_) => find_unknown_tag(child, false),
                Value::Array(_) => find_unknown_tag(child, key == "attributes"),
                _ => None,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_literals_are_not_scanned() {
        let tree = json!({"type": "Value", "value": {"type": "Whatever"}});
        assert!(find_unknown_tag(&tree, false).is_none());
    }

    #[test]
    fn test_record_tags_are_accepted() {
        let tree = json!({
            "type": "Array",
            "elements": [{"type": "ArrayElement", "isSplat": false, "value": {"type": "This"}}]
        });
        assert!(find_unknown_tag(&tree, false).is_none());
    }

    #[test]
    fn test_attribute_position_is_tracked() {
        let tree = json!({
            "type": "Object",
            "attributes": [{"type": "ObjectSpread", "value": {"type": "This"}}]
        });
        assert!(matches!(
            find_unknown_tag(&tree, false),
            Some(AstError::UnsupportedAttributeKind(tag)) if tag == "ObjectSpread"
        ));
    }
}
