use thiserror::Error;

/// Errors raised for trees the tools cannot handle.
///
/// All of these signal a malformed or unsupported tree, never a transient
/// condition; callers should not retry.
#[derive(Error, Debug)]
pub enum AstError {
    /// Node kind outside what the operation supports
    #[error("unsupported node kind: {0}")]
    UnsupportedNodeKind(String),

    /// Object attribute kind outside `ObjectAttributeValue`,
    /// `ObjectConditionalSplat` and `ObjectSplat`
    #[error("unsupported object attribute kind: {0}")]
    UnsupportedAttributeKind(String),

    /// Interchange JSON that does not describe a tree
    #[error("malformed expression tree: {0}")]
    Malformed(#[from] serde_json::Error),
}
