pub mod ast;
pub mod builder;
pub mod decode;
pub mod equality;
pub mod error;
pub mod transform;

pub use ast::{
    ArrayElement, AttributeKind, ExprNode, NodeKind, ObjectAttribute, OpCallOperator,
    SelectAlternative,
};
pub use builder::{Builder, BuilderOptions, build, build_pretty, build_with};
pub use equality::is_equal;
pub use error::AstError;
pub use transform::{transform, try_transform};
