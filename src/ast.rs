//! # GROQ Expression Trees - Abstract Syntax Tree
//!
//! This module defines the node union every tool in this crate works on: the
//! tree a GROQ parser produces for a query such as
//!
//! ```text
//! *[_type == "movie" && year > 1980]{title, "cast": cast[]->name}
//! ```
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[expressions]** - The [`ExprNode`] union itself
//! - **[attributes]** - Records owned by composite nodes (object attributes,
//!   array elements, select alternatives)
//! - **[operators]** - The closed operator set of `OpCall`
//! - **[kinds]** - Kind discriminants and their interchange tags
//!
//! ## Core Concepts
//!
//! ### Ownership
//!
//! Every composite node owns its children outright (`Box` / `Vec`). There are
//! no back-references and no sharing, so a tree is always a strict hierarchy
//! as deep as the query's syntactic nesting.
//!
//! ### Immutability
//!
//! Nothing in this crate mutates a tree in place. Rewriting goes through
//! [`crate::transform`], which assembles fresh nodes and leaves its input
//! untouched.
//!
//! ### Interchange Shape
//!
//! All node types derive serde in the JSON shape GROQ tooling exchanges:
//! an object discriminated by a `type` field, with camelCase field names.
//!
//! ```text
//! {"type": "OpCall", "op": "==", "left": {...}, "right": {...}}
//! ```
pub mod attributes;
pub mod expressions;
pub mod kinds;
pub mod operators;

pub use attributes::{ArrayElement, ObjectAttribute, SelectAlternative};
pub use expressions::ExprNode;
pub use kinds::{AttributeKind, NodeKind};
pub use operators::OpCallOperator;
