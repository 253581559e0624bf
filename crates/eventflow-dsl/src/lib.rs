//! The declarative `when(...).guard(...).emit(...).switch(...)` surface
//! syntax, desugaring into [`eventflow_flow::Flow`].
//!
//! This is deliberately the largest crate in the workspace: it carries
//! every DSL ergonomic and validation rule, while the Flow AST and
//! compiler underneath stay minimal.

mod handler;
mod properties;
mod when;

pub use handler::handler;
pub use when::{any_other, when, Clause, When};
