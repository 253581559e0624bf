//! The Flow AST and compiler.
//!
//! A Flow is a free-structured program of two primitives —
//! `installHandler` and `waitFor` — composed by ordinary function
//! composition in Rust rather than a `>>=` operator. [`ast::compile`]
//! (re-exported from [`consumer`]) walks a [`ast::Flow`] into a
//! [`consumer::StreamConsumer`], the lazy state machine an aggregate
//! runtime drives one event and one command at a time.

pub mod ast;
pub mod consumer;
mod properties;
pub mod spec;

pub use ast::{
    done, install_handler, or_else_cmd, or_else_event, wait_for, CmdFn, CommandHandlerResult, Flow,
};
pub use consumer::{compile, StreamConsumer};
pub use spec::{FlowTestSpecification, GivenState, WhenResult};
