//! An aggregate definition: the tag naming the aggregate type plus the
//! Flow that describes its behavior.

use std::rc::Rc;

use eventflow_core::Tag;
use eventflow_flow::{compile, CmdFn, Flow, StreamConsumer};

/// Everything the runtime needs to drive one aggregate type: its tag and
/// a factory for a fresh copy of its Flow (flows are not `Clone`, so a
/// factory stands in for one, matching the pattern used by
/// [`eventflow_flow::spec::FlowTestSpecification`]).
pub struct AggregateDefinition<C, E> {
    tag: Tag,
    build_flow: Rc<dyn Fn() -> Flow<C, E>>,
}

impl<C: 'static, E: 'static> AggregateDefinition<C, E> {
    pub fn new(tag: Tag, build_flow: impl Fn() -> Flow<C, E> + 'static) -> Self {
        Self {
            tag,
            build_flow: Rc::new(build_flow),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Compile a fresh initial consumer for this aggregate's logic, using
    /// an empty (always-`None`) handler as the fallback before the flow's
    /// first `installHandler` node.
    #[must_use]
    pub fn initial_consumer(&self) -> Option<StreamConsumer<C, E>> {
        let empty_handler: Rc<CmdFn<C, E>> = Rc::new(|_: &C| None);
        compile(empty_handler, (self.build_flow)())
    }
}
