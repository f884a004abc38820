use dioxus::prelude::*;

use crate::components::MissingMemberTooltip;

// Something that can wrap an already rendered node
pub trait Decorator {
    fn wrap(&self, node: Element) -> Element;
}

// Wrap `node` only when `condition` holds, otherwise hand it back untouched
pub fn maybe_wrap(node: Element, condition: bool, decorator: &impl Decorator) -> Element {
    if condition {
        decorator.wrap(node)
    } else {
        node
    }
}

// Warning tooltip for rows whose member left the schema
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingMemberWarning;

impl Decorator for MissingMemberWarning {
    fn wrap(&self, node: Element) -> Element {
        rsx! {
            MissingMemberTooltip { {node} }
        }
    }
}
