use dioxus::prelude::*;

pub const MISSING_MEMBER_MESSAGE: &str = "This member was not found in the data schema";

#[component]
pub fn MissingMemberTooltip(children: Element) -> Element {
    rsx! {
        div {
            class: "missing-member-tooltip",
            title: MISSING_MEMBER_MESSAGE,
            {children}
            span { class: "missing-member-icon", "⚠" }
        }
    }
}
