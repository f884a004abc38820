use dioxus::prelude::*;

#[component]
pub fn SectionRow(children: Element) -> Element {
    rsx! {
        div { class: "section-row", {children} }
    }
}
