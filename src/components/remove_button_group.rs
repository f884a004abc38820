use dioxus::prelude::*;

use crate::query_builder::Emphasis;

#[component]
pub fn RemoveButtonGroup(
    disabled: bool,
    color: Emphasis,
    onremove: EventHandler<()>,
    children: Element,
) -> Element {
    let class = if disabled {
        format!("remove-button-group {} disabled", color.class())
    } else {
        format!("remove-button-group {}", color.class())
    };

    rsx! {
        div { class: "{class}",
            {children}

            button {
                class: "remove-button",
                disabled: disabled,
                onclick: move |_| {
                    if !disabled {
                        onremove.call(());
                    }
                },
                "×"
            }
        }
    }
}
