use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub key: String,
    pub value: String,
    pub title: String,
}

#[component]
pub fn Select(
    disabled: bool,
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "operator-select",
            disabled: disabled,
            value: "{value}",
            onchange: move |evt: FormEvent| {
                if !disabled {
                    onchange.call(evt.value());
                }
            },

            for choice in options.iter() {
                option {
                    key: "{choice.key}",
                    value: "{choice.value}",
                    selected: choice.value == value,
                    "{choice.title}"
                }
            }
        }
    }
}
