use dioxus::prelude::*;
use log::debug;

use crate::query_builder::{is_unary, Filter, MemberKind, UpdateMethodsHandle};

// Turn what the user typed into filter values.
// None means the input is not acceptable for this kind and should be dropped.
pub fn parse_values(kind: MemberKind, raw: &str) -> Option<Vec<String>> {
    match kind {
        MemberKind::Number => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Some(Vec::new())
            } else if trimmed.parse::<f64>().is_ok() {
                Some(vec![trimmed.to_string()])
            } else {
                None
            }
        }
        _ => Some(
            raw.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect(),
        ),
    }
}

#[component]
pub fn FilterInput(
    identity: String,
    disabled: bool,
    member: Filter,
    update_methods: UpdateMethodsHandle,
) -> Element {
    // set / notSet take no values
    if is_unary(&member.operator) {
        return rsx! {};
    }

    let kind = member.dimension.kind;
    let current = member.values.join(", ");
    let input_type = if kind == MemberKind::Number { "number" } else { "text" };
    let placeholder = match kind {
        MemberKind::Number => "Value",
        MemberKind::Time => "YYYY-MM-DD, YYYY-MM-DD",
        _ => "Values, comma separated",
    };

    rsx! {
        input {
            id: "{identity}",
            class: "filter-input",
            r#type: input_type,
            disabled: disabled,
            placeholder: placeholder,
            value: "{current}",
            onchange: move |evt: FormEvent| {
                if disabled {
                    return;
                }
                match parse_values(kind, &evt.value()) {
                    Some(values) => {
                        update_methods.update(&member, member.with_values(values));
                    }
                    None => {
                        debug!("Ignoring invalid value for filter {}: {}", member.index, evt.value());
                    }
                }
            },
        }
    }
}
