use dioxus::prelude::*;

use crate::query_builder::{AvailableMembers, Member};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownVariant {
    Solid,
    Dashed,
}

impl DropdownVariant {
    fn class(&self) -> &'static str {
        match self {
            DropdownVariant::Solid => "solid",
            DropdownVariant::Dashed => "dashed",
        }
    }
}

// Toggle button that opens a cube-grouped list of members
#[component]
pub fn MemberDropdown(
    available_members: AvailableMembers,
    disabled: bool,
    variant: DropdownVariant,
    show_add_icon: bool,
    label: String,
    onselect: EventHandler<Member>,
    #[props(default)]
    default_open: bool,
) -> Element {
    let mut open = use_signal(|| default_open);
    let class = format!("member-dropdown {}", variant.class());

    rsx! {
        div { class: "{class}",
            button {
                class: "member-dropdown-toggle",
                disabled: disabled,
                onclick: move |_| {
                    if !disabled {
                        let next = !*open.read();
                        open.set(next);
                    }
                },

                if show_add_icon {
                    span { class: "member-dropdown-icon", "+" }
                }
                if !label.is_empty() {
                    span { class: "member-dropdown-label", "{label}" }
                }
            }

            if *open.read() && !disabled {
                div { class: "member-dropdown-menu",
                    if available_members.is_empty() {
                        div { class: "member-dropdown-empty", "No members found" }
                    }

                    for cube in available_members.cubes.iter() {
                        div { key: "{cube.name}", class: "member-dropdown-cube",
                            div { class: "member-dropdown-cube-title", "{cube.title}" }

                            for member in cube.members.iter() {
                                {
                                    let picked = member.clone();
                                    rsx! {
                                        button {
                                            key: "{member.name}",
                                            class: "member-dropdown-item",
                                            onclick: move |_| {
                                                open.set(false);
                                                onselect.call(picked.clone());
                                            },
                                            "{member.title}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
