use dioxus::prelude::*;
use log::{debug, error};

use crate::config::Config;
use crate::query_builder::{
    AvailableMembers, Filter, FilterDraft, FilterGroup, QueryFilters, UpdateMethods,
    UpdateMethodsHandle,
};

// Handed to the root component through context at launch
#[derive(Debug, Clone)]
pub struct AppProps {
    pub config: Config,
    pub available_members: AvailableMembers,
    pub filters: QueryFilters,
}

// Update methods writing straight into the app's filter signal
struct SignalUpdateMethods {
    filters: Signal<QueryFilters>,
}

impl UpdateMethods for SignalUpdateMethods {
    fn add(&self, draft: FilterDraft) {
        let mut filters = self.filters;
        filters.write().add(draft);
    }

    fn update(&self, existing: &Filter, replacement: Filter) {
        let mut filters = self.filters;
        filters.write().update(existing, replacement);
    }

    fn remove(&self, existing: &Filter) {
        let mut filters = self.filters;
        filters.write().remove(existing);
    }
}

pub fn app() -> Element {
    let props = use_context::<AppProps>();
    let css = include_str!("assets/style.css");

    let filters = use_signal(|| props.filters.clone());
    let mut locked = use_signal(|| props.config.disabled);
    let update_methods = use_hook(|| UpdateMethodsHandle::new(SignalUpdateMethods { filters }));

    let members = filters.read().filters().to_vec();
    let missing_members = filters.read().missing_members(&props.available_members);
    let query_json = match serde_json::to_string_pretty(&filters.read().to_query()) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize query: {}", e);
            String::new()
        }
    };

    rsx! {
        style { {css} }

        div { class: "playground",
            header { class: "playground-header",
                h1 { "Query Builder" }

                label { class: "lock-toggle",
                    input {
                        r#type: "checkbox",
                        checked: *locked.read(),
                        onchange: move |_| {
                            let next = !*locked.read();
                            debug!("Filters locked: {}", next);
                            locked.set(next);
                        }
                    }
                    "Lock filters"
                }
            }

            section { class: "playground-section",
                h2 { "Filters" }

                FilterGroup {
                    disabled: *locked.read(),
                    members: members,
                    available_members: props.available_members.clone(),
                    add_member_name: props.config.add_member_name.clone(),
                    update_methods: update_methods.clone(),
                    missing_members: missing_members,
                }
            }

            section { class: "playground-section",
                h2 { "Query" }
                pre { class: "query-preview", "{query_json}" }
            }
        }
    }
}
