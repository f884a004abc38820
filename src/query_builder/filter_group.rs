use dioxus::prelude::*;
use log::debug;
use std::rc::Rc;

use super::decorate::{maybe_wrap, MissingMemberWarning};
use super::filter::{AvailableMembers, Filter, FilterDraft, Member, MissingMembers};
use super::update_methods::UpdateMethodsHandle;
use crate::components::{
    DropdownVariant, FilterInput, MemberDropdown, RemoveButtonGroup, SectionRow, Select,
    SelectOption,
};

// Visual weight of a row's field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Danger,
}

impl Emphasis {
    pub fn class(&self) -> &'static str {
        match self {
            Emphasis::Primary => "primary",
            Emphasis::Danger => "danger",
        }
    }
}

#[derive(PartialEq, Props, Clone)]
pub struct FilterGroupProps {
    #[props(default)]
    pub disabled: bool,
    pub members: Vec<Filter>,
    pub available_members: AvailableMembers,
    pub add_member_name: String,
    pub update_methods: UpdateMethodsHandle,
    pub missing_members: MissingMembers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelectorView {
    pub title: String,
    pub emphasis: Emphasis,
    // Rendered inside the missing member tooltip
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorSelectView {
    pub value: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterRowView {
    pub key: String,
    pub input_key: String,
    pub filter: Filter,
    pub field: FieldSelectorView,
    pub operator_select: OperatorSelectView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddControlView {
    // Only present while there are no filters yet
    pub label: Option<String>,
}

// Something the user did to one of the group's controls
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Remove { row: usize },
    SelectMember { row: usize, member: Member },
    SelectOperator { row: usize, operator: String },
    Add { member: Member },
}

/// Everything the filter group shows, derived from its props alone.
///
/// The component renders this and routes every DOM event through
/// [`FilterGroupView::dispatch`], so the view is also what tests drive.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroupView {
    pub disabled: bool,
    pub rows: Vec<FilterRowView>,
    pub add_control: AddControlView,
    update_methods: UpdateMethodsHandle,
}

impl FilterGroupView {
    pub fn build(props: &FilterGroupProps) -> Self {
        let rows = props
            .members
            .iter()
            .map(|filter| {
                let missing = props.missing_members.contains(&filter.member);
                FilterRowView {
                    key: filter.index.to_string(),
                    input_key: format!("filter-input-{}", filter.index),
                    filter: filter.clone(),
                    field: FieldSelectorView {
                        title: filter.dimension.title.clone(),
                        emphasis: if missing { Emphasis::Danger } else { Emphasis::Primary },
                        missing,
                    },
                    operator_select: OperatorSelectView {
                        value: filter.operator.clone(),
                        options: filter
                            .operators
                            .iter()
                            .map(|operator| SelectOption {
                                key: operator.name.clone(),
                                value: operator.name.clone(),
                                title: operator.title.clone(),
                            })
                            .collect(),
                    },
                }
            })
            .collect();

        let label = if props.members.is_empty() {
            Some(props.add_member_name.clone())
        } else {
            None
        };

        Self {
            disabled: props.disabled,
            rows,
            add_control: AddControlView { label },
            update_methods: props.update_methods.clone(),
        }
    }

    /// Forward an interaction to the update methods.
    ///
    /// Returns whether an update method was called. Nothing is called while
    /// the group is disabled or when the interaction names a row that is not
    /// rendered.
    pub fn dispatch(&self, interaction: Interaction) -> bool {
        if self.disabled {
            debug!("Filter group is disabled, ignoring {:?}", interaction);
            return false;
        }

        match interaction {
            Interaction::Add { member } => {
                debug!("Adding filter on {}", member.name);
                self.update_methods.add(FilterDraft { member });
            }
            Interaction::Remove { row } => {
                let Some(filter) = self.filter_at(row) else {
                    return false;
                };
                debug!("Removing filter {} ({})", filter.index, filter.member);
                self.update_methods.remove(filter);
            }
            Interaction::SelectMember { row, member } => {
                let Some(filter) = self.filter_at(row) else {
                    return false;
                };
                debug!("Filter {} now targets {}", filter.index, member.name);
                self.update_methods.update(filter, filter.with_dimension(member));
            }
            Interaction::SelectOperator { row, operator } => {
                let Some(filter) = self.filter_at(row) else {
                    return false;
                };
                debug!("Filter {} operator set to {}", filter.index, operator);
                self.update_methods.update(filter, filter.with_operator(&operator));
            }
        }

        true
    }

    fn filter_at(&self, row: usize) -> Option<&Filter> {
        let filter = self.rows.get(row).map(|row| &row.filter);
        if filter.is_none() {
            debug!("No filter row at position {}", row);
        }
        filter
    }
}

#[component]
pub fn FilterGroup(props: FilterGroupProps) -> Element {
    let view = Rc::new(FilterGroupView::build(&props));
    let disabled = view.disabled;

    let on_add = {
        let view = view.clone();
        move |member: Member| {
            view.dispatch(Interaction::Add { member });
        }
    };

    rsx! {
        SectionRow {
            for (position, row) in view.rows.iter().enumerate() {
                {
                    let on_remove = {
                        let view = view.clone();
                        move |_: ()| {
                            view.dispatch(Interaction::Remove { row: position });
                        }
                    };
                    let on_select_member = {
                        let view = view.clone();
                        move |member: Member| {
                            view.dispatch(Interaction::SelectMember { row: position, member });
                        }
                    };
                    let on_select_operator = {
                        let view = view.clone();
                        move |operator: String| {
                            view.dispatch(Interaction::SelectOperator { row: position, operator });
                        }
                    };

                    let field = rsx! {
                        RemoveButtonGroup {
                            disabled: disabled,
                            color: row.field.emphasis,
                            onremove: on_remove,

                            MemberDropdown {
                                available_members: props.available_members.clone(),
                                disabled: disabled,
                                variant: DropdownVariant::Solid,
                                show_add_icon: false,
                                label: row.field.title.clone(),
                                onselect: on_select_member,
                            }
                        }
                    };

                    rsx! {
                        div { key: "{row.key}", class: "filter-row",
                            {maybe_wrap(field, row.field.missing, &MissingMemberWarning)}

                            Select {
                                disabled: disabled,
                                value: row.operator_select.value.clone(),
                                options: row.operator_select.options.clone(),
                                onchange: on_select_operator,
                            }

                            FilterInput {
                                identity: row.input_key.clone(),
                                disabled: disabled,
                                member: row.filter.clone(),
                                update_methods: props.update_methods.clone(),
                            }
                        }
                    }
                }
            }

            // Trailing add control, labelled only as an empty state
            MemberDropdown {
                available_members: props.available_members.clone(),
                disabled: disabled,
                variant: DropdownVariant::Dashed,
                show_add_icon: true,
                label: view.add_control.label.clone().unwrap_or_default(),
                onselect: on_add,
            }
        }
    }
}
