use log::{debug, warn};
use std::cell::RefCell;

use super::filter::{AvailableMembers, Filter, FilterDraft, Member, MissingMembers, Operator};
use super::operators::{is_unary, operators_for};
use super::query::{Query, QueryFilter};
use super::update_methods::UpdateMethods;

/// The filters of the query being built.
///
/// Indices are handed out once and never reused, so a filter keeps its
/// identity while others around it are added or removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryFilters {
    filters: Vec<Filter>,
    next_index: usize,
}

impl QueryFilters {
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn add(&mut self, draft: FilterDraft) {
        let filter = self.new_filter(draft.member, None, Vec::new());
        debug!("Added filter {} on {}", filter.index, filter.member);
        self.filters.push(filter);
    }

    pub fn update(&mut self, existing: &Filter, replacement: Filter) {
        let Some(position) = self.position(existing) else {
            debug!("Filter {} is gone, dropping update", existing.index);
            return;
        };

        let mut next = replacement;
        next.index = existing.index;

        // A new member brings its own operators, values no longer apply
        if next.dimension.name != existing.dimension.name {
            next.member = next.dimension.name.clone();
            next.operators = operators_for(next.dimension.kind);
            if !next.operators.iter().any(|op| op.name == next.operator) {
                next.operator = first_operator(&next.operators);
            }
            next.values.clear();
        }

        if is_unary(&next.operator) {
            next.values.clear();
        }

        debug!("Updated filter {}: {} {} {:?}", next.index, next.member, next.operator, next.values);
        self.filters[position] = next;
    }

    pub fn remove(&mut self, existing: &Filter) {
        match self.position(existing) {
            Some(position) => {
                self.filters.remove(position);
                debug!("Removed filter {}", existing.index);
            }
            None => debug!("Filter {} already removed", existing.index),
        }
    }

    pub fn missing_members(&self, available: &AvailableMembers) -> MissingMembers {
        self.filters
            .iter()
            .filter(|filter| available.find(&filter.member).is_none())
            .map(|filter| filter.member.clone())
            .collect()
    }

    // Resolve a saved query against the schema. Members the schema lacks are
    // kept with a placeholder dimension so they show up as missing.
    pub fn from_query(query: &Query, available: &AvailableMembers) -> Self {
        let mut state = Self::default();
        for saved in &query.filters {
            let dimension = match available.find(&saved.member) {
                Some(member) => member.clone(),
                None => {
                    warn!("Query filters on unknown member '{}'", saved.member);
                    Member::placeholder(&saved.member)
                }
            };
            let filter = state.new_filter(dimension, Some(&saved.operator), saved.values.clone());
            state.filters.push(filter);
        }
        state
    }

    pub fn to_query(&self) -> Query {
        Query {
            filters: self
                .filters
                .iter()
                .map(|filter| QueryFilter {
                    member: filter.member.clone(),
                    operator: filter.operator.clone(),
                    values: filter.values.clone(),
                })
                .collect(),
        }
    }

    fn new_filter(&mut self, dimension: Member, operator: Option<&str>, values: Vec<String>) -> Filter {
        let operators = operators_for(dimension.kind);
        // Saved operators the member kind does not offer fall back to the first one
        let operator = match operator {
            Some(operator) if operators.iter().any(|op| op.name == operator) => operator.to_string(),
            Some(operator) => {
                warn!("Operator '{}' does not apply to {}", operator, dimension.name);
                first_operator(&operators)
            }
            None => first_operator(&operators),
        };
        let index = self.next_index;
        self.next_index += 1;

        Filter {
            index,
            member: dimension.name.clone(),
            dimension,
            operator,
            operators,
            values,
        }
    }

    fn position(&self, existing: &Filter) -> Option<usize> {
        self.filters.iter().position(|filter| filter.index == existing.index)
    }
}

fn first_operator(operators: &[Operator]) -> String {
    operators.first().map(|op| op.name.clone()).unwrap_or_default()
}

// Plain single-threaded store, handy outside of a Dioxus runtime
impl UpdateMethods for RefCell<QueryFilters> {
    fn add(&self, draft: FilterDraft) {
        self.borrow_mut().add(draft);
    }

    fn update(&self, existing: &Filter, replacement: Filter) {
        self.borrow_mut().update(existing, replacement);
    }

    fn remove(&self, existing: &Filter) {
        self.borrow_mut().remove(existing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::filter::MemberKind;
    use crate::query_builder::filter_group::{FilterGroupProps, FilterGroupView, Interaction};
    use crate::query_builder::testing::{member, orders_schema};
    use crate::query_builder::update_methods::UpdateMethodsHandle;
    use std::rc::Rc;

    fn draft(name: &str, kind: MemberKind) -> FilterDraft {
        FilterDraft { member: member(name, kind) }
    }

    #[test]
    fn add_assigns_fresh_indices_and_first_operator() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.amount", MemberKind::Number));
        state.add(draft("Orders.status", MemberKind::String));

        let filters = state.filters();
        assert_eq!(filters[0].index, 0);
        assert_eq!(filters[0].operator, "equals");
        assert_eq!(filters[1].index, 1);
        assert_eq!(filters[1].operator, "contains");
        assert!(filters[1].values.is_empty());
    }

    #[test]
    fn indices_are_not_reused_after_remove() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.amount", MemberKind::Number));
        state.add(draft("Orders.status", MemberKind::String));
        let first = state.filters()[0].clone();

        state.remove(&first);
        state.add(draft("Orders.isPaid", MemberKind::Boolean));

        let indices: Vec<usize> = state.filters().iter().map(|f| f.index).collect();
        assert_eq!(indices, [1, 2]);
    }

    #[test]
    fn changing_member_recomputes_operators() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.status", MemberKind::String));
        let original = state.filters()[0].clone();
        let existing = original.with_values(vec!["shipped".to_string()]);
        state.update(&original, existing.clone());

        let replacement = existing.with_dimension(member("Orders.amount", MemberKind::Number));
        state.update(&existing, replacement);

        let updated = &state.filters()[0];
        assert_eq!(updated.member, "Orders.amount");
        assert_eq!(updated.operator, "equals");
        assert_eq!(updated.operators.len(), 8);
        assert!(updated.values.is_empty());
    }

    #[test]
    fn shared_operator_survives_member_change() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.status", MemberKind::String));
        let original = state.filters()[0].clone();
        let existing = original.with_operator("notEquals");
        state.update(&original, existing.clone());

        state.update(&existing, existing.with_dimension(member("Orders.isPaid", MemberKind::Boolean)));
        assert_eq!(state.filters()[0].operator, "notEquals");
    }

    #[test]
    fn unary_operator_clears_values() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.status", MemberKind::String));
        let existing = state.filters()[0].clone();

        state.update(&existing, existing.with_values(vec!["a".into()]).with_operator("set"));
        assert!(state.filters()[0].values.is_empty());
    }

    #[test]
    fn stale_filters_are_ignored() {
        let mut state = QueryFilters::default();
        state.add(draft("Orders.status", MemberKind::String));
        let existing = state.filters()[0].clone();
        state.remove(&existing);

        state.update(&existing, existing.with_operator("equals"));
        state.remove(&existing);
        assert!(state.is_empty());
    }

    #[test]
    fn query_round_trip_marks_unknown_members_missing() {
        let query = Query {
            filters: vec![
                QueryFilter {
                    member: "Orders.status".to_string(),
                    operator: "equals".to_string(),
                    values: vec!["shipped".to_string()],
                },
                QueryFilter {
                    member: "Orders.legacyCode".to_string(),
                    operator: "set".to_string(),
                    values: Vec::new(),
                },
            ],
        };
        let schema = orders_schema();

        let state = QueryFilters::from_query(&query, &schema);
        let missing = state.missing_members(&schema);

        assert_eq!(missing.len(), 1);
        assert!(missing.contains("Orders.legacyCode"));
        assert_eq!(state.filters()[1].dimension.title, "Orders.legacyCode");
        assert_eq!(state.to_query(), query);
    }

    #[test]
    fn filter_group_drives_the_store() {
        let store = Rc::new(RefCell::new(QueryFilters::default()));
        let methods: Rc<dyn UpdateMethods> = store.clone();
        let update_methods = UpdateMethodsHandle::from(methods);

        let props_for = |filters: Vec<Filter>| FilterGroupProps {
            disabled: false,
            members: filters,
            available_members: orders_schema(),
            add_member_name: "Filter".to_string(),
            update_methods: update_methods.clone(),
            missing_members: MissingMembers::new(),
        };

        let view = FilterGroupView::build(&props_for(Vec::new()));
        view.dispatch(Interaction::Add { member: member("Orders.amount", MemberKind::Number) });

        let filters = store.borrow().filters().to_vec();
        let view = FilterGroupView::build(&props_for(filters));
        view.dispatch(Interaction::SelectOperator { row: 0, operator: "gt".to_string() });

        let filters = store.borrow().filters().to_vec();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].operator, "gt");

        let view = FilterGroupView::build(&props_for(filters));
        view.dispatch(Interaction::Remove { row: 0 });
        assert!(store.borrow().is_empty());
    }

    #[test]
    fn saved_operator_outside_kind_falls_back_to_first() {
        let query = Query {
            filters: vec![QueryFilter {
                member: "Orders.status".to_string(),
                operator: "gt".to_string(),
                values: vec!["3".to_string()],
            }],
        };

        let state = QueryFilters::from_query(&query, &orders_schema());
        let restored = &state.filters()[0];

        assert_eq!(restored.operator, "contains");
        assert!(restored.operators.iter().any(|op| op.name == restored.operator));
        assert_eq!(restored.values, vec!["3".to_string()]);
    }
}
