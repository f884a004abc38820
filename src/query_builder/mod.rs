mod decorate;
mod filter;
mod filter_group;
mod operators;
mod query;
mod schema;
mod state;
mod update_methods;

#[cfg(test)]
pub(crate) mod testing;

pub use decorate::{maybe_wrap, Decorator, MissingMemberWarning};
pub use filter::{AvailableMembers, Cube, Filter, FilterDraft, Member, MemberKind, MissingMembers, Operator};
pub use filter_group::{
    AddControlView, Emphasis, FieldSelectorView, FilterGroup, FilterGroupProps, FilterGroupView,
    FilterRowView, Interaction, OperatorSelectView,
};
pub use operators::{is_unary, operators_for};
pub use query::{load_query, Query, QueryError, QueryFilter};
pub use schema::{default_schema, load_schema, parse_schema, SchemaError};
pub use state::QueryFilters;
pub use update_methods::{UpdateMethods, UpdateMethodsHandle};
