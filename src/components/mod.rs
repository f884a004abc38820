mod filter_input;
mod member_dropdown;
mod missing_member_tooltip;
mod remove_button_group;
mod section_row;
mod select;

pub use filter_input::{parse_values, FilterInput};
pub use member_dropdown::{DropdownVariant, MemberDropdown};
pub use missing_member_tooltip::{MissingMemberTooltip, MISSING_MEMBER_MESSAGE};
pub use remove_button_group::RemoveButtonGroup;
pub use section_row::SectionRow;
pub use select::{Select, SelectOption};
