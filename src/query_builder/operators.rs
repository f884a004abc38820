use super::filter::{MemberKind, Operator};

const STRING_OPERATORS: &[(&str, &str)] = &[
    ("contains", "contains"),
    ("notContains", "does not contain"),
    ("equals", "equals"),
    ("notEquals", "does not equal"),
    ("set", "is set"),
    ("notSet", "is not set"),
    ("startsWith", "starts with"),
    ("notStartsWith", "does not start with"),
    ("endsWith", "ends with"),
    ("notEndsWith", "does not end with"),
];

const NUMBER_OPERATORS: &[(&str, &str)] = &[
    ("equals", "equals"),
    ("notEquals", "does not equal"),
    ("set", "is set"),
    ("notSet", "is not set"),
    ("gt", ">"),
    ("gte", ">="),
    ("lt", "<"),
    ("lte", "<="),
];

const TIME_OPERATORS: &[(&str, &str)] = &[
    ("equals", "equals"),
    ("notEquals", "does not equal"),
    ("inDateRange", "in date range"),
    ("notInDateRange", "not in date range"),
    ("afterDate", "after date"),
    ("afterOrOnDate", "after or on date"),
    ("beforeDate", "before date"),
    ("beforeOrOnDate", "before or on date"),
];

const BOOLEAN_OPERATORS: &[(&str, &str)] = &[
    ("equals", "equals"),
    ("notEquals", "does not equal"),
    ("set", "is set"),
    ("notSet", "is not set"),
];

// Operators that take no values
const UNARY_OPERATORS: &[&str] = &["set", "notSet"];

pub fn operators_for(kind: MemberKind) -> Vec<Operator> {
    let table = match kind {
        MemberKind::String => STRING_OPERATORS,
        MemberKind::Number => NUMBER_OPERATORS,
        MemberKind::Time => TIME_OPERATORS,
        MemberKind::Boolean => BOOLEAN_OPERATORS,
    };

    table
        .iter()
        .map(|(name, title)| Operator {
            name: name.to_string(),
            title: title.to_string(),
        })
        .collect()
}

pub fn is_unary(operator: &str) -> bool {
    UNARY_OPERATORS.contains(&operator)
}
