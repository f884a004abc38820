// Fixtures shared by the query builder tests
use std::cell::RefCell;
use std::rc::Rc;

use super::filter::{AvailableMembers, Cube, Filter, FilterDraft, Member, MemberKind};
use super::operators::operators_for;
use super::update_methods::{UpdateMethods, UpdateMethodsHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Add(FilterDraft),
    Update(Filter, Filter),
    Remove(Filter),
}

#[derive(Default)]
pub struct RecordingUpdates {
    calls: RefCell<Vec<Call>>,
}

impl RecordingUpdates {
    pub fn handle() -> (Rc<RecordingUpdates>, UpdateMethodsHandle) {
        let recorder = Rc::new(RecordingUpdates::default());
        let methods: Rc<dyn UpdateMethods> = recorder.clone();
        (recorder, UpdateMethodsHandle::from(methods))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl UpdateMethods for RecordingUpdates {
    fn add(&self, draft: FilterDraft) {
        self.calls.borrow_mut().push(Call::Add(draft));
    }

    fn update(&self, existing: &Filter, replacement: Filter) {
        self.calls
            .borrow_mut()
            .push(Call::Update(existing.clone(), replacement));
    }

    fn remove(&self, existing: &Filter) {
        self.calls.borrow_mut().push(Call::Remove(existing.clone()));
    }
}

pub fn member(name: &str, kind: MemberKind) -> Member {
    let short = name.rsplit('.').next().unwrap_or(name);
    Member {
        name: name.to_string(),
        title: format!("Orders {short}"),
        short_title: short.to_string(),
        kind,
    }
}

pub fn filter(index: usize, name: &str, kind: MemberKind) -> Filter {
    let operators = operators_for(kind);
    Filter {
        index,
        member: name.to_string(),
        dimension: member(name, kind),
        operator: operators[0].name.clone(),
        operators,
        values: Vec::new(),
    }
}

pub fn orders_schema() -> AvailableMembers {
    AvailableMembers {
        cubes: vec![Cube {
            name: "Orders".to_string(),
            title: "Orders".to_string(),
            members: vec![
                member("Orders.status", MemberKind::String),
                member("Orders.amount", MemberKind::Number),
                member("Orders.createdAt", MemberKind::Time),
                member("Orders.isPaid", MemberKind::Boolean),
            ],
        }],
    }
}
