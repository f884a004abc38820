use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use super::filter::{Filter, FilterDraft};

/// The only way the filter group changes filters.
///
/// Implementations own the filter list. Calls are fire-and-forget: the group
/// re-renders from whatever props the store produces afterwards.
pub trait UpdateMethods {
    /// Append a new filter on `draft.member`.
    fn add(&self, draft: FilterDraft);

    /// Replace `existing` (matched by its index) with `replacement`.
    fn update(&self, existing: &Filter, replacement: Filter);

    /// Drop `existing` (matched by its index).
    fn remove(&self, existing: &Filter);
}

// Cloneable handle so update methods can travel through component props.
// Two handles are equal when they point at the same implementation.
#[derive(Clone)]
pub struct UpdateMethodsHandle(Rc<dyn UpdateMethods>);

impl UpdateMethodsHandle {
    pub fn new(methods: impl UpdateMethods + 'static) -> Self {
        Self(Rc::new(methods))
    }
}

impl From<Rc<dyn UpdateMethods>> for UpdateMethodsHandle {
    fn from(value: Rc<dyn UpdateMethods>) -> Self {
        Self(value)
    }
}

impl Deref for UpdateMethodsHandle {
    type Target = dyn UpdateMethods;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for UpdateMethodsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for UpdateMethodsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UpdateMethodsHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::testing::RecordingUpdates;

    #[test]
    fn handles_compare_by_identity() {
        let recorder = Rc::new(RecordingUpdates::default());
        let shared: Rc<dyn UpdateMethods> = recorder.clone();
        let first = UpdateMethodsHandle::from(shared.clone());
        let second = UpdateMethodsHandle::from(shared);
        let other = UpdateMethodsHandle::new(RecordingUpdates::default());

        assert_eq!(first, second);
        assert_ne!(first, other);
    }
}
