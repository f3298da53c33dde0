/// What a form is currently working on: a brand new record, or a specific
/// persisted one. Owned by the page coordinator, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditTarget<T> {
    #[default]
    Creating,
    Editing(T),
}

impl<T> EditTarget<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            EditTarget::Editing(record) => Some(record),
            EditTarget::Creating => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_creating() {
        let target: EditTarget<u32> = EditTarget::default();
        assert!(!target.is_editing());
        assert_eq!(target.editing(), None);
    }

    #[test]
    fn editing_exposes_the_record() {
        let target = EditTarget::Editing(7u32);
        assert!(target.is_editing());
        assert_eq!(target.editing(), Some(&7));
    }
}
