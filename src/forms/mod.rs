//! Form validation for the registration and contact pages.

pub mod contact;
pub mod registration;

/// How a single field looks after validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState<E> {
    /// Not checked yet (or reset).
    #[default]
    Untouched,
    Valid,
    Invalid(E),
}

impl<E> FieldState<E> {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            FieldState::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<Result<(), E>> for FieldState<E> {
    fn from(res: Result<(), E>) -> Self {
        match res {
            Ok(()) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e),
        }
    }
}
