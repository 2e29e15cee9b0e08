//! Person name lookup used to render scheduling reports.
//!
//! The scheduling slice only knows person ids; whoever owns the person registry implements
//! [`PersonDirectory`] so conflicts can be shown with display names.

use fxhash::FxHashMap;
use podium_domain::ids::PersonId;
use podium_domain::people::Person;
use std::borrow::Cow;

#[podium_derive::podium_error]
pub enum DirectoryError {
    /// The backing registry could not answer (unavailable, poisoned, timed out).
    #[error("Person directory unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal directory error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Resolves person ids to display names.
pub trait PersonDirectory {
    /// `Ok(None)` means the id is not known.
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError>;
}

impl<D: PersonDirectory + ?Sized> PersonDirectory for &D {
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError> {
        (**self).person_name(id)
    }
}

impl PersonDirectory for [Person] {
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError> {
        Ok(self.iter().find(|p| &p.id == id).map(|p| p.name.clone()))
    }
}

impl PersonDirectory for Vec<Person> {
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError> {
        self.as_slice().person_name(id)
    }
}

impl PersonDirectory for FxHashMap<PersonId, String> {
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError> {
        Ok(self.get(id).cloned())
    }
}

/// A directory that knows nobody. Every conflict renders as unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDirectory;

impl PersonDirectory for EmptyDirectory {
    fn person_name(&self, _id: &PersonId) -> Result<Option<String>, DirectoryError> {
        Ok(None)
    }
}
