use crate::store::{Entry, Registry};
use podium_domain::constants::{PAPER, PERSON};
use podium_domain::ids::{PaperId, PersonId};
use podium_domain::people::{Paper, Person};
use podium_kernel::directory::{DirectoryError, PersonDirectory};

pub type PersonRegistry = Registry<Person>;
pub type PaperRegistry = Registry<Paper>;

impl Entry for Person {
    type Id = PersonId;

    const ENTITY: &'static str = PERSON;

    fn id(&self) -> &PersonId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_terms(&self) -> Vec<&str> {
        self.email.iter().chain(&self.affiliation).map(String::as_str).collect()
    }
}

impl Entry for Paper {
    type Id = PaperId;

    const ENTITY: &'static str = PAPER;

    fn id(&self) -> &PaperId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_terms(&self) -> Vec<&str> {
        self.keywords.iter().map(String::as_str).collect()
    }
}

impl PersonDirectory for PersonRegistry {
    fn person_name(&self, id: &PersonId) -> Result<Option<String>, DirectoryError> {
        Ok(self.get(id).map(|person| person.name))
    }
}

impl PaperRegistry {
    /// Papers listing `author` among their authors, ordered by title.
    #[must_use]
    pub fn by_author(&self, author: &PersonId) -> Vec<Paper> {
        self.list().into_iter().filter(|paper| paper.authors.contains(author)).collect()
    }
}
