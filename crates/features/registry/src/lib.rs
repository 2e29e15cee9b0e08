//! # Registries
//!
//! In-memory stores for the people and papers a conference schedules. Sessions reference both
//! by id; the person registry also serves as the [`PersonDirectory`] that names conflicts.
//!
//! ```rust
//! use podium_domain::people::Person;
//! use podium_kernel::directory::PersonDirectory;
//! use podium_registry::PersonRegistry;
//!
//! let people = PersonRegistry::new();
//! people.upsert(Person::builder().id("person:ada").name("Ada Lovelace").build()).unwrap();
//!
//! let name = people.person_name(&"person:ada".into()).unwrap();
//! assert_eq!(name.as_deref(), Some("Ada Lovelace"));
//! ```
//!
//! [`PersonDirectory`]: podium_kernel::directory::PersonDirectory

mod error;
pub mod people;
pub mod store;

pub use error::{RegistryError, RegistryErrorExt};
pub use people::{PaperRegistry, PersonRegistry};
pub use store::{Entry, Registry};

use podium_domain::config::PodiumConfig;
use podium_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Registries feature state.
#[podium_derive::podium_slice]
pub struct Registries {
    pub persons: Arc<PersonRegistry>,
    pub papers: Arc<PaperRegistry>,
}

impl Registries {
    #[must_use]
    pub fn empty() -> Self {
        Self::new(RegistriesInner {
            persons: Arc::new(PersonRegistry::new()),
            papers: Arc::new(PaperRegistry::new()),
        })
    }
}

/// Initialize the registries feature with empty stores.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(_config: &PodiumConfig) -> Result<InitializedSlice, RegistryError> {
    tracing::info!("Registries slice initialized");

    Ok(InitializedSlice::new(Registries::empty()))
}
