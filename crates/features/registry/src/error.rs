use std::borrow::Cow;

#[podium_derive::podium_error]
pub enum RegistryError {
    #[error("{entity} not found{}: {id}", format_context(.context))]
    NotFound { entity: &'static str, id: String, context: Option<Cow<'static, str>> },

    /// Rejected on upsert, e.g. a blank name or title.
    #[error("Invalid {entity}{}: {message}", format_context(.context))]
    InvalidEntry {
        entity: &'static str,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
