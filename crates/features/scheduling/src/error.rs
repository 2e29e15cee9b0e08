use std::borrow::Cow;

/// Errors of the scheduling slice.
///
/// `InvalidTimeWindow` and `InvalidSession` are validation failures meant to be shown to the
/// organiser before anything is persisted.
#[podium_derive::podium_error]
pub enum SchedulingError {
    /// A window whose start is not strictly before its end.
    #[error("Invalid time window{}: {message}", format_context(.context))]
    InvalidTimeWindow { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A session missing required data (time window, participants).
    #[error("Invalid session{}: {message}", format_context(.context))]
    InvalidSession { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A date range whose start is after its end, or that cannot be placed in the time zone.
    #[error("Invalid date range{}: {message}", format_context(.context))]
    InvalidDateRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The day store failed.
    #[error("Day repository error{}: {message}", format_context(.context))]
    Repository { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal scheduling error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
