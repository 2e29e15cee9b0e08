#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Podium macros
//!
//! Attribute macros that remove the boilerplate shared by every Podium crate:
//!
//! * [`macro@podium_error`] turns an enum into a `thiserror` error with a `.context()` extension.
//! * [`macro@podium_slice`] turns a struct into an `Arc`-backed feature slice handle.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the `tests/ui` cases compile them from a consumer's point of view.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Declares a domain error enum.
///
/// # What gets generated
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext<T>` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source` error.
/// * `From<Source>` for each source-carrying variant, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Rules
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be `Option<Cow<'static, str>>`.
/// 3. A variant with a source (`source` field, `#[source]` or `#[from]`) must also have `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[podium_derive::podium_error]
/// pub enum RegistryError {
///     #[error("Unknown person{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn podium_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it
/// and implements `podium_kernel::domain::registry::FeatureSlice` so it can be registered
/// as an `InitializedSlice`.
///
/// # Example
///
/// ```rust,ignore
/// #[podium_derive::podium_slice]
/// pub struct Scheduling {
///     pub hours: WorkingHours,
/// }
///
/// let slice = Scheduling::new(SchedulingInner { hours: WorkingHours::default() });
/// ```
#[proc_macro_attribute]
pub fn podium_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
