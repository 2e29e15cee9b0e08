use podium_derive::podium_error;
use std::borrow::Cow;

#[podium_error]
pub enum WindowError {
    #[error("Bad minute value{}: {source}", format_context(.context))]
    Minutes { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Window rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal window error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn minutes(raw: &str) -> Result<u32, WindowError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn podium_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/podium_error_pass.rs");
    t.pass("tests/ui/podium_error_existing_debug.rs");
}

#[test]
fn source_converts_through_question_mark() {
    let err = minutes("ten").expect_err("not a number");
    assert!(matches!(err, WindowError::Minutes { context: None, .. }));
    assert!(err.to_string().starts_with("Bad minute value: "));
}

#[test]
fn context_is_rendered_in_display() {
    let err = minutes("x").context("Parsing session start").expect_err("not a number");
    assert!(err.to_string().starts_with("Bad minute value (Parsing session start): "));
}

#[test]
fn context_applies_to_own_result() {
    let res: Result<(), WindowError> =
        Err(WindowError::Rejected { message: "start after end".into(), context: None });
    let err = res.context("Candidate session").expect_err("rejected");
    assert_eq!(err.to_string(), "Window rejected (Candidate session): start after end");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: WindowError = "boom".into();
    let from_owned: WindowError = String::from("bang").into();
    assert_eq!(from_static.to_string(), "Internal window error: boom");
    assert_eq!(from_owned.to_string(), "Internal window error: bang");
}
