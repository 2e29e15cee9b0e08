use podium_derive::podium_error;
use std::borrow::Cow;

#[podium_error]
#[derive(Debug)]
pub enum BareError {
    #[error("Validation failed: {message}")]
    Validation { message: Cow<'static, str> },
}

fn main() {
    let err = BareError::Validation { message: "window".into() };
    let _ = err.to_string();
}
