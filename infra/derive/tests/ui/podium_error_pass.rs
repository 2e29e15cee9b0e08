use podium_derive::podium_error;
use std::borrow::Cow;

#[podium_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, DemoError> {
    let value = raw.parse::<i64>().context("Reading minutes")?;
    if value < 0 {
        return Err("negative minutes".into());
    }
    Ok(value)
}

fn main() {
    let _ = parse("15");
}
