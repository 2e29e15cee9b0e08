use super::print_json;
use anyhow::Result;
use chrono::NaiveDate;
use podium::features::scheduling::Scheduling;

pub(crate) fn run_days(scheduling: &Scheduling, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let days = scheduling.generate_days(start, end)?;
    tracing::info!(days = days.len(), offset = %scheduling.offset(), "Generated days");
    print_json(&days)
}
