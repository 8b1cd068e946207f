use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

/// Exact, case-insensitive lookup by subject.
pub fn run(records: &RecordStore, name: &str) -> Result<CmdResult> {
    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No reviews available to search."));
        return Ok(result);
    }

    let matches: Vec<_> = records
        .find_by_subject(name)
        .into_iter()
        .cloned()
        .collect();
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No review found for: {}", name)));
    }
    Ok(result.with_listed_reviews(matches))
}
