use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_reviews(records.all().to_vec());
    if records.is_empty() {
        result.add_message(CmdMessage::info("No reviews available."));
    }
    Ok(result)
}
