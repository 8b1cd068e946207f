use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReviewError, Result};
use crate::records::RecordStore;
use crate::store::DataStore;

/// Fills `records` from the store. Called once at startup.
///
/// Nothing here is fatal: an unreadable file leaves the session empty and is
/// reported as a warning.
pub fn run<S: DataStore>(store: &S, records: &mut RecordStore) -> Result<CmdResult> {
    let limit = records.capacity().saturating_sub(records.len());
    let report = match store.load(limit) {
        Ok(report) => report,
        Err(ReviewError::Io(e)) => {
            log::warn!("Could not read review file: {}", e);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Could not read review file: {}",
                e
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let mut result = CmdResult::default();
    if report.file_missing {
        result.add_message(CmdMessage::info(
            "No existing review file found. Starting fresh.",
        ));
        return Ok(result);
    }

    result.loaded = records.extend_from_load(report.reviews);
    result.add_message(CmdMessage::info(format!(
        "{} review(s) loaded from file.",
        result.loaded
    )));
    if report.malformed > 0 {
        log::info!("{} malformed line(s) ignored", report.malformed);
    }
    if let Some(e) = report.interrupted {
        result.add_message(CmdMessage::warning(format!(
            "Reading the review file stopped early: {}",
            e
        )));
    }
    Ok(result)
}
