use crate::commands::{CmdMessage, CmdResult, UPDATED_MESSAGE};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Replaces the stored record with the same id.
///
/// A missing id is not an error: the collection stays as it was and the
/// result simply has no affected records.
pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let exists = store.get_data().iter().any(|r| r.id == record.id);
    store.update_data(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(UPDATED_MESSAGE));
    if exists {
        result.affected_records.push(record);
    } else {
        result.add_message(CmdMessage::info(format!(
            "No record with id {}, nothing changed",
            record.id
        )));
    }
    Ok(result)
}
