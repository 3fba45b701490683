use crate::commands::{CmdMessage, CmdResult, DELETED_MESSAGE};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let removed: Vec<_> = store
        .get_data()
        .into_iter()
        .filter(|r| r.id == id)
        .collect();
    store.delete_data(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(DELETED_MESSAGE));
    Ok(result.with_affected_records(removed))
}
