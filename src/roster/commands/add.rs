use crate::commands::{CmdMessage, CmdResult, ADDED_MESSAGE};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    store.add_data(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(ADDED_MESSAGE));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::sample_record;
    use crate::store::InMemoryStore;

    #[test]
    fn appends_and_reports() {
        let mut store = InMemoryStore::in_memory();
        let record = sample_record("1", "Ann Lee");
        let result = run(&mut store, record.clone()).unwrap();

        assert_eq!(store.get_data(), vec![record.clone()]);
        assert_eq!(result.affected_records, vec![record]);
        assert_eq!(result.messages, vec![CmdMessage::success(ADDED_MESSAGE)]);
    }

    #[test]
    fn does_not_check_for_duplicate_ids() {
        let mut store = InMemoryStore::in_memory();
        run(&mut store, sample_record("1", "Ann Lee")).unwrap();
        run(&mut store, sample_record("1", "Bob Roe")).unwrap();
        assert_eq!(store.get_data().len(), 2);
    }
}
