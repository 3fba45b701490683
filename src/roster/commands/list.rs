use crate::commands::CmdResult;
use crate::store::DataStore;

use super::helpers::indexed_records;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    CmdResult::default().with_listed_records(indexed_records(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new().with_records(3).store;
        let result = run(&store);
        let rows: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| (dr.row, dr.record.id.as_str()))
            .collect();
        assert_eq!(rows, vec![(1, "1"), (2, "2"), (3, "3")]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::in_memory();
        assert!(run(&store).listed_records.is_empty());
    }
}
