use crate::error::{Result, RosterError};
use crate::index::{index_records, DisplayRecord, RowSelector};
use crate::store::DataStore;

pub fn indexed_records<S: DataStore>(store: &S) -> Vec<DisplayRecord> {
    index_records(store.get_data())
}

/// Finds the record a selector points at in the current snapshot.
pub fn resolve_selector<S: DataStore>(store: &S, selector: &RowSelector) -> Result<DisplayRecord> {
    let indexed = indexed_records(store);
    let found = match selector {
        RowSelector::Row(n) => indexed.into_iter().find(|dr| dr.row == *n),
        RowSelector::Id(id) => indexed.into_iter().find(|dr| &dr.record.id == id),
    };
    found.ok_or_else(|| RosterError::Api(format!("Row {} not found", selector)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn resolves_rows_and_ids() {
        let store = StoreFixture::new().with_records(3).store;
        let by_row = resolve_selector(&store, &RowSelector::Row(2)).unwrap();
        assert_eq!(by_row.record.id, "2");

        let by_id = resolve_selector(&store, &RowSelector::Id("3".into())).unwrap();
        assert_eq!(by_id.row, 3);
    }

    #[test]
    fn unknown_rows_are_errors() {
        let store = StoreFixture::new().with_records(1).store;
        assert!(resolve_selector(&store, &RowSelector::Row(5)).is_err());
        assert!(resolve_selector(&store, &RowSelector::Id("x".into())).is_err());
    }
}
