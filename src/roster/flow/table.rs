use crate::index::DisplayRecord;
use crate::model::RecordId;

pub const EMPTY_TABLE: &str = "No data available";

pub const COLUMNS: [&str; 7] = ["Name", "Phone", "Email", "Country", "State", "City", "ZIP"];

/// One table row: the display row number, the record it came from, and the
/// cell text in [`COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub row: usize,
    pub id: RecordId,
    pub cells: [String; 7],
}

impl From<&DisplayRecord> for TableRow {
    fn from(dr: &DisplayRecord) -> Self {
        let r = &dr.record;
        Self {
            row: dr.row,
            id: r.id.clone(),
            cells: [
                r.name.clone(),
                r.phone.clone(),
                r.email.clone(),
                r.country.clone(),
                r.state.clone(),
                r.city.clone(),
                r.zip.clone(),
            ],
        }
    }
}

pub fn rows(records: &[DisplayRecord]) -> Vec<TableRow> {
    records.iter().map(TableRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_records;
    use crate::store::fixtures::sample_record;

    #[test]
    fn projects_the_visible_columns() {
        let listed = index_records(vec![sample_record("7", "Ann Lee")]);
        let rows = rows(&listed);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].id, "7");
        assert_eq!(rows[0].cells[0], "Ann Lee");
        assert_eq!(rows[0].cells[6], listed[0].record.zip);
    }

    #[test]
    fn empty_collection_has_no_rows() {
        assert!(rows(&[]).is_empty());
    }
}
