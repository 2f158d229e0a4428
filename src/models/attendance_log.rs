use super::record::AttendanceRecord;
use serde::Serialize;

/// Read-only snapshot of a sheet's data rows, in append order.
///
/// Index `i` of the log always maps to sheet row `i + 2` (1-based, the
/// header occupies row 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// Build a snapshot from raw sheet rows; the first row is the header.
    pub fn from_sheet_rows(rows: &[Vec<String>]) -> Self {
        let records = rows
            .iter()
            .skip(1)
            .map(|r| AttendanceRecord::from_row(r))
            .collect();
        Self { records }
    }

    pub fn get(&self, index: usize) -> Option<&AttendanceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttendanceRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a AttendanceLog {
    type Item = &'a AttendanceRecord;
    type IntoIter = std::slice::Iter<'a, AttendanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_only_sheet_is_empty() {
        let log = AttendanceLog::from_sheet_rows(&[row(&["name", "timestamp"])]);
        assert!(log.is_empty());
        assert!(AttendanceLog::from_sheet_rows(&[]).is_empty());
    }

    #[test]
    fn rows_keep_their_positions() {
        let log = AttendanceLog::from_sheet_rows(&[
            row(&["name", "timestamp"]),
            row(&["Alice", "2024-01-01 09:00:00"]),
            row(&["", ""]),
            row(&["Bob", "2024-01-01 09:05:00"]),
        ]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0).unwrap().name, "Alice");
        assert_eq!(log.get(1).unwrap().name, "");
        assert_eq!(log.get(2).unwrap().name, "Bob");
    }
}
