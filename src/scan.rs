//! Reference row scan driving a [`RowFilter`].
//!
//! Cells of a row are buffered until the row verdict is known. A filter may
//! stop a row early after some of its cells were delivered, and those cells
//! must not reach the caller when the row turns out to be excluded.

use bytes::Bytes;

use crate::{
    filter::{Cell, CellSignal, RowFilter, RowState},
    observability::log_trace,
};

/// An owned row: key plus cells in delivery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    /// Row key.
    pub key: Bytes,
    /// `(column, value)` pairs.
    pub cells: Vec<(Bytes, Bytes)>,
}

impl Row {
    /// Creates an empty row for `key`.
    pub fn new<K: Into<Bytes>>(key: K) -> Self {
        Self {
            key: key.into(),
            cells: Vec::new(),
        }
    }

    /// Appends a cell.
    #[must_use]
    pub fn with_cell<C, V>(mut self, column: C, value: V) -> Self
    where
        C: Into<Bytes>,
        V: Into<Bytes>,
    {
        self.cells.push((column.into(), value.into()));
        self
    }
}

/// Drives `filter` over `rows` and returns the rows it keeps.
///
/// A kept row carries only the cells that were delivered to the filter;
/// after [`CellSignal::StopRowEarly`] the rest of the row is skipped.
pub fn filter_rows<F, I>(filter: &F, rows: I) -> Vec<Row>
where
    F: RowFilter + ?Sized,
    I: IntoIterator<Item = Row>,
{
    let mut state = RowState::new();
    let mut kept = Vec::new();

    for row in rows {
        if filter.exclude_all_remaining() {
            break;
        }
        if filter.matches_row_key(&row.key) {
            continue;
        }

        let mut delivered = Vec::with_capacity(row.cells.len());
        for (column, value) in row.cells {
            let signal = filter.evaluate_cell(&mut state, Cell::new(&column, &value));
            delivered.push((column, value));
            if signal == CellSignal::StopRowEarly {
                break;
            }
        }

        let excluded = filter.row_excluded(&state);
        log_trace!(
            component = "scan",
            event = "row_verdict",
            row_key = ?row.key,
            delivered = delivered.len(),
            excluded,
        );
        if !excluded {
            kept.push(Row {
                key: row.key,
                cells: delivered,
            });
        }
        state.reset();
    }

    kept
}
