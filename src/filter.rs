//! Two-phase row filtering: a per-cell fast path plus a deferred row verdict.
//!
//! The predicate is immutable; everything that changes while a row is scanned
//! lives in a [`RowState`] owned by the caller. A scan task creates one state,
//! feeds it through [`RowFilter::evaluate_cell`] for each delivered cell, asks
//! [`RowFilter::row_excluded`] once the row is done, and calls
//! [`RowState::reset`] before the next row.

use crate::{compare::compare, predicate::ColumnPredicate};

/// A single `(column, value)` pair of the row being scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Column identifier.
    pub column: &'a [u8],
    /// Raw value; empty counts as "no value" for the missing-column policy.
    pub value: &'a [u8],
}

impl<'a> Cell<'a> {
    /// Creates a cell view.
    #[must_use]
    pub fn new(column: &'a [u8], value: &'a [u8]) -> Self {
        Self { column, value }
    }
}

/// What the scan engine should do after a cell was evaluated.
///
/// Neither variant drops the cell itself; exclusion is decided per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellSignal {
    /// Keep delivering cells of the current row.
    ContinueRow,
    /// The row is already known to be excluded; skip its remaining cells.
    StopRowEarly,
}

/// Evaluation context for exactly one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    column_observed: bool,
    predicate_failed: bool,
}

impl RowState {
    /// Fresh state for a new row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both flags so the state can serve the next row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A matching cell with a non-empty value was seen in this row.
    #[must_use]
    pub fn column_observed(&self) -> bool {
        self.column_observed
    }

    /// A matching cell failed the comparison; sticky until [`reset`](Self::reset).
    #[must_use]
    pub fn predicate_failed(&self) -> bool {
        self.predicate_failed
    }
}

/// Contract between a scan engine and a row filter.
pub trait RowFilter {
    /// Evaluates one cell of the current row and updates `state`.
    fn evaluate_cell(&self, state: &mut RowState, cell: Cell<'_>) -> CellSignal;

    /// Final verdict for the row whose cells were fed into `state`.
    fn row_excluded(&self, state: &RowState) -> bool;

    /// Whether the scan may stop altogether.
    fn exclude_all_remaining(&self) -> bool {
        false
    }

    /// Whether the row can be rejected from its key alone.
    fn matches_row_key(&self, _row_key: &[u8]) -> bool {
        false
    }
}

impl ColumnPredicate {
    /// Whether a matching cell holding `value` forces its row out.
    #[must_use]
    pub fn excludes_value(&self, value: &[u8]) -> bool {
        self.op().excludes(compare(self.threshold_or_empty(), value))
    }
}

impl RowFilter for ColumnPredicate {
    fn evaluate_cell(&self, state: &mut RowState, cell: Cell<'_>) -> CellSignal {
        if cell.column != self.column() {
            return CellSignal::ContinueRow;
        }
        if !cell.value.is_empty() {
            state.column_observed = true;
        }
        if self.excludes_value(cell.value) {
            state.predicate_failed = true;
            return CellSignal::StopRowEarly;
        }
        CellSignal::ContinueRow
    }

    fn row_excluded(&self, state: &RowState) -> bool {
        state.predicate_failed || (self.exclude_row_if_column_missing() && !state.column_observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::CompareOp;

    fn predicate(op: CompareOp, threshold: &'static str) -> ColumnPredicate {
        ColumnPredicate::new("cf:q", op, threshold).unwrap()
    }

    #[test]
    fn other_columns_are_ignored() {
        let filter = predicate(CompareOp::Equal, "a");
        let mut state = RowState::new();

        let signal = filter.evaluate_cell(&mut state, Cell::new(b"cf:other", b"zzz"));
        assert_eq!(signal, CellSignal::ContinueRow);
        assert_eq!(state, RowState::new());
    }

    #[test]
    fn equal_operator_examples() {
        let filter = predicate(CompareOp::Equal, "b");
        let mut state = RowState::new();
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"a")),
            CellSignal::StopRowEarly
        );
        assert!(state.predicate_failed());
        assert!(filter.row_excluded(&state));

        let filter = predicate(CompareOp::Equal, "a");
        let mut state = RowState::new();
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"a")),
            CellSignal::ContinueRow
        );
        assert!(state.column_observed());
        assert!(!filter.row_excluded(&state));
    }

    #[test]
    fn empty_value_does_not_count_as_observed() {
        let filter = predicate(CompareOp::NotEqual, "x");
        let mut state = RowState::new();

        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"")),
            CellSignal::ContinueRow
        );
        assert!(!state.column_observed());
        assert!(filter.row_excluded(&state));
        assert!(!filter
            .clone()
            .with_exclude_row_if_column_missing(false)
            .row_excluded(&state));
    }

    #[test]
    fn empty_value_is_still_compared() {
        // "" < "x", so a GREATER predicate fails on the empty cell.
        let filter = predicate(CompareOp::Greater, "x").with_exclude_row_if_column_missing(false);
        let mut state = RowState::new();
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"")),
            CellSignal::StopRowEarly
        );
        assert!(filter.row_excluded(&state));
    }

    #[test]
    fn absent_threshold_compares_as_empty() {
        let filter = predicate(CompareOp::Equal, "").without_threshold();
        let mut state = RowState::new();
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"")),
            CellSignal::ContinueRow
        );
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"v")),
            CellSignal::StopRowEarly
        );
    }

    #[test]
    fn failure_is_sticky_until_reset() {
        let filter = predicate(CompareOp::Less, "m").with_exclude_row_if_column_missing(false);
        let mut state = RowState::new();

        filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"z"));
        assert!(state.predicate_failed());
        // A passing cell later in the same row does not clear the failure.
        assert_eq!(
            filter.evaluate_cell(&mut state, Cell::new(b"cf:q", b"a")),
            CellSignal::ContinueRow
        );
        assert!(state.predicate_failed());
        assert!(filter.row_excluded(&state));

        state.reset();
        assert_eq!(state, RowState::new());
        assert!(!filter.row_excluded(&state));
    }

    #[test]
    fn no_row_key_or_global_decisions() {
        let filter = predicate(CompareOp::Equal, "a");
        assert!(!filter.exclude_all_remaining());
        assert!(!filter.matches_row_key(b"row-1"));
        assert!(!filter.matches_row_key(b""));
    }
}
