#![deny(missing_docs)]
//! Column-value predicate filter for row scans.
//!
//! A [`ColumnPredicate`] compares the raw bytes of one column against a
//! threshold and decides whether the containing row leaves the scan. It is
//! built on the node that plans the scan, shipped as bytes
//! ([`ColumnPredicate::to_bytes`]), and rebuilt on the node that executes it
//! ([`ColumnPredicate::from_bytes`]).
//!
//! ```
//! use tonbo_column_filter::{Cell, CellSignal, ColumnPredicate, CompareOp, RowFilter, RowState};
//!
//! let predicate = ColumnPredicate::new("info:status", CompareOp::Equal, "active")?;
//! let remote = ColumnPredicate::from_bytes(&predicate.to_bytes()?)?;
//!
//! let mut state = RowState::new();
//! let signal = remote.evaluate_cell(&mut state, Cell::new(b"info:status", b"banned"));
//! assert_eq!(signal, CellSignal::StopRowEarly);
//! assert!(remote.row_excluded(&state));
//! state.reset();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod observability;

/// Raw byte ordering shared by all operators.
pub mod compare;

/// Per-cell evaluation and row verdicts.
pub mod filter;

/// Predicate configuration and its wire encoding.
pub mod predicate;

/// Reference scan loop applying row verdicts.
pub mod scan;

/// Field codecs for the wire format.
pub mod serdes;

pub use crate::{
    compare::compare,
    filter::{Cell, CellSignal, RowFilter, RowState},
    predicate::{ColumnPredicate, CompareOp, PredicateError},
    scan::{filter_rows, Row},
    serdes::{CodecError, DecodeOptions},
};
