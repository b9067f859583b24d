//! Immutable predicate configuration: one column, one operator, one threshold.

mod codec;
mod error;

use std::{fmt, str::FromStr};

use bytes::Bytes;
pub use error::PredicateError;

use crate::serdes::CodecError;

/// Comparison operator applied between the threshold and a cell value.
///
/// Variant names are part of the wire format; see [`CompareOp::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// less than
    Less,
    /// less than or equal to
    LessOrEqual,
    /// equals
    Equal,
    /// not equal
    NotEqual,
    /// greater than or equal to
    GreaterOrEqual,
    /// greater than
    Greater,
}

impl CompareOp {
    /// Every operator, in declaration order.
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Less,
        CompareOp::LessOrEqual,
        CompareOp::Equal,
        CompareOp::NotEqual,
        CompareOp::GreaterOrEqual,
        CompareOp::Greater,
    ];

    /// Enumerator name as written on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CompareOp::Less => "LESS",
            CompareOp::LessOrEqual => "LESS_OR_EQUAL",
            CompareOp::Equal => "EQUAL",
            CompareOp::NotEqual => "NOT_EQUAL",
            CompareOp::GreaterOrEqual => "GREATER_OR_EQUAL",
            CompareOp::Greater => "GREATER",
        }
    }

    /// Whether a row must be excluded given `r = compare(threshold, value)`.
    ///
    /// This answers "exclude", not "include": `Less` means the cell value has
    /// to be less than the threshold, so the row goes when `r <= 0`.
    #[must_use]
    pub fn excludes(self, r: i32) -> bool {
        match self {
            CompareOp::Less => r <= 0,
            CompareOp::LessOrEqual => r < 0,
            CompareOp::Equal => r != 0,
            CompareOp::NotEqual => r == 0,
            CompareOp::GreaterOrEqual => r > 0,
            CompareOp::Greater => r >= 0,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompareOp {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CodecError::UnknownOperator(s.to_owned()))
    }
}

/// Configuration of a single-column value predicate.
///
/// Cloning is cheap; hand each concurrent scan task its own clone together
/// with its own [`RowState`](crate::RowState).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPredicate {
    column: Bytes,
    op: CompareOp,
    threshold: Option<Bytes>,
    exclude_row_if_column_missing: bool,
}

impl ColumnPredicate {
    /// Creates a predicate comparing `column` against `threshold`.
    ///
    /// Rows lacking the column are excluded unless
    /// [`with_exclude_row_if_column_missing`](Self::with_exclude_row_if_column_missing)
    /// says otherwise.
    pub fn new<C, T>(column: C, op: CompareOp, threshold: T) -> Result<Self, PredicateError>
    where
        C: Into<Bytes>,
        T: Into<Bytes>,
    {
        let column = column.into();
        if column.is_empty() {
            return Err(PredicateError::EmptyColumn);
        }
        Ok(Self {
            column,
            op,
            threshold: Some(threshold.into()),
            exclude_row_if_column_missing: true,
        })
    }

    /// Drops the threshold. An absent threshold compares like an empty one
    /// and is written to the wire exactly like an empty one.
    #[must_use]
    pub fn without_threshold(mut self) -> Self {
        self.threshold = None;
        self
    }

    /// Replaces the threshold.
    #[must_use]
    pub fn with_threshold<T: Into<Bytes>>(mut self, threshold: T) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    /// Sets whether a row with no non-empty cell for the column is excluded.
    #[must_use]
    pub fn with_exclude_row_if_column_missing(mut self, exclude: bool) -> Self {
        self.exclude_row_if_column_missing = exclude;
        self
    }

    /// Target column identifier.
    pub fn column(&self) -> &[u8] {
        &self.column
    }

    /// Configured operator.
    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// `None` only for predicates built locally without a threshold; decoded
    /// predicates always carry `Some`, possibly empty.
    pub fn threshold(&self) -> Option<&[u8]> {
        self.threshold.as_deref()
    }

    /// Missing-column policy.
    pub fn exclude_row_if_column_missing(&self) -> bool {
        self.exclude_row_if_column_missing
    }

    /// Threshold as compared against cell values.
    pub(crate) fn threshold_or_empty(&self) -> &[u8] {
        self.threshold.as_deref().unwrap_or_default()
    }
}
