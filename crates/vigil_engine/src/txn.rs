//! Transactions and their correlation ids.

use serde::Serialize;
use std::fmt;

/// Correlation id of a transaction, unique and increasing within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TxnId(u64);

impl TxnId {
    /// The id of the first transaction of a run.
    pub const FIRST: TxnId = TxnId(0);

    /// Creates an id from its raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub fn as_raw(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TxnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A transaction whose inputs are fixed but whose outputs are not yet known.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTxn<I> {
    id: TxnId,
    input: I,
}

impl<I> PendingTxn<I> {
    /// Creates a pending transaction.
    pub fn new(id: TxnId, input: I) -> Self {
        Self { id, input }
    }

    /// Returns the correlation id.
    pub fn id(&self) -> TxnId {
        self.id
    }

    /// Returns the input record.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Attaches the observed output, completing the transaction.
    pub fn observe<O>(self, output: O) -> Txn<I, O> {
        Txn {
            id: self.id,
            input: self.input,
            output,
        }
    }
}

/// A completed transaction: inputs plus the outputs observed for them.
///
/// Both halves are immutable once the transaction exists.
#[derive(Clone, Debug, PartialEq)]
pub struct Txn<I, O> {
    id: TxnId,
    input: I,
    output: O,
}

impl<I, O> Txn<I, O> {
    /// Returns the correlation id.
    pub fn id(&self) -> TxnId {
        self.id
    }

    /// Returns the input record.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns the observed output record.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Splits the transaction into its input and output.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}
