//! The operation log.

use lc_ir::{Name, OpKind, Operand};
use rustc_hash::FxHashMap;

/// One update record: `target <op> operand`. Immutable once logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub target: Name,
    pub op: OpKind,
    pub operand: Operand,
}

/// Append-only, ordered record of every accepted assignment.
///
/// Alongside the records, keeps each target's record positions in append
/// order so the evaluator does not rescan the whole log per register.
#[derive(Default, Debug)]
pub struct OperationLog {
    records: Vec<Operation>,
    by_target: FxHashMap<Name, Vec<usize>>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. There is no other way to change the log.
    pub fn push(&mut self, operation: Operation) {
        self.by_target
            .entry(operation.target)
            .or_default()
            .push(self.records.len());
        self.records.push(operation);
    }

    /// Positions of the records targeting `name`, ascending.
    pub fn positions_for(&self, name: Name) -> &[usize] {
        self.by_target
            .get(&name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The `nth` record targeting `name`, in append order.
    pub fn nth_for(&self, name: Name, nth: usize) -> Option<&Operation> {
        self.positions_for(name)
            .get(nth)
            .and_then(|&pos| self.records.get(pos))
    }

    /// Records targeting `name`, in append order.
    pub fn records_for(&self, name: Name) -> impl Iterator<Item = &Operation> + '_ {
        self.positions_for(name)
            .iter()
            .filter_map(|&pos| self.records.get(pos))
    }

    /// All records, in append order.
    pub fn records(&self) -> &[Operation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
