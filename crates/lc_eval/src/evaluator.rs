//! The evaluation engine.
//!
//! A register's value is the fold of its records, in log order, starting
//! from 0: `acc = acc <op> value(operand)`. Register operands are resolved
//! the same way. Within one print every register is resolved at most once
//! (memo table), and a register met again while it is still being resolved
//! is a cycle (visited set).
//!
//! The fold runs on an explicit stack of [`Frame`]s rather than native
//! recursion, so dependency chains of any length only cost heap.

use lc_ir::{Interner, Literal, Name, Operand};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{apply, EvalConfig, EvalError, OperationLog};

/// Per-print state. Empty at the start of every print.
#[derive(Default, Debug)]
pub(crate) struct Scratch {
    /// Registers resolved during this print.
    pub memo: FxHashMap<Name, i64>,
    /// Registers whose resolution has started during this print.
    pub visited: FxHashSet<Name>,
}

impl Scratch {
    pub fn clear(&mut self) {
        self.memo.clear();
        self.visited.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty() && self.visited.is_empty()
    }
}

/// A register whose fold is in progress.
#[derive(Debug)]
struct Frame {
    target: Name,
    /// Index of the next record (among those targeting `target`) to apply.
    cursor: usize,
    acc: i64,
}

impl Frame {
    fn new(target: Name) -> Self {
        Frame {
            target,
            cursor: 0,
            acc: 0,
        }
    }
}

enum Step {
    /// All records applied; the frame's value.
    Done(i64),
    /// The next record needs this register first.
    Descend(Name),
}

pub(crate) struct Evaluator<'a> {
    log: &'a OperationLog,
    interner: &'a Interner,
    scratch: &'a mut Scratch,
    config: EvalConfig,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        log: &'a OperationLog,
        interner: &'a Interner,
        scratch: &'a mut Scratch,
        config: EvalConfig,
    ) -> Self {
        Evaluator {
            log,
            interner,
            scratch,
            config,
        }
    }

    /// Value of an operand: literals directly, registers through the fold.
    pub fn eval_operand(&mut self, operand: &Operand) -> Result<i64, EvalError> {
        match operand {
            Operand::Literal(literal) => literal_value(literal),
            Operand::Register(name) => self.eval_register(*name),
        }
    }

    /// Value of a register within the current scratch scope.
    #[tracing::instrument(level = "trace", skip(self), fields(register = self.interner.lookup(root)))]
    pub fn eval_register(&mut self, root: Name) -> Result<i64, EvalError> {
        if let Some(&value) = self.scratch.memo.get(&root) {
            return Ok(value);
        }
        if !self.scratch.visited.insert(root) {
            return Err(self.cycle(&[], root));
        }

        let mut stack = vec![Frame::new(root)];
        let mut value = 0;
        while let Some(frame) = stack.last_mut() {
            match self.step(frame)? {
                Step::Done(done) => {
                    let target = frame.target;
                    stack.pop();
                    tracing::trace!(
                        register = self.interner.lookup(target),
                        value = done,
                        depth = stack.len(),
                        "resolved"
                    );
                    self.scratch.memo.insert(target, done);
                    value = done;
                }
                Step::Descend(dependency) => {
                    if !self.scratch.visited.insert(dependency) {
                        return Err(self.cycle(&stack, dependency));
                    }
                    tracing::trace!(
                        register = self.interner.lookup(dependency),
                        depth = stack.len(),
                        "descend"
                    );
                    stack.push(Frame::new(dependency));
                }
            }
        }
        Ok(value)
    }

    /// Apply the frame's records until one needs an unresolved register.
    fn step(&self, frame: &mut Frame) -> Result<Step, EvalError> {
        while let Some(record) = self.log.nth_for(frame.target, frame.cursor) {
            let rhs = match &record.operand {
                Operand::Literal(literal) => literal_value(literal)?,
                Operand::Register(name) => match self.scratch.memo.get(name) {
                    Some(&value) => value,
                    None => return Ok(Step::Descend(*name)),
                },
            };
            frame.acc = apply(record.op, frame.acc, rhs, self.config.overflow)?;
            frame.cursor += 1;
        }
        Ok(Step::Done(frame.acc))
    }

    /// Build the cycle error: from the first frame resolving `repeated`
    /// down the stack, back to `repeated`.
    fn cycle(&self, stack: &[Frame], repeated: Name) -> EvalError {
        let path = stack
            .iter()
            .map(|frame| frame.target)
            .skip_while(|&target| target != repeated)
            .chain(std::iter::once(repeated));
        let mut names: Vec<String> = path.map(|n| self.interner.lookup(n).to_owned()).collect();
        if names.len() == 1 {
            names.push(names[0].clone());
        }
        EvalError::Cycle { path: names }
    }
}

fn literal_value(literal: &Literal) -> Result<i64, EvalError> {
    literal.value().ok_or_else(|| EvalError::LiteralOutOfRange {
        literal: literal.as_str().to_owned(),
    })
}
