//! The evaluation session.
//!
//! One session owns one operation log, one set of known registers and the
//! per-print scratch state. Sessions are independent of each other.

use lc_ir::{is_literal, Command, Interner, KnownRegisters, Literal, Name, OpKind, Operand};
use rustc_hash::FxHashSet;

use crate::evaluator::{Evaluator, Scratch};
use crate::{
    stdout_handler, EvalConfig, EvalError, Operation, OperationLog, OverflowPolicy,
    SharedPrintHandler,
};

/// What executing a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An operation was appended to the log.
    Defined,
    /// A register was evaluated and its value printed.
    Printed(i64),
    /// The session should end.
    Quit,
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overflow policy for `add`, `subtract` and `multiply`.
    #[must_use]
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow = policy;
        self
    }

    /// Set where printed values go. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Session {
        Session {
            interner: Interner::new(),
            log: OperationLog::new(),
            known: FxHashSet::default(),
            scratch: Scratch::default(),
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

pub struct Session {
    interner: Interner,
    log: OperationLog,
    /// Every register named by an accepted assignment. Only `print`
    /// validation reads it; the evaluator does not.
    known: FxHashSet<Name>,
    scratch: Scratch,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
}

impl Session {
    /// A session printing to stdout with default settings.
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Execute one validated command.
    pub fn execute(&mut self, command: Command<'_>) -> Result<Outcome, EvalError> {
        match command {
            Command::Quit => Ok(Outcome::Quit),
            Command::Print { register } => self.print(register).map(Outcome::Printed),
            Command::Assign {
                target,
                op,
                operand,
            } => self.define(target, op, operand).map(|()| Outcome::Defined),
        }
    }

    /// Append `target <op> operand` to the log.
    ///
    /// The target and a register operand become known; a literal operand
    /// does not.
    pub fn define(&mut self, target: &str, op: OpKind, operand: &str) -> Result<(), EvalError> {
        if is_literal(target) {
            return Err(EvalError::AssignToLiteral {
                literal: target.to_owned(),
            });
        }
        let target_name = self.interner.try_intern(target)?;
        let classified = Operand::classify(operand, &mut self.interner)?;

        self.known.insert(target_name);
        if let Some(register) = classified.register() {
            self.known.insert(register);
        }

        tracing::debug!(
            register = target,
            %op,
            operand,
            position = self.log.len(),
            "append operation"
        );
        self.log.push(Operation {
            target: target_name,
            op,
            operand: classified,
        });
        Ok(())
    }

    /// Evaluate `register` from scratch and emit its value.
    ///
    /// Memo table and visited set are cleared first; nothing computed by an
    /// earlier print is reused.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn print(&mut self, register: &str) -> Result<i64, EvalError> {
        self.reset_scratch();
        let value = self.evaluate(register)?;
        self.print_handler.println(&value.to_string());
        Ok(value)
    }

    /// Evaluate `name` within the current scratch scope.
    ///
    /// A digit-only `name` is a literal and evaluates to itself. A register
    /// no operation targets evaluates to 0. On error the scratch state is
    /// discarded.
    pub fn evaluate(&mut self, name: &str) -> Result<i64, EvalError> {
        let operand = match Literal::new(name) {
            Some(literal) => Operand::Literal(literal),
            None => match self.interner.get(name) {
                Some(register) => Operand::Register(register),
                None => return Ok(0),
            },
        };

        let result =
            Evaluator::new(&self.log, &self.interner, &mut self.scratch, self.config)
                .eval_operand(&operand);
        if result.is_err() {
            self.reset_scratch();
        }
        result
    }

    /// Clear the memo table and visited set.
    pub fn reset_scratch(&mut self) {
        self.scratch.clear();
    }

    /// Whether the memo table and visited set are both empty.
    pub fn scratch_is_empty(&self) -> bool {
        self.scratch.is_empty()
    }

    /// Number of memoized registers in the current scratch scope.
    pub fn memoized(&self) -> usize {
        self.scratch.memo.len()
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Output captured by a buffer print handler.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl KnownRegisters for Session {
    fn is_known(&self, name: &str) -> bool {
        self.interner
            .get(name)
            .is_some_and(|register| self.known.contains(&register))
    }
}
