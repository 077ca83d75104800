//! Property-based tests for the evaluation engine.
//!
//! Random programs over a handful of registers are checked against a
//! direct recursive model of the fold.

#![allow(clippy::unwrap_used)]

use lc_eval::{buffer_handler, EvalError, OverflowPolicy, Session};
use lc_ir::OpKind;
use proptest::prelude::*;
use std::collections::HashSet;

const REGISTERS: [&str; 5] = ["a", "b", "c", "d", "e"];

#[derive(Clone, Debug)]
enum Rhs {
    Register(usize),
    Literal(u8),
}

impl Rhs {
    fn token(&self) -> String {
        match self {
            Rhs::Register(i) => REGISTERS[*i].to_owned(),
            Rhs::Literal(n) => n.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct Record {
    target: usize,
    op: OpKind,
    rhs: Rhs,
}

fn arb_op() -> impl Strategy<Value = OpKind> {
    prop::sample::select(OpKind::ALL.to_vec())
}

fn arb_rhs() -> impl Strategy<Value = Rhs> {
    prop_oneof![
        (0..REGISTERS.len()).prop_map(Rhs::Register),
        (0u8..6).prop_map(Rhs::Literal),
    ]
}

fn arb_program() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (0..REGISTERS.len(), arb_op(), arb_rhs()).prop_map(|(target, op, rhs)| Record {
            target,
            op,
            rhs,
        }),
        0..12,
    )
}

fn session_for(program: &[Record]) -> Session {
    let mut session = Session::builder()
        .overflow(OverflowPolicy::Wrapping)
        .print_handler(buffer_handler())
        .build();
    for record in program {
        session
            .define(REGISTERS[record.target], record.op, &record.rhs.token())
            .unwrap();
    }
    session
}

/// Reference semantics: plain recursion, `None` on a cycle.
fn model(program: &[Record], register: usize, active: &mut HashSet<usize>) -> Option<i64> {
    if !active.insert(register) {
        return None;
    }
    let mut acc: i64 = 0;
    for record in program.iter().filter(|r| r.target == register) {
        let rhs = match record.rhs {
            Rhs::Literal(n) => i64::from(n),
            Rhs::Register(dep) => model(program, dep, active)?,
        };
        acc = match record.op {
            OpKind::Add => acc.wrapping_add(rhs),
            OpKind::Subtract => acc.wrapping_sub(rhs),
            OpKind::Multiply => acc.wrapping_mul(rhs),
        };
    }
    active.remove(&register);
    Some(acc)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Printing agrees with the recursive model, cycles included.
    #[test]
    fn print_matches_model(program in arb_program(), register in 0..REGISTERS.len()) {
        let mut session = session_for(&program);
        let expected = model(&program, register, &mut HashSet::new());
        match session.print(REGISTERS[register]) {
            Ok(value) => prop_assert_eq!(Some(value), expected),
            Err(err) => {
                prop_assert!(err.is_cycle(), "unexpected error: {}", err);
                prop_assert_eq!(expected, None);
            }
        }
    }

    /// Registers no record targets evaluate to 0.
    #[test]
    fn untargeted_registers_are_zero(program in arb_program()) {
        let mut session = session_for(&program);
        for (i, name) in REGISTERS.iter().enumerate() {
            if program.iter().all(|r| r.target != i) {
                prop_assert_eq!(session.print(name), Ok(0));
            }
        }
        prop_assert_eq!(session.print("neverseen"), Ok(0));
    }

    /// Literals evaluate to themselves and leave the scratch state alone.
    #[test]
    fn literals_are_identity(n in 0i64..=i64::MAX) {
        let mut session = Session::builder().print_handler(buffer_handler()).build();
        prop_assert_eq!(session.evaluate(&n.to_string()), Ok(n));
        prop_assert!(session.scratch_is_empty());
    }

    /// Evaluating twice in one scope gives the same result.
    #[test]
    fn evaluation_is_idempotent(program in arb_program(), register in 0..REGISTERS.len()) {
        let mut session = session_for(&program);
        session.reset_scratch();
        let first = session.evaluate(REGISTERS[register]);
        let second = session.evaluate(REGISTERS[register]);
        prop_assert_eq!(first, second);
    }

    /// `add k` then `multiply m` differs from the swapped order.
    #[test]
    fn fold_is_order_sensitive(k in 1u32..1000, m in 2u32..1000) {
        let mut forward = Session::builder().print_handler(buffer_handler()).build();
        forward.define("a", OpKind::Add, &k.to_string()).unwrap();
        forward.define("a", OpKind::Multiply, &m.to_string()).unwrap();

        let mut swapped = Session::builder().print_handler(buffer_handler()).build();
        swapped.define("a", OpKind::Multiply, &m.to_string()).unwrap();
        swapped.define("a", OpKind::Add, &k.to_string()).unwrap();

        let forward = forward.print("a").unwrap();
        let swapped = swapped.print("a").unwrap();
        prop_assert_eq!(forward, i64::from(k) * i64::from(m));
        prop_assert_eq!(swapped, i64::from(k));
        prop_assert_ne!(forward, swapped);
    }

    /// A failed print never leaves scratch state behind.
    #[test]
    fn errors_discard_scratch(program in arb_program(), register in 0..REGISTERS.len()) {
        let mut session = session_for(&program);
        if let Err(err) = session.print(REGISTERS[register]) {
            prop_assert!(matches!(err, EvalError::Cycle { .. }), "unexpected error: {:?}", err);
            prop_assert!(session.scratch_is_empty());
        }
    }
}
