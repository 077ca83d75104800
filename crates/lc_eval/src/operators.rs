//! Register update arithmetic.
//!
//! Direct enum dispatch over the three operators, with the overflow
//! behaviour chosen by [`OverflowPolicy`].

use lc_ir::OpKind;

use crate::{EvalError, OverflowPolicy};

/// Apply `op` to the accumulator: `acc <op>= rhs`.
#[inline]
pub fn apply(op: OpKind, acc: i64, rhs: i64, policy: OverflowPolicy) -> Result<i64, EvalError> {
    match policy {
        OverflowPolicy::Checked => {
            let result = match op {
                OpKind::Add => acc.checked_add(rhs),
                OpKind::Subtract => acc.checked_sub(rhs),
                OpKind::Multiply => acc.checked_mul(rhs),
            };
            result.ok_or(EvalError::Overflow { op, lhs: acc, rhs })
        }
        OverflowPolicy::Wrapping => Ok(match op {
            OpKind::Add => acc.wrapping_add(rhs),
            OpKind::Subtract => acc.wrapping_sub(rhs),
            OpKind::Multiply => acc.wrapping_mul(rhs),
        }),
        OverflowPolicy::Saturating => Ok(match op {
            OpKind::Add => acc.saturating_add(rhs),
            OpKind::Subtract => acc.saturating_sub(rhs),
            OpKind::Multiply => acc.saturating_mul(rhs),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_arithmetic() {
        for policy in [
            OverflowPolicy::Checked,
            OverflowPolicy::Wrapping,
            OverflowPolicy::Saturating,
        ] {
            assert_eq!(apply(OpKind::Add, 2, 3, policy), Ok(5));
            assert_eq!(apply(OpKind::Subtract, 2, 3, policy), Ok(-1));
            assert_eq!(apply(OpKind::Multiply, -2, 3, policy), Ok(-6));
        }
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            apply(OpKind::Multiply, i64::MAX, 2, OverflowPolicy::Checked),
            Err(EvalError::Overflow {
                op: OpKind::Multiply,
                lhs: i64::MAX,
                rhs: 2
            })
        );
        assert!(apply(OpKind::Subtract, i64::MIN, 1, OverflowPolicy::Checked).is_err());
    }

    #[test]
    fn test_wrapping_overflow() {
        assert_eq!(
            apply(OpKind::Add, i64::MAX, 1, OverflowPolicy::Wrapping),
            Ok(i64::MIN)
        );
    }

    #[test]
    fn test_saturating_overflow() {
        assert_eq!(
            apply(OpKind::Multiply, i64::MIN, 2, OverflowPolicy::Saturating),
            Ok(i64::MIN)
        );
        assert_eq!(
            apply(OpKind::Add, i64::MAX, 1, OverflowPolicy::Saturating),
            Ok(i64::MAX)
        );
    }
}
