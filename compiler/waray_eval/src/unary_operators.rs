//! Unary operator implementations for the evaluator.

use waray_ir::UnaryOp;

use crate::errors::{unary_operand, EvalResult};
use crate::value::Value;

/// Evaluate a unary operation on a resolved operand.
///
/// `not` accepts booleans and numbers: `0` and `NaN` negate to `true`, every
/// other number to `false`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (Value::Number(n), UnaryOp::Not) => Ok(Value::Bool(*n == 0.0 || n.is_nan())),
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        _ => Err(unary_operand(op, value.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    mod not {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn booleans() {
            assert_eq!(evaluate_unary(&Value::Bool(true), UnaryOp::Not), Ok(Value::Bool(false)));
            assert_eq!(evaluate_unary(&Value::Bool(false), UnaryOp::Not), Ok(Value::Bool(true)));
        }

        #[test]
        fn numbers() {
            assert_eq!(evaluate_unary(&Value::Number(0.0), UnaryOp::Not), Ok(Value::Bool(true)));
            assert_eq!(evaluate_unary(&Value::Number(-0.0), UnaryOp::Not), Ok(Value::Bool(true)));
            assert_eq!(
                evaluate_unary(&Value::Number(f64::NAN), UnaryOp::Not),
                Ok(Value::Bool(true))
            );
            assert_eq!(evaluate_unary(&Value::Number(3.0), UnaryOp::Not), Ok(Value::Bool(false)));
        }

        #[test]
        fn rejects_strings() {
            let err = evaluate_unary(&Value::string("tuod"), UnaryOp::Not);
            assert_eq!(
                err.map_err(|e| e.kind),
                Err(EvalErrorKind::UnaryOperand {
                    op: UnaryOp::Not,
                    operand: "string"
                })
            );
        }
    }

    mod neg {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn numbers() {
            assert_eq!(evaluate_unary(&Value::Number(2.5), UnaryOp::Neg), Ok(Value::Number(-2.5)));
            assert_eq!(evaluate_unary(&Value::Number(-4.0), UnaryOp::Neg), Ok(Value::Number(4.0)));
        }

        #[test]
        fn rejects_non_numbers() {
            assert!(evaluate_unary(&Value::Bool(true), UnaryOp::Neg).is_err());
            assert!(evaluate_unary(&Value::Nil, UnaryOp::Neg).is_err());
            assert!(evaluate_unary(&Value::list(vec![]), UnaryOp::Neg).is_err());
        }
    }
}
