//! Property tests for operator laws and list operators.

#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use waray_ir::{BinaryOp, Expr, Stmt, TokenKind};

use super::{bin, Source};
use crate::operators::{evaluate_binary, strict_equals};
use crate::value::Value;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn numeric_op() -> impl Strategy<Value = (BinaryOp, fn(f64, f64) -> f64)> {
    prop_oneof![
        Just((BinaryOp::Add, (|a, b| a + b) as fn(f64, f64) -> f64)),
        Just((BinaryOp::Sub, (|a, b| a - b) as fn(f64, f64) -> f64)),
        Just((BinaryOp::Mul, (|a, b| a * b) as fn(f64, f64) -> f64)),
        Just((BinaryOp::Div, (|a, b| a / b) as fn(f64, f64) -> f64)),
        Just((BinaryOp::Mod, (|a, b| a % b) as fn(f64, f64) -> f64)),
    ]
}

fn same_number(result: Result<Value, crate::errors::EvalError>, expected: f64) -> bool {
    match result {
        Ok(Value::Number(x)) => {
            x.to_bits() == expected.to_bits() || (x.is_nan() && expected.is_nan())
        }
        _ => false,
    }
}

fn number_list(items: &[f64]) -> Expr {
    Expr::list(items.iter().copied().map(Expr::number).collect())
}

proptest! {
    #[test]
    fn numeric_ops_match_host_arithmetic(
        a in finite(),
        b in finite(),
        (op, host) in numeric_op()
    ) {
        let result = evaluate_binary(Value::Number(a), Value::Number(b), op);
        prop_assert!(same_number(result, host(a, b)));
    }

    #[test]
    fn numeric_ops_reject_non_numbers(a in finite(), text in "[a-z]{0,8}") {
        for op in [BinaryOp::Sub, BinaryOp::Div, BinaryOp::Mod, BinaryOp::Pow, BinaryOp::Lt] {
            prop_assert!(evaluate_binary(Value::Number(a), Value::string(&text), op).is_err());
            prop_assert!(evaluate_binary(Value::Nil, Value::Number(a), op).is_err());
        }
    }

    #[test]
    fn number_equality_is_reflexive(a in finite()) {
        prop_assert!(strict_equals(&Value::Number(a), &Value::Number(a)));
    }

    #[test]
    fn map_preserves_length_and_order(items in prop::collection::vec(-1000i32..1000, 0..12)) {
        let items: Vec<f64> = items.into_iter().map(f64::from).collect();
        let src = Source::new();
        let out = src.run(&[
            src.double(),
            Stmt::Expression(src.assign("xs", number_list(&items))),
            Stmt::Print(bin(src.var("xs"), TokenKind::Map, src.var("double"))),
            Stmt::Print(src.var("xs")),
        ]);
        let doubled: Vec<Value> = items.iter().map(|x| Value::Number(x * 2.0)).collect();
        let original: Vec<Value> = items.iter().copied().map(Value::Number).collect();
        prop_assert!(out.result.is_ok());
        prop_assert_eq!(
            out.output,
            format!("{}\n{}\n", Value::list(doubled), Value::list(original))
        );
    }

    #[test]
    fn single_element_reduce_returns_it(x in -1000i32..1000) {
        let src = Source::new();
        let add = src.function(
            "add",
            &["a", "b"],
            vec![Stmt::Return(bin(src.var("a"), TokenKind::Plus, src.var("b")))],
        );
        let out = src.run(&[
            add,
            Stmt::Print(bin(number_list(&[f64::from(x)]), TokenKind::Reduce, src.var("add"))),
        ]);
        prop_assert_eq!(out.output, format!("{x}\n"));
    }

    #[test]
    fn filter_keeps_exactly_matching_elements(items in prop::collection::vec(-50i32..50, 0..12)) {
        let items: Vec<f64> = items.into_iter().map(f64::from).collect();
        let src = Source::new();
        let positive = src.function(
            "positive",
            &["x"],
            vec![Stmt::Return(bin(src.var("x"), TokenKind::Greater, Expr::number(0.0)))],
        );
        let out = src.run(&[
            positive,
            Stmt::Print(bin(number_list(&items), TokenKind::Filter, src.var("positive"))),
        ]);
        let kept: Vec<Value> = items
            .iter()
            .copied()
            .filter(|x| *x > 0.0)
            .map(Value::Number)
            .collect();
        prop_assert_eq!(out.output, format!("{}\n", Value::list(kept)));
    }
}
