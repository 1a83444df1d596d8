//! Test modules relocated from implementation files, plus shared helpers
//! for building programs without a parser.

mod property_tests;

use waray_ir::{Expr, Identifier, Stmt, StringInterner, Token, TokenKind};

use crate::errors::EvalError;
use crate::interpreter::InterpreterBuilder;
use crate::print_handler::buffer_handler;

pub(crate) fn tok(kind: TokenKind, line: u32) -> Token {
    Token::new(kind, line)
}

/// `left op right` with the operator on line 1.
pub(crate) fn bin(left: Expr, kind: TokenKind, right: Expr) -> Expr {
    Expr::binary(left, tok(kind, 1), right)
}

pub(crate) fn num(n: f64) -> Expr {
    Expr::number(n)
}

/// Builds programs against one interner and runs them with captured output.
pub(crate) struct Source {
    interner: StringInterner,
}

/// What a run produced.
pub(crate) struct Outcome {
    pub result: Result<(), EvalError>,
    pub output: String,
}

impl Source {
    pub fn new() -> Self {
        Source {
            interner: StringInterner::new(),
        }
    }

    pub fn ident(&self, name: &str) -> Identifier {
        Identifier::new(self.interner.intern(name), 1)
    }

    pub fn var(&self, name: &str) -> Expr {
        Expr::variable(self.ident(name))
    }

    /// `name = value`
    pub fn assign(&self, name: &str, value: Expr) -> Expr {
        bin(self.var(name), TokenKind::Equal, value)
    }

    pub fn call(&self, name: &str, args: Vec<Expr>) -> Expr {
        Expr::call(self.ident(name), args)
    }

    pub fn function(&self, name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
        let params = params.iter().map(|p| self.ident(p)).collect();
        Stmt::function(self.ident(name), params, body)
    }

    /// `fn double(x) return x * 2`
    pub fn double(&self) -> Stmt {
        self.function(
            "double",
            &["x"],
            vec![Stmt::Return(bin(self.var("x"), TokenKind::Star, num(2.0)))],
        )
    }

    pub fn builder(&self) -> InterpreterBuilder<'_> {
        InterpreterBuilder::new(&self.interner)
    }

    pub fn run(&self, program: &[Stmt]) -> Outcome {
        self.run_with(self.builder(), program)
    }

    pub fn run_with(&self, builder: InterpreterBuilder<'_>, program: &[Stmt]) -> Outcome {
        let handler = buffer_handler();
        let mut interpreter = builder.print_handler(handler.clone()).build();
        let result = interpreter.run(program);
        Outcome {
            result,
            output: handler.get_output(),
        }
    }
}
