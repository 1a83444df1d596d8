//! Diagnostic language selection.
//!
//! The language only affects the messages a failed run reports; keywords and
//! the printed sentinel words are the same in every language.

use std::fmt;
use std::str::FromStr;

use waray_ir::BinaryOp;

use crate::errors::EvalErrorKind;

/// Language of user-facing diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    Waray,
    Tagalog,
}

/// Error parsing a [`Lang`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{0}` (expected `waray` or `tagalog`)")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waray" | "war" => Ok(Lang::Waray),
            "tagalog" | "tl" | "fil" => Ok(Lang::Tagalog),
            _ => Err(UnknownLang(s.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lang::Waray => "waray",
            Lang::Tagalog => "tagalog",
        })
    }
}

impl Lang {
    /// The bare message for an error kind.
    pub fn message(self, kind: &EvalErrorKind) -> String {
        match self {
            Lang::Waray => waray_message(kind),
            Lang::Tagalog => tagalog_message(kind),
        }
    }

    /// Wrap `message` with the line it was raised on.
    pub fn at_line(self, line: u32, message: &str) -> String {
        let message = message.trim_end_matches('.');
        match self {
            Lang::Waray => format!("May sayop ka ha linya {line}: {message}."),
            Lang::Tagalog => format!("May mali ka sa linya {line}: {message}."),
        }
    }
}

fn waray_message(kind: &EvalErrorKind) -> String {
    match kind {
        EvalErrorKind::BinaryOperands { op, .. } => match op {
            BinaryOp::Pipe | BinaryOp::Map | BinaryOp::Reduce | BinaryOp::Filter => {
                "Sayop nga pag-gamit."
            }
            BinaryOp::Add => "Sayop nga pag-dugang.",
            BinaryOp::Sub => "Dire pwede mag-iban dire numero.",
            BinaryOp::Mul => "Sayop nga pag multiply.",
            BinaryOp::Div => "Sayop nga pag divide.",
            BinaryOp::Mod => "Sayop nga pag modulo.",
            BinaryOp::Pow => "Sayop nga pag exponent.",
            BinaryOp::And => "Syntax error.",
            _ => "Sayop.",
        }
        .to_string(),
        EvalErrorKind::UnaryOperand { .. } => "Sayop.".to_string(),
        EvalErrorKind::AlreadyBound { name } => format!("Mayda na \"{name}\"."),
        EvalErrorKind::FunctionAlreadyDeclared { name } => {
            format!("Mayda na hirimuon nga \"{name}\"")
        }
        EvalErrorKind::UndefinedCallee { name } => {
            format!("Waray butang nga an ngaran \"{name}\"")
        }
        EvalErrorKind::NotCallable { name } => format!("Diri hirimuon it \"{name}\""),
        EvalErrorKind::UnsupportedBinaryOperator { .. }
        | EvalErrorKind::UnsupportedUnaryOperator { .. } => "Sayop nga operasyon.".to_string(),
        EvalErrorKind::InvalidAssignmentTarget => "Sayop nga pag-assign.".to_string(),
        EvalErrorKind::EmptyReduce => "Waray sulod an lista.".to_string(),
        EvalErrorKind::InvalidRepeatCount { .. } => "Sayop nga ihap.".to_string(),
        EvalErrorKind::RecursionLimit { function, .. } => {
            format!("Sobra na an pagtawag ha \"{function}\".")
        }
    }
}

fn tagalog_message(kind: &EvalErrorKind) -> String {
    match kind {
        EvalErrorKind::BinaryOperands { op, .. } => match op {
            BinaryOp::Pipe | BinaryOp::Map | BinaryOp::Reduce | BinaryOp::Filter => {
                "Maling paggamit."
            }
            BinaryOp::Add => "Maling pagdagdag.",
            BinaryOp::Sub => "Hindi puwedeng magbawas ng hindi numero.",
            BinaryOp::Mul => "Maling pag-multiply.",
            BinaryOp::Div => "Maling pag-divide.",
            BinaryOp::Mod => "Maling pag-modulo.",
            BinaryOp::Pow => "Maling pag-exponent.",
            BinaryOp::And => "Syntax error.",
            _ => "Mali.",
        }
        .to_string(),
        EvalErrorKind::UnaryOperand { .. } => "Mali.".to_string(),
        EvalErrorKind::AlreadyBound { name } => format!("Mayroon nang \"{name}\"."),
        EvalErrorKind::FunctionAlreadyDeclared { name } => {
            format!("Mayroon nang function na \"{name}\"")
        }
        EvalErrorKind::UndefinedCallee { name } => {
            format!("Walang bagay na may pangalang \"{name}\"")
        }
        EvalErrorKind::NotCallable { name } => format!("Hindi function ang \"{name}\""),
        EvalErrorKind::UnsupportedBinaryOperator { .. }
        | EvalErrorKind::UnsupportedUnaryOperator { .. } => "Maling operasyon.".to_string(),
        EvalErrorKind::InvalidAssignmentTarget => "Maling pag-assign.".to_string(),
        EvalErrorKind::EmptyReduce => "Walang laman ang listahan.".to_string(),
        EvalErrorKind::InvalidRepeatCount { .. } => "Maling bilang.".to_string(),
        EvalErrorKind::RecursionLimit { function, .. } => {
            format!("Sobrang lalim ng pagtawag sa \"{function}\".")
        }
    }
}
