//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use waray_ir::StringInterner;

use super::Interpreter;
use crate::call_stack::CallStack;
use crate::environment::Environment;
use crate::eval_mode::EvalMode;
use crate::lang::Lang;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: `EvalMode::Interpret`, Waray diagnostics, stdout output, an
/// empty environment and the mode's call depth limit.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    env: Option<Environment>,
    mode: EvalMode,
    lang: Lang,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: None,
            mode: EvalMode::default(),
            lang: Lang::default(),
            print_handler: None,
            max_call_depth: None,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the language of user-facing diagnostics.
    #[must_use]
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Set the initial program environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the output channel for `Print` and run diagnostics.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Override the mode's maximum call depth.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        if self.mode.emits_source() {
            tracing::warn!(
                mode = %self.mode,
                "no source emitter is available; interpreting instead"
            );
        }
        let max_depth = self
            .max_call_depth
            .unwrap_or_else(|| self.mode.max_call_depth());

        Interpreter {
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            mode: self.mode,
            lang: self.lang,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(max_depth),
        }
    }
}
