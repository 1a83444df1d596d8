//! Live call frames of the interpreter.
//!
//! Recursion is the only looping construct in the language, so the depth
//! limit here is what turns a runaway program into an ordinary run failure.

use crate::errors::{recursion_limit_exceeded, EvalError};

/// A single frame in the live call stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the called function.
    pub name: &'static str,
    /// Line of the call site.
    pub line: u32,
}

/// Stack of active calls with a depth limit checked on `push`.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is not pushed on overflow; the rejected call is named in
    /// the error.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth, &frame));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
