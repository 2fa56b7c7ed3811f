// crates/xassert/src/sink/callback.rs
// ============================================================================
// Module: Callback Sink
// Description: Sink backed by a user-provided function.
// Purpose: Inject the failure capability as a closure.
// Dependencies: crate::{error, sink}, std::sync
// ============================================================================

//! ## Overview
//! [`CallbackSink`] forwards each evaluation to a closure and returns whatever
//! the closure returns.

use std::fmt;
use std::sync::Arc;

use crate::error::AssertResult;
use crate::sink::Evaluation;
use crate::sink::FailureSink;

/// Handler signature used by the sink.
type CallbackHandler = dyn Fn(&Evaluation<'_>) -> AssertResult + Send + Sync;

/// Closure-backed sink.
#[derive(Clone)]
pub struct CallbackSink {
    /// Handler invoked with each evaluation.
    handler: Arc<CallbackHandler>,
}

impl CallbackSink {
    /// Creates a callback sink from a handler function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Evaluation<'_>) -> AssertResult + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

impl FailureSink for CallbackSink {
    fn evaluate(&self, evaluation: &Evaluation<'_>) -> AssertResult {
        (self.handler)(evaluation)
    }
}
