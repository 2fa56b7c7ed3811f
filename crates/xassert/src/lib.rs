// crates/xassert/src/lib.rs
// ============================================================================
// Module: xassert Root
// Description: Public API surface for the assertion predicate layer.
// Purpose: Wire predicate groups, failure sinks, and configuration together.
// Dependencies: crate::{assert, asserter, boolean, collection, config, equality, error,
//              exception, ordering, predicate, sink, string, tolerance}
// ============================================================================

//! ## Overview
//! `xassert` is an assertion library for test suites. Each predicate computes
//! a boolean outcome from its operands and hands it to a [`FailureSink`],
//! which either returns normally or signals an [`AssertionFailed`]. Predicates
//! are grouped by concern (equality, tolerance, boolean, ordering, string,
//! collection, exception expectation) and exposed as methods on [`Asserter`]
//! and as free functions in [`assert`].
//!
//! ```
//! use xassert::Asserter;
//! use xassert::RecordingSink;
//!
//! let check = Asserter::new(RecordingSink::new());
//! let _ = check.equal(5, 6);
//! let _ = check.less_than(1, 2);
//! assert_eq!(check.sink().failures().len(), 1);
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod assert;
pub mod asserter;
pub mod boolean;
pub mod collection;
pub mod config;
pub mod equality;
pub mod error;
pub mod exception;
pub mod ordering;
pub mod predicate;
pub mod sink;
pub mod string;
pub mod tolerance;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use asserter::Asserter;
pub use asserter::DynAsserter;
pub use collection::Collection;
pub use config::AssertConfig;
pub use config::ConfigError;
pub use config::LogConfig;
pub use config::SinkConfig;
pub use config::SinkMode;
pub use error::AssertResult;
pub use error::AssertionFailed;
pub use error::OperandRecord;
pub use exception::BoxError;
pub use exception::Raises;
pub use predicate::Predicate;
pub use predicate::PredicateGroup;
pub use sink::CallbackSink;
pub use sink::Evaluation;
pub use sink::EvaluationRecord;
pub use sink::FailureSink;
pub use sink::LogSink;
pub use sink::Operand;
pub use sink::PanicSink;
pub use sink::RecordingSink;
pub use sink::ResultSink;
pub use tolerance::F32_DEFAULT_DELTA;
pub use tolerance::F64_DEFAULT_DELTA;
pub use tolerance::Precision;
pub use tolerance::Tolerances;
