//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The numclass project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`numclass_core`** (this crate): Pure classification functions with zero I/O
//! - **`numclass`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Total**: Every function is defined for every value of its input type,
//!   with no panics and no error type
//! - **Testable**: Can be tested with plain integers, no mocking required
//!
//! The shell crate owns everything the core deliberately ignores: HTTP
//! routing, the external trivia provider, timeouts, and output formatting.
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::classify;
//!
//! let result = classify(371);
//!
//! assert!(!result.is_prime);
//! assert_eq!(result.properties, vec!["armstrong", "odd"]);
//! assert_eq!(result.digit_sum, 11);
//! ```

pub mod classify;
