//! Route template transformation.
//!
//! # Data Flow
//! ```text
//! "Api/Users/{userId:int}"
//!     → segments.rs   (static segments:   "api/users/{userId:int}")
//!     → parameters.rs (parameter names:   "api/users/{user-id:int}")
//! ```
//!
//! The two passes are independent: segment rewriting never touches
//! parameter groups, and parameter rewriting never touches static text.

pub mod parameters;
pub mod segments;

pub use parameters::{transform_parameters, TransformPredicate};
pub use segments::transform_template;
