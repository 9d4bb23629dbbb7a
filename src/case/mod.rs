//! Identifier casing subsystem.
//!
//! # Data Flow
//! ```text
//! Identifier ("GetUserById")
//!     → tokenizer.rs (word ranges: Get|User|By|Id)
//!     → converter.rs (rebuild in target style: "get-user-by-id")
//! ```
//!
//! # Design Decisions
//! - Tokenization and conversion are pure functions, safe to call from
//!   any thread without synchronization
//! - Word ranges borrow the input; the converted string is the only
//!   allocation per call

pub mod converter;
pub mod tokenizer;

pub use converter::{CamelCase, CaseConverter, CaseStyle, KebabCase, PascalCase, SnakeCase};
pub use tokenizer::{tokenize, WordRange};
