//! List Query Compiler
//!
//! Turns data-table state (sorting, column filters, pagination) into the
//! bracket-indexed query string expected by the backend list endpoints:
//!
//! ```text
//! ?limit=10&offset=10&filter[0][field]=code&filter[0][type]=ilike&filter[0][value]=AB&order[0][field]=material.name&order[0][dir]=desc
//! ```
//!
//! All functions here are pure; the compiler can be shared between any number
//! of concurrent list fetches.

pub mod compiler;
pub mod error;
pub mod field_key;
pub mod filter;
pub mod resolver;
pub mod serializer;
pub mod sort;

pub use compiler::{compile, ListQueryCompiler, DEFAULT_MAX_PAGE_SIZE};
pub use error::ListQueryError;
pub use field_key::normalize;
pub use filter::compile_filter;
pub use resolver::{FieldTypeResolver, FieldTypeTable};
pub use serializer::serialize;
pub use sort::compile_sort;
