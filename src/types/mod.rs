//! All data types for the SimpleGraph library.

pub mod attrs;
pub mod error;

pub use attrs::{AttrValue, Attrs};
pub use error::{GraphError, GraphResult};
