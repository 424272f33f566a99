//! Search domain: records, the response pipeline and the transport seam.
//!
//! A raw response travels through:
//! - `transport`: opaque HTTP GET capability (implemented in infrastructure)
//! - `validator`: keeps well-formed array elements, in order
//! - `sanitizer`: strips wire padding from free-text fields

pub mod model;
pub mod sanitizer;
pub mod transport;
pub mod validator;

pub use model::{SearchRecord, ValidatedBatch};
pub use sanitizer::{PREFIX_LEN, SUFFIX_LEN, sanitize};
pub use transport::{HttpResponse, HttpTransport};
pub use validator::{check_record, validate};
