pub mod meta;
pub mod record;

pub use meta::FormatMeta;
pub use record::{EmailRecord, FieldValue};
