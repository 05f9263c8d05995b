pub mod format;
pub mod pagination;
pub mod selection;

pub use format::{OutputFormat, RenderOptions};
pub use pagination::{PageWindow, RangeInfo, calculate_range, resolve_pagination};
pub use selection::{
    FieldSelection, IncludeSpec, default_field_selection, parse_field_selection, select_fields,
    validate_field_selection,
};
