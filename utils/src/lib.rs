mod json;
mod logging;

pub use json::{
    ensure_array, ensure_object, join_index, join_path, resolve_object_path, shape_error,
    to_object, value_kind,
};
pub use logging::{level_from_str, setup_logging};
