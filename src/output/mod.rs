pub mod formatter;

pub use formatter::{
    format_invalid, format_invalid_json, format_json, format_points, format_score_table,
    should_use_colors,
};
