pub mod formatter;

pub use formatter::{
    bar_width, format_bar, format_lat_questions, format_lat_result, format_profile_questions,
    format_profile_result, format_quick_questions, format_quick_result, should_use_colors, Report,
};
