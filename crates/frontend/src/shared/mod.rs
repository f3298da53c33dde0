pub mod api_utils;
pub mod edit_target;
pub mod format;
pub mod http;
pub mod notice;
