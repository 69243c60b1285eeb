//! Output formatting module.
//!
//! Every line a command prints is built here so the wording lives in one place.

mod plain;

pub use plain::{
    address_record_line, connect_failed_line, connected_line, error_message, http_error_line,
    info_message, listening_line, print_error, print_info, print_warning, warning_message,
    write_http_response,
};
