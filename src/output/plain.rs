//! Plain text output formatting.
//!
//! Command results go to stdout exactly as formatted here. Status messages
//! go to stderr with colors when stderr is a terminal.

use crate::http::HttpResponse;
use crate::types::Port;
use console::style;
use std::fmt::Display;
use std::io::{self, Write};
use std::net::IpAddr;

/// Line reported for a port that accepted a connection.
pub fn listening_line(port: Port) -> String {
    format!("Port {} is listening", port)
}

/// Line reported when `check-port` connects.
pub fn connected_line(address: &str) -> String {
    format!("Successfully connected to {}", address)
}

/// Line reported when `check-port` fails to connect.
pub fn connect_failed_line(address: &str, err: &dyn Display) -> String {
    format!("Connection to {} failed: {}", address, err)
}

/// Line reported for each resolved address.
pub fn address_record_line(record: &str, ip: IpAddr) -> String {
    format!("{} IN A {}", record, ip)
}

/// Line reported when the HTTP fetch fails.
pub fn http_error_line(err: &dyn Display) -> String {
    format!("Error: {}", err)
}

/// Write an HTTP response: body, a blank line, then the status code.
pub fn write_http_response<W: Write>(out: &mut W, response: &HttpResponse) -> io::Result<()> {
    out.write_all(&response.body)?;
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "HTTP Status Code: {}", response.status.as_u16())?;
    out.flush()
}

/// Error message as written to stderr.
pub fn error_message(msg: &str) -> String {
    style(msg).red().for_stderr().to_string()
}

/// Warning message as written to stderr.
pub fn warning_message(msg: &str) -> String {
    format!("{} {}", style("Warning:").yellow().bold().for_stderr(), msg)
}

/// Info message as written to stderr.
pub fn info_message(msg: &str) -> String {
    format!("{} {}", style("ℹ").blue().bold().for_stderr(), msg)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", error_message(msg));
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{}", warning_message(msg));
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{}", info_message(msg));
}
