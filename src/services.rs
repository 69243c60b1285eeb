//! Well-known TCP service names.
//!
//! Lets `check-port` take `ssh` or `https` in place of a number, and names
//! the likely service behind an open port in diagnostic logs.

use crate::types::Port;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Well-known TCP ports and their service names.
const TCP_SERVICES: &[(u16, &str)] = &[
    (7, "echo"),
    (20, "ftp-data"),
    (21, "ftp"),
    (22, "ssh"),
    (23, "telnet"),
    (25, "smtp"),
    (43, "whois"),
    (53, "domain"),
    (70, "gopher"),
    (79, "finger"),
    (80, "http"),
    (88, "kerberos"),
    (110, "pop3"),
    (111, "sunrpc"),
    (113, "auth"),
    (119, "nntp"),
    (135, "msrpc"),
    (139, "netbios-ssn"),
    (143, "imap"),
    (179, "bgp"),
    (194, "irc"),
    (389, "ldap"),
    (443, "https"),
    (445, "microsoft-ds"),
    (465, "smtps"),
    (513, "login"),
    (514, "shell"),
    (515, "printer"),
    (543, "klogin"),
    (544, "kshell"),
    (548, "afp"),
    (554, "rtsp"),
    (587, "submission"),
    (631, "ipp"),
    (636, "ldaps"),
    (873, "rsync"),
    (990, "ftps"),
    (993, "imaps"),
    (995, "pop3s"),
    (1080, "socks"),
    (1433, "ms-sql-s"),
    (1521, "oracle"),
    (1883, "mqtt"),
    (2049, "nfs"),
    (2375, "docker"),
    (2376, "docker-s"),
    (3306, "mysql"),
    (3389, "ms-wbt-server"),
    (5432, "postgresql"),
    (5672, "amqp"),
    (5900, "vnc"),
    (6379, "redis"),
    (6443, "kubernetes"),
    (8080, "http-alt"),
    (8443, "https-alt"),
    (9200, "elasticsearch"),
    (11211, "memcache"),
    (27017, "mongodb"),
];

static BY_PORT: LazyLock<HashMap<u16, &'static str>> =
    LazyLock::new(|| TCP_SERVICES.iter().copied().collect());

static BY_NAME: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, u16> =
        TCP_SERVICES.iter().map(|&(port, name)| (name, port)).collect();

    // Common aliases
    m.insert("www", 80);
    m.insert("dns", 53);
    m.insert("postgres", 5432);
    m.insert("rdp", 3389);

    m
});

/// Look up the probable service name for a given port.
///
/// Returns `None` if the port is not in the well-known services table.
pub fn get_service_name(port: Port) -> Option<&'static str> {
    BY_PORT.get(&port.as_u16()).copied()
}

/// Look up the TCP port for a service name (case-insensitive).
pub fn port_for_service(name: &str) -> Option<Port> {
    let name = name.trim().to_ascii_lowercase();
    BY_NAME.get(name.as_str()).copied().and_then(Port::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(n: u16) -> Port {
        Port::new(n).unwrap()
    }

    #[test]
    fn test_common_ports() {
        assert_eq!(get_service_name(port(22)), Some("ssh"));
        assert_eq!(get_service_name(port(80)), Some("http"));
        assert_eq!(get_service_name(port(443)), Some("https"));
        assert_eq!(get_service_name(port(3306)), Some("mysql"));
    }

    #[test]
    fn test_unknown_port() {
        assert_eq!(get_service_name(port(12345)), None);
    }

    #[test]
    fn test_service_lookup() {
        assert_eq!(port_for_service("ssh"), Some(port(22)));
        assert_eq!(port_for_service("HTTPS"), Some(port(443)));
        assert_eq!(port_for_service("www"), Some(port(80)));
        assert_eq!(port_for_service("gibberish"), None);
    }
}
