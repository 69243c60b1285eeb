//! DNS lookups through the system resolver or an explicit server.
//!
//! The two strategies sit behind the [`Resolver`] trait and are picked once
//! per invocation by [`resolver_for`].

use crate::error::{DnsError, DnsResult};
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;
use trust_dns_resolver::config::{
    LookupIpStrategy, NameServerConfig, Protocol, ResolverConfig, ResolverOpts,
};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::TokioAsyncResolver;

/// Standard DNS port.
pub const DNS_PORT: u16 = 53;

/// Maps a name to the addresses it resolves to.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve `name` to every A and AAAA address it has.
    async fn lookup(&self, name: &str) -> DnsResult<Vec<IpAddr>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Resolver configured from the operating system (`/etc/resolv.conf`, hosts file).
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Load the system resolver configuration.
    pub fn new() -> DnsResult<Self> {
        let (config, opts) =
            read_system_conf().map_err(|e| DnsError::SystemConfig(e.to_string()))?;

        Ok(Self {
            inner: TokioAsyncResolver::tokio(config, lookup_options(opts)),
        })
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup(&self, name: &str) -> DnsResult<Vec<IpAddr>> {
        lookup_with(&self.inner, name).await
    }

    fn describe(&self) -> String {
        "system resolver".to_string()
    }
}

/// Resolver that sends every query to a single server over UDP.
///
/// The hosts file is not consulted, so names listed only in `/etc/hosts`
/// fail here even though the system resolver would answer them.
pub struct ServerResolver {
    server: SocketAddr,
    inner: TokioAsyncResolver,
}

impl ServerResolver {
    /// Query `server` only, with default timeouts.
    pub fn new(server: SocketAddr) -> Self {
        Self::with_options(server, ResolverOpts::default())
    }

    /// Query `server` only, with caller-supplied options.
    pub fn with_options(server: SocketAddr, opts: ResolverOpts) -> Self {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(server, Protocol::Udp));

        let mut opts = lookup_options(opts);
        // The hosts file belongs to the system resolver.
        opts.use_hosts_file = false;

        Self {
            server,
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl Resolver for ServerResolver {
    async fn lookup(&self, name: &str) -> DnsResult<Vec<IpAddr>> {
        lookup_with(&self.inner, name).await
    }

    fn describe(&self) -> String {
        format!("udp://{}", self.server)
    }
}

/// Pick the resolver for this invocation.
///
/// With no server the system resolver is used. A server may be an IP
/// address or a hostname; hostnames are first resolved through the system
/// resolver.
pub async fn resolver_for(server: Option<&str>, port: u16) -> DnsResult<Box<dyn Resolver>> {
    let Some(server) = server else {
        return Ok(Box::new(SystemResolver::new()?));
    };

    let server = server.trim();
    let ip = match server.parse::<IpAddr>() {
        Ok(ip) => ip,
        Err(_) => {
            let system = SystemResolver::new()?;
            let ips = system
                .lookup(server)
                .await
                .map_err(|e| DnsError::InvalidServer {
                    server: server.to_string(),
                    reason: e.to_string(),
                })?;
            // lookup_with never returns an empty list
            ips.first().copied().ok_or_else(|| DnsError::InvalidServer {
                server: server.to_string(),
                reason: "no addresses".to_string(),
            })?
        }
    };

    Ok(Box::new(ServerResolver::new(SocketAddr::new(ip, port))))
}

/// Return every address for both families, like a plain host lookup.
fn lookup_options(mut opts: ResolverOpts) -> ResolverOpts {
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts
}

async fn lookup_with(resolver: &TokioAsyncResolver, name: &str) -> DnsResult<Vec<IpAddr>> {
    if let Ok(ip) = name.parse::<IpAddr>() {
        return Ok(vec![ip]);
    }

    let response = resolver
        .lookup_ip(name)
        .await
        .map_err(|e| DnsError::Lookup {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    let ips: Vec<IpAddr> = response.iter().collect();
    debug!(name, count = ips.len(), "lookup answered");

    if ips.is_empty() {
        return Err(DnsError::NoAddresses(name.to_string()));
    }
    Ok(ips)
}
