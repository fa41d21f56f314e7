//! Typed BlueCat operations
//!
//! Each operation is one round trip: it names an endpoint, lays out its query
//! parameters in the documented order and picks a decoder. Operations are
//! grouped by area:
//! - `entities.rs` - generic entity lookup, linking, add/update/delete
//! - `search.rs` - searches and response policy lookups
//! - `access.rs` - access rights
//! - `deployment.rs` - DHCP/DNS deployment options and roles
//! - `discovery.rs` - IPv4 reconciliation (discovered devices)
//! - `ipam.rs` - IPv4/IPv6 addresses, networks and ranges
//! - `dns.rs` - zones and resource records
//! - `system.rs` - configurations, locations, probes and server state

mod access;
mod deployment;
mod discovery;
mod dns;
mod entities;
mod ipam;
mod search;
mod system;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::BlueCatClient;
    use crate::config::ClientConfig;
    use crate::mock::MockTransport;
    use crate::session::Session;
    use std::sync::Arc;

    pub(crate) const TOKEN: &str = "BAMAuthToken: abc123==";

    /// Client with an established session on top of `mock`
    pub(crate) fn client(mock: &MockTransport) -> BlueCatClient {
        let session = Session::new(&ClientConfig::default(), "bam.example.com", TOKEN);
        BlueCatClient::from_session(Arc::new(mock.clone()), session)
    }

    /// Query string of the last request to `endpoint`
    pub(crate) fn sent_query(mock: &MockTransport, endpoint: &str) -> String {
        mock.last_request(endpoint)
            .map(|request| request.query.encode())
            .unwrap_or_default()
    }
}
