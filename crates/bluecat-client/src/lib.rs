//! BlueCat Address Manager REST API Client
//!
//! A Rust client library for the BlueCat Address Manager (BAM) REST API.
//! Provides type-safe models and methods for IPAM, DNS and DHCP operations.
//!
//! # Example
//!
//! ```no_run
//! use bluecat_client::{BlueCatClient, Options};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Log in; the session token is kept by the client
//! let client = BlueCatClient::login("bam.example.com", "api", "secret").await?;
//!
//! // Look up a network by CIDR under a configuration
//! let network = client.get_entity_by_cidr("10.0.0.0/24", 100, "IP4Network").await?;
//!
//! // Ask for the next free address in it
//! let address = client.get_next_ip4_address(network.id, &Options::new()).await?;
//!
//! // Publish a host record for it
//! let properties = Options::new().with("comments", "provisioned");
//! let record_id = client
//!     .add_host_record(200, "web1.example.com", &[address.as_str()], 3600, &properties)
//!     .await?;
//! # let _ = record_id;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Entity Operations**: Lookup by id, name, CIDR, prefix and range; links
//! - **IPAM Operations**: IPv4/IPv6 addresses, networks, ranges and allocation
//! - **DNS Operations**: Zones, host/alias/TXT/generic records, DNSSEC keys
//! - **Deployment**: DHCP/DNS deployment options, roles and task status
//! - **Testing**: `MockTransport` behind the `test-util` feature

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, reason = "tests fail loudly on unexpected errors")
)]

mod api;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
#[path = "trait.rs"]
pub mod transport_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::BlueCatClient;
pub use common::{ApiRequest, ApiResponse, HttpClient, Options, Query};
pub use config::{ClientConfig, Scheme, TlsMode};
pub use error::BlueCatError;
pub use models::*;
pub use session::Session;
pub use transport_trait::Transport;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
