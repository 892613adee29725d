//! Podnet reads the network status descriptor a container runtime writes for a container.
//! Podman (through netavark) stores it as `network.status` in the container's runtime directory.
//! The entrypoint is [`status::network_info`].
//! It returns the primary interface's address in CIDR notation and its MAC address.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use podnet::status::network_info;
//!
//! let info = network_info("/run/containers/storage/overlay-containers/abc/userdata")
//!     .expect("Failed to read the network status");
//! if info.is_empty() {
//!     println!("network not configured");
//! } else {
//!     println!("{} {}", info.ip, info.mac);
//! }
//! ```

pub mod error;
pub mod status;
pub mod types;
