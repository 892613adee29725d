//! Network status descriptor types.
//!
//! The container runtime writes the descriptor as a JSON object keyed by the network
//! backend (e.g. `podman`), each holding the interfaces attached to the container.
//!
//! # Main Types
//!
//! - [`NetworkStatus`] - The whole descriptor
//! - [`NetworkStatusEntry`], [`InterfaceStatus`], [`Subnet`] - Its nested components
//! - [`NetworkInfo`] - The address pair extracted from a descriptor
//!
//! Maps are decoded into [`BTreeMap`]s, so the "first" namespace or interface is always
//! the one with the lexicographically smallest key.

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// `NetworkStatus` is the content of a `network.status` file.
/// It maps a namespace key, naming the backend that produced the entry, to its interfaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct NetworkStatus(pub BTreeMap<String, NetworkStatusEntry>);

/// Interfaces configured by one network backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NetworkStatusEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub interfaces: BTreeMap<String, InterfaceStatus>,
}

/// An interface inside the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InterfaceStatus {
    /// Address assignments, in the order the runtime wrote them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subnets: Vec<Subnet>,
    /// The hardware address of the interface.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mac_address: String,
}

/// One address assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Subnet {
    /// An IP address in CIDR notation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipnet: String,
    /// The gateway for this subnet, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// `NetworkInfo` is the address pair of the container's primary interface.
///
/// The empty pair means the container's network is not configured. It is returned both
/// when the descriptor is absent and when it holds no usable interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NetworkInfo {
    /// Address with prefix, e.g. `10.88.0.9/16`.
    pub ip: String,
    /// Hardware address, e.g. `f2:99:8d:fb:5a:57`.
    pub mac: String,
}

impl NetworkInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ip.is_empty() && self.mac.is_empty()
    }
}

/// Decodes an explicit `null` the same way as a missing member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FromStr for NetworkStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl NetworkStatus {
    /// Decodes a descriptor from raw file content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FailedToDecode`] if the bytes are not UTF-8 JSON matching the schema.
    pub fn from_slice(v: &[u8]) -> Result<Self, Error> {
        // A `null` document carries no entries.
        serde_json::from_slice::<Option<Self>>(v)
            .map(Option::unwrap_or_default)
            .map_err(|e| Error::FailedToDecode(e.to_string()))
    }

    /// Returns the name and status of the primary interface.
    ///
    /// The primary interface is the first interface of the first namespace entry.
    /// Other entries are ignored.
    #[must_use]
    pub fn primary_interface(&self) -> Option<(&str, &InterfaceStatus)> {
        if self.0.len() > 1 {
            tracing::debug!(
                entries = self.0.len(),
                "network status has more than one namespace entry, using the first"
            );
        }
        let (_, entry) = self.0.iter().next()?;
        if entry.interfaces.len() > 1 {
            tracing::debug!(
                interfaces = entry.interfaces.len(),
                "network status has more than one interface, using the first"
            );
        }
        entry
            .interfaces
            .iter()
            .next()
            .map(|(name, iface)| (name.as_str(), iface))
    }

    /// Extracts the primary interface's first address and its MAC address.
    ///
    /// Returns the empty pair when there is no interface, or when the primary interface has no subnet.
    #[must_use]
    pub fn network_info(&self) -> NetworkInfo {
        self.primary_interface()
            .and_then(|(_, iface)| {
                iface.first_subnet().map(|subnet| NetworkInfo {
                    ip: subnet.ipnet.clone(),
                    mac: iface.mac_address.clone(),
                })
            })
            .unwrap_or_default()
    }
}

impl InterfaceStatus {
    #[must_use]
    pub fn first_subnet(&self) -> Option<&Subnet> {
        self.subnets.first()
    }
}
