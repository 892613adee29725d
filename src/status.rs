use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    types::{NetworkInfo, NetworkStatus},
};

/// Name of the descriptor inside a container's runtime directory.
pub const NETWORK_STATUS_FILE: &str = "network.status";

/// Returns the path of the network status descriptor inside `dir`.
#[must_use]
pub fn status_file_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(NETWORK_STATUS_FILE)
}

impl NetworkStatus {
    /// Reads and decodes `network.status` from `dir`.
    /// If the file doesn't exist, this returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read ([`Error::IOFailure`])
    /// - The content is not a network status document ([`Error::FailedToDecode`])
    pub fn read_from_dir(dir: impl AsRef<Path>) -> Result<Option<Self>, Error> {
        let path = status_file_path(dir);
        let buf = match fs::read(&path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "network status file not found");
                return Ok(None);
            }
            Err(e) => return Err(Error::IOFailure(format!("{}: {e}", path.display()))),
        };

        NetworkStatus::from_slice(&buf)
            .map(Some)
            .map_err(|e| Error::FailedToDecode(format!("{}: {}", path.display(), e.details())))
    }
}

/// Looks up the primary interface's address and MAC address of the container whose runtime directory is `dir`.
///
/// A missing descriptor means the network is not configured yet and yields the empty [`NetworkInfo`],
/// as does a descriptor without any interface or subnet.
///
/// # Errors
///
/// Returns an error if the descriptor exists but cannot be read or decoded.
/// No partial result is returned in that case.
pub fn network_info(dir: impl AsRef<Path>) -> Result<NetworkInfo, Error> {
    let info = NetworkStatus::read_from_dir(dir)?
        .map(|status| status.network_info())
        .unwrap_or_default();
    tracing::debug!(ip = %info.ip, mac = %info.mac, "network info");
    Ok(info)
}
