// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error types for the ebcon crate.
//!
//! Covers catalog lookups, command-line argument parsing that clap cannot
//! validate on its own (e.g. `--disk type:size` specs), and terminal I/O.

use thiserror::Error;

/// The main error type for ebcon operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal could not be initialized or driven.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A GPU id was requested that does not exist in the catalog.
    #[error("Unknown GPU spec: {0}")]
    UnknownGpu(String),

    /// A storage type id was requested that does not exist in the catalog.
    #[error("Unknown storage type: {0}")]
    UnknownStorageType(String),

    /// A `--disk` specification could not be parsed.
    ///
    /// Disk specs take the form `type:sizeGb`, e.g. `block:100`.
    #[error("Invalid disk spec '{0}' (expected type:sizeGb, e.g. block:100)")]
    InvalidDiskSpec(String),

    /// A GPU card count outside the supported set was requested.
    #[error("Unsupported GPU count: {0} (supported: 1, 2, 3, 4, 8)")]
    UnsupportedGpuCount(u32),

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ebcon operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownGpu("b200".to_string());
        assert_eq!(err.to_string(), "Unknown GPU spec: b200");

        let err = Error::InvalidDiskSpec("block".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid disk spec 'block' (expected type:sizeGb, e.g. block:100)"
        );

        let err = Error::UnsupportedGpuCount(5);
        assert_eq!(
            err.to_string(),
            "Unsupported GPU count: 5 (supported: 1, 2, 3, 4, 8)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
