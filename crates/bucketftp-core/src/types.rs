//! Shared type definitions for bucketftp.

use std::fmt;

/// The single fixed login credential pair.
///
/// Loaded once at process start and immutable for the process lifetime.
/// Every login attempt is compared by equality against this pair; there is
/// no per-user namespace or multi-tenant mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a new credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if the submitted pair matches exactly.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// The configured username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The password must never reach log output.
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Unix-style permission bits reported for listed objects.
///
/// Object storage has no mutable permission model; listings report a
/// synthetic constant and chmod is refused, so these bits are only ever
/// read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FileMode(u32);

impl FileMode {
    /// The fixed read-only bits every listed object reports.
    pub const READ_ONLY: Self = Self(0o444);

    /// Create a mode from raw permission bits.
    #[must_use]
    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw permission bits.
    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:o}", self.0)
    }
}
