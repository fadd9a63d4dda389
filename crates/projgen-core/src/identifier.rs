//! Stable module identifiers.
//!
//! Identifiers are derived from the module name alone, so regenerating the
//! descriptors and the index never changes them.

use std::fmt;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// 128-bit identifier of a module, rendered as an uppercase GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(Uuid);

impl ModuleId {
    /// Derive the identifier for `name`.
    ///
    /// The first 16 bytes of the SHA-256 digest of the UTF-8 name are read
    /// with GUID byte order (first three fields little-endian).
    pub fn derive(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self(Uuid::from_bytes_le(bytes))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The identifier wrapped in braces, as both output formats embed it.
    pub fn braced(&self) -> String {
        format!("{{{}}}", self)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.hyphenated())
    }
}

/// Shorthand for [`ModuleId::derive`].
pub fn derive_id(name: &str) -> ModuleId {
    ModuleId::derive(name)
}
