//! Domain value objects: ModuleName and Layer.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. `ModuleName`
//! is the single place a user-supplied name is validated; once one exists,
//! it is guaranteed to be a single literal path segment. `Layer` only
//! names the rows of the layout table, the directories themselves live in
//! `layout.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ModuleName ───────────────────────────────────────────────────────────────

/// The user-chosen name of a feature module.
///
/// Invariant: non-empty, not whitespace-only, and usable as exactly one
/// path segment (no separators, not `.` or `..`, no NUL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a module name.
    ///
    /// Surrounding whitespace is trimmed first, so `" login "` becomes
    /// `"login"` and the directory on disk is `login`. Inner whitespace is
    /// kept.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = name.as_ref();
        let trimmed = raw.trim();

        let invalid = |reason: &str| DomainError::InvalidModuleName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("the name must not be empty"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(invalid("the name cannot contain path separators"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(invalid("the name cannot be a relative path component"));
        }
        if trimmed.contains('\0') {
            return Err(invalid("the name cannot contain NUL characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PascalCase rendering used in user-facing confirmations.
    ///
    /// The name is lowercased first, then split on every non-alphanumeric
    /// character and each word is capitalised: `user-PROFILE` → `UserProfile`.
    pub fn pascal_case(&self) -> String {
        self.0
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for ModuleName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// One of the three architectural divisions inside a module.
///
/// Declaration order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Infrastructure,
    Domain,
    Presentation,
}

impl Layer {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Domain => "domain",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the directory names plus the short forms `infra` and `ui`,
/// case-insensitively.
impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infrastructure" | "infra" => Ok(Self::Infrastructure),
            "domain" => Ok(Self::Domain),
            "presentation" | "ui" => Ok(Self::Presentation),
            other => Err(DomainError::UnknownLayer(other.to_string())),
        }
    }
}
