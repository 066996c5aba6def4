//! Credential store — resolves usernames to access tiers.
//!
//! The store is a two-column plain-text file, one `username,tier` pair per
//! line. The original system kept these pairs in a spreadsheet; the core
//! only ever consumes the resolved tier string for the current session,
//! so a CSV file carries the same contract. Malformed rows are skipped
//! with a warning rather than failing the load.

use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use wattwise_core::tier::AccessTier;

/// In-memory username → tier mapping loaded at startup.
pub struct CredentialStore {
    tiers: HashMap<String, String>,
}

impl CredentialStore {
    /// Load the store from a CSV file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::parse(&content);
        info!(users = store.len(), path = %path.display(), "Credential store loaded");
        Ok(store)
    }

    /// Parse `username,tier` rows. Blank lines and `#` comments are
    /// ignored; rows without a comma are skipped with a warning.
    pub fn parse(content: &str) -> Self {
        let mut tiers = HashMap::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(',') {
                Some((username, tier)) if !username.trim().is_empty() => {
                    tiers.insert(username.trim().to_string(), tier.trim().to_string());
                }
                _ => {
                    warn!(lineno = lineno + 1, "Skipping malformed credential row");
                }
            }
        }

        Self { tiers }
    }

    /// Resolve a username to its access tier. Lookup is exact on the
    /// username; the tier label is normalized by `AccessTier`.
    pub fn resolve(&self, username: &str) -> Option<AccessTier> {
        self.tiers.get(username).map(|t| AccessTier::new(t))
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_rows_load() {
        let store = CredentialStore::parse("alice,rich\nbob,poor\ncarol,Average\n");
        assert_eq!(store.len(), 3);
        assert_eq!(store.resolve("alice").unwrap().as_str(), "rich");
        assert_eq!(store.resolve("carol").unwrap().as_str(), "average");
    }

    #[test]
    fn lookup_is_exact_on_username() {
        let store = CredentialStore::parse("alice,rich\n");
        assert!(store.resolve("Alice").is_none());
        assert!(store.resolve("mallory").is_none());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let store = CredentialStore::parse("alice,rich\nno-comma-here\n,orphan-tier\n");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let store = CredentialStore::parse("# users\n\nalice,rich\n\n");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let store = CredentialStore::parse("  alice , rich \n");
        assert_eq!(store.resolve("alice").unwrap().as_str(), "rich");
    }

    #[test]
    fn unknown_tier_still_resolves_with_default_style() {
        let store = CredentialStore::parse("dave,platinum\n");
        let tier = store.resolve("dave").unwrap();
        assert_eq!(tier.as_str(), "platinum");
        assert_eq!(tier.style(), "standard recommendation");
    }

    #[test]
    fn load_reads_from_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alice,rich").unwrap();
        let store = CredentialStore::load(file.path()).unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(CredentialStore::load(Path::new("/nonexistent/users.csv")).is_err());
    }
}
