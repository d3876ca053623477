//! Secret classification for environment keys.
//!
//! Classification is a pure function of the key string: a key is secret when
//! it contains one of the policy keywords or matches the allow-list exactly.
//! The policy is an explicit immutable value rather than a literal inside the
//! check, so tests can substitute alternate tables; [`Policy::default`] is
//! the production table.

use crate::parser::Entry;

/// Keywords that mark a key as sensitive wherever they appear in it.
///
/// `API_KEY` is already covered by `KEY`'s substring match; it stays in the
/// table to state the intent explicitly.
const SENSITIVE_KEYWORDS: [&str; 5] = ["PASSWORD", "SECRET", "KEY", "TOKEN", "API_KEY"];

/// Keys routed to secret storage even though no keyword matches them.
const SECRET_ALLOWLIST: [&str; 2] = ["DATABASE_USERNAME", "REDIS_HOST"];

/// Classification policy: which keys count as secrets.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Substring matches against the key.
    pub keywords: Vec<String>,
    /// Exact-match keys that are always secret.
    pub allowlist: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            keywords: SENSITIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            allowlist: SECRET_ALLOWLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Policy {
    /// Whether a key should be stored as a secret.
    ///
    /// Depends on the key alone; the value never participates.
    pub fn is_secret(&self, key: &str) -> bool {
        self.keywords.iter().any(|kw| key.contains(kw.as_str()))
            || self.allowlist.iter().any(|k| k == key)
    }
}

/// Parsed variables split into regular and secret groups, file order kept.
#[derive(Debug, Default)]
pub struct ClassifiedStore {
    pub regular: Vec<(String, String)>,
    pub secret: Vec<(String, String)>,
}

impl ClassifiedStore {
    /// Number of distinct keys across both groups.
    pub fn len(&self) -> usize {
        self.regular.len() + self.secret.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.secret.is_empty()
    }
}

/// Fold parsed entries into the two groups.
///
/// A key appears in exactly one group. A duplicate key keeps its first
/// position and takes the latest value.
pub fn classify(entries: Vec<Entry>, policy: &Policy) -> ClassifiedStore {
    let mut store = ClassifiedStore::default();
    for entry in entries {
        let group = if policy.is_secret(&entry.key) {
            &mut store.secret
        } else {
            &mut store.regular
        };
        upsert(group, entry.key, entry.value);
    }
    store
}

/// Update a key's value in place if present, otherwise append.
fn upsert(group: &mut Vec<(String, String)>, key: String, value: String) {
    if let Some((_, existing)) = group.iter_mut().find(|(k, _)| *k == key) {
        *existing = value;
    } else {
        group.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Entry {
        Entry {
            key: key.to_string(),
            value: value.to_string(),
            line: 1,
        }
    }

    #[test]
    fn test_keyword_substring_is_secret() {
        let policy = Policy::default();
        for key in [
            "DB_PASSWORD",
            "JWT_SECRET",
            "SSH_KEY",
            "AUTH_TOKEN",
            "THIRD_PARTY_API_KEY",
        ] {
            assert!(policy.is_secret(key), "{key} should be secret");
        }
    }

    #[test]
    fn test_plain_keys_are_regular() {
        let policy = Policy::default();
        for key in ["DB_HOST", "APP_ENV", "LOG_LEVEL", "WORKER_COUNT"] {
            assert!(!policy.is_secret(key), "{key} should be regular");
        }
    }

    #[test]
    fn test_allowlist_exact_match_is_secret() {
        let policy = Policy::default();
        assert!(policy.is_secret("DATABASE_USERNAME"));
        assert!(policy.is_secret("REDIS_HOST"));
    }

    #[test]
    fn test_allowlist_is_exact_not_substring() {
        // REDIS_HOSTNAME extends an allow-listed key but is not on the list
        // itself, and no keyword matches it
        assert!(!Policy::default().is_secret("REDIS_HOSTNAME"));
    }

    #[test]
    fn test_value_never_affects_classification() {
        let store = classify(vec![entry("APP_MODE", "SECRET")], &Policy::default());
        assert_eq!(store.regular, [("APP_MODE".to_string(), "SECRET".to_string())]);
        assert!(store.secret.is_empty());
    }

    #[test]
    fn test_alternate_policy_substitution() {
        let policy = Policy {
            keywords: vec!["CRED".to_string()],
            allowlist: Vec::new(),
        };
        assert!(policy.is_secret("USER_CRED"));
        assert!(!policy.is_secret("DB_PASSWORD"));
    }

    #[test]
    fn test_groups_keep_file_order() {
        let store = classify(
            vec![
                entry("DB_HOST", "localhost"),
                entry("DB_PASSWORD", "hunter2"),
                entry("APP_ENV", "prod"),
                entry("API_TOKEN", "abc"),
            ],
            &Policy::default(),
        );
        let regular: Vec<&str> = store.regular.iter().map(|(k, _)| k.as_str()).collect();
        let secret: Vec<&str> = store.secret.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(regular, ["DB_HOST", "APP_ENV"]);
        assert_eq!(secret, ["DB_PASSWORD", "API_TOKEN"]);
    }

    #[test]
    fn test_duplicate_key_keeps_position_takes_latest_value() {
        let store = classify(
            vec![entry("A", "1"), entry("B", "2"), entry("A", "3")],
            &Policy::default(),
        );
        assert_eq!(
            store.regular,
            [
                ("A".to_string(), "3".to_string()),
                ("B".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_len_counts_both_groups() {
        let store = classify(
            vec![entry("DB_HOST", "localhost"), entry("DB_PASSWORD", "x")],
            &Policy::default(),
        );
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
