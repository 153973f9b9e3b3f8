//! Ignore-list parsing and account matching

/// One comma-separated token of the -ignore flag
#[derive(Debug, PartialEq, Eq)]
enum IgnoreEntry {
    /// Bare username, matches any host
    User(String),
    /// user@host pair, both parts must match exactly
    UserAtHost(String, String),
}

impl IgnoreEntry {
    fn parse(entry: &str) -> Self {
        let mut parts = entry.split('@');
        let user = parts.next().unwrap_or_default().trim().to_string();
        // Only the segment between the first and second '@' counts as the host
        match parts.next() {
            Some(host) => IgnoreEntry::UserAtHost(user, host.trim().to_string()),
            None => IgnoreEntry::User(user),
        }
    }
}

/// Accounts to leave out of the dump, parsed once from the raw -ignore string
#[derive(Debug)]
pub struct IgnoreList {
    entries: Vec<IgnoreEntry>,
}

impl IgnoreList {
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self { entries: Vec::new() };
        }
        Self { entries: spec.split(',').map(IgnoreEntry::parse).collect() }
    }

    pub fn matches(&self, host: &str, user: &str) -> bool {
        self.entries.iter().any(|entry| match entry {
            IgnoreEntry::User(u) => u == user,
            IgnoreEntry::UserAtHost(u, h) => u == user && h == host,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_spec_matches_nothing() {
        let list = IgnoreList::parse("");
        assert!(!list.matches("localhost", "root"));
        assert!(!list.matches("", ""));
    }

    #[test]
    fn bare_user_matches_any_host() {
        let list = IgnoreList::parse("user1@hostA,user2");
        assert!(list.matches("anyhost", "user2"));
        assert!(list.matches("localhost", "user2"));
        assert!(!list.matches("anyhost", "user3"));
    }

    #[test]
    fn user_at_host_requires_exact_host() {
        let list = IgnoreList::parse("user1@hostA,user2");
        assert!(list.matches("hostA", "user1"));
        assert!(!list.matches("hostB", "user1"));
    }

    #[test]
    fn entries_are_trimmed() {
        let list = IgnoreList::parse(" user1 @ hostA , user2 ");
        assert!(list.matches("hostA", "user1"));
        assert!(list.matches("%", "user2"));
    }

    #[test]
    fn empty_host_part_matches_empty_host_only() {
        let list = IgnoreList::parse("user1@");
        assert!(list.matches("", "user1"));
        assert!(!list.matches("localhost", "user1"));
    }

    #[test]
    fn extra_at_signs_are_ignored() {
        let list = IgnoreList::parse("user1@hostA@junk");
        assert!(list.matches("hostA", "user1"));
        assert!(!list.matches("hostA@junk", "user1"));
    }
}
