use std::collections::HashMap;

/// Username of the built-in credential pair.
pub const DEFAULT_USERNAME: &str = "admin";

/// Password of the built-in credential pair.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Read-only `username -> password` mapping.
///
/// Populated once at construction; there is no API to add or remove users
/// afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    users: HashMap<String, String>,
}

impl Credentials {
    /// A mapping holding exactly one pair.
    pub fn single(username: impl Into<String>, password: impl Into<String>) -> Self {
        let mut users = HashMap::with_capacity(1);
        users.insert(username.into(), password.into());
        Self { users }
    }

    /// The built-in `admin` / `password123` pair.
    pub fn seeded() -> Self {
        Self::single(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }

    pub fn from_pairs<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: pairs
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    pub fn password_for(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::seeded()
    }
}

// Passwords never end up in logs or panic messages.
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Credentials").field("users", &names).finish()
    }
}
