use crate::Credentials;

/// Single credential check performed once at session start.
///
/// - No IO
/// - No panics
/// - No lockout or rate limiting
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    credentials: Credentials,
}

impl Authenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns `true` iff `username` is known and its stored password equals
    /// `password`. An unknown user is just a failed match.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let granted = self
            .credentials
            .password_for(username)
            .is_some_and(|stored| stored == password);

        if granted {
            tracing::info!(username, "authentication succeeded");
        } else {
            tracing::warn!(username, "authentication failed");
        }

        granted
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

    #[test]
    fn seeded_pair_is_accepted() {
        let auth = Authenticator::default();
        assert!(auth.authenticate(DEFAULT_USERNAME, DEFAULT_PASSWORD));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let auth = Authenticator::default();
        assert!(!auth.authenticate("admin", "password"));
        assert!(!auth.authenticate("admin", ""));
    }

    #[test]
    fn unknown_user_is_rejected_without_error() {
        let auth = Authenticator::default();
        assert!(!auth.authenticate("root", "password123"));
        // An unknown user with an empty password must not match a missing entry.
        assert!(!auth.authenticate("nobody", ""));
    }

    #[test]
    fn custom_credentials_replace_the_seed() {
        let auth = Authenticator::new(Credentials::single("ops", "letmein"));
        assert!(auth.authenticate("ops", "letmein"));
        assert!(!auth.authenticate("admin", "password123"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: only the exact seeded pair authenticates.
            #[test]
            fn only_exact_pair_matches(
                username in "\\PC{0,16}",
                password in "\\PC{0,16}"
            ) {
                let auth = Authenticator::default();
                let expected = username == DEFAULT_USERNAME && password == DEFAULT_PASSWORD;
                prop_assert_eq!(auth.authenticate(&username, &password), expected);
            }
        }
    }
}
