use leptos::prelude::*;

/// Holds the bearer token for the lifetime of the page session.
///
/// The token lives in memory only; a reload drops it and the user logs in
/// again. Clones share the same underlying slot, so the `ApiClient` and the
/// views all observe the same token. Last write wins.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: RwSignal::new(None),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token issued at login.
    pub fn set_token(&self, token: impl Into<String>) {
        self.token.set(Some(token.into()));
    }

    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Value for the `Authorization` header, if logged in.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .get_untracked()
            .map(|t| format!("Bearer {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_a_token() {
        let session = Session::new();
        assert_eq!(session.token(), None);
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn bearer_formats_the_auth_header_value() {
        let session = Session::new();
        session.set_token("tok123");
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok123"));
    }

    #[test]
    fn clones_share_the_same_token_slot() {
        let session = Session::new();
        let shared = session;
        session.set_token("tok123");
        assert_eq!(shared.token().as_deref(), Some("tok123"));
    }

    #[test]
    fn last_write_wins() {
        let session = Session::new();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }
}
