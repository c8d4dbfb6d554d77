//! Page-load access check deciding redirects.

use std::sync::Arc;

use permitdesk_core::AppResult;

use crate::credential_ports::CredentialStore;

/// Route of the sign-in page.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Route of the landing page for signed-in users.
pub const HOME_ROUTE: &str = "/";

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// The check has not finished.
    Checking,
    /// The caller must navigate to the contained route.
    Redirecting(String),
    /// The page may render.
    Settled,
}

/// Decides the gate outcome from the session state alone.
///
/// Protected pages without a token redirect to sign-in with the current path
/// as the return target; public-only pages with a token redirect home.
#[must_use]
pub fn decide(require_auth: bool, has_token: bool, current_path: &str) -> GateState {
    match (require_auth, has_token) {
        (true, false) => GateState::Redirecting(format!("{SIGN_IN_ROUTE}?from={current_path}")),
        (false, true) => GateState::Redirecting(HOME_ROUTE.to_owned()),
        _ => GateState::Settled,
    }
}

/// Access check backed by the credential store.
#[derive(Clone)]
pub struct AuthGate {
    credential_store: Arc<dyn CredentialStore>,
}

impl AuthGate {
    /// Creates a gate reading the given store.
    #[must_use]
    pub fn new(credential_store: Arc<dyn CredentialStore>) -> Self {
        Self { credential_store }
    }

    /// Checks access for one page.
    pub async fn check(&self, require_auth: bool, current_path: &str) -> AppResult<GateState> {
        let has_token = self.credential_store.token().await?.is_some();

        Ok(decide(require_auth, has_token, current_path))
    }

    /// Starts tracking one page.
    #[must_use]
    pub fn session(&self, require_auth: bool, current_path: impl Into<String>) -> GateSession {
        GateSession {
            gate: self.clone(),
            require_auth,
            current_path: current_path.into(),
            state: GateState::Checking,
        }
    }
}

/// Gate state for one mounted page.
///
/// The state leaves `Checking` once per input pair and only re-enters it
/// when the path or the protection flag changes.
pub struct GateSession {
    gate: AuthGate,
    require_auth: bool,
    current_path: String,
    state: GateState,
}

impl GateSession {
    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Returns the tracked path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.current_path.as_str()
    }

    /// Records a navigation; a changed input resets the state to `Checking`.
    pub fn navigate(&mut self, require_auth: bool, current_path: impl Into<String>) {
        let current_path = current_path.into();
        if require_auth != self.require_auth || current_path != self.current_path {
            self.require_auth = require_auth;
            self.current_path = current_path;
            self.state = GateState::Checking;
        }
    }

    /// Runs the pending check, if any, and returns the resulting state.
    pub async fn settle(&mut self) -> AppResult<&GateState> {
        if self.state == GateState::Checking {
            self.state = self
                .gate
                .check(self.require_auth, &self.current_path)
                .await?;
        }

        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::{AuthGate, GateState, decide};
    use crate::credential_ports::CredentialStore;
    use crate::test_support::{FakeCredentialStore, credentials};

    #[test]
    fn protected_page_without_token_redirects_to_sign_in() {
        assert_eq!(
            decide(true, false, "/permits"),
            GateState::Redirecting("/signin?from=/permits".to_owned())
        );
    }

    #[test]
    fn public_page_with_token_redirects_home() {
        assert_eq!(
            decide(false, true, "/signin"),
            GateState::Redirecting("/".to_owned())
        );
    }

    #[test]
    fn matching_pages_settle() {
        assert_eq!(decide(true, true, "/permits"), GateState::Settled);
        assert_eq!(decide(false, false, "/signin"), GateState::Settled);
    }

    #[tokio::test]
    async fn check_reads_token_from_store() {
        let store = Arc::new(FakeCredentialStore::signed_in("tok"));
        let gate = AuthGate::new(store.clone());

        assert!(matches!(gate.check(true, "/tasks").await, Ok(GateState::Settled)));

        assert!(store.clear().await.is_ok());
        assert!(matches!(
            gate.check(true, "/tasks").await,
            Ok(GateState::Redirecting(ref route)) if route == "/signin?from=/tasks"
        ));
    }

    #[tokio::test]
    async fn session_stays_settled_until_inputs_change() {
        let store = Arc::new(FakeCredentialStore::signed_in("tok"));
        let mut session = AuthGate::new(store.clone()).session(true, "/permits");
        assert_eq!(session.state(), &GateState::Checking);

        assert!(matches!(session.settle().await, Ok(GateState::Settled)));

        assert!(store.clear().await.is_ok());
        session.navigate(true, "/permits");
        assert!(matches!(session.settle().await, Ok(GateState::Settled)));

        session.navigate(true, "/tasks");
        assert_eq!(session.state(), &GateState::Checking);
        assert!(matches!(
            session.settle().await,
            Ok(GateState::Redirecting(route)) if route == "/signin?from=/tasks"
        ));

        assert!(store.commit(credentials("tok-2")).await.is_ok());
        session.navigate(true, "/tasks");
        assert_eq!(session.current_path(), "/tasks");
        assert!(matches!(session.settle().await, Ok(GateState::Redirecting(_))));
    }

    proptest! {
        #[test]
        fn redirect_iff_protection_and_session_disagree(
            require_auth in any::<bool>(),
            has_token in any::<bool>(),
            path in "/[a-z/]{0,20}",
        ) {
            let state = decide(require_auth, has_token, &path);

            match (require_auth, has_token) {
                (true, false) => prop_assert_eq!(state, GateState::Redirecting(format!("/signin?from={path}"))),
                (false, true) => prop_assert_eq!(state, GateState::Redirecting("/".to_owned())),
                _ => prop_assert_eq!(state, GateState::Settled),
            }
        }
    }
}
