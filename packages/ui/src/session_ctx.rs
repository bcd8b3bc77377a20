//! Session context and hooks for the UI.
//!
//! One [`SessionStore`] instance is built at startup and injected into the
//! view tree through context — there is no global; views reach it with
//! [`use_session`] and only ever see snapshots and the enumerated
//! operations.

use api::ApiClient;
use dioxus::prelude::*;
use session::{Identity, Role, SessionError, SessionState, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type Vault = session::LocalStorageVault;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type Vault = session::MemoryVault;

/// The session store wired to the real backend and platform storage.
pub type AppSessionStore = SessionStore<ApiClient, Vault>;

/// Handle giving views the session snapshot and the operations that mutate
/// it. Reads go through a signal so components re-render on change; writes
/// go through the store and then refresh the signal.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: Signal<AppSessionStore>,
    state: Signal<SessionState>,
}

impl SessionHandle {
    /// Current session snapshot (reactive read).
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    fn store(&self) -> AppSessionStore {
        (self.store)()
    }

    fn refresh(&self) {
        let snapshot = self.store().snapshot();
        let mut state = self.state;
        state.set(snapshot);
    }

    /// Sign in and publish the new state.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        let result = self.store().login(email, password).await;
        self.refresh();
        result
    }

    /// Register, sign in, and publish the new state.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        let result = self.store().register(email, password, role).await;
        self.refresh();
        result
    }

    /// Sign out and publish the new state. Never fails.
    pub async fn logout(&self) {
        self.store().logout().await;
        self.refresh();
    }

    /// Delete the account and, on success, sign out.
    pub async fn delete_account(&self) -> Result<(), SessionError> {
        let result = self.store().delete_account().await;
        self.refresh();
        result
    }
}

/// Provider component that owns the session for the whole app.
///
/// Builds the store, runs the one-time startup revalidation, and exposes a
/// [`SessionHandle`] plus the shared [`ApiClient`] through context. Wrap the
/// router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_hook(ApiClient::from_env);
    let store = use_signal({
        let api = api.clone();
        move || SessionStore::new(api.clone(), Vault::default())
    });
    let state = use_signal(SessionState::default);
    let handle = SessionHandle { store, state };

    use_context_provider(|| api);
    use_context_provider(|| handle);

    // Startup revalidation; `ready` flips when it resolves.
    let _init = use_resource(move || async move {
        handle.store().initialize().await;
        handle.refresh();
    });

    rsx! {
        {children}
    }
}

/// Get the session handle from context.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the shared API client from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
