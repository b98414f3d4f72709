//! Authentication state and the route guard built on it.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::provider::{AuthEvent, AuthProvider, User};
use super::supabase::SupabaseAuth;
use crate::error::Result;
use crate::storage::{first_word, initial_of, AppStore, CachedUser};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/cadastro";
pub const DASHBOARD_PATH: &str = "/painel";

pub const PROTECTED_PATHS: &[&str] = &["/painel", "/plantas", "/configuracoes", "/conta", "/ajuda"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// The startup lookup has not answered yet.
    #[default]
    Unknown,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    pub fn from_lookup(result: Result<Option<User>>) -> Self {
        match result {
            Ok(Some(user)) => AuthState::Authenticated(user),
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                tracing::warn!("Session lookup failed, treating as signed out: {}", e);
                AuthState::Unauthenticated
            }
        }
    }

    /// Fold in the startup lookup. Only an unresolved state takes it; an
    /// event that arrived first is newer information.
    pub fn resolve(&self, looked_up: AuthState) -> AuthState {
        match self {
            AuthState::Unknown => looked_up,
            settled => settled.clone(),
        }
    }

    pub fn apply(&self, event: &AuthEvent) -> AuthState {
        match event {
            AuthEvent::SignedOut => AuthState::Unauthenticated,
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => {
                AuthState::Authenticated(session.user.clone())
            }
            AuthEvent::UserUpdated(user) => match self {
                AuthState::Unauthenticated => AuthState::Unauthenticated,
                _ => AuthState::Authenticated(user.clone()),
            },
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Render,
    /// Show a loading indicator; the answer is not in yet.
    Wait,
    Redirect(&'static str),
}

pub fn is_protected(path: &str) -> bool {
    let path = normalize(path);
    PROTECTED_PATHS.contains(&path)
}

fn is_guest_only(path: &str) -> bool {
    matches!(normalize(path), LOGIN_PATH | REGISTER_PATH)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// What the router should do for `path` given the current auth state.
pub fn route_access(path: &str, state: &AuthState) -> RouteAccess {
    if is_protected(path) {
        match state {
            AuthState::Unknown => RouteAccess::Wait,
            AuthState::Authenticated(_) => RouteAccess::Render,
            AuthState::Unauthenticated => RouteAccess::Redirect(LOGIN_PATH),
        }
    } else if is_guest_only(path) && matches!(state, AuthState::Authenticated(_)) {
        RouteAccess::Redirect(DASHBOARD_PATH)
    } else {
        RouteAccess::Render
    }
}

/// Route decision plus whether a guest-only page has already been shown to
/// a signed-out visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardState {
    pub access: RouteAccess,
    pub guest_settled: bool,
}

/// [`route_access`] with memory: once a guest-only page rendered for a
/// signed-out visitor, a sign-in happening on that page does not bounce it.
/// The login and registration pages navigate away themselves after their
/// own confirmation.
pub fn guard_step(path: &str, state: &AuthState, previous: Option<GuardState>) -> GuardState {
    let guest_only = is_guest_only(path);
    let guest_settled = guest_only
        && (previous.is_some_and(|p| p.guest_settled) || matches!(state, AuthState::Unauthenticated));
    let access = if guest_settled {
        RouteAccess::Render
    } else {
        route_access(path, state)
    };
    GuardState {
        access,
        guest_settled,
    }
}

/// Mirror session changes into the cached user blob.
pub fn sync_user_cache(store: &AppStore, event: &AuthEvent) {
    let result = match event {
        AuthEvent::SignedOut => store.clear_session_cache(),
        other => match other.user() {
            Some(user) => {
                // Keep a name the user edited locally over the provider's.
                let mut cached = user.to_cached();
                if let Some(existing) = store.cached_user().filter(|c| c.id == cached.id) {
                    cached.name = existing.name;
                }
                store.cache_user(&cached)
            }
            None => Ok(()),
        },
    };
    if let Err(e) = result {
        tracing::warn!("Failed to update cached user after {}: {}", event.kind(), e);
    }
}

/// Startup lookup against the provider.
pub async fn lookup_session<P: AuthProvider>(provider: &P) -> AuthState {
    AuthState::from_lookup(provider.current_user().await)
}

/// Run `leave` (the navigation away from the current page), then end the
/// session. The sign-out event always lands after the navigation, so the
/// page being left never redirects to the login page on its own.
pub async fn leave_and_sign_out<P: AuthProvider>(provider: &P, leave: impl FnOnce()) {
    leave();
    if let Err(e) = provider.sign_out().await {
        tracing::warn!("Sign-out failed: {}", e);
    }
}

/// Auth state and client shared through context.
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    /// Cached user blob, seeded from storage before the lookup answers.
    pub profile: RwSignal<Option<CachedUser>>,
    pub client: SupabaseAuth,
    pub store: AppStore,
}

impl AuthContext {
    /// Create the context, subscribe to provider events for the lifetime of
    /// the calling owner, and kick off the startup lookup.
    pub fn provide(client: SupabaseAuth, store: AppStore) -> Self {
        let state = RwSignal::new(AuthState::Unknown);
        let profile = RwSignal::new(store.cached_user());

        if store.has_legacy_token() {
            tracing::debug!("Legacy auth token present; waiting for session lookup instead");
        }

        let cache = store.clone();
        let subscription = client.subscribe(move |event| {
            sync_user_cache(&cache, event);
            profile.try_set(cache.cached_user());
            state.try_update(|s| *s = s.apply(event));
        });
        on_cleanup(move || drop(subscription));

        let lookup_client = client.clone();
        spawn_local(async move {
            let looked_up = lookup_session(&lookup_client).await;
            state.try_update(|s| *s = s.resolve(looked_up));
            tracing::info!(
                "Session resolved: {}",
                if state.with_untracked(|s| s.user().is_some()) {
                    "signed in"
                } else {
                    "signed out"
                }
            );
        });

        let ctx = Self {
            state,
            profile,
            client,
            store,
        };
        provide_context(ctx.clone());
        ctx
    }

    /// Save locally edited name/email into the cached user blob.
    pub fn update_profile(&self, user: CachedUser) -> Result<()> {
        self.store.cache_user(&user)?;
        self.profile.set(Some(user));
        Ok(())
    }

    pub fn first_name(&self) -> String {
        first_word(&self.display_name()).to_string()
    }

    pub fn initial(&self) -> String {
        initial_of(&self.display_name())
    }

    /// Name for greetings and the sidebar.
    pub fn display_name(&self) -> String {
        self.profile
            .get()
            .map(|u| u.name)
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.state.with(|s| s.user().map(User::display_name)))
            .unwrap_or_else(|| "Usuário".to_string())
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use futures::executor::block_on;

    use crate::auth::events::AuthEvents;
    use crate::auth::provider::{Session, SignUpOutcome};
    use crate::error::GerminahError;
    use crate::storage::{CachedUser, MemoryStore};

    fn ana() -> User {
        User {
            id: "u-1".to_string(),
            email: "ana@example.com".to_string(),
            name: Some("Ana Souza".to_string()),
            email_confirmed: true,
        }
    }

    fn session() -> Session {
        Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            user: ana(),
        }
    }

    /// In-memory provider: one known account, password "segredo".
    struct FakeProvider {
        signed_in: Mutex<Option<User>>,
        fail_lookup: bool,
        events: AuthEvents,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self {
                signed_in: Mutex::new(None),
                fail_lookup: false,
                events: AuthEvents::new(),
            }
        }
    }

    impl AuthProvider for FakeProvider {
        async fn sign_up(&self, email: &str, _password: &str, name: &str) -> Result<SignUpOutcome> {
            Ok(SignUpOutcome {
                user: User {
                    id: "u-2".to_string(),
                    email: email.to_string(),
                    name: Some(name.to_string()),
                    email_confirmed: false,
                },
                session: None,
            })
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
            if email != ana().email || password != "segredo" {
                return Err(GerminahError::InvalidCredentials);
            }
            *self.signed_in.lock().unwrap() = Some(ana());
            self.events.emit(&AuthEvent::SignedIn(session()));
            Ok(session())
        }

        async fn sign_out(&self) -> Result<()> {
            *self.signed_in.lock().unwrap() = None;
            self.events.emit(&AuthEvent::SignedOut);
            Ok(())
        }

        async fn current_user(&self) -> Result<Option<User>> {
            if self.fail_lookup {
                return Err(GerminahError::Network("offline".to_string()));
            }
            Ok(self.signed_in.lock().unwrap().clone())
        }

        fn events(&self) -> &AuthEvents {
            &self.events
        }
    }

    #[test]
    fn test_unauthenticated_protected_visit_redirects_to_login() {
        for path in PROTECTED_PATHS {
            assert_eq!(
                route_access(path, &AuthState::Unauthenticated),
                RouteAccess::Redirect(LOGIN_PATH)
            );
        }
    }

    #[test]
    fn test_authenticated_protected_visit_renders() {
        let state = AuthState::Authenticated(ana());
        for path in PROTECTED_PATHS {
            assert_eq!(route_access(path, &state), RouteAccess::Render);
        }
        assert_eq!(route_access("/plantas/", &state), RouteAccess::Render);
    }

    #[test]
    fn test_unknown_state_waits_instead_of_redirecting() {
        assert_eq!(route_access("/painel", &AuthState::Unknown), RouteAccess::Wait);
        assert_eq!(route_access("/", &AuthState::Unknown), RouteAccess::Render);
        assert_eq!(route_access("/login", &AuthState::Unknown), RouteAccess::Render);
    }

    #[test]
    fn test_public_paths() {
        assert_eq!(route_access("/", &AuthState::Unauthenticated), RouteAccess::Render);
        assert_eq!(route_access("/login", &AuthState::Unauthenticated), RouteAccess::Render);
        assert_eq!(
            route_access("/cadastro", &AuthState::Authenticated(ana())),
            RouteAccess::Redirect(DASHBOARD_PATH)
        );
        assert_eq!(route_access("/nao-existe", &AuthState::Unauthenticated), RouteAccess::Render);
    }

    #[test]
    fn test_guard_keeps_guest_page_after_sign_in_on_it() {
        let first = guard_step("/cadastro", &AuthState::Unauthenticated, None);
        assert_eq!(first.access, RouteAccess::Render);
        assert!(first.guest_settled);

        let after = guard_step("/cadastro", &AuthState::Authenticated(ana()), Some(first));
        assert_eq!(after.access, RouteAccess::Render);
    }

    #[test]
    fn test_guard_redirects_guest_page_when_session_resolves_signed_in() {
        let waiting = guard_step("/login", &AuthState::Unknown, None);
        assert_eq!(waiting.access, RouteAccess::Render);
        assert!(!waiting.guest_settled);

        let resolved = guard_step("/login", &AuthState::Authenticated(ana()), Some(waiting));
        assert_eq!(resolved.access, RouteAccess::Redirect(DASHBOARD_PATH));
    }

    #[test]
    fn test_guard_protected_paths_follow_route_access() {
        let shown = guard_step("/painel", &AuthState::Authenticated(ana()), None);
        assert_eq!(shown.access, RouteAccess::Render);
        let signed_out = guard_step("/painel", &AuthState::Unauthenticated, Some(shown));
        assert_eq!(signed_out.access, RouteAccess::Redirect(LOGIN_PATH));
        assert!(!signed_out.guest_settled);
    }

    #[test]
    fn test_lookup_resolution() {
        assert_eq!(AuthState::from_lookup(Ok(Some(ana()))), AuthState::Authenticated(ana()));
        assert_eq!(AuthState::from_lookup(Ok(None)), AuthState::Unauthenticated);
        assert_eq!(
            AuthState::from_lookup(Err(GerminahError::Network("down".into()))),
            AuthState::Unauthenticated
        );
    }

    #[test]
    fn test_event_before_lookup_wins() {
        let state = AuthState::Unknown.apply(&AuthEvent::SignedIn(session()));
        assert_eq!(state.resolve(AuthState::Unauthenticated), AuthState::Authenticated(ana()));
    }

    #[test]
    fn test_transitions() {
        let signed_in = AuthState::Unauthenticated.apply(&AuthEvent::SignedIn(session()));
        assert_eq!(signed_in.user(), Some(&ana()));
        assert_eq!(signed_in.apply(&AuthEvent::SignedOut), AuthState::Unauthenticated);

        let renamed = User {
            name: Some("Ana S.".to_string()),
            ..ana()
        };
        assert_eq!(
            signed_in.apply(&AuthEvent::UserUpdated(renamed.clone())),
            AuthState::Authenticated(renamed.clone())
        );
        assert_eq!(
            AuthState::Unauthenticated.apply(&AuthEvent::UserUpdated(renamed)),
            AuthState::Unauthenticated
        );
    }

    #[test]
    fn test_lookup_session_with_provider() {
        let provider = FakeProvider::new();
        assert_eq!(block_on(lookup_session(&provider)), AuthState::Unauthenticated);

        block_on(provider.sign_in("ana@example.com", "segredo")).unwrap();
        assert_eq!(block_on(lookup_session(&provider)), AuthState::Authenticated(ana()));

        let failing = FakeProvider {
            fail_lookup: true,
            ..FakeProvider::new()
        };
        assert_eq!(block_on(lookup_session(&failing)), AuthState::Unauthenticated);
    }

    #[test]
    fn test_subscription_drives_state_and_cache() {
        let provider = FakeProvider::new();
        let store = AppStore::new(Arc::new(MemoryStore::default()));
        let state = Arc::new(Mutex::new(AuthState::Unknown));

        let s = Arc::clone(&state);
        let cache = store.clone();
        let sub = provider.subscribe(move |event| {
            sync_user_cache(&cache, event);
            let mut guard = s.lock().unwrap();
            *guard = guard.apply(event);
        });

        block_on(provider.sign_in("ana@example.com", "segredo")).unwrap();
        assert_eq!(*state.lock().unwrap(), AuthState::Authenticated(ana()));
        assert_eq!(store.cached_user().unwrap().name, "Ana Souza");

        block_on(provider.sign_out()).unwrap();
        assert_eq!(*state.lock().unwrap(), AuthState::Unauthenticated);
        assert!(store.cached_user().is_none());

        drop(sub);
        assert_eq!(provider.events().listener_count(), 0);
        block_on(provider.sign_in("ana@example.com", "segredo")).unwrap();
        assert_eq!(*state.lock().unwrap(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_leaving_happens_before_sign_out_event() {
        let provider = FakeProvider::new();
        block_on(provider.sign_in("ana@example.com", "segredo")).unwrap();

        let order = Arc::new(Mutex::new(Vec::new()));
        let o = Arc::clone(&order);
        let _sub = provider.subscribe(move |e| o.lock().unwrap().push(e.kind()));

        let o = Arc::clone(&order);
        block_on(leave_and_sign_out(&provider, move || o.lock().unwrap().push("navigate")));

        assert_eq!(*order.lock().unwrap(), vec!["navigate", "SIGNED_OUT"]);
        assert_eq!(block_on(lookup_session(&provider)), AuthState::Unauthenticated);
    }

    #[test]
    fn test_context_name_helpers_prefer_cached_profile() {
        let kv: Arc<dyn crate::storage::KeyValueStore> = Arc::new(MemoryStore::default());
        let ctx = AuthContext {
            state: RwSignal::new(AuthState::Authenticated(ana())),
            profile: RwSignal::new(None),
            client: SupabaseAuth::new(None, Arc::clone(&kv)),
            store: AppStore::new(kv),
        };
        assert_eq!(ctx.first_name(), "Ana");
        assert_eq!(ctx.initial(), "A");

        ctx.profile.set(Some(CachedUser {
            id: "u-1".to_string(),
            name: "beatriz lima".to_string(),
            email: "ana@example.com".to_string(),
        }));
        assert_eq!(ctx.first_name(), "beatriz");
        assert_eq!(ctx.initial(), "B");
    }

    #[test]
    fn test_locally_edited_name_survives_token_refresh() {
        let store = AppStore::new(Arc::new(MemoryStore::default()));
        store
            .cache_user(&CachedUser {
                id: "u-1".to_string(),
                name: "Aninha".to_string(),
                email: "ana@example.com".to_string(),
            })
            .unwrap();

        sync_user_cache(&store, &AuthEvent::TokenRefreshed(session()));
        assert_eq!(store.cached_user().unwrap().name, "Aninha");
    }
}
