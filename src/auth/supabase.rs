//! Supabase GoTrue REST client.
//!
//! Only the four endpoints the app needs are wrapped. The session returned
//! by sign-in is persisted under [`SESSION_KEY`] so it survives reloads.

use std::sync::Arc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::events::AuthEvents;
use super::provider::{AuthEvent, AuthProvider, Session, SignUpOutcome, User};
use crate::config::{SupabaseConfig, SESSION_KEY};
use crate::error::{GerminahError, Result};
use crate::storage::KeyValueStore;

// -- Wire types --

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
    #[serde(default)]
    user_metadata: WireMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSession {
    access_token: String,
    refresh_token: String,
    user: WireUser,
}

/// Sign-up answers with a full session when the project auto-confirms
/// emails, and with the bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireSignUp {
    Session(WireSession),
    User(WireUser),
}

#[derive(Debug, Default, Deserialize)]
struct WireError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

impl From<WireUser> for User {
    fn from(u: WireUser) -> Self {
        User {
            id: u.id,
            email: u.email.unwrap_or_default(),
            name: u.user_metadata.name,
            email_confirmed: u.email_confirmed_at.is_some(),
        }
    }
}

impl From<WireSession> for Session {
    fn from(s: WireSession) -> Self {
        Session {
            access_token: s.access_token,
            refresh_token: s.refresh_token,
            user: s.user.into(),
        }
    }
}

/// Map a non-2xx response body to the crate error.
fn classify_error(status: u16, body: &str) -> GerminahError {
    let wire: WireError = serde_json::from_str(body).unwrap_or_default();
    let message = wire
        .error_description
        .or(wire.msg)
        .or(wire.message)
        .or_else(|| wire.error.clone())
        .unwrap_or_else(|| format!("HTTP {}", status));
    let lowered = message.to_lowercase();

    if wire.error_code.as_deref() == Some("user_already_exists") || lowered.contains("already registered") {
        GerminahError::EmailTaken
    } else if wire.error.as_deref() == Some("invalid_grant") || lowered.contains("invalid login credentials") {
        GerminahError::InvalidCredentials
    } else {
        GerminahError::Auth(message)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await?;
    if !ok {
        return Err(classify_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[derive(Clone)]
pub struct SupabaseAuth {
    config: Option<SupabaseConfig>,
    kv: Arc<dyn KeyValueStore>,
    events: AuthEvents,
}

impl SupabaseAuth {
    pub fn new(config: Option<SupabaseConfig>, kv: Arc<dyn KeyValueStore>) -> Self {
        if config.is_none() {
            warn!("Supabase URL/key not set at build time; sign-in is disabled");
        }
        Self {
            config,
            kv,
            events: AuthEvents::new(),
        }
    }

    fn config(&self) -> Result<&SupabaseConfig> {
        self.config.as_ref().ok_or(GerminahError::NotConfigured)
    }

    fn endpoint(cfg: &SupabaseConfig, path: &str) -> String {
        format!("{}/auth/v1/{}", cfg.url, path)
    }

    fn stored_session(&self) -> Option<Session> {
        let raw = self.kv.get(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding unreadable stored session: {}", e);
                self.clear_session();
                None
            }
        }
    }

    fn store_session(&self, session: &Session) -> Result<()> {
        self.kv.set(SESSION_KEY, &serde_json::to_string(session)?)
    }

    fn clear_session(&self) {
        if let Err(e) = self.kv.remove(SESSION_KEY) {
            warn!("Failed to clear stored session: {}", e);
        }
    }

    fn begin_session(&self, session: &Session) -> Result<()> {
        self.store_session(session)?;
        self.events.emit(&AuthEvent::SignedIn(session.clone()));
        Ok(())
    }

    async fn fetch_user(&self, cfg: &SupabaseConfig, access_token: &str) -> Result<Option<User>> {
        let resp = Request::get(&Self::endpoint(cfg, "user"))
            .header("apikey", &cfg.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await?;

        if matches!(resp.status(), 401 | 403) {
            return Ok(None);
        }
        let user: WireUser = read_json(resp).await?;
        Ok(Some(user.into()))
    }

    async fn refresh(&self, cfg: &SupabaseConfig, refresh_token: &str) -> Result<Session> {
        let resp = Request::post(&Self::endpoint(cfg, "token?grant_type=refresh_token"))
            .header("apikey", &cfg.anon_key)
            .json(&RefreshGrant { refresh_token })?
            .send()
            .await?;
        let session: Session = read_json::<WireSession>(resp).await?.into();
        self.store_session(&session)?;
        self.events.emit(&AuthEvent::TokenRefreshed(session.clone()));
        Ok(session)
    }

    async fn revoke(&self, cfg: &SupabaseConfig, access_token: &str) -> Result<()> {
        let resp = Request::post(&Self::endpoint(cfg, "logout"))
            .header("apikey", &cfg.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_error(status, &body));
        }
        info!("Signed out");
        Ok(())
    }
}

impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUpOutcome> {
        let cfg = self.config()?;
        let body = SignUpBody {
            email,
            password,
            data: SignUpMetadata { name },
        };
        let resp = Request::post(&Self::endpoint(cfg, "signup"))
            .header("apikey", &cfg.anon_key)
            .json(&body)?
            .send()
            .await?;

        let outcome = match read_json::<WireSignUp>(resp).await? {
            WireSignUp::Session(wire) => {
                let session: Session = wire.into();
                self.begin_session(&session)?;
                SignUpOutcome {
                    user: session.user.clone(),
                    session: Some(session),
                }
            }
            WireSignUp::User(wire) => SignUpOutcome {
                user: wire.into(),
                session: None,
            },
        };

        info!(
            "Registered {} (confirmed: {})",
            outcome.user.email,
            outcome.is_confirmed()
        );
        Ok(outcome)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let cfg = self.config()?;
        let resp = Request::post(&Self::endpoint(cfg, "token?grant_type=password"))
            .header("apikey", &cfg.anon_key)
            .json(&PasswordGrant { email, password })?
            .send()
            .await?;

        let session: Session = read_json::<WireSession>(resp).await?.into();
        self.begin_session(&session)?;
        info!("Signed in as {}", session.user.email);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        let session = self.stored_session();
        self.clear_session();

        // The local session is gone either way; a failed revoke only means
        // the refresh token lives until it expires.
        let revoked = match (session, self.config()) {
            (Some(session), Ok(cfg)) => self.revoke(cfg, &session.access_token).await,
            _ => Ok(()),
        };
        self.events.emit(&AuthEvent::SignedOut);
        revoked
    }

    async fn current_user(&self) -> Result<Option<User>> {
        let cfg = self.config()?;
        let Some(session) = self.stored_session() else {
            return Ok(None);
        };

        if let Some(user) = self.fetch_user(cfg, &session.access_token).await? {
            return Ok(Some(user));
        }

        match self.refresh(cfg, &session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed.user)),
            Err(e) => {
                warn!("Stored session expired and could not be refreshed: {}", e);
                self.clear_session();
                Ok(None)
            }
        }
    }

    fn events(&self) -> &AuthEvents {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_classify_already_registered() {
        let err = classify_error(422, r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#);
        assert!(matches!(err, GerminahError::EmailTaken));

        let err = classify_error(400, r#"{"msg":"User already registered"}"#);
        assert!(matches!(err, GerminahError::EmailTaken));
    }

    #[test]
    fn test_classify_bad_credentials() {
        let err = classify_error(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert!(matches!(err, GerminahError::InvalidCredentials));
    }

    #[test]
    fn test_classify_other_errors_keep_message() {
        match classify_error(429, r#"{"message":"Email rate limit exceeded"}"#) {
            GerminahError::Auth(msg) => assert_eq!(msg, "Email rate limit exceeded"),
            other => panic!("unexpected {:?}", other),
        }
        match classify_error(502, "<html>Bad gateway</html>") {
            GerminahError::Auth(msg) => assert_eq!(msg, "HTTP 502"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_signup_response_with_session() {
        let raw = r#"{
            "access_token": "at", "token_type": "bearer", "expires_in": 3600,
            "refresh_token": "rt",
            "user": {"id": "u1", "email": "a@b.co", "email_confirmed_at": "2024-12-01T10:00:00Z",
                     "user_metadata": {"name": "Ana"}}
        }"#;
        match serde_json::from_str::<WireSignUp>(raw).unwrap() {
            WireSignUp::Session(s) => {
                let session: Session = s.into();
                assert_eq!(session.access_token, "at");
                assert_eq!(session.user.name.as_deref(), Some("Ana"));
                assert!(session.user.email_confirmed);
            }
            WireSignUp::User(_) => panic!("expected a session"),
        }
    }

    #[test]
    fn test_signup_response_pending_confirmation() {
        let raw = r#"{"id": "u2", "email": "b@c.co", "email_confirmed_at": null,
                      "user_metadata": {"name": "Bia"}, "confirmation_sent_at": "2024-12-01T10:00:00Z"}"#;
        match serde_json::from_str::<WireSignUp>(raw).unwrap() {
            WireSignUp::User(u) => {
                let user: User = u.into();
                assert_eq!(user.id, "u2");
                assert!(!user.email_confirmed);
            }
            WireSignUp::Session(_) => panic!("expected a bare user"),
        }
    }

    #[test]
    fn test_user_without_metadata() {
        let user: User = serde_json::from_str::<WireUser>(r#"{"id": "u3"}"#).unwrap().into();
        assert_eq!(user.email, "");
        assert_eq!(user.name, None);
    }

    #[test]
    fn test_unconfigured_client_rejects_calls() {
        let auth = SupabaseAuth::new(None, Arc::new(MemoryStore::default()));
        let result = futures::executor::block_on(auth.sign_in("a@b.co", "secret"));
        assert!(matches!(result, Err(GerminahError::NotConfigured)));
        let result = futures::executor::block_on(auth.current_user());
        assert!(matches!(result, Err(GerminahError::NotConfigured)));
    }

    #[test]
    fn test_sign_out_without_session_emits_and_succeeds() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let auth = SupabaseAuth::new(None, Arc::clone(&kv));
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let _sub = auth.subscribe(move |e| s.lock().unwrap().push(e.kind()));

        futures::executor::block_on(auth.sign_out()).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["SIGNED_OUT"]);
    }

    #[test]
    fn test_sign_out_clears_stored_session_before_announcing() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let session = Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            user: User {
                id: "u1".to_string(),
                email: "a@b.co".to_string(),
                name: None,
                email_confirmed: true,
            },
        };
        kv.set(SESSION_KEY, &serde_json::to_string(&session).unwrap()).unwrap();
        let auth = SupabaseAuth::new(None, Arc::clone(&kv));

        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let (s, store) = (Arc::clone(&seen), Arc::clone(&kv));
        let _sub = auth.subscribe(move |e| {
            let stored = store.get(SESSION_KEY).unwrap().is_some();
            s.lock().unwrap().push((e.kind(), stored));
        });

        futures::executor::block_on(auth.sign_out()).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![("SIGNED_OUT", false)]);
    }

    #[test]
    fn test_corrupt_stored_session_is_discarded() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        kv.set(SESSION_KEY, "garbage").unwrap();
        let auth = SupabaseAuth::new(None, Arc::clone(&kv));

        assert!(auth.stored_session().is_none());
        assert!(kv.get(SESSION_KEY).unwrap().is_none());
    }
}
