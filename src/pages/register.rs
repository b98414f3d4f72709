use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::session::{DASHBOARD_PATH, LOGIN_PATH};
use crate::auth::{use_auth, AuthProvider};
use crate::error::{GerminahError, GENERIC_RETRY};
use crate::validation::{Field, FieldErrors, RegistrationForm};

/// Time the confirmation screen stays up before leaving the page.
const CONFIRMED_REDIRECT_MS: u32 = 2000;
const PENDING_REDIRECT_MS: u32 = 3000;

/// Where a sign-up failure is shown: a taken email belongs to the email
/// field, provider rejections to the banner.
pub fn signup_failure(err: &GerminahError) -> FieldErrors {
    match err {
        GerminahError::EmailTaken => FieldErrors::single(Field::Email, err.user_message()),
        GerminahError::Auth(msg) => FieldErrors::single(Field::General, msg.clone()),
        _ => FieldErrors::single(Field::General, GENERIC_RETRY),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Confirmed,
    PendingEmail,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (outcome, set_outcome) = signal::<Option<Outcome>>(None);

    let clear_error = move |field: Field| {
        errors.update(|e| {
            e.clear(field);
            e.clear(Field::General);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        set_submitting.set(true);
        let client = auth.client.clone();
        let store = auth.store.clone();
        let profile = auth.profile;
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = client
                .sign_up(current.email.trim(), &current.password, current.name.trim())
                .await;
            set_submitting.try_set(false);

            match result {
                Ok(done) if done.is_confirmed() => {
                    let mut cached = done.user.to_cached();
                    cached.name = current.name.trim().to_string();
                    if let Err(e) = store.cache_user(&cached) {
                        tracing::warn!("Could not cache new user: {}", e);
                    }
                    profile.try_set(Some(cached));
                    set_outcome.try_set(Some(Outcome::Confirmed));
                    TimeoutFuture::new(CONFIRMED_REDIRECT_MS).await;
                    if outcome.try_get_untracked().is_some() {
                        navigate(DASHBOARD_PATH, Default::default());
                    }
                }
                Ok(_) => {
                    set_outcome.try_set(Some(Outcome::PendingEmail));
                    TimeoutFuture::new(PENDING_REDIRECT_MS).await;
                    // Skip when the page was left during the wait.
                    if outcome.try_get_untracked().is_some() {
                        navigate(LOGIN_PATH, Default::default());
                    }
                }
                Err(e) => {
                    tracing::warn!("Sign-up failed: {}", e);
                    errors.try_set(signup_failure(&e));
                }
            }
        });
    };

    let error_for = move |field: Field| move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="auth-page">
            <Show when=move || outcome.get().is_some()>
                <div class="card auth-card auth-success">
                    <div class="success-icon">"\u{2713}"</div>
                    <h1>"Conta criada com sucesso!"</h1>
                    <p>
                        {move || match outcome.get() {
                            Some(Outcome::Confirmed) => "Redirecionando para o painel...",
                            _ => "Verifique seu email para confirmar sua conta e fazer login.",
                        }}
                    </p>
                </div>
            </Show>

            <div class="card auth-card" hidden=move || outcome.get().is_some()>
                <a href="/" class="auth-brand">"\u{1f331} Germinah"</a>
                <h1>"Criar conta"</h1>
                <p class="page-description">"Comece a monitorar suas plantas hoje"</p>

                <Show when=move || errors.with(|e| e.has(Field::General))>
                    <div class="alert alert-error">{error_for(Field::General)}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Nome completo"</label>
                        <input
                            id="name"
                            type="text"
                            class="input"
                            class:input-error=move || errors.with(|e| e.has(Field::Name))
                            placeholder="Seu nome"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.name = value);
                                clear_error(Field::Name);
                            }
                        />
                        <p class="field-error">{error_for(Field::Name)}</p>
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class="input"
                            class:input-error=move || errors.with(|e| e.has(Field::Email))
                            placeholder="seu@email.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                                clear_error(Field::Email);
                            }
                        />
                        <p class="field-error">{error_for(Field::Email)}</p>
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            id="password"
                            type="password"
                            class="input"
                            class:input-error=move || errors.with(|e| e.has(Field::Password))
                            placeholder="Mínimo 6 caracteres"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                                clear_error(Field::Password);
                            }
                        />
                        <p class="field-error">{error_for(Field::Password)}</p>
                    </div>

                    <div class="form-group">
                        <label for="confirm-password">"Confirmar senha"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            class="input"
                            class:input-error=move || errors.with(|e| e.has(Field::ConfirmPassword))
                            placeholder="Repita a senha"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.confirm_password = value);
                                clear_error(Field::ConfirmPassword);
                            }
                        />
                        <p class="field-error">{error_for(Field::ConfirmPassword)}</p>
                    </div>

                    <div class="form-group checkbox-group">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.accept_terms)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.accept_terms = checked);
                                    clear_error(Field::AcceptTerms);
                                }
                            />
                            " Aceito os termos de uso e a política de privacidade"
                        </label>
                        <p class="field-error">{error_for(Field::AcceptTerms)}</p>
                    </div>

                    <button class="btn btn-primary btn-block" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Criando conta..." } else { "Criar conta" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Já tem uma conta? " <a href="/login">"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
