use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::session::DASHBOARD_PATH;
use crate::auth::{use_auth, AuthProvider};
use crate::validation::{Field, FieldErrors, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

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
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.sign_in(current.email.trim(), &current.password).await {
                Ok(_) => {
                    set_submitting.try_set(false);
                    navigate(DASHBOARD_PATH, Default::default());
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    set_submitting.try_set(false);
                    errors.try_set(FieldErrors::single(Field::General, e.user_message()));
                }
            }
        });
    };

    let error_for = move |field: Field| move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <a href="/" class="auth-brand">"\u{1f331} Germinah"</a>
                <h1>"Entrar"</h1>
                <p class="page-description">"Acesse o painel da sua horta"</p>

                <Show when=move || errors.with(|e| e.has(Field::General))>
                    <div class="alert alert-error">{error_for(Field::General)}</div>
                </Show>

                <form on:submit=on_submit>
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
                                form.update(|f| f.email = event_target_value(&ev));
                                errors.update(|e| {
                                    e.clear(Field::Email);
                                    e.clear(Field::General);
                                });
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
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                                errors.update(|e| {
                                    e.clear(Field::Password);
                                    e.clear(Field::General);
                                });
                            }
                        />
                        <p class="field-error">{error_for(Field::Password)}</p>
                    </div>

                    <button class="btn btn-primary btn-block" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Ainda não tem conta? " <a href="/cadastro">"Criar conta"</a>
                </p>
            </div>
        </div>
    }
}
