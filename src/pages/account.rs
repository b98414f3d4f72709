use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::auth::{leave_and_sign_out, use_auth, AuthContext};
use crate::config::{BANNER_VISIBLE_MS, PASSWORD_CHANGE_DELAY_MS};
use crate::storage::CachedUser;
use crate::validation::validate_password_change;

const ACCOUNT_STATS: &[(&str, &str)] = &[
    ("Membro desde", "Dezembro 2024"),
    ("Plantas cadastradas", "6"),
    ("Irrigações realizadas", "142"),
    ("Água economizada", "45.2L"),
];

/// Profile form seed: the cached blob, else the provider's user, else
/// placeholders.
fn initial_profile(auth: &AuthContext) -> CachedUser {
    auth.profile
        .get_untracked()
        .or_else(|| auth.state.with_untracked(|s| s.user().map(|u| u.to_cached())))
        .unwrap_or_else(|| CachedUser {
            id: String::new(),
            name: "Usuário".to_string(),
            email: "usuario@email.com".to_string(),
        })
}

#[component]
fn PasswordInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    /// Called after each edit
    on_edit: Callback<()>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <div class="input-row">
                <input
                    id=id
                    class="input"
                    type=move || if visible.get() { "text" } else { "password" }
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        on_edit.run(());
                    }
                />
                <button
                    type="button"
                    class="btn btn-icon"
                    title="Mostrar ou ocultar"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "\u{1f648}" } else { "\u{1f441}" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let seed = initial_profile(&auth);
    let name = RwSignal::new(seed.name.clone());
    let email = RwSignal::new(seed.email.clone());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let (busy, set_busy) = signal(false);
    let (success, set_success) = signal::<Option<&'static str>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_delete, set_show_delete) = signal(false);

    let flash_success = move |message: &'static str| {
        if set_success.try_set(Some(message)).is_none() {
            set_timeout(
                move || {
                    set_success.try_set(None);
                },
                Duration::from_millis(BANNER_VISIBLE_MS),
            );
        }
    };
    let clear_error = Callback::new(move |_: ()| set_error.set(None));

    let save_profile = {
        let auth = auth.clone();
        move |_| {
            set_error.set(None);
            let updated = CachedUser {
                id: seed.id.clone(),
                name: name.get_untracked().trim().to_string(),
                email: email.get_untracked().trim().to_string(),
            };
            match auth.update_profile(updated) {
                Ok(()) => {
                    tracing::info!("Profile updated");
                    flash_success("Perfil atualizado com sucesso!");
                }
                Err(e) => {
                    tracing::warn!("Failed to save profile: {}", e);
                    set_error.set(Some("Erro ao salvar perfil".to_string()));
                }
            }
        }
    };

    let change_password = move |_| {
        let new_value = new_password.get_untracked();
        if let Err(msg) = validate_password_change(&new_value, &confirm_password.get_untracked()) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            TimeoutFuture::new(PASSWORD_CHANGE_DELAY_MS).await;
            current_password.try_set(String::new());
            new_password.try_set(String::new());
            confirm_password.try_set(String::new());
            set_busy.try_set(false);
            flash_success("Senha alterada com sucesso!");
        });
    };

    let leave = {
        let client = auth.client.clone();
        move |reason: &'static str| {
            let client = client.clone();
            let navigate = navigate.clone();
            set_busy.set(true);
            tracing::info!("Signing out ({})", reason);
            spawn_local(async move {
                leave_and_sign_out(&client, move || navigate("/", Default::default())).await;
            });
        }
    };
    let sign_out = {
        let leave = leave.clone();
        move |_| leave("logout")
    };
    let confirm_delete = move |_| {
        set_show_delete.set(false);
        leave("account deletion");
    };

    let stats = ACCOUNT_STATS
        .iter()
        .map(|&(label, value)| {
            view! {
                <div class="card stat-card">
                    <span class="stat-title">{label}</span>
                    <p class="stat-value">{value}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page account-page">
            <div class="page-header">
                <div>
                    <h1>"Minha Conta"</h1>
                    <p class="page-description">"Gerencie suas informações pessoais"</p>
                </div>
                <button class="btn btn-secondary" on:click=sign_out disabled=move || busy.get()>
                    "Sair"
                </button>
            </div>

            <Show when=move || success.get().is_some()>
                <div class="alert alert-success">{move || success.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stats-grid">{stats}</div>

            <section class="card settings-section">
                <h3>"Informações do Perfil"</h3>
                <div class="form-row">
                    <div class="form-group">
                        <label for="profile-name">"Nome Completo"</label>
                        <input
                            id="profile-name"
                            type="text"
                            class="input"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                name.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-email">"Email"</label>
                        <input
                            id="profile-email"
                            type="email"
                            class="input"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                        />
                    </div>
                </div>
                <button class="btn btn-primary" on:click=save_profile disabled=move || busy.get()>
                    "Salvar Perfil"
                </button>
            </section>

            <section class="card settings-section">
                <h3>"Alterar Senha"</h3>
                <PasswordInput id="current-password" label="Senha atual" value=current_password on_edit=clear_error />
                <PasswordInput id="new-password" label="Nova senha" value=new_password on_edit=clear_error />
                <PasswordInput
                    id="confirm-new-password"
                    label="Confirmar nova senha"
                    value=confirm_password
                    on_edit=clear_error
                />
                <button class="btn btn-primary" on:click=change_password disabled=move || busy.get()>
                    {move || if busy.get() { "Alterando..." } else { "Alterar Senha" }}
                </button>
            </section>

            <section class="card settings-section danger-zone">
                <h3>"Zona de Perigo"</h3>
                <p class="section-description">
                    "Excluir sua conta remove seus dados deste dispositivo e encerra a sessão."
                </p>
                <button class="btn btn-danger" on:click=move |_| set_show_delete.set(true)>
                    "Excluir Conta"
                </button>
            </section>

            <div class="modal-backdrop" hidden=move || !show_delete.get()>
                <div class="modal">
                    <h2>"Excluir conta?"</h2>
                    <p>"Esta ação não pode ser desfeita. Tem certeza de que deseja continuar?"</p>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| set_show_delete.set(false)>
                            "Cancelar"
                        </button>
                        <button class="btn btn-danger" on:click=confirm_delete disabled=move || busy.get()>
                            "Excluir"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

