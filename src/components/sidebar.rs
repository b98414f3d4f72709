use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen_futures::spawn_local;

use crate::auth::session::LOGIN_PATH;
use crate::auth::{leave_and_sign_out, use_auth};

/// Dashboard navigation: (path, label, icon).
const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("/painel", "Painel", "\u{1f3e0}"),
    ("/plantas", "Minhas Plantas", "\u{1f331}"),
    ("/configuracoes", "Configurações", "\u{2699}"),
    ("/conta", "Minha Conta", "\u{1f464}"),
    ("/ajuda", "Ajuda", "\u{2753}"),
];

#[component]
pub fn Sidebar(set_open: WriteSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let client = auth.client.clone();
    let profile = auth.profile;

    let initial = {
        let auth = auth.clone();
        Memo::new(move |_| auth.initial())
    };
    let name = Memo::new(move |_| auth.display_name());
    let email = move || profile.with(|p| p.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let on_sign_out = move |_| {
        let client = client.clone();
        let navigate = navigate.clone();
        set_open.set(false);
        spawn_local(async move {
            leave_and_sign_out(&client, move || navigate(LOGIN_PATH, Default::default())).await;
        });
    };

    let links = NAV_LINKS
        .iter()
        .map(|&(path, label, icon)| {
            view! {
                <li class="nav-item">
                    <a
                        href=path
                        class="nav-link"
                        class:active=move || pathname.with(|p| p == path)
                        on:click=move |_| set_open.set(false)
                    >
                        <span class="nav-icon">{icon}</span>
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <a href="/" class="sidebar-title">"\u{1f331} Germinah"</a>
                <p class="sidebar-subtitle">"Irrigação Inteligente"</p>
            </div>
            <div class="sidebar-user">
                <div class="user-avatar">{move || initial.get()}</div>
                <div class="user-info">
                    <p class="user-name">{move || name.get()}</p>
                    <p class="user-email">{email}</p>
                </div>
            </div>
            <ul class="nav-list">{links}</ul>
            <button class="btn btn-sign-out" on:click=on_sign_out>"Sair"</button>
        </nav>
    }
}
