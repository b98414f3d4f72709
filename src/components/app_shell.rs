use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

/// Dashboard layout: sidebar plus content area, with a toggle for the
/// sidebar on narrow screens.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <div class="app-layout" class:sidebar-open=move || menu_open.get()>
            <Sidebar set_open=set_menu_open />
            <Show when=move || menu_open.get()>
                <div class="sidebar-backdrop" on:click=move |_| set_menu_open.set(false)></div>
            </Show>
            <div class="content-wrapper">
                <header class="mobile-topbar">
                    <button
                        class="btn btn-icon"
                        aria-label="Abrir menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "\u{2630}"
                    </button>
                    <span class="mobile-title">"Germinah"</span>
                </header>
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}
