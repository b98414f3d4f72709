use leptos::ev;
use leptos::prelude::*;

use crate::scroll::{
    active_section, current_scroll_y, is_scrolled, measure_sections, scroll_to_section, NAV_ITEMS,
    SECTION_IDS,
};

/// Fixed landing-page header with scroll-spy navigation.
#[component]
pub fn Header() -> impl IntoView {
    let (active, set_active) = signal(String::from("home"));
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = current_scroll_y();
        set_scrolled.set(is_scrolled(y));

        let sections = measure_sections(SECTION_IDS);
        let previous = active.get_untracked();
        let next = active_section(&sections, y, &previous);
        if next != previous.as_str() {
            set_active.set(next.to_string());
        }
    });
    on_cleanup(move || handle.remove());

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    let nav_links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|&(id, label)| {
                view! {
                    <button
                        class=class
                        class:active=move || active.with(|a| a == id)
                        on:click=move |_| go_to(id)
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header" class:scrolled=move || scrolled.get()>
            <div class="header-inner">
                <button class="brand" on:click=move |_| go_to("home")>
                    <span class="brand-icon">"\u{1f331}"</span>
                    <span class="brand-name">"Germinah"</span>
                </button>

                <nav class="header-nav">
                    {nav_links("header-link")}
                    <a href="/login" class="btn btn-outline">"Entrar"</a>
                </nav>

                <button
                    class="btn btn-icon menu-toggle"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-nav">
                    {nav_links("mobile-link")}
                    <a href="/login" class="mobile-link">"Entrar"</a>
                    <a href="/cadastro" class="mobile-link">"Criar conta"</a>
                </nav>
            </Show>
        </header>
    }
}
