use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth::{guard_step, use_auth, GuardState, RouteAccess};
use crate::components::loading::Loading;

/// Renders its children only when the current path is allowed for the
/// current auth state. Redirects are issued once the state is known.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state;
    let pathname = use_location().pathname;

    let guard = Memo::new(move |previous: Option<&GuardState>| {
        let path = pathname.get();
        state.with(|s| guard_step(&path, s, previous.copied()))
    });
    let access = Memo::new(move |_| guard.get().access);

    move || match access.get() {
        RouteAccess::Render => children().into_any(),
        RouteAccess::Wait => view! { <Loading message="Verificando sessão..." /> }.into_any(),
        RouteAccess::Redirect(to) => {
            tracing::debug!("Redirecting {} -> {}", pathname.get_untracked(), to);
            view! { <Redirect path=to /> }.into_any()
        }
    }
}
