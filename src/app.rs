use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::auth::{AuthContext, SupabaseAuth};
use crate::components::app_shell::AppShell;
use crate::components::route_guard::RouteGuard;
use crate::config::AppConfig;
use crate::pages::account::AccountPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::help::HelpPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::plants::PlantsPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::storage::AppStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = AppStore::browser();
    provide_context(store.clone());

    let client = SupabaseAuth::new(config.supabase.clone(), store.kv());
    AuthContext::provide(client, store);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <Route
                    path=path!("/login")
                    view=|| view! { <RouteGuard><LoginPage /></RouteGuard> }
                />
                <Route
                    path=path!("/cadastro")
                    view=|| view! { <RouteGuard><RegisterPage /></RouteGuard> }
                />
                <Route
                    path=path!("/painel")
                    view=|| view! { <RouteGuard><AppShell><DashboardPage /></AppShell></RouteGuard> }
                />
                <Route
                    path=path!("/plantas")
                    view=|| view! { <RouteGuard><AppShell><PlantsPage /></AppShell></RouteGuard> }
                />
                <Route
                    path=path!("/configuracoes")
                    view=|| view! { <RouteGuard><AppShell><SettingsPage /></AppShell></RouteGuard> }
                />
                <Route
                    path=path!("/conta")
                    view=|| view! { <RouteGuard><AppShell><AccountPage /></AppShell></RouteGuard> }
                />
                <Route
                    path=path!("/ajuda")
                    view=|| view! { <RouteGuard><AppShell><HelpPage /></AppShell></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Página não encontrada"</h1>
            <p class="page-description">"O endereço acessado não existe."</p>
            <a href="/" class="btn btn-primary">"Voltar ao início"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::session::{is_protected, DASHBOARD_PATH};

    const MANIFEST: &str = include_str!("../manifest.webmanifest");
    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn test_manifest_starts_on_dashboard() {
        let manifest: serde_json::Value = serde_json::from_str(MANIFEST).unwrap();
        assert_eq!(manifest["start_url"], DASHBOARD_PATH);
        assert!(is_protected(DASHBOARD_PATH));
        assert_eq!(manifest["scope"], "/");
        assert_eq!(manifest["display"], "standalone");
        assert!(!manifest["icons"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_index_links_manifest_and_theme_color() {
        let manifest: serde_json::Value = serde_json::from_str(MANIFEST).unwrap();
        let theme = manifest["theme_color"].as_str().unwrap();

        assert!(INDEX_HTML.contains(r#"rel="manifest" href="/manifest.webmanifest""#));
        assert!(INDEX_HTML.contains(r#"data-trunk rel="copy-file" href="manifest.webmanifest""#));
        assert!(INDEX_HTML.contains(&format!(r#"<meta name="theme-color" content="{}""#, theme)));
    }
}
