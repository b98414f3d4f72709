use leptos::prelude::*;

#[component]
pub fn Loading(
    /// Text under the spinner
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-text">{message.unwrap_or_else(|| "Carregando...".to_string())}</p>
        </div>
    }
}
