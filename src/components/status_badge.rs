use leptos::prelude::*;

use crate::plants::PlantStatus;

#[component]
pub fn StatusBadge(
    /// The plant status to show
    status: PlantStatus,
    /// Optional text replacing the status label, e.g. a soil reading
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    let display = status.display();
    let class = format!("status-badge status-{}", display.color);

    view! {
        <span class=class>
            <span class="status-icon">{display.icon}</span>
            <span class="status-label">{detail.unwrap_or_else(|| display.label.to_string())}</span>
        </span>
    }
}
