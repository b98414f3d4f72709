use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::plants::Plant;

#[component]
pub fn PlantCard(
    plant: Plant,
    /// Called with the plant id when the delete button is pressed
    on_delete: Callback<String>,
) -> impl IntoView {
    let Plant {
        id,
        name,
        kind,
        humidity,
        last_irrigation,
        status,
        icon,
    } = plant;

    view! {
        <div class="card plant-card">
            <div class="plant-card-header">
                <span class="plant-icon">{icon}</span>
                <div class="plant-title">
                    <h3>{name}</h3>
                    <p class="plant-kind">{kind}</p>
                </div>
                <button
                    class="btn btn-icon btn-danger"
                    title="Remover planta"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "\u{1f5d1}"
                </button>
            </div>
            <div class="plant-humidity">
                <div class="plant-humidity-label">
                    <span>"Umidade"</span>
                    <span>{format!("{}%", humidity)}</span>
                </div>
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {}%", humidity)></div>
                </div>
            </div>
            <div class="plant-card-footer">
                <StatusBadge status=status />
                <span class="plant-last-irrigation">"Última irrigação: " {last_irrigation}</span>
            </div>
        </div>
    }
}
