use leptos::prelude::*;

use crate::components::add_plant_modal::AddPlantModal;
use crate::components::plant_card::PlantCard;
use crate::plants::{
    add_plant, empty_state_hint, filter_plants, remove_plant, sample_plants, NewPlantForm, PlantStatus,
    StatusCounts, StatusFilter,
};

/// Millisecond timestamp id, as the list has no backend to assign one.
fn next_plant_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}

#[component]
pub fn PlantsPage() -> impl IntoView {
    let plants = RwSignal::new(sample_plants());
    let (search, set_search) = signal(String::new());
    let (filter, set_filter) = signal(StatusFilter::All);
    let (show_modal, set_show_modal) = signal(false);

    let visible = Memo::new(move |_| {
        let search = search.get();
        plants.with(|list| filter_plants(list, &search, filter.get()))
    });
    let counts = Memo::new(move |_| plants.with(|list| StatusCounts::of(list)));

    let on_delete = Callback::new(move |id: String| {
        plants.update(|list| {
            if let Some(removed) = remove_plant(list, &id) {
                tracing::info!("Removed plant '{}'", removed.name);
            }
        });
    });

    let on_add = Callback::new(move |form: NewPlantForm| {
        let roll = js_sys::Math::random();
        let mut added = false;
        plants.update(|list| added = add_plant(list, &form, next_plant_id(), roll));
        if added {
            tracing::info!("Added plant '{}' ({})", form.name.trim(), form.kind);
            set_show_modal.set(false);
        }
    });
    let on_close = Callback::new(move |_: ()| set_show_modal.set(false));

    let stat_cards = PlantStatus::ALL
        .into_iter()
        .map(|status| {
            let display = status.display();
            view! {
                <div class=format!("card stat-card stat-{}", display.color)>
                    <span class="stat-title">{display.plural_label}</span>
                    <p class="stat-value">{move || counts.with(|c| c.get(status))}</p>
                </div>
            }
        })
        .collect_view();

    let filter_options = PlantStatus::ALL
        .into_iter()
        .map(|status| view! { <option value=status.as_str()>{status.display().plural_label}</option> })
        .collect_view();

    view! {
        <div class="page plants-page">
            <div class="page-header">
                <div>
                    <h1>"Minhas Plantas"</h1>
                    <p class="page-description">"Gerencie e monitore suas plantas"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_modal.set(true)>
                    "+ Adicionar Planta"
                </button>
            </div>

            <div class="stats-grid">
                <div class="card stat-card">
                    <span class="stat-title">"Total"</span>
                    <p class="stat-value">{move || counts.with(|c| c.total)}</p>
                </div>
                {stat_cards}
            </div>

            <div class="toolbar">
                <input
                    type="text"
                    class="input search-input"
                    placeholder="Buscar plantas..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || filter.get().as_str()
                    on:change=move |ev| set_filter.set(StatusFilter::parse(&event_target_value(&ev)))
                >
                    <option value="all">"Todas"</option>
                    {filter_options}
                </select>
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"\u{1f331}"</div>
                            <h3>"Nenhuma planta encontrada"</h3>
                            <p>{move || search.with(|s| empty_state_hint(s, filter.get()))}</p>
                        </div>
                    }
                }
            >
                <div class="plant-grid">
                    <For
                        each=move || visible.get()
                        key=|plant| plant.id.clone()
                        children=move |plant| view! { <PlantCard plant=plant on_delete=on_delete /> }
                    />
                </div>
            </Show>

            <Show when=move || show_modal.get()>
                <AddPlantModal on_add=on_add on_close=on_close />
            </Show>
        </div>
    }
}
