use leptos::prelude::*;

use crate::plants::{NewPlantForm, MIN_HUMIDITY_INPUT_RANGE, PLANT_KINDS};
use crate::settings::parse_clamped;

#[component]
pub fn AddPlantModal(
    on_add: Callback<NewPlantForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(NewPlantForm::default());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |_| {
        let current = form.get_untracked();
        if !current.is_complete() {
            set_error.set(Some("Informe o nome e o tipo da planta"));
            return;
        }
        on_add.run(current);
        form.set(NewPlantForm::default());
    };

    let kind_options = PLANT_KINDS
        .iter()
        .map(|&kind| view! { <option value=kind>{kind}</option> })
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Adicionar Nova Planta"</h2>

                <div class="form-group">
                    <label for="plant-name">"Nome da Planta"</label>
                    <input
                        id="plant-name"
                        type="text"
                        class="input"
                        placeholder="Ex: Manjericão"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="plant-kind">"Tipo"</label>
                    <select
                        id="plant-kind"
                        class="input"
                        prop:value=move || form.with(|f| f.kind.clone())
                        on:change=move |ev| {
                            form.update(|f| f.kind = event_target_value(&ev));
                            set_error.set(None);
                        }
                    >
                        <option value="">"Selecione o tipo"</option>
                        {kind_options}
                    </select>
                </div>

                <div class="form-group">
                    <label for="plant-min-humidity">"Umidade Mínima (%)"</label>
                    <input
                        id="plant-min-humidity"
                        type="number"
                        class="input"
                        min=MIN_HUMIDITY_INPUT_RANGE.0
                        max=MIN_HUMIDITY_INPUT_RANGE.1
                        prop:value=move || form.with(|f| f.min_humidity.to_string())
                        on:change=move |ev| {
                            if let Some(v) = parse_clamped(&event_target_value(&ev), MIN_HUMIDITY_INPUT_RANGE) {
                                form.update(|f| f.min_humidity = v);
                            }
                        }
                    />
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn-primary" on:click=submit>"Adicionar"</button>
                </div>
            </div>
        </div>
    }
}
