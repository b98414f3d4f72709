use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{BANNER_VISIBLE_MS, SETTINGS_SAVE_DELAY_MS};
use crate::settings::{
    parse_clamped, Settings, CHECK_INTERVALS, DURATION_RANGE, LANGUAGES, MAX_HUMIDITY_RANGE,
    MIN_HUMIDITY_RANGE, TIMEZONES, UNITS,
};
use crate::storage::use_app_store;

/// A labelled checkbox bound to one boolean leaf.
#[component]
fn ToggleRow(
    #[prop(into)] label: String,
    #[prop(into)] description: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <div class="toggle-text">
                <span class="toggle-label">{label}</span>
                <span class="toggle-description">{description}</span>
            </div>
            <input
                type="checkbox"
                class="toggle"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </label>
    }
}

/// A select over fixed (value, label) pairs bound to one string leaf.
#[component]
fn SelectRow(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let options = options
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> })
        .collect_view();

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <select
                id=id
                class="input"
                prop:value=move || value.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                {options}
            </select>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let settings = RwSignal::new(store.load_settings());
    let (saving, set_saving) = signal(false);
    let (status, set_status) = signal::<Option<(bool, String)>>(None);

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let store = store.clone();
        spawn_local(async move {
            TimeoutFuture::new(SETTINGS_SAVE_DELAY_MS).await;
            // Page left during the wait: nothing to save from.
            let Some(current) = settings.try_get_untracked() else {
                return;
            };
            let outcome = match store.save_settings(&current) {
                Ok(()) => {
                    tracing::info!("Settings saved");
                    (true, "Configurações salvas com sucesso!".to_string())
                }
                Err(e) => {
                    tracing::warn!("Failed to save settings: {}", e);
                    (false, e.user_message())
                }
            };
            set_saving.try_set(false);
            if set_status.try_set(Some(outcome)).is_none() {
                set_timeout(
                    move || {
                        set_status.try_set(None);
                    },
                    Duration::from_millis(BANNER_VISIBLE_MS),
                );
            }
        });
    };

    let restore_defaults = move |_| {
        settings.set(Settings::default());
        set_status.set(None);
    };

    let interval_options = CHECK_INTERVALS
        .iter()
        .map(|&(minutes, label)| view! { <option value=minutes.to_string()>{label}</option> })
        .collect_view();

    view! {
        <div class="page settings-page">
            <div class="page-header">
                <div>
                    <h1>"Configurações"</h1>
                    <p class="page-description">"Personalize o funcionamento do seu sistema"</p>
                </div>
            </div>

            <Show when=move || status.get().is_some()>
                {move || {
                    status
                        .get()
                        .map(|(ok, message)| {
                            let class = if ok { "alert alert-success" } else { "alert alert-error" };
                            view! { <div class=class>{message}</div> }
                        })
                }}
            </Show>

            <section class="card settings-section">
                <h3>"Irrigação"</h3>
                <p class="section-description">"Controle quando e por quanto tempo o sistema irriga."</p>

                <ToggleRow
                    label="Modo automático"
                    description="Irrigar automaticamente com base na umidade do solo"
                    checked=Signal::derive(move || settings.with(|s| s.irrigation.auto_mode))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.irrigation.auto_mode = on))
                />

                <div class="form-group">
                    <label for="min-humidity">
                        "Umidade mínima: " {move || settings.with(|s| s.irrigation.min_humidity)} "%"
                    </label>
                    <input
                        id="min-humidity"
                        type="range"
                        class="slider"
                        min=MIN_HUMIDITY_RANGE.0
                        max=MIN_HUMIDITY_RANGE.1
                        prop:value=move || settings.with(|s| s.irrigation.min_humidity.to_string())
                        on:input=move |ev| {
                            if let Some(v) = parse_clamped(&event_target_value(&ev), MIN_HUMIDITY_RANGE) {
                                settings.update(|s| s.irrigation.min_humidity = v);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="max-humidity">
                        "Umidade máxima: " {move || settings.with(|s| s.irrigation.max_humidity)} "%"
                    </label>
                    <input
                        id="max-humidity"
                        type="range"
                        class="slider"
                        min=MAX_HUMIDITY_RANGE.0
                        max=MAX_HUMIDITY_RANGE.1
                        prop:value=move || settings.with(|s| s.irrigation.max_humidity.to_string())
                        on:input=move |ev| {
                            if let Some(v) = parse_clamped(&event_target_value(&ev), MAX_HUMIDITY_RANGE) {
                                settings.update(|s| s.irrigation.max_humidity = v);
                            }
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="check-interval">"Intervalo de verificação"</label>
                        <select
                            id="check-interval"
                            class="input"
                            prop:value=move || settings.with(|s| s.irrigation.check_interval.to_string())
                            on:change=move |ev| {
                                if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                    settings.update(|s| s.irrigation.check_interval = minutes);
                                }
                            }
                        >
                            {interval_options}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="irrigation-duration">"Duração da irrigação (segundos)"</label>
                        <input
                            id="irrigation-duration"
                            type="number"
                            class="input"
                            min=DURATION_RANGE.0
                            max=DURATION_RANGE.1
                            prop:value=move || settings.with(|s| s.irrigation.irrigation_duration.to_string())
                            on:change=move |ev| {
                                if let Some(v) = parse_clamped(&event_target_value(&ev), DURATION_RANGE) {
                                    settings.update(|s| s.irrigation.irrigation_duration = v);
                                }
                            }
                        />
                    </div>
                </div>
            </section>

            <section class="card settings-section">
                <h3>"Notificações"</h3>
                <ToggleRow
                    label="Email"
                    description="Receber alertas por email"
                    checked=Signal::derive(move || settings.with(|s| s.notifications.email))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.notifications.email = on))
                />
                <ToggleRow
                    label="Notificações push"
                    description="Alertas no navegador e no celular"
                    checked=Signal::derive(move || settings.with(|s| s.notifications.push))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.notifications.push = on))
                />
                <ToggleRow
                    label="Umidade baixa"
                    description="Avisar quando o solo estiver seco"
                    checked=Signal::derive(move || settings.with(|s| s.notifications.low_humidity))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.notifications.low_humidity = on))
                />
                <ToggleRow
                    label="Erros do sistema"
                    description="Falhas de sensor ou da bomba"
                    checked=Signal::derive(move || settings.with(|s| s.notifications.system_errors))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.notifications.system_errors = on))
                />
                <ToggleRow
                    label="Relatório semanal"
                    description="Resumo de consumo de água e energia"
                    checked=Signal::derive(move || settings.with(|s| s.notifications.weekly_report))
                    on_toggle=Callback::new(move |on: bool| settings.update(|s| s.notifications.weekly_report = on))
                />
            </section>

            <section class="card settings-section">
                <h3>"Sistema"</h3>
                <div class="form-row">
                    <SelectRow
                        id="timezone"
                        label="Fuso horário"
                        options=TIMEZONES
                        value=Signal::derive(move || settings.with(|s| s.system.timezone.clone()))
                        on_select=Callback::new(move |v: String| settings.update(|s| s.system.timezone = v))
                    />
                    <SelectRow
                        id="language"
                        label="Idioma"
                        options=LANGUAGES
                        value=Signal::derive(move || settings.with(|s| s.system.language.clone()))
                        on_select=Callback::new(move |v: String| settings.update(|s| s.system.language = v))
                    />
                    <SelectRow
                        id="units"
                        label="Unidades"
                        options=UNITS
                        value=Signal::derive(move || settings.with(|s| s.system.units.clone()))
                        on_select=Callback::new(move |v: String| settings.update(|s| s.system.units = v))
                    />
                </div>
            </section>

            <div class="page-actions">
                <button class="btn btn-secondary" on:click=restore_defaults>"Restaurar padrões"</button>
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "Salvando..." } else { "Salvar configurações" }}
                </button>
            </div>
        </div>
    }
}
