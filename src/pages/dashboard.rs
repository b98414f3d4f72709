use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::auth::use_auth;
use crate::components::status_badge::StatusBadge;
use crate::config::IRRIGATION_RUN_MS;
use crate::plants::{PlantStatus, SoilReading};
use crate::storage::use_app_store;

/// Placeholder telemetry shown until real sensors report in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemStats {
    pub soil_humidity: u8,
    pub temperature_c: u8,
    pub next_irrigation: &'static str,
    pub water_liters: f32,
    pub energy_kwh: f32,
    pub plant_count: usize,
}

pub const MOCK_STATS: SystemStats = SystemStats {
    soil_humidity: 48,
    temperature_c: 24,
    next_irrigation: "14:30",
    water_liters: 2.3,
    energy_kwh: 0.12,
    plant_count: 6,
};

/// Daily average humidity over the last week: (weekday, %).
pub const WEEKLY_HUMIDITY: &[(&str, u8)] = &[
    ("Seg", 45),
    ("Ter", 52),
    ("Qua", 48),
    ("Qui", 61),
    ("Sex", 55),
    ("Sáb", 58),
    ("Dom", 62),
];

pub fn trend_label(series: &[(&str, u8)]) -> &'static str {
    match (series.first(), series.last()) {
        (Some((_, first)), Some((_, last))) if last > first => "Tendência crescente",
        (Some((_, first)), Some((_, last))) if last < first => "Tendência decrescente",
        _ => "Estável",
    }
}

fn clock_now() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("pt-BR"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let settings = use_app_store().load_settings();

    let first_name = move || auth.first_name();

    let (now, set_now) = signal(clock_now());
    match set_interval_with_handle(
        move || {
            set_now.try_set(clock_now());
        },
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("Clock timer unavailable: {:?}", e),
    }

    let (irrigating, set_irrigating) = signal(false);
    let irrigate_now = move |_| {
        if irrigating.get_untracked() {
            return;
        }
        set_irrigating.set(true);
        tracing::info!("Manual irrigation started");
        spawn_local(async move {
            TimeoutFuture::new(IRRIGATION_RUN_MS).await;
            if set_irrigating.try_set(false).is_none() {
                tracing::info!("Manual irrigation finished");
            }
        });
    };

    let stats = MOCK_STATS;
    let reading = SoilReading::classify(stats.soil_humidity, &settings.irrigation);
    let duration = settings.irrigation.irrigation_duration;

    let bars = WEEKLY_HUMIDITY
        .iter()
        .map(|&(day, humidity)| {
            view! {
                <div class="chart-column" title=format!("{}: {}%", day, humidity)>
                    <div class="chart-bar" style=format!("height: {}%", humidity)></div>
                    <span class="chart-label">{day}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1>"Olá, " {first_name} "! \u{1f44b}"</h1>
                    <p class="page-description">
                        "Seu sistema está funcionando perfeitamente. Última atualização: "
                        {move || now.get()}
                    </p>
                </div>
            </div>

            <div class="stats-grid">
                <div class="card stat-card">
                    <div class="stat-card-header">
                        <span class="stat-title">"Umidade do Solo"</span>
                        <StatusBadge status=reading.as_status() detail=reading.label() />
                    </div>
                    <p class="stat-value">{format!("{}%", stats.soil_humidity)}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card-header">
                        <span class="stat-title">"Temperatura"</span>
                        <span class="chip">"Normal"</span>
                    </div>
                    <p class="stat-value">{format!("{}°C", stats.temperature_c)}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card-header">
                        <span class="stat-title">"Próxima Irrigação"</span>
                        <span class="chip">"Agendado"</span>
                    </div>
                    <p class="stat-value">{stats.next_irrigation}</p>
                </div>
                <div class="card stat-card">
                    <div class="stat-card-header">
                        <span class="stat-title">"Plantas"</span>
                        <StatusBadge status=PlantStatus::Healthy detail="Saudáveis" />
                    </div>
                    <p class="stat-value">{stats.plant_count}</p>
                </div>
            </div>

            <div class="actions-grid">
                <div class="card action-card">
                    <h3>"Irrigação Manual"</h3>
                    <p>
                        {format!(
                            "Force uma irrigação imediata se necessário. O sistema irá irrigar por {} segundos.",
                            duration,
                        )}
                    </p>
                    <button class="btn btn-primary" on:click=irrigate_now disabled=move || irrigating.get()>
                        {move || if irrigating.get() { "Irrigando..." } else { "Irrigar Agora" }}
                    </button>
                </div>
                <div class="card action-card">
                    <h3>"Consumo de Água"</h3>
                    <p class="stat-value">{format!("{:.1} L", stats.water_liters)}</p>
                    <p class="stat-delta">"\u{2193} 32% menos que ontem"</p>
                </div>
                <div class="card action-card">
                    <h3>"Consumo de Energia"</h3>
                    <p class="stat-value">{format!("{:.2} kWh", stats.energy_kwh)}</p>
                    <p class="stat-delta">"\u{2193} 15% menos que ontem"</p>
                </div>
            </div>

            <div class="card chart-card">
                <div class="chart-header">
                    <h3>"Umidade da Semana"</h3>
                    <span class="chip">{trend_label(WEEKLY_HUMIDITY)}</span>
                </div>
                <div class="chart">{bars}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::IrrigationSettings;

    #[test]
    fn test_mock_reading_is_ideal_with_defaults() {
        let reading = SoilReading::classify(MOCK_STATS.soil_humidity, &IrrigationSettings::default());
        assert_eq!(reading, SoilReading::Ideal);
        assert_eq!(reading.as_status(), PlantStatus::Healthy);
    }

    #[test]
    fn test_reading_follows_saved_thresholds() {
        let strict = IrrigationSettings {
            min_humidity: 50,
            ..IrrigationSettings::default()
        };
        assert_eq!(SoilReading::classify(MOCK_STATS.soil_humidity, &strict), SoilReading::Dry);
    }

    #[test]
    fn test_trend_label() {
        assert_eq!(trend_label(WEEKLY_HUMIDITY), "Tendência crescente");
        assert_eq!(trend_label(&[("Seg", 60), ("Ter", 50)]), "Tendência decrescente");
        assert_eq!(trend_label(&[]), "Estável");
    }
}
