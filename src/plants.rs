//! Plant records, status classification and the list operations behind the
//! plants page.

use serde::{Deserialize, Serialize};

use crate::settings::IrrigationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantStatus {
    Healthy,
    NeedsWater,
    Overwatered,
}

impl PlantStatus {
    pub const ALL: [PlantStatus; 3] = [
        PlantStatus::Healthy,
        PlantStatus::NeedsWater,
        PlantStatus::Overwatered,
    ];

    /// Stable identifier, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            PlantStatus::Healthy => "healthy",
            PlantStatus::NeedsWater => "needs-water",
            PlantStatus::Overwatered => "overwatered",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn display(self) -> StatusDisplay {
        match self {
            PlantStatus::Healthy => StatusDisplay {
                label: "Saudável",
                plural_label: "Saudáveis",
                color: "green",
                icon: "\u{2713}",
            },
            PlantStatus::NeedsWater => StatusDisplay {
                label: "Precisa de água",
                plural_label: "Precisam de água",
                color: "red",
                icon: "\u{26a0}",
            },
            PlantStatus::Overwatered => StatusDisplay {
                label: "Muita água",
                plural_label: "Muita água",
                color: "blue",
                icon: "\u{1f4a7}",
            },
        }
    }
}

/// What a status looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub plural_label: &'static str,
    /// Color token; the stylesheet maps it to the actual palette.
    pub color: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub humidity: u8,
    pub last_irrigation: String,
    /// Entered by hand; not derived from `humidity`.
    pub status: PlantStatus,
    pub icon: String,
}

pub const PLANT_KINDS: &[&str] = &["Erva aromática", "Folhosa", "Fruto", "Raiz", "Flor"];

pub const NEVER_WATERED: &str = "Nunca";
const NEW_PLANT_ICON: &str = "\u{1f331}";

impl Plant {
    /// A freshly registered plant: healthy, never watered, with a simulated
    /// humidity reading in `[40, 80)` picked from `roll` (a number in `[0, 1)`).
    pub fn new_unwatered(id: impl Into<String>, name: &str, kind: &str, roll: f64) -> Self {
        Self {
            id: id.into(),
            name: name.trim().to_string(),
            kind: kind.to_string(),
            humidity: simulated_humidity(roll),
            last_irrigation: NEVER_WATERED.to_string(),
            status: PlantStatus::Healthy,
            icon: NEW_PLANT_ICON.to_string(),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.kind.to_lowercase().contains(needle)
    }
}

fn simulated_humidity(roll: f64) -> u8 {
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    (40.0 + (roll * 40.0).floor()).min(79.0) as u8
}

/// Bounds of the add-plant form's minimum humidity field.
pub const MIN_HUMIDITY_INPUT_RANGE: (u8, u8) = (20, 80);

/// The values the add-plant form collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlantForm {
    pub name: String,
    pub kind: String,
    pub min_humidity: u8,
}

impl Default for NewPlantForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: String::new(),
            min_humidity: 40,
        }
    }
}

impl NewPlantForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.kind.is_empty()
    }
}

/// Append a plant built from `form`. Incomplete forms are ignored and
/// `false` is returned.
pub fn add_plant(plants: &mut Vec<Plant>, form: &NewPlantForm, id: String, roll: f64) -> bool {
    if !form.is_complete() {
        return false;
    }
    plants.push(Plant::new_unwatered(id, &form.name, &form.kind, roll));
    true
}

/// Remove the plant with `id`, keeping the order of the rest.
pub fn remove_plant(plants: &mut Vec<Plant>, id: &str) -> Option<Plant> {
    let idx = plants.iter().position(|p| p.id == id)?;
    Some(plants.remove(idx))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PlantStatus),
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        PlantStatus::parse(raw).map_or(StatusFilter::All, StatusFilter::Only)
    }

    fn admits(self, status: PlantStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

pub fn filter_plants(plants: &[Plant], search: &str, filter: StatusFilter) -> Vec<Plant> {
    let needle = search.trim().to_lowercase();
    plants
        .iter()
        .filter(|p| p.matches_search(&needle) && filter.admits(p.status))
        .cloned()
        .collect()
}

/// Hint under the empty-list message: an active search or filter means
/// nothing matched, otherwise the list is simply empty.
pub fn empty_state_hint(search: &str, filter: StatusFilter) -> &'static str {
    if !search.trim().is_empty() || filter != StatusFilter::All {
        "Tente ajustar os filtros de busca"
    } else {
        "Adicione sua primeira planta para começar"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub healthy: usize,
    pub needs_water: usize,
    pub overwatered: usize,
}

impl StatusCounts {
    pub fn of(plants: &[Plant]) -> Self {
        plants.iter().fold(
            StatusCounts {
                total: plants.len(),
                ..Default::default()
            },
            |mut acc, p| {
                match p.status {
                    PlantStatus::Healthy => acc.healthy += 1,
                    PlantStatus::NeedsWater => acc.needs_water += 1,
                    PlantStatus::Overwatered => acc.overwatered += 1,
                }
                acc
            },
        )
    }

    pub fn get(&self, status: PlantStatus) -> usize {
        match status {
            PlantStatus::Healthy => self.healthy,
            PlantStatus::NeedsWater => self.needs_water,
            PlantStatus::Overwatered => self.overwatered,
        }
    }
}

/// Soil reading bands used by the dashboard gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilReading {
    Dry,
    Ideal,
    Wet,
}

impl SoilReading {
    /// Classify against the configured thresholds: below `min_humidity` is
    /// dry, above `max_humidity` is wet.
    pub fn classify(humidity: u8, thresholds: &IrrigationSettings) -> Self {
        if humidity < thresholds.min_humidity {
            SoilReading::Dry
        } else if humidity > thresholds.max_humidity {
            SoilReading::Wet
        } else {
            SoilReading::Ideal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoilReading::Dry => "Seco",
            SoilReading::Ideal => "Ideal",
            SoilReading::Wet => "Molhado",
        }
    }

    /// The plant status with the same color and icon.
    pub fn as_status(self) -> PlantStatus {
        match self {
            SoilReading::Dry => PlantStatus::NeedsWater,
            SoilReading::Ideal => PlantStatus::Healthy,
            SoilReading::Wet => PlantStatus::Overwatered,
        }
    }
}

fn seed(id: &str, name: &str, kind: &str, humidity: u8, last: &str, status: PlantStatus, icon: &str) -> Plant {
    Plant {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        humidity,
        last_irrigation: last.to_string(),
        status,
        icon: icon.to_string(),
    }
}

/// Placeholder records shown until real sensors are wired in.
pub fn sample_plants() -> Vec<Plant> {
    use PlantStatus::*;
    vec![
        seed("1", "Manjericão", "Erva aromática", 65, "2 horas atrás", Healthy, "\u{1f33f}"),
        seed("2", "Alface", "Folhosa", 32, "6 horas atrás", NeedsWater, "\u{1f96c}"),
        seed("3", "Tomate Cereja", "Fruto", 58, "3 horas atrás", Healthy, "\u{1f345}"),
        seed("4", "Salsa", "Erva aromática", 78, "1 hora atrás", Overwatered, "\u{1f331}"),
        seed("5", "Rúcula", "Folhosa", 52, "4 horas atrás", Healthy, "\u{1f957}"),
        seed("6", "Cebolinha", "Erva aromática", 45, "5 horas atrás", Healthy, "\u{1f9c5}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(plants: &[Plant]) -> Vec<&str> {
        plants.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_add_hortela() {
        let mut plants = sample_plants();
        let form = NewPlantForm {
            name: "Hortelã".to_string(),
            kind: "Erva aromática".to_string(),
            ..Default::default()
        };

        for roll in [0.0, 0.25, 0.5, 0.999_999] {
            let mut list = plants.clone();
            assert!(add_plant(&mut list, &form, "99".to_string(), roll));
            let added = list.last().unwrap();
            assert_eq!(added.name, "Hortelã");
            assert_eq!(added.kind, "Erva aromática");
            assert!((40..80).contains(&added.humidity), "humidity {}", added.humidity);
            assert_eq!(added.status, PlantStatus::Healthy);
            assert_eq!(added.last_irrigation, "Nunca");
        }

        assert!(add_plant(&mut plants, &form, "100".to_string(), 1.0));
        assert_eq!(plants.last().unwrap().humidity, 79);
    }

    #[test]
    fn test_incomplete_form_adds_nothing() {
        let mut plants = sample_plants();
        let no_kind = NewPlantForm {
            name: "Hortelã".to_string(),
            ..Default::default()
        };
        let blank_name = NewPlantForm {
            name: "   ".to_string(),
            kind: "Fruto".to_string(),
            ..Default::default()
        };
        assert!(!add_plant(&mut plants, &no_kind, "x".to_string(), 0.5));
        assert!(!add_plant(&mut plants, &blank_name, "y".to_string(), 0.5));
        assert_eq!(plants.len(), 6);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut plants = sample_plants();
        let removed = remove_plant(&mut plants, "3").unwrap();
        assert_eq!(removed.name, "Tomate Cereja");
        assert_eq!(ids(&plants), vec!["1", "2", "4", "5", "6"]);

        assert!(remove_plant(&mut plants, "3").is_none());
        assert_eq!(plants.len(), 5);
    }

    #[test]
    fn test_search_matches_name_or_kind_case_insensitively() {
        let plants = sample_plants();
        assert_eq!(ids(&filter_plants(&plants, "ALF", StatusFilter::All)), vec!["2"]);
        assert_eq!(ids(&filter_plants(&plants, "folhosa", StatusFilter::All)), vec!["2", "5"]);
        assert_eq!(filter_plants(&plants, "", StatusFilter::All).len(), 6);
        assert!(filter_plants(&plants, "cacto", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_combines_with_search() {
        let plants = sample_plants();
        let healthy_herbs = filter_plants(
            &plants,
            "erva",
            StatusFilter::Only(PlantStatus::Healthy),
        );
        assert_eq!(ids(&healthy_herbs), vec!["1", "6"]);
        assert_eq!(StatusFilter::parse("overwatered"), StatusFilter::Only(PlantStatus::Overwatered));
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }

    #[test]
    fn test_empty_state_hint_distinguishes_no_match() {
        assert_eq!(empty_state_hint("", StatusFilter::All), "Adicione sua primeira planta para começar");
        assert_eq!(empty_state_hint("cacto", StatusFilter::All), "Tente ajustar os filtros de busca");
        assert_eq!(
            empty_state_hint("  ", StatusFilter::Only(PlantStatus::Overwatered)),
            "Tente ajustar os filtros de busca"
        );
    }

    #[test]
    fn test_status_counts() {
        let counts = StatusCounts::of(&sample_plants());
        assert_eq!(counts.total, 6);
        assert_eq!(counts.healthy, 4);
        assert_eq!(counts.needs_water, 1);
        assert_eq!(counts.overwatered, 1);
        assert_eq!(counts.get(PlantStatus::NeedsWater), 1);
    }

    #[test]
    fn test_status_display_is_fixed_per_status() {
        let healthy = PlantStatus::Healthy.display();
        assert_eq!(healthy.label, "Saudável");
        assert_eq!(healthy.color, "green");
        assert_eq!(PlantStatus::NeedsWater.display().color, "red");
        assert_eq!(PlantStatus::Overwatered.display().label, "Muita água");
    }

    #[test]
    fn test_status_is_not_derived_from_humidity() {
        let plants = sample_plants();
        let salsa = plants.iter().find(|p| p.name == "Salsa").unwrap();
        assert_eq!(salsa.status, PlantStatus::Overwatered);

        let mut edited = salsa.clone();
        edited.humidity = 50;
        assert_eq!(edited.status, PlantStatus::Overwatered);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&PlantStatus::NeedsWater).unwrap(), "\"needs-water\"");
        assert_eq!(PlantStatus::parse("needs-water"), Some(PlantStatus::NeedsWater));
    }

    #[test]
    fn test_soil_reading_uses_thresholds() {
        let defaults = IrrigationSettings::default();
        assert_eq!(SoilReading::classify(39, &defaults), SoilReading::Dry);
        assert_eq!(SoilReading::classify(40, &defaults), SoilReading::Ideal);
        assert_eq!(SoilReading::classify(70, &defaults), SoilReading::Ideal);
        assert_eq!(SoilReading::classify(71, &defaults), SoilReading::Wet);

        let tight = IrrigationSettings {
            min_humidity: 50,
            max_humidity: 60,
            ..Default::default()
        };
        assert_eq!(SoilReading::classify(48, &tight), SoilReading::Dry);
        assert_eq!(SoilReading::classify(48, &tight).label(), "Seco");
    }
}
