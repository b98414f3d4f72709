//! Scroll-spy for the landing page navigation.

use wasm_bindgen::JsCast;

/// Distance below the viewport top at which a section counts as reached.
pub const ACTIVE_OFFSET_PX: f64 = 100.0;
/// Past this offset the header switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

/// Section ids in page order.
pub const SECTION_IDS: &[&str] = &[
    "home",
    "about",
    "how-it-works",
    "app",
    "impact",
    "target",
    "results",
    "contact",
];

/// Header entries: (section id, label). A subset of [`SECTION_IDS`].
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Início"),
    ("about", "Sobre"),
    ("how-it-works", "Como Funciona"),
    ("app", "App Educativo"),
    ("impact", "Impacto"),
    ("contact", "Contato"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// The first section (in order) whose vertical span holds
/// `scroll_y + ACTIVE_OFFSET_PX`, or `previous` when none does.
pub fn active_section<'a>(sections: &'a [SectionBounds], scroll_y: f64, previous: &'a str) -> &'a str {
    let marker = scroll_y + ACTIVE_OFFSET_PX;
    sections
        .iter()
        .find(|s| s.contains(marker))
        .map(|s| s.id.as_str())
        .unwrap_or(previous)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

fn section_element(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Current bounds of every section present in the DOM. Missing elements are
/// skipped.
pub fn measure_sections(ids: &[&str]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            section_element(id).map(|el| {
                SectionBounds::new(*id, f64::from(el.offset_top()), f64::from(el.offset_height()))
            })
        })
        .collect()
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the section with `id` into view. Returns `false` when the
/// element does not exist.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = section_element(id) else {
        tracing::debug!("Section '{}' not found", id);
        return false;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("how-it-works", 1400.0, 900.0),
            SectionBounds::new("contact", 2300.0, 700.0),
        ]
    }

    #[test]
    fn test_marker_is_offset_by_100px() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, "home"), "home");
        // 699 + 100 = 799 is still inside home
        assert_eq!(active_section(&sections, 699.0, "home"), "home");
        // 700 + 100 = 800 is the first pixel of about
        assert_eq!(active_section(&sections, 700.0, "home"), "about");
        assert_eq!(active_section(&sections, 1350.0, "home"), "how-it-works");
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let sections = page();
        // marker at 3100 is past the last section
        assert_eq!(active_section(&sections, 3000.0, "contact"), "contact");
        assert_eq!(active_section(&[], 500.0, "about"), "about");
    }

    #[test]
    fn test_gap_between_sections_keeps_previous() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 500.0),
            SectionBounds::new("about", 700.0, 500.0),
        ];
        assert_eq!(active_section(&sections, 450.0, "home"), "home");
    }

    #[test]
    fn test_first_section_wins_on_overlap() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 500.0, 1000.0),
        ];
        assert_eq!(active_section(&sections, 600.0, "x"), "a");
    }

    #[test]
    fn test_result_is_configured_id_or_previous() {
        let sections = page();
        let mut previous = "home".to_string();
        for step in 0..400 {
            let y = f64::from(step) * 10.0 - 200.0;
            let active = active_section(&sections, y, &previous).to_string();
            assert!(
                sections.iter().any(|s| s.id == active) || active == previous,
                "unexpected id {} at y={}",
                active,
                y
            );
            previous = active;
        }
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let sections = vec![SectionBounds::new("empty", 100.0, 0.0)];
        assert_eq!(active_section(&sections, 0.0, "home"), "home");
    }

    #[test]
    fn test_scrolled_flag() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_nav_items_are_known_sections() {
        for (id, _) in NAV_ITEMS {
            assert!(SECTION_IDS.contains(id));
        }
    }
}
