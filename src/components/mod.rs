pub mod add_plant_modal;
pub mod app_shell;
pub mod footer;
pub mod header;
pub mod loading;
pub mod plant_card;
pub mod route_guard;
pub mod sidebar;
pub mod status_badge;
