use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_catalog_is_grid() {
    let state = UiState::default();
    assert_eq!(state.catalog_layout, CatalogLayout::Grid);
    assert!(!state.sidebar_collapsed);
}

// =============================================================
// CatalogLayout
// =============================================================

#[test]
fn catalog_layout_toggles_between_grid_and_list() {
    assert_eq!(CatalogLayout::Grid.toggled(), CatalogLayout::List);
    assert_eq!(CatalogLayout::List.toggled(), CatalogLayout::Grid);
}

#[test]
fn catalog_layout_css_classes() {
    assert_eq!(CatalogLayout::Grid.css_class(), "course-grid");
    assert_eq!(CatalogLayout::List.css_class(), "course-list");
}
