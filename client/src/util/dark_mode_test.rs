use super::*;

#[test]
fn stored_values_parse_back() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn toggled_flips_and_icon_names_the_other_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_is_light_and_toggle_still_returns_next() {
    assert_eq!(load(), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}
