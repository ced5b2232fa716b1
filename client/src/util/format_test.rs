use super::*;

use time::macros::datetime;

#[test]
fn long_date_spells_month() {
    assert_eq!(long_date(datetime!(2024-01-05 10:00 UTC)), "January 5, 2024");
}

#[test]
fn short_datetime_uses_twelve_hour_clock() {
    assert_eq!(short_datetime(datetime!(2024-03-15 14:07 UTC)), "Mar 15, 2024, 02:07 PM");
}

#[test]
fn initial_uppercases_first_char() {
    assert_eq!(initial("jane smith"), "J");
    assert_eq!(initial("  "), "?");
}

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate("short", 10), "short");
}

#[test]
fn truncate_cuts_on_char_boundary() {
    assert_eq!(truncate("héllo wörld", 6), "héllo...");
}

#[test]
fn reading_minutes_rounds_up() {
    assert_eq!(reading_minutes(""), 1);
    assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
}

#[test]
fn markdown_renders_headings_and_escapes_html() {
    let out = markdown_html("# Intro\n\n<script>x</script>");
    assert!(out.contains("<h1>Intro</h1>"));
    assert!(!out.contains("<script>"));
}

#[test]
fn currency_is_reexported() {
    assert_eq!(currency(89.99), "$89.99");
}
