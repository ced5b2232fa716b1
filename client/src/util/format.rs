//! Display formatting for dates, money, names and post bodies.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{Options, Parser, html};
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

pub use crudview::column::{currency, locale_date};

const LONG_DATE: &[FormatItem<'static>] = format_description!("[month repr:long] [day padding:none], [year]");
const SHORT_DATETIME: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");

const WORDS_PER_MINUTE: usize = 200;

/// `January 5, 2024`.
#[must_use]
pub fn long_date(d: OffsetDateTime) -> String {
    d.format(LONG_DATE).unwrap_or_default()
}

/// `Jan 5, 2024, 09:30 AM`, used on comments.
#[must_use]
pub fn short_datetime(d: OffsetDateTime) -> String {
    d.format(SHORT_DATETIME).unwrap_or_default()
}

/// Uppercased first letter of a name, for avatar fallbacks.
#[must_use]
pub fn initial(name: &str) -> String {
    name.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}

/// Cut `text` to at most `max` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Whole minutes to read `content`, at least one.
#[must_use]
pub fn reading_minutes(content: &str) -> usize {
    content.split_whitespace().count().div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Render a post body as HTML. Raw HTML in the source is escaped.
#[must_use]
pub fn markdown_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(source, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
