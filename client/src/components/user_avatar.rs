//! Round avatar with an initial fallback.

use leptos::prelude::*;

use crate::util::format::initial;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "avatar avatar--sm",
            Self::Md => "avatar",
            Self::Lg => "avatar avatar--lg",
        }
    }
}

#[component]
pub fn UserAvatar(
    #[prop(into)] name: String,
    #[prop(optional)] src: Option<String>,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => view! { <img class=size.class() src=src alt=name/> }.into_any(),
        None => view! { <span class=size.class() title=name.clone()>{initial(&name)}</span> }.into_any(),
    }
}
