//! Pure text transforms over stylesheet content.
//!
//! ## Selector join (`fix_player_card_selector`)
//!
//! `.player-card .adv-player-card` is a descendant combinator ("adv card
//! inside a player card"); the markup puts both classes on one `<article>`,
//! so the intended selector is the compound `.player-card.adv-player-card`.
//!
//! ## Theme alias injection (`add_team_article_selectors`)
//!
//! Every rule header carrying a `body.theme-team-<code>` marker gets two
//! extra selectors so the team overrides also hit standalone article cards:
//! `article.team-<code>` and
//! `article.player-card.adv-player-card.team-<code>`.
//!
//! Both rewrites match on raw text. A header is a maximal brace-free run
//! ending at `{`, so matches never cross rule boundaries and adjacent theme
//! blocks are handled independently.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static DESCENDANT_CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\.player-card)\s+(\.adv-player-card\b)").expect("selector-join pattern is valid")
});

static THEME_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<header>[^{}]*\bbody\.theme-team-(?P<code>[a-z0-9]+)\b[^{}]*?)\{")
        .expect("theme-header pattern is valid")
});

/// Join the `.player-card .adv-player-card` descendant selector into the
/// compound form, everywhere it occurs. Already-joined selectors do not
/// match (the pattern requires whitespace between the tokens).
#[must_use]
pub fn fix_player_card_selector(css: &str) -> Cow<'_, str> {
    DESCENDANT_CARD_RE.replace_all(css, "${1}${2}")
}

/// Extend every `body.theme-team-<code>` rule header with the two article
/// alias selectors. A header that already contains either alias verbatim is
/// left byte-for-byte unchanged, so repeated runs never duplicate.
#[must_use]
pub fn add_team_article_selectors(css: &str) -> Cow<'_, str> {
    THEME_HEADER_RE.replace_all(css, |caps: &Captures<'_>| {
        let header = &caps["header"];
        let code = &caps["code"];

        let article = format!("article.team-{code}");
        let combined = format!("article.player-card.adv-player-card.team-{code}");

        if header.contains(&article) || header.contains(&combined) {
            tracing::debug!(code, "theme header already has article aliases, skipping");
            return caps[0].to_string();
        }

        tracing::debug!(code, "injecting article aliases into theme header");
        format!("{},\n{article},\n{combined} {{", header.trim_end())
    })
}

/// Full patch pipeline: selector join, then theme alias injection.
#[must_use]
pub fn patch_stylesheet(css: &str) -> String {
    let joined = fix_player_card_selector(css);
    add_team_article_selectors(&joined).into_owned()
}
