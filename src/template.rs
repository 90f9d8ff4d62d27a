//! Card template filling.
//!
//! The template is a plain HTML file carrying five placeholder tokens:
//! `{title}`, `{date}`, `{tags}`, `{word_count}`, `{read_time}`. Filling is
//! literal substring replacement — values go in verbatim, with no HTML
//! escaping. The template is authored alongside the blog's own styles and
//! only ever renders the author's frontmatter, so escaping would just
//! mangle intentional markup in the tags fragment.
//!
//! A template missing a placeholder is not validated against: that token
//! simply never gets substituted.

/// Values for the five template placeholders. All strings, all inserted
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardContext {
    pub title: String,
    pub date: String,
    pub tags_html: String,
    pub word_count: String,
    pub read_time: String,
}

/// Substitute every placeholder in `template` with its context value.
///
/// Tokens are distinct literals, so replacement order does not matter.
pub fn fill(template: &str, ctx: &CardContext) -> String {
    template
        .replace("{title}", &ctx.title)
        .replace("{date}", &ctx.date)
        .replace("{tags}", &ctx.tags_html)
        .replace("{word_count}", &ctx.word_count)
        .replace("{read_time}", &ctx.read_time)
}
