use regex::Regex;
use std::sync::LazyLock;

// An emoji-presentation pictograph (or a text-default one forced to emoji
// with U+FE0F) plus modifiers and ZWJ continuations, a regional indicator
// (flag halves), or a keycap sequence. Text-default symbols such as (c), (r)
// and TM stay unless U+FE0F follows them.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:\p{Emoji_Presentation}|\p{Extended_Pictographic}\x{FE0F})[\p{Emoji_Modifier}\x{FE0F}]*",
        r"(?:\x{200D}(?:\p{Emoji_Presentation}|\p{Extended_Pictographic}\x{FE0F}?)[\p{Emoji_Modifier}\x{FE0F}]*)*",
        r"|\p{Regional_Indicator}",
        r"|[0-9#*]\x{FE0F}?\x{20E3}",
        r"|\p{Emoji_Modifier}|\x{FE0F}",
    ))
    .expect("static regex")
});

/// Remove emoji code points. Nothing else in `input` is touched.
#[must_use]
pub fn strip_emoji(input: &str) -> String {
    EMOJI.replace_all(input, "").into_owned()
}
