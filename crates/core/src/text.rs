//! Small string-formatting helpers.

/// Formats a string to title case.
///
/// Each whitespace-delimited token has its first character upper-cased and
/// the remainder lower-cased. Whitespace is preserved verbatim. Words
/// attached to punctuation are not treated specially, and casing uses the
/// platform's default Unicode rules.
///
/// ## Examples
///
/// ```
/// use recipe_roulette_core::text::to_title_case;
///
/// assert_eq!(to_title_case("hello world"), "Hello World");
/// assert_eq!(to_title_case("MIDDLE eastern"), "Middle Eastern");
/// assert_eq!(to_title_case(""), "");
/// ```
#[must_use]
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
