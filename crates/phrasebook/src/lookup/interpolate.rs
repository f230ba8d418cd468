//! Placeholder substitution.

use crate::types::{Context, ContextWrapper};

/// Substitute context values into a message.
///
/// Each renderable context entry becomes a token (the key wrapped by
/// `wrapper`) mapped to its rendered value. The message is scanned once from
/// left to right; at each position the longest matching token is replaced and
/// scanning resumes after it. Substituted text is never rescanned, and tokens
/// with no renderable entry stay as written.
///
/// # Example
///
/// ```
/// use phrasebook::{ContextWrapper, context, interpolate};
///
/// let wrapper = ContextWrapper::default();
/// let ctx = context! { "x" => "%y%", "y" => "Z" };
/// assert_eq!(interpolate("%x% and %y%", &ctx, &wrapper), "%y% and Z");
/// ```
pub fn interpolate(message: &str, context: &Context, wrapper: &ContextWrapper) -> String {
    let mut replacements: Vec<(String, String)> = context
        .iter()
        .filter_map(|(key, value)| Some((wrapper.token(key), value.render()?)))
        .filter(|(token, _)| !token.is_empty())
        .collect();
    if replacements.is_empty() {
        return message.to_string();
    }
    // Longest first so that a token which prefixes another never shadows it.
    replacements.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    // Candidates per leading byte, each bucket still longest first.
    let mut by_first_byte: Vec<Vec<&(String, String)>> = vec![Vec::new(); 256];
    for replacement in &replacements {
        by_first_byte[usize::from(replacement.0.as_bytes()[0])].push(replacement);
    }

    let mut result = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(&first) = rest.as_bytes().first() {
        if let Some((token, value)) = by_first_byte[usize::from(first)]
            .iter()
            .find(|(token, _)| rest.starts_with(token.as_str()))
        {
            result.push_str(value);
            rest = &rest[token.len()..];
            continue;
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        result.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    result
}
