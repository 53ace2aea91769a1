// Shared prompt-building utilities.
// Each flow that needs LLM calls defines its own templates alongside it.

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Values are inserted verbatim and never rescanned, so user input that
/// happens to contain `{location}` or similar stays untouched. Braces that do
/// not name a known placeholder are copied through as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
