//! Template formatting: escaped newlines and color tags

use crate::color::COLOR_TAGS;

/// Formats a raw template string for terminal display.
///
/// Literal `\n` two-character sequences become real newlines, and each
/// recognized `{{COLOR_*}}` tag is replaced by its ANSI escape sequence
/// ([`RESET`](crate::color::RESET) for `{{COLOR_NONE}}`). Replacements are
/// literal, case-sensitive substring substitutions, one pass per tag.
///
/// `{variable}` placeholders and unrecognized tags are left untouched; the
/// caller substitutes its own variables after retrieval.
pub fn format_template(raw: &str) -> String {
    let mut output = raw.replace(r"\n", "\n");

    for (tag, escape) in COLOR_TAGS {
        output = output.replace(tag, escape);
    }

    output
}
