//! Replacement of the content between two literal delimiters.

use crate::error::MarkerError;

/// Opens the generated region of a template
pub const START_MARKER: &str = "/*MARKER*/";
/// Closes the generated region of a template
pub const END_MARKER: &str = "/*/MARKER*/";

/// Replaces everything strictly between the marker pair with `body`
///
/// The template must contain each marker exactly once, start before end.
/// Bytes outside the region, markers included, are copied unchanged. The
/// region becomes a newline, the body, a newline and `closing_indent`, which
/// keeps the end marker on its own indented line.
///
/// # Examples
///
/// ```
/// use routegen::emit::splice::splice;
///
/// let out = splice("a /*MARKER*/ old /*/MARKER*/ b", "new", "").unwrap();
/// assert_eq!(out, "a /*MARKER*/\nnew\n/*/MARKER*/ b");
/// ```
pub fn splice(template: &str, body: &str, closing_indent: &str) -> Result<String, MarkerError> {
    let (start, end) = locate(template)?;

    let head = &template[..start + START_MARKER.len()];
    let tail = &template[end..];

    let mut out = String::with_capacity(head.len() + body.len() + tail.len() + 2);
    out.push_str(head);
    out.push('\n');
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(closing_indent);
    out.push_str(tail);

    Ok(out)
}

/// Byte offsets of the start marker and the end marker
pub fn locate(template: &str) -> Result<(usize, usize), MarkerError> {
    let start = template
        .find(START_MARKER)
        .ok_or(MarkerError::MissingStart(START_MARKER))?;

    if template[start + START_MARKER.len()..].contains(START_MARKER) {
        return Err(MarkerError::Duplicate(START_MARKER));
    }

    let end = template[start..]
        .find(END_MARKER)
        .map(|offset| start + offset)
        .ok_or(MarkerError::MissingEnd(END_MARKER))?;

    if template.matches(END_MARKER).count() > 1 {
        return Err(MarkerError::Duplicate(END_MARKER));
    }

    Ok((start, end))
}

/// Whitespace preceding the start marker on its line
pub fn marker_indent(template: &str) -> &str {
    let Some(start) = template.find(START_MARKER) else {
        return "";
    };

    let line_start = template[..start].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &template[line_start..start];

    if prefix.chars().all(char::is_whitespace) {
        prefix
    } else {
        ""
    }
}
