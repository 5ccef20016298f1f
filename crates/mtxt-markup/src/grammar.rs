//! The literal syntax of mtxt style tags.
//!
//! An opening tag embeds one style encoding verbatim between a fixed prefix
//! and suffix; the closing tag is a fixed token with no payload:
//!
//! ```text
//! [mtxt-style[[bold]]]some text[[/mtxt-style]]
//! ```
//!
//! There is no escaping. Literal text must not contain either delimiter
//! sequence, and a style encoding must not contain [`OPEN_END`].

/// Prefix of every opening tag.
pub const OPEN_DELIM: &str = "[mtxt-style[[";

/// Suffix closing the style payload of an opening tag.
pub const OPEN_END: &str = "]]]";

/// The closing tag. Independent of the style it closes.
pub const CLOSE_DELIM: &str = "[[/mtxt-style]]";

/// Returns the opening tag text for `style`.
///
/// # Example
///
/// ```rust
/// use mtxt_markup::opening_tag;
///
/// assert_eq!(opening_tag("red"), "[mtxt-style[[red]]]");
/// ```
pub fn opening_tag(style: &str) -> String {
    let mut tag = String::with_capacity(OPEN_DELIM.len() + style.len() + OPEN_END.len());
    tag.push_str(OPEN_DELIM);
    tag.push_str(style);
    tag.push_str(OPEN_END);
    tag
}

/// Returns the closing tag text.
pub fn closing_tag() -> &'static str {
    CLOSE_DELIM
}

/// Recognizes `segment` as exactly one opening tag and returns its style payload.
///
/// The payload runs up to the first [`OPEN_END`] and may not span a line break;
/// anything else in the segment means it is not an opening tag.
///
/// ```rust
/// use mtxt_markup::match_opening_tag;
///
/// assert_eq!(match_opening_tag("[mtxt-style[[red bold]]]"), Some("red bold"));
/// assert_eq!(match_opening_tag("Hello, world!"), None);
/// ```
pub fn match_opening_tag(segment: &str) -> Option<&str> {
    let (payload, len) = scan_opening(segment)?;
    (len == segment.len()).then_some(payload)
}

/// Recognizes `segment` as exactly the closing tag.
pub fn match_closing_tag(segment: &str) -> bool {
    segment == CLOSE_DELIM
}

/// Wraps `text` with one tag pair per style, applied in sequence.
///
/// Each successive style wraps the already-wrapped result, so the first style
/// ends up innermost and the last one outermost. Styles are trimmed but never
/// merged or deduplicated.
///
/// ```rust
/// use mtxt_markup::wrap_with_styles;
///
/// assert_eq!(
///     wrap_with_styles(&["red", "bold"], "Hello, World!"),
///     "[mtxt-style[[bold]]][mtxt-style[[red]]]Hello, World![[/mtxt-style]][[/mtxt-style]]"
/// );
/// ```
pub fn wrap_with_styles<S: AsRef<str>>(styles: &[S], text: &str) -> String {
    styles
        .iter()
        .fold(text.to_string(), |inner, style| wrap(style.as_ref().trim(), &inner))
}

/// Wraps `text` in a single tag pair.
pub fn wrap(style: &str, text: &str) -> String {
    let mut out = opening_tag(style);
    out.push_str(text);
    out.push_str(CLOSE_DELIM);
    out
}

/// Where a scan over a style payload ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadStop {
    /// [`OPEN_END`] starts at this offset.
    End(usize),
    /// A line terminator sits at this offset; no payload can reach past it.
    LineBreak(usize),
}

impl PayloadStop {
    pub(crate) fn offset(self) -> usize {
        match self {
            PayloadStop::End(offset) | PayloadStop::LineBreak(offset) => offset,
        }
    }

    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            PayloadStop::End(offset) => PayloadStop::End(offset + by),
            PayloadStop::LineBreak(offset) => PayloadStop::LineBreak(offset + by),
        }
    }
}

/// Line terminators a payload may not contain.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Finds the first [`OPEN_END`] or line terminator in `input`.
pub(crate) fn payload_stop(input: &str) -> Option<PayloadStop> {
    input.char_indices().find_map(|(offset, c)| {
        if is_line_terminator(c) {
            Some(PayloadStop::LineBreak(offset))
        } else if c == ']' && input[offset..].starts_with(OPEN_END) {
            Some(PayloadStop::End(offset))
        } else {
            None
        }
    })
}

/// Tries to read an opening tag at the very start of `input`.
///
/// Returns the style payload and the byte length of the whole tag.
pub(crate) fn scan_opening(input: &str) -> Option<(&str, usize)> {
    let rest = input.strip_prefix(OPEN_DELIM)?;
    match payload_stop(rest)? {
        PayloadStop::End(end) => Some((&rest[..end], OPEN_DELIM.len() + end + OPEN_END.len())),
        PayloadStop::LineBreak(_) => None,
    }
}
