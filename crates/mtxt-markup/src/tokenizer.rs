//! Splits markup text into literal runs and tag tokens.

use crate::grammar::{payload_stop, PayloadStop, CLOSE_DELIM, OPEN_DELIM, OPEN_END};

/// One unit of tokenized markup, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of literal text between tags.
    Text(&'a str),
    /// An opening tag. `tag` is the full tag text, `style` its payload.
    Open { tag: &'a str, style: &'a str },
    /// A closing tag.
    Close(&'a str),
}

impl<'a> Segment<'a> {
    /// The source text this segment was cut from.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Open { tag, .. } => tag,
            Segment::Close(tag) => tag,
        }
    }

    /// The style payload if this is an opening tag.
    pub fn style(&self) -> Option<&'a str> {
        match self {
            Segment::Open { style, .. } => Some(style),
            _ => None,
        }
    }
}

/// Single left-to-right scanner over markup text.
///
/// Tags are matched at the leftmost position where either an opening or the
/// closing tag fits; text before a tag and after the last tag is emitted as
/// [`Segment::Text`]. Empty input yields no segments.
///
/// Runs in time linear in the input: the payload scan of one opening
/// delimiter is reused by every later delimiter it still covers.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    pending: Option<(usize, Segment<'a>)>,
    /// Last payload scan: where it started and the stop it found.
    stop: Option<(usize, Option<PayloadStop>)>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            stop: None,
        }
    }

    /// The first payload stop at or after `from`.
    fn stop_after(&mut self, from: usize) -> Option<PayloadStop> {
        if let Some((searched, found)) = self.stop {
            if searched <= from {
                match found {
                    None => return None,
                    Some(stop) if stop.offset() >= from => return Some(stop),
                    Some(_) => {}
                }
            }
        }
        let found = payload_stop(&self.input[from..]).map(|stop| stop.shifted(from));
        self.stop = Some((from, found));
        found
    }

    /// Finds the next tag at or after `from`, returning its end offset.
    fn find_tag(&mut self, from: usize) -> Option<(usize, usize, Segment<'a>)> {
        let input = self.input;
        let mut search = from;
        while let Some(offset) = input[search..].find('[') {
            let start = search + offset;
            let rest = &input[start..];

            if rest.starts_with(OPEN_DELIM) {
                let payload = start + OPEN_DELIM.len();
                if let Some(PayloadStop::End(end)) = self.stop_after(payload) {
                    let tag_end = end + OPEN_END.len();
                    let tag = &input[start..tag_end];
                    let style = &input[payload..end];
                    return Some((start, tag_end, Segment::Open { tag, style }));
                }
            }
            if rest.starts_with(CLOSE_DELIM) {
                let tag = &rest[..CLOSE_DELIM.len()];
                return Some((start, start + CLOSE_DELIM.len(), Segment::Close(tag)));
            }

            search = start + 1;
        }
        None
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((end, segment)) = self.pending.take() {
            self.pos = end;
            return Some(segment);
        }

        if self.pos >= self.input.len() {
            return None;
        }

        match self.find_tag(self.pos) {
            Some((start, end, segment)) if start > self.pos => {
                // Literal text first, the tag on the following call
                let text = &self.input[self.pos..start];
                self.pos = start;
                self.pending = Some((end, segment));
                Some(Segment::Text(text))
            }
            Some((_, end, segment)) => {
                self.pos = end;
                Some(segment)
            }
            None => {
                let text = &self.input[self.pos..];
                self.pos = self.input.len();
                Some(Segment::Text(text))
            }
        }
    }
}

/// Tokenizes `input` into its ordered segments.
///
/// ```rust
/// use mtxt_markup::{tokenize, Segment};
///
/// let segments = tokenize("Hello [mtxt-style[[bold]]], world! [[/mtxt-style]]");
/// let raw: Vec<&str> = segments.iter().map(Segment::as_str).collect();
/// assert_eq!(
///     raw,
///     vec!["Hello ", "[mtxt-style[[bold]]]", ", world! ", "[[/mtxt-style]]"]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Segment<'_>> {
    Tokenizer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(Segment::as_str).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(tokenize("Hello, world!"), vec![Segment::Text("Hello, world!")]);
    }

    #[test]
    fn splits_text_and_tags() {
        assert_eq!(
            raw("Hello [mtxt-style[[bold]]], world! [[/mtxt-style]]"),
            vec!["Hello ", "[mtxt-style[[bold]]]", ", world! ", "[[/mtxt-style]]"]
        );
    }

    #[test]
    fn multiple_tags() {
        assert_eq!(
            raw("[mtxt-style[[red]]]Hello[[/mtxt-style]] [mtxt-style[[bold]]]World[[/mtxt-style]]"),
            vec![
                "[mtxt-style[[red]]]",
                "Hello",
                "[[/mtxt-style]]",
                " ",
                "[mtxt-style[[bold]]]",
                "World",
                "[[/mtxt-style]]",
            ]
        );
    }

    #[test]
    fn opening_segment_carries_style() {
        let segments = tokenize("[mtxt-style[[hex#fff]]]x[[/mtxt-style]]");
        assert_eq!(segments[0].style(), Some("hex#fff"));
        assert_eq!(segments[1].style(), None);
        assert!(matches!(segments[2], Segment::Close(_)));
    }

    #[test]
    fn stray_brackets_stay_literal() {
        assert_eq!(
            tokenize("array[0] and [mtxt-style[[ unterminated"),
            vec![Segment::Text("array[0] and [mtxt-style[[ unterminated")]
        );
    }

    #[test]
    fn broken_opening_does_not_hide_later_tag() {
        assert_eq!(
            raw("[mtxt-style[[a\nb]]][[/mtxt-style]]"),
            vec!["[mtxt-style[[a\nb]]]", "[[/mtxt-style]]"]
        );
    }

    #[test]
    fn every_line_terminator_breaks_an_opening() {
        for terminator in ["\r", "\u{2028}", "\u{2029}"] {
            let input = format!("[mtxt-style[[a{terminator}b]]]x");
            assert_eq!(tokenize(&input), vec![Segment::Text(input.as_str())]);
        }
    }

    #[test]
    fn openings_share_one_terminator() {
        assert_eq!(
            raw("[mtxt-style[[a[mtxt-style[[b]]]x"),
            vec!["[mtxt-style[[a[mtxt-style[[b]]]", "x"]
        );
        assert_eq!(
            raw("[mtxt-style[[a\n[mtxt-style[[b]]]x"),
            vec!["[mtxt-style[[a\n", "[mtxt-style[[b]]]", "x"]
        );
    }

    #[test]
    fn unterminated_openings_scan_once() {
        let input = "[mtxt-style[[".repeat(100_000);
        let started = std::time::Instant::now();
        assert_eq!(tokenize(&input), vec![Segment::Text(input.as_str())]);
        assert!(
            started.elapsed() < std::time::Duration::from_secs(5),
            "took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn adjacent_tags_have_no_empty_text_between() {
        assert_eq!(
            raw("[mtxt-style[[red]]][[/mtxt-style]]"),
            vec!["[mtxt-style[[red]]]", "[[/mtxt-style]]"]
        );
    }

    #[test]
    fn multibyte_text_is_sliced_on_boundaries() {
        assert_eq!(
            raw("héllo [mtxt-style[[dim]]]wörld[[/mtxt-style]] ✓"),
            vec!["héllo ", "[mtxt-style[[dim]]]", "wörld", "[[/mtxt-style]]", " ✓"]
        );
    }
}
