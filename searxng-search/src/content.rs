//! Snippet cleanup: strips markup and collapses whitespace.
//!
//! Backend snippets are HTML fragments of uneven quality. Every complete
//! `<...>` tag is replaced by a single space, then any run of whitespace
//! becomes one space and the ends are trimmed. Entities are left as-is.

/// Turn a raw backend snippet into single-line plain text.
pub fn clean_snippet(raw: &str) -> String {
    normalise_whitespace(&strip_markup(raw))
}

/// Replace each complete `<...>` tag with a single space.
///
/// A `<` with no later `>` is not a tag and is kept verbatim along with
/// the rest of the input.
pub fn strip_markup(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('<') {
        let start = pos + offset;
        let Some(len) = input[start..].find('>') else {
            break;
        };
        result.push_str(&input[pos..start]);
        result.push(' ');
        pos = start + len + 1;
    }

    result.push_str(&input[pos..]);
    result
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn normalise_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_inline_tags_and_collapses() {
        assert_eq!(clean_snippet("a  <i>b</i>   c"), "a b c");
    }

    #[test]
    fn tag_becomes_space_not_nothing() {
        assert_eq!(clean_snippet("foo<br>bar"), "foo bar");
    }

    #[test]
    fn attributes_are_removed_with_tag() {
        assert_eq!(
            clean_snippet(r#"<a href="https://x.test" class="l">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_markup("1 < 2 and more"), "1 < 2 and more");
        assert_eq!(clean_snippet("x <b>y</b> < z"), "x y < z");
    }

    #[test]
    fn nested_open_brackets_end_at_first_close() {
        assert_eq!(strip_markup("a<b<c>d"), "a d");
    }

    #[test]
    fn newlines_and_tabs_collapse() {
        assert_eq!(clean_snippet("\n\tline one\r\n\n line   two \t"), "line one line two");
    }

    #[test]
    fn entities_are_not_decoded() {
        assert_eq!(clean_snippet("fish &amp; chips"), "fish &amp; chips");
    }

    #[test]
    fn empty_and_markup_only_inputs() {
        assert_eq!(clean_snippet(""), "");
        assert_eq!(clean_snippet("<p></p>"), "");
    }

    #[test]
    fn multibyte_text_preserved() {
        assert_eq!(clean_snippet("<b>café</b>  naïve — ok"), "café naïve — ok");
    }
}
