/// Number of source bytes shown in an excerpt.
pub const EXCERPT_WIDTH: usize = 60;

const ELLIPSIS: &str = "...";

/// Moves `index` back to the nearest char boundary of `source`.
pub(crate) fn floor_char_boundary(source: &str, index: usize) -> usize {
    let mut index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Renders the part of `source` around a span, with the span underlined.
///
/// The excerpt shows up to [`EXCERPT_WIDTH`] bytes of the source, starting
/// half that width before `start`. An ellipsis marks each side where text was
/// cut off. Line breaks and tabs are shown as spaces so the marker line stays
/// aligned. The second line holds one `^` per character of the span, clamped
/// to the end of the excerpt.
///
/// Out-of-range positions are clamped, so any `start` and `length` are
/// accepted.
///
/// # Example
/// ```
/// use expressions::render_excerpt;
///
/// assert_eq!(render_excerpt("true && 1 > \"a\"", 8, 7), "true && 1 > \"a\"\n        ^^^^^^^");
/// ```
#[must_use]
pub fn render_excerpt(source: &str, start: usize, length: usize) -> String {
    let start = floor_char_boundary(source, start);
    let begin = floor_char_boundary(source, start.saturating_sub(EXCERPT_WIDTH / 2));
    let end = floor_char_boundary(source, begin + EXCERPT_WIDTH).max(start);
    let span_end = floor_char_boundary(source, start.saturating_add(length).min(end));

    let mut line = String::new();
    if begin > 0 {
        line.push_str(ELLIPSIS);
    }
    line.extend(source[begin..end].chars()
                                  .map(|c| if c.is_whitespace() { ' ' } else { c }));
    if end < source.len() {
        line.push_str(ELLIPSIS);
    }

    let column = (if begin > 0 { ELLIPSIS.len() } else { 0 }) + source[begin..start].chars().count();
    let width = source[start..span_end].chars().count();

    format!("{line}\n{}{}", " ".repeat(column), "^".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(rendered: &str) -> &str {
        rendered.lines().nth(1).unwrap_or("")
    }

    #[test]
    fn short_source_is_shown_whole() {
        let rendered = render_excerpt("(true && false", 0, 1);
        assert_eq!(rendered, "(true && false\n^");
    }

    #[test]
    fn long_source_is_cut_on_both_sides() {
        let source = "a".repeat(100);
        let rendered = render_excerpt(&source, 50, 3);
        let first = rendered.lines().next().unwrap();

        assert!(first.starts_with("..."));
        assert!(first.ends_with("..."));
        assert_eq!(first.len(), EXCERPT_WIDTH + 6);
        assert_eq!(marker(&rendered), format!("{}^^^", " ".repeat(33)));
    }

    #[test]
    fn cut_only_at_the_end() {
        let source = format!("1 > 2 && {}", "x".repeat(80));
        let rendered = render_excerpt(&source, 2, 1);
        let first = rendered.lines().next().unwrap();

        assert!(!first.starts_with("..."));
        assert!(first.ends_with("..."));
        assert_eq!(marker(&rendered), "  ^");
    }

    #[test]
    fn marker_is_clamped_to_excerpt() {
        let rendered = render_excerpt("1 > true", 4, 50);
        assert_eq!(marker(&rendered), "    ^^^^");

        let rendered = render_excerpt("abc", 10, 2);
        assert_eq!(rendered, "abc\n   ");
    }

    #[test]
    fn line_breaks_keep_alignment() {
        let rendered = render_excerpt("true\n&& 1", 8, 1);
        assert_eq!(rendered, "true && 1\n        ^");
    }

    #[test]
    fn multibyte_text_does_not_split_chars() {
        let source = "\"äöü\" > 1";
        let rendered = render_excerpt(source, 2, 2);
        assert!(rendered.contains("äöü"));

        for start in 0..=source.len() {
            for length in 0..4 {
                let rendered = render_excerpt(source, start, length);
                assert!(marker(&rendered).chars().filter(|&c| c == '^').count() <= length);
            }
        }
    }
}
