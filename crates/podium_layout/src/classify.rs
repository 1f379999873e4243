//! Heuristic slide classification
//!
//! [`suggest_layout`] is a pure, total function over a slide's title,
//! content, and position. Rules are evaluated as an ordered cascade and the
//! first match wins; there is no fallthrough re-evaluation. The cascade is a
//! compatibility surface: decks classified by earlier versions are reloaded
//! against the same rules, so rule order and thresholds must not drift.

use podium_core::Slide;

use crate::variant::Layout;

/// Content shorter than this (in characters) classifies as a big quote when
/// no earlier rule fires - including short plain paragraphs and empty
/// content at a non-zero index. Intentional; see rule 4 below.
const QUOTE_LENGTH_LIMIT: usize = 150;

/// More than this many non-empty lines classifies as a bullet list.
const BULLET_LINE_LIMIT: usize = 3;

/// Suggest a layout for one slide.
///
/// The cascade, first match wins:
/// 1. the first slide is always a cover
/// 2. conclusion/thank-you titles are covers
/// 3. bullet markers (`•`/`-`) or more than 3 non-empty lines are a bullet
///    list
/// 4. a double quote in the content, "quote" in the title, or content under
///    150 characters is a big quote
/// 5. a `||` or blank-line separator yielding exactly two non-empty parts is
///    a two-column split
/// 6. everything else is content-focus
///
/// Never panics; empty title/content are legitimate inputs.
pub fn suggest_layout(slide: &Slide, index: usize) -> Layout {
    if index == 0 {
        return Layout::CoverCenter;
    }

    let title = slide.title.to_lowercase();
    let content = slide.content.as_str();

    if title.contains("conclusion") || title.contains("thank") {
        return Layout::CoverCenter;
    }

    if content.contains('•')
        || content.contains('-')
        || non_empty_lines(content) > BULLET_LINE_LIMIT
    {
        return Layout::TitleBullets;
    }

    let content_lower = content.to_lowercase();
    if content_lower.contains('"')
        || title.contains("quote")
        || content.chars().count() < QUOTE_LENGTH_LIMIT
    {
        return Layout::BigQuote;
    }

    if (content.contains("||") || content.contains("\n\n")) && column_parts(content).len() == 2 {
        return Layout::TwoColumns;
    }

    Layout::ContentFocus
}

fn non_empty_lines(content: &str) -> usize {
    content.split('\n').filter(|l| !l.trim().is_empty()).count()
}

/// Split content into discrete bullet items: on newlines, `•`, or `-`,
/// trimmed, empties dropped.
pub(crate) fn split_bullets(content: &str) -> Vec<&str> {
    content
        .split(['\n', '•', '-'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Column parts as the classifier counts them: split on blank lines or
/// `||`-runs, trimmed, empties dropped.
pub(crate) fn column_parts(content: &str) -> Vec<&str> {
    raw_column_split(content)
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Column parts as the renderer consumes them: raw split on blank lines or
/// runs of two-plus pipes, untrimmed, empties kept.
pub(crate) fn raw_column_split(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .flat_map(split_double_pipes)
        .collect()
}

/// Split on every run of two or more `|` characters.
fn split_double_pipes(part: &str) -> Vec<&str> {
    let bytes = part.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'|' && i + 1 < bytes.len() && bytes[i + 1] == b'|' {
            out.push(&part[start..i]);
            while i < bytes.len() && bytes[i] == b'|' {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }
    out.push(&part[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slide(title: &str, content: &str) -> Slide {
        Slide::new(title, content)
    }

    // Long enough to clear the big-quote length rule, free of every earlier
    // trigger (no bullets, quotes, or extra lines).
    const TWO_PART: &str = "Our managed platform includes automatic scaling, zero downtime \
         deploys, and a generous free tier for early stage teams.\n\nThe self hosted option \
         trades that convenience for full control over data residency and network topology.";

    #[test]
    fn first_slide_is_always_a_cover() {
        assert_eq!(suggest_layout(&slide("Anything", "x\ny\nz\nw\nv"), 0), Layout::CoverCenter);
        assert_eq!(suggest_layout(&slide("", ""), 0), Layout::CoverCenter);
    }

    #[test]
    fn closing_titles_are_covers() {
        assert_eq!(suggest_layout(&slide("Thank You", "..."), 3), Layout::CoverCenter);
        assert_eq!(suggest_layout(&slide("In Conclusion", "wrap up"), 5), Layout::CoverCenter);
    }

    #[test]
    fn bullet_markers_and_line_counts_win_over_length() {
        assert_eq!(suggest_layout(&slide("Roadmap", "A\nB\nC\nD"), 2), Layout::TitleBullets);
        assert_eq!(suggest_layout(&slide("Points", "• one thing"), 1), Layout::TitleBullets);
        // A hyphen anywhere counts as a bullet marker, even in short text.
        assert_eq!(suggest_layout(&slide("Plan", "go-to-market"), 1), Layout::TitleBullets);
        // Blank lines do not count toward the line threshold.
        assert_eq!(suggest_layout(&slide("Sparse", "A\n\nB\n\nC"), 1), Layout::TitleBullets);
    }

    #[test]
    fn quotes_and_short_content_are_big_quotes() {
        assert_eq!(suggest_layout(&slide("Metric", "Short stat"), 2), Layout::BigQuote);
        assert_eq!(
            suggest_layout(&slide("Customer Quote", &"x".repeat(200)), 2),
            Layout::BigQuote
        );
        let quoted = format!("{} \"said no one\"", "y".repeat(200));
        assert_eq!(suggest_layout(&slide("Voices", &quoted), 2), Layout::BigQuote);
    }

    #[test]
    fn empty_content_at_nonzero_index_is_a_big_quote() {
        // Length 0 < 150 fires rule 4 before the default arm. Documented
        // cascade behavior; saved decks depend on it.
        assert_eq!(suggest_layout(&slide("Untitled", ""), 4), Layout::BigQuote);
    }

    #[test]
    fn two_part_long_content_splits_into_columns() {
        assert!(TWO_PART.chars().count() >= 150);
        assert_eq!(suggest_layout(&slide("Pros vs Cons", TWO_PART), 2), Layout::TwoColumns);

        let piped = TWO_PART.replace("\n\n", " || ");
        assert_eq!(suggest_layout(&slide("Pros vs Cons", &piped), 2), Layout::TwoColumns);
    }

    #[test]
    fn three_part_content_is_not_two_columns() {
        let three = format!("{TWO_PART}\n\nA third perspective that keeps the text long enough.");
        assert_eq!(suggest_layout(&slide("Angles", &three), 2), Layout::ContentFocus);
    }

    #[test]
    fn long_unstructured_content_defaults_to_content_focus() {
        let long = "lorem ipsum dolor sit amet ".repeat(10);
        assert_eq!(suggest_layout(&slide("Deep Dive", &long), 2), Layout::ContentFocus);
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        // Rule 3 (bullets) beats rule 4 (short content).
        assert_eq!(suggest_layout(&slide("List", "• a"), 1), Layout::TitleBullets);
        // Rule 4 (quote char) beats rule 5 (two columns).
        let quoted_columns = TWO_PART.replace("control", "\"control\"");
        assert_eq!(suggest_layout(&slide("Mix", &quoted_columns), 1), Layout::BigQuote);
    }

    #[test]
    fn column_splitting_handles_pipe_runs() {
        assert_eq!(column_parts("left || right"), vec!["left", "right"]);
        assert_eq!(column_parts("left||| right"), vec!["left", "right"]);
        assert_eq!(column_parts("a\n\nb\n\nc"), vec!["a", "b", "c"]);
        assert_eq!(column_parts("only"), vec!["only"]);
        assert_eq!(column_parts("|| right"), vec!["right"]);
        // The renderer-facing split keeps raw (even empty) parts.
        assert_eq!(raw_column_split("|| right"), vec!["", " right"]);
    }

    #[test]
    fn bullet_splitting_trims_and_drops_empties() {
        assert_eq!(split_bullets("• one\n• two"), vec!["one", "two"]);
        assert_eq!(split_bullets("a - b - c"), vec!["a", "b", "c"]);
        assert_eq!(split_bullets("\n\n"), Vec::<&str>::new());
    }
}
