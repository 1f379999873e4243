//! Deck-wide layout assignment

use podium_core::Slide;
use tracing::trace;

use crate::classify::suggest_layout;

/// Assign a layout to every slide that does not already carry one.
///
/// Slides with an explicit, non-empty `layout` pass through untouched -
/// reloaded decks are never silently reclassified. Returns a new vector so
/// the source data stays safe for repeated or concurrent reads. Idempotent:
/// the output always has every slide assigned, so a second pass is a no-op.
pub fn assign_layouts(slides: &[Slide]) -> Vec<Slide> {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let mut assigned = slide.clone();
            if !assigned.has_layout() {
                let layout = suggest_layout(slide, index);
                trace!("assign_layouts: slide {index} -> {layout}");
                assigned.layout = Some(layout.id().to_string());
            }
            assigned
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fills_missing_layouts_by_position_and_content() {
        let slides = vec![
            Slide::new("Launch", "A new chapter"),
            Slide::new("Agenda", "• scope\n• timeline\n• risks"),
            Slide::new("Thank You", ""),
        ];

        let assigned = assign_layouts(&slides);
        let layouts: Vec<&str> = assigned
            .iter()
            .map(|s| s.layout.as_deref().unwrap())
            .collect();
        assert_eq!(layouts, vec!["cover-center", "title-bullets", "cover-center"]);
        // Input remains untouched.
        assert!(slides.iter().all(|s| s.layout.is_none()));
    }

    #[test]
    fn explicit_layouts_are_authoritative() {
        let mut slide = Slide::new("Agenda", "• scope");
        slide.layout = Some("big-quote".to_string());

        let assigned = assign_layouts(&[slide]);
        assert_eq!(assigned[0].layout.as_deref(), Some("big-quote"));
    }

    #[test]
    fn unknown_explicit_layouts_survive() {
        let mut slide = Slide::new("Agenda", "text");
        slide.layout = Some("hero-split".to_string());

        let assigned = assign_layouts(&[Slide::new("Cover", ""), slide]);
        assert_eq!(assigned[1].layout.as_deref(), Some("hero-split"));
    }

    #[test]
    fn empty_layout_strings_are_reassigned() {
        let mut slide = Slide::new("Stats", "Short stat");
        slide.layout = Some(String::new());

        let assigned = assign_layouts(&[Slide::new("Cover", ""), slide]);
        assert_eq!(assigned[1].layout.as_deref(), Some("big-quote"));
    }

    #[test]
    fn assignment_is_idempotent() {
        let slides = vec![
            Slide::new("Launch", "A new chapter"),
            Slide::new("Roadmap", "A\nB\nC\nD"),
            Slide::new("Metric", "Short stat"),
        ];

        let once = assign_layouts(&slides);
        let twice = assign_layouts(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_deck_is_fine() {
        assert_eq!(assign_layouts(&[]), Vec::<Slide>::new());
    }
}
