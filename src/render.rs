//! Card stack layout and text rendering of a deck window.

use std::fmt;

use crate::profile::Profile;

const OFFSET_Y_PX: f32 = 18.0;
const SCALE_STEP: f32 = 0.05;
const OPACITY_STEP: f32 = 0.18;
const Z_INDEX_TOP: i32 = 100;

/// Deepest stack that still draws every card with positive scale and opacity.
pub const MAX_STACK_DEPTH: usize = 5;

/// Where a card sits in the visual stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Offset from the front card; 0 is the topmost card.
    pub position: usize,
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Only the front card accepts gestures.
    pub interactive: bool,
}

impl CardPlacement {
    #[must_use]
    pub fn at(position: usize) -> Self {
        let p = position as f32;
        Self {
            position,
            translate_y: p * OFFSET_Y_PX,
            scale: (1.0 - p * SCALE_STEP).max(0.0),
            opacity: (1.0 - p * OPACITY_STEP).max(0.0),
            z_index: Z_INDEX_TOP - i32::try_from(position).unwrap_or(Z_INDEX_TOP),
            interactive: position == 0,
        }
    }
}

/// Placements for a window of `occupancy` cards, back card first.
///
/// This is the draw order: later cards are painted over earlier ones.
#[must_use]
pub fn stack_layout(occupancy: usize) -> Vec<CardPlacement> {
    (0..occupancy).rev().map(CardPlacement::at).collect()
}

/// One card drawn as a few lines of text, indented by its depth in the stack.
pub struct CardView<'a> {
    pub profile: &'a Profile,
    pub placement: &'a CardPlacement,
}

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (profile, placement) = (self.profile, self.placement);
        let marker = if placement.interactive { ">" } else { " " };
        let indent = "  ".repeat(placement.position);
        writeln!(
            f,
            "{marker}{indent}[{}] {}, {}  ({})",
            placement.position,
            profile.name,
            profile.age,
            profile.pill()
        )?;
        writeln!(f, " {indent}    {}", profile.location_label())?;
        if !profile.hobby.is_empty() {
            writeln!(f, " {indent}    hobbies: {}", profile.hobby.join(", "))?;
        }
        let stats = profile.stats();
        writeln!(
            f,
            " {indent}    {} likes  {} posts  {} followers",
            stats.likes, stats.posts, stats.followers
        )?;
        writeln!(
            f,
            " {indent}    z={} scale={:.2} opacity={:.2} dy={}px",
            placement.z_index, placement.scale, placement.opacity, placement.translate_y
        )
    }
}

/// Render one card as a few lines of text.
#[must_use]
pub fn render_card(profile: &Profile, placement: &CardPlacement) -> String {
    CardView { profile, placement }.to_string()
}

/// Render a window given front-first.
///
/// Cards are printed back to front so the interactive card comes last,
/// right above the prompt.
#[must_use]
pub fn render_window(items: &[Profile]) -> String {
    let mut out = String::new();
    for placement in stack_layout(items.len()) {
        out.push_str(&render_card(&items[placement.position], &placement));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_card_is_on_top_and_interactive() {
        let front = CardPlacement::at(0);
        assert_eq!(front.z_index, 100);
        assert!(front.interactive);
        assert!((front.scale - 1.0).abs() < f32::EPSILON);
        assert!((front.opacity - 1.0).abs() < f32::EPSILON);

        let back = CardPlacement::at(2);
        assert_eq!(back.z_index, 98);
        assert!(!back.interactive);
        assert!((back.translate_y - 36.0).abs() < f32::EPSILON);
        assert!((back.scale - 0.9).abs() < 1e-6);
        assert!((back.opacity - 0.64).abs() < 1e-6);
    }

    #[test]
    fn layout_is_back_to_front() {
        let positions: Vec<usize> = stack_layout(3).iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![2, 1, 0]);
        assert!(stack_layout(0).is_empty());
    }

    #[test]
    fn deepest_allowed_card_is_still_visible() {
        let last = CardPlacement::at(MAX_STACK_DEPTH - 1);
        assert!(last.scale > 0.0);
        assert!(last.opacity > 0.0);
    }

    #[test]
    fn far_positions_clamp_instead_of_going_negative() {
        let far = CardPlacement::at(25);
        assert_eq!(far.scale, 0.0);
        assert_eq!(far.opacity, 0.0);
        assert_eq!(far.z_index, 75);
    }

    #[test]
    fn card_shows_its_placement() {
        let profile: Profile =
            serde_json::from_str(r#"{"id": 1, "name": "Ada", "age": 30, "hobby": ["chess"]}"#)
                .unwrap();
        let text = render_card(&profile, &CardPlacement::at(1));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("   [1] Ada, 30"));
        assert_eq!(lines[4], "       z=99 scale=0.95 opacity=0.82 dy=18px");
    }
}
