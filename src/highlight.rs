//! Hover/active highlight state for one diagram instance.
//!
//! Two things can drive the detail panel: the field the pointer is over, and
//! the field the live composition classifies into. Hover wins while present;
//! otherwise the live classification shows; otherwise the panel is empty.
//! The resolution is modeled as one explicit state machine rather than a
//! pair of booleans, so impossible combinations cannot be represented.

use crate::classify::classify;
use crate::composition::Composition;
use crate::taxonomy::FieldId;
use serde::Serialize;
use tracing::debug;

/// The three highlight states of a diagram instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum HighlightState {
    /// No hover and nothing to classify (empty composition).
    Idle,
    /// No hover; the panel shows the live classification.
    Classified { live: FieldId },
    /// Pointer over a field or legend entry; the panel shows the hovered
    /// field regardless of the live classification underneath.
    Hovering {
        hovered: FieldId,
        live: Option<FieldId>,
    },
}

/// Per-instance tracker owning the highlight state. Not shared across
/// diagram instances.
#[derive(Debug)]
pub struct HighlightTracker {
    state: HighlightState,
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self {
            state: HighlightState::Idle,
        }
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    /// Field currently driving the detail panel, if any.
    pub fn displayed(&self) -> Option<FieldId> {
        match self.state {
            HighlightState::Idle => None,
            HighlightState::Classified { live } => Some(live),
            HighlightState::Hovering { hovered, .. } => Some(hovered),
        }
    }

    /// Live classification independent of hover, if any.
    pub fn live(&self) -> Option<FieldId> {
        match self.state {
            HighlightState::Idle => None,
            HighlightState::Classified { live } => Some(live),
            HighlightState::Hovering { live, .. } => live,
        }
    }

    /// Re-evaluate the live classification for a new composition. An active
    /// hover is kept; only the classification underneath it updates.
    pub fn set_composition(&mut self, composition: &Composition) {
        let live = classify(composition);
        debug!(?live, "composition updated");
        self.state = match self.state {
            HighlightState::Hovering { hovered, .. } => HighlightState::Hovering { hovered, live },
            _ => match live {
                Some(live) => HighlightState::Classified { live },
                None => HighlightState::Idle,
            },
        };
    }

    /// Pointer entered a field polygon or legend entry.
    pub fn pointer_enter(&mut self, field: FieldId) {
        debug!(%field, "pointer enter");
        self.state = HighlightState::Hovering {
            hovered: field,
            live: self.live(),
        };
    }

    /// Pointer left; revert to the live classification or the idle state.
    pub fn pointer_leave(&mut self) {
        debug!("pointer leave");
        self.state = match self.live() {
            Some(live) => HighlightState::Classified { live },
            None => HighlightState::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = HighlightTracker::new();
        assert_eq!(tracker.state(), HighlightState::Idle);
        assert_eq!(tracker.displayed(), None);
    }

    #[test]
    fn test_composition_drives_classified_state() {
        let mut tracker = HighlightTracker::new();
        tracker.set_composition(&Composition::new(100.0, 0.0, 0.0));
        assert_eq!(tracker.displayed(), Some(FieldId::CratonInterior));

        tracker.set_composition(&Composition::new(0.0, 0.0, 0.0));
        assert_eq!(tracker.state(), HighlightState::Idle);
    }

    #[test]
    fn test_hover_takes_precedence_and_reverts() {
        let mut tracker = HighlightTracker::new();
        tracker.set_composition(&Composition::new(100.0, 0.0, 0.0));

        tracker.pointer_enter(FieldId::TransitionalArc);
        assert_eq!(tracker.displayed(), Some(FieldId::TransitionalArc));

        tracker.pointer_leave();
        assert_eq!(tracker.displayed(), Some(FieldId::CratonInterior));
    }

    #[test]
    fn test_hover_over_empty_composition_reverts_to_idle() {
        let mut tracker = HighlightTracker::new();
        tracker.pointer_enter(FieldId::BasementUplift);
        assert_eq!(tracker.displayed(), Some(FieldId::BasementUplift));

        tracker.pointer_leave();
        assert_eq!(tracker.state(), HighlightState::Idle);
    }

    #[test]
    fn test_composition_update_does_not_clear_hover() {
        let mut tracker = HighlightTracker::new();
        tracker.pointer_enter(FieldId::RecycledOrogen);
        tracker.set_composition(&Composition::new(5.0, 10.0, 85.0));

        // Still hovering, but the live slot underneath has updated.
        assert_eq!(tracker.displayed(), Some(FieldId::RecycledOrogen));
        assert_eq!(tracker.live(), Some(FieldId::UndissectedArc));

        tracker.pointer_leave();
        assert_eq!(tracker.displayed(), Some(FieldId::UndissectedArc));
    }
}
