//! Hit area registry for clickable regions.
//!
//! Hit areas are registered during rendering and cleared at the start of each
//! render cycle. The last known mouse position survives the clear, so hover
//! highlighting stays correct across redraws.

use ratatui::layout::Rect;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle favorite status of the current-page item with this name
    ToggleFavorite(String),
    /// Remove this name from the favorites panel
    RemoveFavorite(String),
    NextPage,
    PrevPage,
    Reset,
    /// Submit the search box
    Search,
    /// Move focus into the search box
    FocusSearch,
    /// Close the alert dialog
    DismissAlert,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (later = on top)
    areas: Vec<HitArea>,
    /// Last mouse position seen
    mouse: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Record the mouse position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.mouse = Some((x, y));
        self.hovered_index() != before
    }

    /// Whether the mouse is currently over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        match self.mouse {
            Some((x, y)) => HitArea::new(rect, ClickAction::Reset).contains(x, y),
            None => false,
        }
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.mouse?;
        self.areas.iter().rposition(|area| area.contains(x, y))
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// All registered areas, in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}
