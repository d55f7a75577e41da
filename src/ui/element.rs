use glam::{Vec2, Vec3};

/// How much a hovered element's colour is scaled.
const HOVER_SHADE: f32 = 0.8;
/// How much a pressed element's colour is scaled.
const PRESS_SHADE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// An axis-aligned, flat-coloured button in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct UiElement {
    pub colour: Vec3,
    /// Lower-left corner.
    pub position: Vec2,
    pub width: f32,
    pub height: f32,

    interaction: Interaction,
    clicked: bool,
}

impl UiElement {
    #[must_use]
    pub fn new(colour: Vec3, position: Vec2, width: f32, height: f32) -> Self {
        Self {
            colour,
            position,
            width,
            height,
            interaction: Interaction::Idle,
            clicked: false,
        }
    }

    /// Two counter-clockwise triangles covering the element.
    #[must_use]
    pub fn vertices(&self) -> [Vec2; 6] {
        let lower_left = self.position;
        let upper_left = self.position + Vec2::new(0.0, self.height);
        let upper_right = self.position + Vec2::new(self.width, self.height);
        let lower_right = self.position + Vec2::new(self.width, 0.0);

        [
            upper_left,
            lower_left,
            upper_right,
            upper_right,
            lower_left,
            lower_right,
        ]
    }

    /// Edges inclusive.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + Vec2::new(self.width, self.height);
        point.cmpge(self.position).all() && point.cmple(max).all()
    }

    /// Recompute the interaction state from the cursor. A click is reported
    /// when the button is released over an element that was pressed.
    pub fn update_interaction(&mut self, cursor: Vec2, button_down: bool) -> Interaction {
        let next = match (self.contains(cursor), button_down) {
            (false, _) => Interaction::Idle,
            (true, false) => Interaction::Hovered,
            (true, true) => Interaction::Pressed,
        };
        self.clicked = self.interaction == Interaction::Pressed && next == Interaction::Hovered;
        self.interaction = next;
        next
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// `true` only for the update in which a click completed.
    #[must_use]
    pub fn was_clicked(&self) -> bool {
        self.clicked
    }

    /// Colour to draw with, shaded by the interaction state.
    #[must_use]
    pub fn display_colour(&self) -> Vec3 {
        match self.interaction {
            Interaction::Idle => self.colour,
            Interaction::Hovered => self.colour * HOVER_SHADE,
            Interaction::Pressed => self.colour * PRESS_SHADE,
        }
    }
}
