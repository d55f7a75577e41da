use glam::Vec2;

use crate::errors::{LiftoffError, Result};
use crate::input::{Input, MouseButton};
use crate::ui::element::UiElement;

/// Elements that share one overlay pass and are hit-tested together.
#[derive(Debug, Clone, Default)]
pub struct UiGroup {
    elements: Vec<UiElement>,
}

impl UiGroup {
    #[must_use]
    pub fn new(elements: Vec<UiElement>) -> Self {
        Self { elements }
    }

    pub fn push(&mut self, element: UiElement) {
        self.elements.push(element);
    }

    /// Run the interaction check for every element.
    pub fn check_mouse_interactions(&mut self, cursor: Vec2, button_down: bool) {
        for element in &mut self.elements {
            element.update_interaction(cursor, button_down);
        }
    }

    /// Hit-test with the left button, converting the window's top-left cursor
    /// origin to the elements' bottom-left one.
    pub fn handle_input(&mut self, input: &Input) {
        let cursor = Vec2::new(
            input.cursor_position.x,
            input.screen_size.y - input.cursor_position.y,
        );
        self.check_mouse_interactions(cursor, input.is_button_pressed(MouseButton::Left));
    }

    pub fn element(&self, index: usize) -> Result<&UiElement> {
        let count = self.elements.len();
        self.elements
            .get(index)
            .ok_or(LiftoffError::UiElementIndexOutOfBounds { index, count })
    }

    pub fn element_mut(&mut self, index: usize) -> Result<&mut UiElement> {
        let count = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(LiftoffError::UiElementIndexOutOfBounds { index, count })
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Index of the first element clicked during the last check.
    #[must_use]
    pub fn clicked(&self) -> Option<usize> {
        self.elements.iter().position(UiElement::was_clicked)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UiElement> {
        self.elements.iter()
    }
}
