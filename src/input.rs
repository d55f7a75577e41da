//! Frame input snapshot.
//!
//! The host's windowing layer forwards its events into [`Input`]; scene code
//! only ever reads this snapshot. Call [`Input::end_frame`] once the frame has
//! been simulated so deltas and edge-triggered presses do not repeat.

use std::collections::HashSet;

use glam::Vec2;

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    /// Toggle the flight animation.
    F,
    /// Rewind the flight animation.
    R,
    /// Toggle the particle effect.
    P,
    LeftShift,
    LeftControl,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Pressed,
    Released,
}

#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Cursor position in window pixels, origin top-left
    pub cursor_position: Vec2,
    /// Cursor travel since the previous frame
    pub cursor_delta: Vec2,
    pub screen_size: Vec2,

    keys: HashSet<Key>,
    keys_just_pressed: HashSet<Key>,
    mouse_buttons: HashSet<MouseButton>,
    buttons_just_pressed: HashSet<MouseButton>,
    has_cursor: bool,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state (deltas and just-pressed edges).
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.keys_just_pressed.clear();
        self.buttons_just_pressed.clear();
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // First event only establishes the reference position.
        if self.has_cursor {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
        self.has_cursor = true;
    }

    pub fn handle_key(&mut self, key: Key, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.keys.insert(key) {
                    self.keys_just_pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.keys.remove(&key);
            }
        }
    }

    pub fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.mouse_buttons.insert(button) {
                    self.buttons_just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                self.mouse_buttons.remove(&button);
            }
        }
    }

    #[must_use]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Pressed this frame (key repeat does not count).
    #[must_use]
    pub fn was_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    #[must_use]
    pub fn was_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }
}
