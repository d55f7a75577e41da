//! Mouse-reactive overlay elements.
//!
//! Only geometry and interaction state live here; drawing (and any text on
//! the buttons) belongs to the renderer.

pub mod element;
pub mod group;

pub use element::{Interaction, UiElement};
pub use group::UiGroup;
