//! Input handling for the stage.
//!
//! [`Input`] folds raw winit window events into per-frame pointer and key
//! state: instantaneous edges (pressed/released this frame) and continuous
//! state (held, current cursor position). Scenes read it inside their update
//! callback; the stage clears the per-frame edges after every redraw.
//!
//! While a button is held, winit keeps delivering cursor moves to the window
//! that saw the press, which is what the rope's drag contract means by
//! pointer capture. Losing window focus mid-drag surfaces as
//! [`Input::pointer_cancelled`] so scenes can abort cleanly instead of
//! dropping a stuck drag on refocus.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pointer buttons the stage cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Primary,
        }
    }
}

/// Per-frame input state.
#[derive(Debug, Default)]
pub struct Input {
    cursor: Vec2,
    cursor_delta: Vec2,

    buttons_held: HashSet<PointerButton>,
    buttons_pressed: HashSet<PointerButton>,
    buttons_released: HashSet<PointerButton>,

    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,

    scroll: f32,
    focus_lost: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in physical pixels, origin at the window's top left.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor movement since the last frame.
    #[inline]
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// Button went down this frame.
    pub fn pressed(&self, button: PointerButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Button is currently down.
    pub fn held(&self, button: PointerButton) -> bool {
        self.buttons_held.contains(&button)
    }

    /// Button went up this frame.
    pub fn released(&self, button: PointerButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Key went down this frame (no auto-repeat).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Key is currently down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Scroll wheel delta this frame, positive scrolling up.
    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// The window lost focus this frame; treat any drag as cancelled.
    #[inline]
    pub fn pointer_cancelled(&self) -> bool {
        self.focus_lost
    }

    /// Clear per-frame edges. The stage calls this after each redraw.
    pub(crate) fn begin_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.keys_pressed.clear();
        self.cursor_delta = Vec2::ZERO;
        self.scroll = 0.0;
        self.focus_lost = false;
    }

    /// Fold one winit event into the state.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let next = Vec2::new(position.x as f32, position.y as f32);
                self.cursor_delta += next - self.cursor;
                self.cursor = next;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = PointerButton::from(*button);
                match state {
                    ElementState::Pressed => {
                        self.buttons_pressed.insert(button);
                        self.buttons_held.insert(button);
                    }
                    ElementState::Released => {
                        self.buttons_held.remove(&button);
                        self.buttons_released.insert(button);
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if self.keys_held.insert(code) {
                                self.keys_pressed.insert(code);
                            }
                        }
                        ElementState::Released => {
                            self.keys_held.remove(&code);
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 100.0,
                };
            }
            WindowEvent::Focused(false) => {
                self.focus_lost = true;
                self.buttons_held.clear();
                self.keys_held.clear();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_clears_after_frame() {
        let mut input = Input::new();
        input.buttons_pressed.insert(PointerButton::Primary);
        input.buttons_held.insert(PointerButton::Primary);

        assert!(input.pressed(PointerButton::Primary));
        assert!(input.held(PointerButton::Primary));

        input.begin_frame();
        assert!(!input.pressed(PointerButton::Primary));
        assert!(input.held(PointerButton::Primary));
    }

    #[test]
    fn focus_loss_cancels_and_clears_held() {
        let mut input = Input::new();
        input.buttons_held.insert(PointerButton::Primary);
        input.handle_event(&WindowEvent::Focused(false));
        assert!(input.pointer_cancelled());
        assert!(!input.held(PointerButton::Primary));

        input.begin_frame();
        assert!(!input.pointer_cancelled());
    }

    #[test]
    fn other_mouse_buttons_fold_into_primary() {
        assert_eq!(
            PointerButton::from(MouseButton::Back),
            PointerButton::Primary
        );
        assert_eq!(
            PointerButton::from(MouseButton::Right),
            PointerButton::Secondary
        );
    }
}
