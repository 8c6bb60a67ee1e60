//! Fold discrete input events into the state that drives the viewpoint each frame.
use std::collections::HashSet;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// Relative horizontal mouse movement since the last event.
    MouseMotion { dx: f64 },
    MouseButton { button: MouseButton, pressed: bool },
    Quit,
}

#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    mouse_dx: f64,
    quit: bool,
}

impl InputState {
    pub fn new() -> InputState {
        Default::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(k) => {
                self.keys.insert(k);
            }
            InputEvent::KeyUp(k) => {
                self.keys.remove(&k);
            }
            InputEvent::MouseMotion { dx } => self.mouse_dx += dx,
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.buttons.insert(button);
                } else {
                    self.buttons.remove(&button);
                }
            }
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.buttons.contains(&MouseButton::Left)
    }

    /// Mouse movement accumulated since the last [InputState::apply].
    pub fn mouse_dx(&self) -> f64 {
        self.mouse_dx
    }

    pub fn quit_requested(&self) -> bool {
        self.quit || self.is_down(KeyCode::Escape)
    }

    fn either(&self, a: KeyCode, b: KeyCode) -> bool {
        self.is_down(a) || self.is_down(b)
    }

    /// Move and turn `viewpoint` for one frame of `dt` seconds, then forget the accumulated mouse movement.
    pub fn apply(&mut self, viewpoint: &mut Viewpoint, dt: f64, mouse_sensitivity: f64) {
        if self.either(KeyCode::W, KeyCode::Up) {
            viewpoint.move_forward(dt);
        }
        if self.either(KeyCode::S, KeyCode::Down) {
            viewpoint.move_backward(dt);
        }
        if self.either(KeyCode::D, KeyCode::Right) {
            viewpoint.move_right(dt);
        }
        if self.either(KeyCode::A, KeyCode::Left) {
            viewpoint.move_left(dt);
        }

        viewpoint.rotate_right(self.mouse_dx * mouse_sensitivity, dt);
        self.mouse_dx = 0.0;
    }
}
