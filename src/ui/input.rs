//! Window keyboard mapping

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::game::input::InputEvent;

/// Map a physical key to a game input
pub fn map_key(key: KeyCode) -> InputEvent {
    match key {
        KeyCode::ArrowUp => InputEvent::CycleUp,
        KeyCode::ArrowDown => InputEvent::CycleDown,
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => InputEvent::Confirm,
        _ => InputEvent::AnyKey,
    }
}

/// Decode a winit key event; releases and auto-repeats produce nothing
pub fn decode_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }

    match event.physical_key {
        PhysicalKey::Code(code) => Some(map_key(code)),
        // Keys winit cannot identify still count as "any key"
        PhysicalKey::Unidentified(_) => Some(InputEvent::AnyKey),
    }
}
