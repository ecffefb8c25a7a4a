use raylib::prelude::*;

use crate::rotation::RotationController;
use crate::widgets::dot_at;

/// A visitor request against a rotating section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Goto(usize),
    TogglePause,
    Book,
}

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Which keys drive a section.
pub struct KeyMap {
    pub next: KeyboardKey,
    pub previous: KeyboardKey,
    pub digits: bool,
}

/// Commands raised this frame: key presses plus a click on one of the
/// section's `count` navigation dots.
pub fn poll(rl: &RaylibHandle, keys: &KeyMap, area: Rectangle, count: usize) -> Vec<Command> {
    let mut commands = Vec::new();
    if rl.is_key_pressed(keys.next) {
        commands.push(Command::Next);
    }
    if rl.is_key_pressed(keys.previous) {
        commands.push(Command::Previous);
    }
    if keys.digits {
        for (i, key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                commands.push(Command::Goto(i));
            }
        }
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if let Some(i) = dot_at(area, count, rl.get_mouse_position()) {
            commands.push(Command::Goto(i));
        }
    }
    commands
}

/// Apply the navigation part of a command. Returns `false` for commands the
/// controller does not handle or rejects.
pub fn navigate<T>(controller: &mut RotationController<T>, command: Command) -> bool {
    match command {
        Command::Next => {
            controller.next();
            true
        }
        Command::Previous => {
            controller.previous();
            true
        }
        Command::Goto(i) => controller.goto(i),
        Command::TogglePause => {
            if controller.is_running() {
                controller.stop();
            } else {
                controller.start();
            }
            true
        }
        Command::Book => false,
    }
}
