use raylib::prelude::*;
use std::time::Duration;

/// One section of the showcase window.
///
/// The main loop calls `handle_input`, `update` and `draw` once per frame,
/// in that order, on every engine.
pub trait Engine {
    fn handle_input(&mut self, rl: &RaylibHandle, area: Rectangle);
    fn update(&mut self, dt: Duration);
    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle);
}
