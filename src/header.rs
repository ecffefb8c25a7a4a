use raylib::prelude::*;
use std::time::Duration;
use tracing::{error, info};

use crate::engine::Engine;
use crate::session::Session;
use crate::widgets::approx_text_width;

const BAR: Color = Color { r: 34, g: 26, b: 22, a: 255 };

/// Top bar showing the business name and who is signed in.
pub struct Header {
    brand: String,
    session: Session,
}

impl Header {
    pub fn new(brand: impl Into<String>, session: Session) -> Self {
        Self { brand: brand.into(), session }
    }

    pub fn status(&self) -> String {
        match self.session.current_user() {
            Some(user) => format!("Signed in as {}  [L] Sign out", user.name),
            None => "Sign in".to_string(),
        }
    }

    pub fn sign_out(&mut self) {
        if !self.session.is_signed_in() {
            return;
        }
        match self.session.sign_out() {
            Ok(()) => info!("Signed out"),
            Err(e) => error!("Sign out failed: {}", e),
        }
    }
}

impl Engine for Header {
    fn handle_input(&mut self, rl: &RaylibHandle, _area: Rectangle) {
        if rl.is_key_pressed(KeyboardKey::KEY_L) {
            self.sign_out();
        }
    }

    fn update(&mut self, _dt: Duration) {}

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rec(area, BAR);
        let y = (area.y + area.height * 0.5 - 12.0) as i32;
        d.draw_text(&self.brand, (area.x + 24.0) as i32, y, 26, Color::GOLD);

        let status = self.status();
        let width = approx_text_width(&status, 20);
        d.draw_text(&status, (area.x + area.width) as i32 - width - 24, y + 4, 20, Color::RAYWHITE);
    }
}
