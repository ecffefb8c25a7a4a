use raylib::prelude::*;
use std::time::Duration;
use tracing::debug;

use crate::content::{interval, Testimonial, TestimonialContent};
use crate::engine::Engine;
use crate::error::Result;
use crate::input::{self, Command, KeyMap};
use crate::rotation::RotationController;
use crate::widgets::{draw_dots, wrap, GLYPH_ASPECT};

const KEYS: KeyMap = KeyMap {
    next: KeyboardKey::KEY_DOWN,
    previous: KeyboardKey::KEY_UP,
    digits: false,
};

const QUOTE_SIZE: i32 = 26;
const LINE_HEIGHT: i32 = 34;
const CARD_BACKGROUND: Color = Color { r: 245, g: 238, b: 228, a: 255 };
const ACCENT: Color = Color { r: 150, g: 84, b: 52, a: 255 };

/// Quote carousel under the hero banner.
pub struct TestimonialEngine {
    cards: RotationController<Testimonial>,
}

impl TestimonialEngine {
    pub fn new(content: &TestimonialContent) -> Result<Self> {
        let mut cards = RotationController::new(content.items.clone(), interval(content.interval_secs)?)?;
        cards.start();
        Ok(Self { cards })
    }

    pub fn current(&self) -> &Testimonial {
        self.cards.current_item()
    }

    pub fn apply(&mut self, command: Command) {
        if input::navigate(&mut self.cards, command) {
            debug!(?command, current = self.cards.current(), "testimonial navigation");
        }
    }
}

impl Engine for TestimonialEngine {
    fn handle_input(&mut self, rl: &RaylibHandle, area: Rectangle) {
        for command in input::poll(rl, &KEYS, area, self.cards.len()) {
            self.apply(command);
        }
    }

    fn update(&mut self, dt: Duration) {
        self.cards.tick(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rec(area, CARD_BACKGROUND);

        let card = self.cards.current_item();
        let x = (area.x + 64.0) as i32;
        let mut y = (area.y + 32.0) as i32;
        let max_chars = ((area.width - 128.0) / (QUOTE_SIZE as f32 * GLYPH_ASPECT)).max(10.0) as usize;

        for line in wrap(&format!("\"{}\"", card.quote), max_chars) {
            d.draw_text(&line, x, y, QUOTE_SIZE, Color::DARKGRAY);
            y += LINE_HEIGHT;
        }

        let signature = if card.occasion.is_empty() {
            format!("- {}", card.author)
        } else {
            format!("- {}, {}", card.author, card.occasion)
        };
        d.draw_text(&signature, x, y + 12, 20, ACCENT);

        draw_dots(d, area, self.cards.len(), self.cards.current());
    }
}
