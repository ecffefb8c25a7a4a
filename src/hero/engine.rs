use raylib::prelude::*;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::booking::BookingAction;
use crate::constants::*;
use crate::content::{interval, BookingContent, HeroContent};
use crate::engine::Engine;
use crate::error::Result;
use crate::hero::slide::HeroSlide;
use crate::hero::state::HeroState;
use crate::input::{self, Command, KeyMap};
use crate::rotation::RotationController;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::widgets::{draw_dots, with_alpha};

const KEYS: KeyMap = KeyMap {
    next: KeyboardKey::KEY_RIGHT,
    previous: KeyboardKey::KEY_LEFT,
    digits: true,
};

/// Full-width banner cycling through the hero slides.
pub struct HeroEngine {
    slides: RotationController<HeroSlide>,
    state: HeroState,
    shown: usize,
    drift: f32,
    booking: Box<dyn BookingAction>,
    booking_content: BookingContent,
}

impl HeroEngine {
    /// Load slide images and start auto-advancing.
    ///
    /// A slide whose image fails to load is kept and drawn over a plain
    /// background.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        content: &HeroContent,
        booking_content: BookingContent,
        booking: Box<dyn BookingAction>,
    ) -> Result<Self> {
        let mut slides = Vec::with_capacity(content.slides.len());
        for slide in &content.slides {
            let image = match load_texture_with_exif_rotation(rl, thread, &slide.image) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("Showing '{}' without its image: {}", slide.title, e);
                    None
                }
            };
            slides.push(HeroSlide::new(slide, image));
        }
        info!("Loaded {} hero slides", slides.len());
        Self::new(slides, content, booking_content, booking)
    }

    pub fn new(
        slides: Vec<HeroSlide>,
        content: &HeroContent,
        booking_content: BookingContent,
        booking: Box<dyn BookingAction>,
    ) -> Result<Self> {
        let mut slides = RotationController::new(slides, interval(content.interval_secs)?)?
            .with_reset_on_interaction(content.reset_on_interaction);
        slides.start();
        Ok(Self {
            slides,
            state: HeroState::Displaying,
            shown: 0,
            drift: 0.0,
            booking,
            booking_content,
        })
    }

    pub fn current(&self) -> usize {
        self.slides.current()
    }

    pub fn state(&self) -> HeroState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.slides.is_running()
    }

    pub fn apply(&mut self, command: Command) {
        if command == Command::Book {
            let slide = self.slides.current_item();
            self.booking.request(&slide.title, &self.booking_content.target);
            return;
        }
        if input::navigate(&mut self.slides, command) {
            debug!(?command, current = self.slides.current(), "hero navigation");
        }
    }

    /// Start a cross-fade when the active slide changed since the last frame.
    /// The incoming slide begins its drift from the start.
    fn follow_rotation(&mut self) -> bool {
        let current = self.slides.current();
        if current == self.shown {
            return false;
        }
        self.state = HeroState::Fading { from: self.shown, timer: 0.0 };
        self.shown = current;
        self.drift = 0.0;
        true
    }
}

impl Engine for HeroEngine {
    fn handle_input(&mut self, rl: &RaylibHandle, area: Rectangle) {
        let mut commands = input::poll(rl, &KEYS, area, self.slides.len());
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            commands.push(Command::TogglePause);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_B) {
            commands.push(Command::Book);
        }
        for command in commands {
            self.apply(command);
        }
    }

    fn update(&mut self, dt: Duration) {
        if let HeroState::Fading { timer, .. } = &mut self.state {
            *timer += dt.as_secs_f32();
            if *timer >= FADE_DURATION {
                self.state = HeroState::Displaying;
            }
        }

        self.slides.tick(dt);
        let changed = self.follow_rotation();

        // Paused slides hold their drift
        if !changed && self.slides.is_running() {
            let step = dt.as_secs_f32() / self.slides.period().as_secs_f32();
            self.drift = (self.drift + step).min(1.0);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let alpha = self.state.fade_alpha(FADE_DURATION);
        if let HeroState::Fading { from, .. } = self.state {
            self.slides.items()[from].draw(d, area, 1.0, 1.0);
        }
        let slide = self.slides.current_item();
        slide.draw(d, area, self.drift, alpha);
        slide.draw_caption(d, area, alpha);

        let hint = format!("[Enter] {}", self.booking_content.label);
        d.draw_text(&hint, (area.x + 48.0) as i32, (area.y + area.height - 64.0) as i32, 22, Color::GOLD);

        if !self.slides.is_running() {
            d.draw_text("paused", (area.x + area.width - 110.0) as i32, (area.y + 16.0) as i32, 20, with_alpha(Color::WHITE, 0.8));
        }

        draw_dots(d, area, self.slides.len(), self.slides.current());
    }
}
