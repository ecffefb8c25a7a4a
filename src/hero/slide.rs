use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::content::SlideContent;
use crate::widgets::with_alpha;

/// Background colour for slides whose image could not be loaded.
const PLACEHOLDER: Color = Color { r: 60, g: 44, b: 36, a: 255 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl PanDirection {
    pub fn random() -> Self {
        match rand::rng().random_range(0..4) {
            0 => PanDirection::LeftToRight,
            1 => PanDirection::RightToLeft,
            2 => PanDirection::TopToBottom,
            _ => PanDirection::BottomToTop,
        }
    }

    fn offset(&self) -> Vector2 {
        match self {
            PanDirection::LeftToRight => Vector2::new(1.0, 0.0),
            PanDirection::RightToLeft => Vector2::new(-1.0, 0.0),
            PanDirection::TopToBottom => Vector2::new(0.0, 1.0),
            PanDirection::BottomToTop => Vector2::new(0.0, -1.0),
        }
    }
}

pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    image: Option<Texture2D>,
    pan: PanDirection,
}

impl HeroSlide {
    pub fn new(content: &SlideContent, image: Option<Texture2D>) -> Self {
        Self {
            title: content.title.clone(),
            subtitle: content.subtitle.clone(),
            image,
            pan: PanDirection::random(),
        }
    }

    /// Draw the slide filling `area`, drifting according to `progress`
    /// (0.0 at the start of its display interval, 1.0 at the end).
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, progress: f32, alpha: f32) {
        let Some(image) = &self.image else {
            d.draw_rectangle_rec(area, with_alpha(PLACEHOLDER, alpha));
            return;
        };

        let source = ken_burns_source(
            Vector2::new(image.width() as f32, image.height() as f32),
            area,
            self.pan,
            progress,
        );

        d.draw_texture_pro(
            image,
            source,
            area,
            Vector2::new(0.0, 0.0),
            0.0,
            with_alpha(Color::WHITE, alpha),
        );
    }

    pub fn draw_caption(&self, d: &mut RaylibDrawHandle, area: Rectangle, alpha: f32) {
        let x = (area.x + 48.0) as i32;
        let y = (area.y + area.height * 0.62) as i32;
        d.draw_text(&self.title, x + 2, y + 2, 48, with_alpha(Color::BLACK, alpha * 0.6));
        d.draw_text(&self.title, x, y, 48, with_alpha(Color::WHITE, alpha));
        if !self.subtitle.is_empty() {
            d.draw_text(&self.subtitle, x, y + 60, 24, with_alpha(Color::RAYWHITE, alpha));
        }
    }
}

/// Source rectangle that covers `area` with the texture, zoomed and panned
/// by `progress` through the display interval.
pub fn ken_burns_source(texture: Vector2, area: Rectangle, pan: PanDirection, progress: f32) -> Rectangle {
    let t = progress.clamp(0.0, 1.0);
    let cover = (area.width / texture.x).max(area.height / texture.y);
    let zoom = raylib::core::math::lerp(1.0, KEN_BURNS_ZOOM, t);
    let scale = cover * zoom;

    let width = (area.width / scale).min(texture.x);
    let height = (area.height / scale).min(texture.y);

    let offset = pan.offset();
    let x = (texture.x - width) * 0.5 + offset.x * texture.x * KEN_BURNS_PAN * (t - 0.5);
    let y = (texture.y - height) * 0.5 + offset.y * texture.y * KEN_BURNS_PAN * (t - 0.5);

    Rectangle::new(
        x.clamp(0.0, texture.x - width),
        y.clamp(0.0, texture.y - height),
        width,
        height,
    )
}
