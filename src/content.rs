//! Showcase content loaded from a TOML file.
//!
//! ```toml
//! [hero]
//! interval_secs = 5.5
//! slides = [
//!     { image = "photos/buffet.jpg", title = "Wedding buffets", subtitle = "From 40 guests" },
//! ]
//!
//! [testimonials]
//! items = [{ quote = "Everything was perfect.", author = "Dana", occasion = "Birthday" }]
//!
//! [booking]
//! label = "Book a tasting"
//! target = "https://example.com/booking"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{HERO_INTERVAL, TESTIMONIAL_INTERVAL};
use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub hero: HeroContent,
    pub testimonials: TestimonialContent,
    pub booking: BookingContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub interval_secs: f32,
    /// Restart the interval whenever a visitor navigates by hand
    pub reset_on_interaction: bool,
    pub slides: Vec<SlideContent>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            interval_secs: HERO_INTERVAL,
            reset_on_interaction: false,
            slides: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    pub image: PathBuf,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialContent {
    pub interval_secs: f32,
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialContent {
    fn default() -> Self {
        Self {
            interval_secs: TESTIMONIAL_INTERVAL,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub occasion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingContent {
    pub label: String,
    pub target: String,
}

impl Default for BookingContent {
    fn default() -> Self {
        Self {
            label: "Book now".into(),
            target: "booking".into(),
        }
    }
}

impl Content {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let mut content: Content = toml::from_str(text).map_err(|source| ShowcaseError::Content {
            path: path.to_path_buf(),
            source,
        })?;
        // Slide images are relative to the content file
        if let Some(base) = path.parent() {
            for slide in content.hero.slides.iter_mut() {
                if slide.image.is_relative() {
                    slide.image = base.join(&slide.image);
                }
            }
        }
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ShowcaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Turn image files into slides titled after their file stem.
    pub fn slides_from_paths(paths: &[PathBuf]) -> Vec<SlideContent> {
        paths
            .iter()
            .map(|path| SlideContent {
                image: path.clone(),
                title: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
                    .unwrap_or_default(),
                subtitle: String::new(),
            })
            .collect()
    }
}

/// Convert a configured interval in seconds into a timer period.
pub fn interval(secs: f32) -> Result<Duration> {
    Duration::try_from_secs_f32(secs).map_err(|_| ShowcaseError::Interval(secs))
}
