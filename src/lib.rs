//! Catering showcase: hero slider, testimonial carousel and a session header
//! drawn with raylib, all driven by [`rotation::RotationController`].

pub mod booking;
pub mod constants;
pub mod content;
pub mod engine;
pub mod error;
pub mod header;
pub mod hero;
pub mod input;
pub mod rotation;
pub mod session;
pub mod testimonials;
pub mod texture_loader;
pub mod widgets;

pub use error::{Result, RotationError, ShowcaseError};
pub use rotation::RotationController;
