pub mod engine;

pub use engine::TestimonialEngine;
