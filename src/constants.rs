pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const HERO_INTERVAL: f32 = 5.5;           // Seconds each hero slide stays on display
pub const TESTIMONIAL_INTERVAL: f32 = 7.0;    // Seconds each testimonial stays on display
pub const FADE_DURATION: f32 = 0.8;           // Cross-fade between hero slides (seconds)
pub const KEN_BURNS_ZOOM: f32 = 1.08;         // Zoom reached at the end of a hero interval
pub const KEN_BURNS_PAN: f32 = 0.04;          // Pan distance as a fraction of the image size

pub const HEADER_HEIGHT: i32 = 56;
pub const DOT_RADIUS: f32 = 6.0;
pub const DOT_SPACING: i32 = 24;
