#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HeroState {
    Displaying,                        // Active slide shown on its own
    Fading { from: usize, timer: f32 }, // Active slide fading in over `from`
}

impl HeroState {
    /// Opacity of the incoming slide, 1.0 once the fade is done.
    pub fn fade_alpha(&self, duration: f32) -> f32 {
        match self {
            HeroState::Displaying => 1.0,
            HeroState::Fading { timer, .. } => (timer / duration).min(1.0),
        }
    }
}
