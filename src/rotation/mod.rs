//! Bounded-index rotation with timed auto-advance.
//!
//! [`Rotation`] holds the pure index transitions, [`AutoAdvance`] the
//! recurring deadline, and [`RotationController`] ties both to an owned
//! item sequence.

pub mod controller;
pub mod state;
pub mod timer;

pub use controller::RotationController;
pub use state::Rotation;
pub use timer::AutoAdvance;
