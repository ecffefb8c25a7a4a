use tracing::info;

/// Receives booking requests raised from the showcase.
///
/// The showcase never books anything itself; it hands the request to
/// whoever owns the booking flow.
pub trait BookingAction {
    fn request(&mut self, offer: &str, target: &str);
}

/// Logs booking requests and remembers the last one.
#[derive(Debug, Default)]
pub struct LogBooking {
    pub last: Option<(String, String)>,
}

impl BookingAction for LogBooking {
    fn request(&mut self, offer: &str, target: &str) {
        info!(offer, target, "booking requested");
        self.last = Some((offer.to_string(), target.to_string()));
    }
}

impl<F> BookingAction for F
where
    F: FnMut(&str, &str),
{
    fn request(&mut self, offer: &str, target: &str) {
        self(offer, target)
    }
}
