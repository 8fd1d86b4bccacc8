//! Text spinner shown while a search is in flight

use iced::time;
use iced::Subscription;
use std::time::Duration;

const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Animation frame counter
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }
}

/// Animation tick
#[derive(Debug, Clone)]
pub struct SpinnerTick;

/// Ticks for the spinner animation
pub fn tick_subscription() -> Subscription<SpinnerTick> {
    time::every(Duration::from_millis(80)).map(|_| SpinnerTick)
}
