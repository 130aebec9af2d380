//! Pacing between the delayed steps of a round.
//!
//! A round pauses twice: once while the selected card is revealed and once
//! before the outcome is shown. [`Game::play`](crate::Game::play) hands those
//! pauses to a [`Pacer`], so tests can run rounds instantly while a terminal
//! front end actually waits.

use core::time::Duration;

/// Waits out a pacing delay.
pub trait Pacer {
    /// Blocks for `delay`, or returns at once if the pacer does not wait.
    fn pause(&self, delay: Duration);
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Pacer for Immediate {
    fn pause(&self, _delay: Duration) {}
}

/// Pacer that sleeps the current thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Pacer for ThreadSleep {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &P {
    fn pause(&self, delay: Duration) {
        (**self).pause(delay);
    }
}
