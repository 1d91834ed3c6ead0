//! Process interrupt (SIGINT/SIGTERM) handling.
//!
//! The signal handler only raises a flag; the terminal backend polls it
//! while waiting for input and reports [`Key::Interrupt`](super::Key).

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for interrupts delivered as signals
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Check if an interrupt has been received.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Raise the interrupt flag.
pub fn request_interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Lower the interrupt flag so later tests in this process start clean.
#[cfg(test)]
pub(crate) fn reset_interrupt() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Set up the Ctrl+C / termination handler.
///
/// This should be called once at program startup.
///
/// # Errors
/// Returns an error if a handler is already installed or the signal
/// handler cannot be registered.
pub fn setup_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(request_interrupt)
}
