//! SIGTERM / SIGHUP delivery as an interrupt.
//!
//! Raw mode turns Ctrl-C into a key, but a terminating signal from outside
//! would otherwise kill the process with the terminal still in raw mode. The
//! handlers only set a flag; the input source polls it.

use std::sync::atomic::{AtomicBool, Ordering};

static TERMINATION_REQUESTED: AtomicBool = AtomicBool::new(false);

pub(crate) fn take_termination_request() -> bool {
    TERMINATION_REQUESTED.swap(false, Ordering::SeqCst)
}

#[cfg(unix)]
extern "C" fn handle_termination(_: nix::libc::c_int) {
    TERMINATION_REQUESTED.store(true, Ordering::SeqCst);
}

#[cfg(unix)]
pub(crate) fn install_termination_handlers() -> std::io::Result<()> {
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    let action = SigAction::new(SigHandler::Handler(handle_termination), SaFlags::SA_RESTART, SigSet::empty());
    for signal in [Signal::SIGTERM, Signal::SIGHUP] {
        // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
        unsafe { sigaction(signal, &action) }.map_err(std::io::Error::from)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn install_termination_handlers() -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "../../test/tui/input/signals.rs"]
mod tests;
