//! Exit handling: signal handlers, terminal restore, and process hardening.

/// Put the terminal back into cooked mode using termios directly.
/// Safe to call from a signal or atexit context.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // reset style, show cursor; only when stdout is a terminal
    const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SEQ.as_ptr() as *const libc::c_void, SEQ.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so the atexit hook runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn harden_process() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        tracing::debug!("prctl(PR_SET_DUMPABLE) failed");
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden_process() {}

/// Restore terminal state before a normal return from main.
pub fn reset_terminal() {
    restore_termios();
}
