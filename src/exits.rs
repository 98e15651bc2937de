//! Exit handling: terminal restoration on normal exit and on signals.

/// Put the tty back into cooked mode with echo.
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
extern "C" fn on_exit() {
    restore_termios();
    unsafe {
        // Reset colors and show the cursor, but only on a tty.
        if libc::isatty(1) == 1 {
            const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(1, SEQ.as_ptr() as *const libc::c_void, SEQ.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: leave through exit() so on_exit runs.
extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install the atexit hook and signal handlers, and keep the process out of
/// core dumps. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

pub fn reset_terminal() {
    restore_termios();
}
