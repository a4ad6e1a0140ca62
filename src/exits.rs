//! Exit handling: signal handlers and terminal cleanup.

/// Restore a sane terminal via termios directly (works even if crossterm
/// state was lost).
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Style reset + show cursor + newline, written on exit.
const RESTORE_SEQ: &[u8] = b"\x1b[0m\x1b[?25h\r\n";

/// Registered with atexit - runs on any exit path.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Restore style + cursor, but only when stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_SEQ.as_ptr() as *const libc::c_void,
                RESTORE_SEQ.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles the rest.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}

/// Reset terminal state (public for use in other modules).
pub fn reset_terminal() {
    reset_terminal_termios();
}

#[cfg(test)]
mod tests {
    use super::RESTORE_SEQ;

    #[test]
    fn restore_sequence_ends_with_newline() {
        // the whole sequence must reach the terminal, including the newline
        assert!(RESTORE_SEQ.ends_with(b"\r\n"));
        assert_eq!(RESTORE_SEQ.len(), 12);
    }
}
