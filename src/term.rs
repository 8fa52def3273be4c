//! Terminal utilities
//!
//! Raw mode handling and output helpers. The console runs the terminal in
//! raw mode to read single keypresses, so output must emit explicit \r\n.

use crate::Result;
use log::debug;
use nix::libc;
use std::io::{self, Write};
use std::os::unix::io::RawFd;

/// Set raw mode on a terminal file descriptor, returning the original
/// attributes for later restoration
pub fn set_raw_mode(fd: RawFd) -> Result<libc::termios> {
    let original_termios = unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios
    };

    let mut raw_termios = original_termios;

    unsafe {
        libc::cfmakeraw(&mut raw_termios);
        libc::tcsetattr(fd, libc::TCSANOW, &raw_termios);
    }

    Ok(original_termios)
}

/// Restore terminal attributes
pub fn restore_termios(fd: RawFd, termios: &libc::termios) {
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, termios);
    }
}

/// RAII guard that restores the terminal on exit
pub struct TermiosGuard {
    pub fd: RawFd,
    pub termios: libc::termios,
}

impl Drop for TermiosGuard {
    fn drop(&mut self) {
        restore_termios(self.fd, &self.termios);
        debug!("Terminal attributes restored");
    }
}

/// Write a line with the \r\n ending raw mode needs
pub fn write_line(text: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{}\r\n", text);
    let _ = stdout.flush();
}

/// Write without a line ending (prompts, echo)
pub fn write_str(text: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{}", text);
    let _ = stdout.flush();
}
