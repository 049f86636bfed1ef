//! UI utilities for terminal output.

mod qr;

pub use qr::render_terminal;
