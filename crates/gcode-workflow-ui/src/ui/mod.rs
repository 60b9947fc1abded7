//! User interface module
//!
//! The toolbar model is toolkit independent; the GTK implementation is
//! built with the `gtk` feature.

#[cfg(feature = "gtk")]
pub mod gtk;
pub mod local_host;
pub mod workflow_control;
