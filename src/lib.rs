//! A linear container with constant-time access at its front, back and middle, and the
//! F/B/R sequence decoder built on top of it.

#![forbid(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod iter;
pub mod m_deque;
pub mod middle;
mod node;

pub use error::{Error, ExitStatus, Result};
pub use m_deque::MDeque;
