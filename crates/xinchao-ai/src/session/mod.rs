//! Concierge chat session.
//!
//! A [`ChatSession`] owns the persona instruction, the running transcript,
//! and the protocol for sending a user turn and streaming back the
//! concierge's reply.

mod chat;
mod manager;
mod prompt;
mod types;


pub use manager::ChatSession;
