//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state; it lives in a single
//! `RwSignal<SessionState>` provided via context from the app shell.
//! One writer (the store operations here), many readers (nav bar, gate,
//! pages) that subscribe through the signal.

pub mod session;
