//! Handler modules for side effects.
//!
//! The session reducer decides what should happen; these handlers do it
//! (dialogs, HTTP calls, clipboard, disk) and report back as messages.

mod artifacts;
mod effects;
mod intake;
mod notify;
mod transfer;
