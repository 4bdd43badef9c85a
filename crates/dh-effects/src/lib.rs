//! `dh-effects` — fire-and-forget pop effects.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`effect`]    | `EffectKind`, `PopEffect` (a growing sphere)        |
//! | [`scheduler`] | `EffectScheduler` (owns and advances live effects)  |
//!
//! An effect is spawned, grows from scale 0 to 1 over its duration, and is
//! removed.  Nothing can cancel one; a restart leaves running effects to
//! finish on their own.

pub mod effect;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use effect::{EffectKind, PopEffect};
pub use scheduler::EffectScheduler;
