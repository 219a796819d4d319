//! Dice Toss
//!
//! Throw dice and bottles into a physics box and read which face lands up.
//! The engine-independent roll tracking lives in `dicetoss-core`; this crate
//! wires it into Bevy and Rapier.

pub mod dice3d;
