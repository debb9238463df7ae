//! Core domain types for pxgen.
//!
//! - `Colour` - RGBA colour values with shade derivation
//! - `Canvas` - owned RGBA pixel buffers
//! - `EnemyKind`, `Direction`, `WalkFrame` - sprite selectors

mod canvas;
mod colour;
mod kinds;

pub use canvas::Canvas;
pub use colour::{Colour, SHADE_FACTOR};
pub use kinds::{Direction, EnemyKind, WalkFrame};
