//! Per-run play state.
//!
//! - `JarType` - glass shapes and their base points
//! - `ComboTracker` - consecutive-hit counter
//! - `LifeTracker` - lives left in the run
//! - `apply_pour` - feed a scored pour into the run and wallet

mod combo;
mod enums;
mod life;
mod pour;

pub use combo::*;
pub use enums::*;
pub use life::*;
pub use pour::*;
