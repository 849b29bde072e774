//! Motion-correction parameters as written by MCFLIRT:
//! one row per volume, rotations (radians) followed by translations.

pub mod frame;
pub mod loader;
