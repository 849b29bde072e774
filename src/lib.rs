//! Head-motion summaries for MCFLIRT motion-correction parameter files.
//!
//! The loader turns a `.par` file into a [`MotionSeries`], and the rotation
//! reducer turns each frame's three Euler angles into one total rotation
//! angle and axis.

pub mod algorithms;
pub mod error;
pub mod motion;
pub mod report;

pub use algorithms::rotation::{total_rotation, total_rotation_par, RotationResult};
pub use error::{MotionError, Result};
pub use motion::{
    frame::{MotionFrame, MotionSeries},
    loader::{load, load_table, ParameterTable},
};
pub use report::MotionReport;
