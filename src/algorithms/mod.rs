//! Collection of geometric algorithms used to summarise head motion
//! from per-axis motion-correction parameters

pub mod rotation;
