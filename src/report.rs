use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

use crate::{
    algorithms::rotation::IDENTITY_AXIS,
    error::Result,
    motion::{frame::MotionSeries, loader::ParameterTable},
};

/// Total rotation of one frame, as reported
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRotation {
    pub frame: usize,
    /// Radians
    pub angle: f64,
    pub axis: [f64; 3],
}

/// What gets printed for one motion parameter file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionReport {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotations: Option<Vec<FrameRotation>>,
}

impl MotionReport {
    pub fn new(source: &Path, table: &ParameterTable) -> Self {
        let (rows, columns) = table.shape();
        Self {
            source: source.to_path_buf(),
            rows,
            columns,
            rotations: None,
        }
    }

    /// Attach the per-frame total rotation of `series`.
    pub fn with_rotations(mut self, series: &MotionSeries, parallel: bool) -> Result<Self> {
        let rotations: Vec<FrameRotation> = series
            .total_rotation(parallel)?
            .into_iter()
            .enumerate()
            .map(|(frame, r)| FrameRotation {
                frame,
                angle: r.angle,
                axis: r.axis.into(),
            })
            .collect();

        let stationary = rotations
            .iter()
            .filter(|r| r.angle == 0.0 && r.axis == IDENTITY_AXIS)
            .count();
        debug!(
            "reduced {} frames, {stationary} without net rotation",
            rotations.len()
        );

        self.rotations = Some(rotations);
        Ok(self)
    }
}

impl fmt::Display for MotionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // same shape line numpy prints for the loaded table
        writeln!(f, "({}, {})", self.rows, self.columns)?;

        if let Some(rotations) = &self.rotations {
            writeln!(
                f,
                "{:>6} {:>12} {:>10} {:>10} {:>10} {:>10}",
                "frame", "angle_rad", "angle_deg", "axis_x", "axis_y", "axis_z"
            )?;
            for FrameRotation { frame, angle, axis } in rotations {
                writeln!(
                    f,
                    "{:>6} {:>12.6} {:>10.4} {:>10.6} {:>10.6} {:>10.6}",
                    frame,
                    angle,
                    angle.to_degrees(),
                    axis[0],
                    axis[1],
                    axis[2]
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::motion::loader::parse_table;

    fn three_frame_table() -> ParameterTable {
        parse_table(&format!(
            "0 0 0 0 0 0\n{pi} 0 0 0.1 0.2 0.3\n{h} {h} {h} 0 0 0\n",
            pi = PI,
            h = PI / 2.0
        ))
        .unwrap()
    }

    #[test]
    fn test_shape_only() {
        let table = three_frame_table();
        let report = MotionReport::new(Path::new("feat/mc/prefiltered_func_data_mcf.par"), &table);
        assert_eq!((report.rows, report.columns), (3, 6));
        assert_eq!(report.to_string(), "(3, 6)\n");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], 3);
        assert!(json.get("rotations").is_none());
    }

    #[test]
    fn test_with_rotations() {
        let table = three_frame_table();
        let series = MotionSeries::try_from(&table).unwrap();
        let report = MotionReport::new(Path::new("motion.par"), &table)
            .with_rotations(&series, false)
            .unwrap();

        let rotations = report.rotations.as_ref().unwrap();
        assert_eq!(rotations.len(), 3);
        assert_eq!(rotations[0].axis, [1.0, 0.0, 0.0]);
        assert_relative_eq!(rotations[1].angle, PI, epsilon = 1e-12);
        assert_relative_eq!(rotations[2].axis[1], 1.0, epsilon = 1e-12);

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("angle_deg"));
        assert!(lines[3].contains("180.0000"));
        assert!(lines[4].contains("90.0000"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rotations"][2]["frame"], 2);
    }
}
