use crate::{
    algorithms::rotation::{total_rotation, total_rotation_par, RotationResult},
    error::{MotionError, Result},
    motion::loader::ParameterTable,
};

type Vec3<T> = [T; 3];

/// Number of leading columns a motion parameter row must carry:
/// rotations about X, Y, Z then translations along X, Y, Z.
pub const MOTION_COLUMNS: usize = 6;

/// One time sample of motion-correction parameters
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Radians about X, Y, Z
    pub rotation: Vec3<f64>,
    /// Same length unit as the source file, typically mm
    pub translation: Vec3<f64>,
}

impl MotionFrame {
    pub fn from_row(row: &[f64]) -> Option<Self> {
        match row {
            [rx, ry, rz, tx, ty, tz, ..] => Some(Self {
                rotation: [*rx, *ry, *rz],
                translation: [*tx, *ty, *tz],
            }),
            _ => None,
        }
    }
}

/// Frames in acquisition order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MotionSeries {
    pub frames: Vec<MotionFrame>,
}

impl MotionSeries {
    pub fn new(frames: Vec<MotionFrame>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn rotations_x(&self) -> Vec<f64> {
        self.rotation_component(0)
    }

    pub fn rotations_y(&self) -> Vec<f64> {
        self.rotation_component(1)
    }

    pub fn rotations_z(&self) -> Vec<f64> {
        self.rotation_component(2)
    }

    fn rotation_component(&self, axis: usize) -> Vec<f64> {
        self.frames.iter().map(|f| f.rotation[axis]).collect()
    }

    /// Total rotation angle and axis for every frame, in frame order.
    pub fn total_rotation(&self, parallel: bool) -> Result<Vec<RotationResult>> {
        let (x, y, z) = (self.rotations_x(), self.rotations_y(), self.rotations_z());
        if parallel {
            total_rotation_par(&x, &y, &z)
        } else {
            total_rotation(&x, &y, &z)
        }
    }
}

impl TryFrom<&ParameterTable> for MotionSeries {
    type Error = MotionError;

    /// Columns past the sixth are ignored. A table without rows gives an empty series.
    fn try_from(table: &ParameterTable) -> Result<Self> {
        let (rows, columns) = table.shape();
        if rows > 0 && columns < MOTION_COLUMNS {
            return Err(MotionError::parse(
                1,
                format!("expected at least {MOTION_COLUMNS} columns, found {columns}"),
            ));
        }

        Ok(Self::new(
            table
                .rows()
                .filter_map(MotionFrame::from_row)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::motion::loader::parse_table;

    #[test]
    fn test_series_from_table() {
        let table = parse_table("0.1 0.2 0.3 1 2 3 0\n0.4 0.5 0.6 4 5 6 99\n").unwrap();
        let series = MotionSeries::try_from(&table).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.frames[1].rotation, [0.4, 0.5, 0.6]);
        assert_eq!(series.frames[1].translation, [4.0, 5.0, 6.0]);
        assert_eq!(series.rotations_x(), vec![0.1, 0.4]);
        assert_eq!(series.rotations_z(), vec![0.3, 0.6]);
    }

    #[test]
    fn test_too_few_columns() {
        let table = parse_table("0 0 0 1 2").unwrap();
        let err = MotionSeries::try_from(&table).unwrap_err();
        assert!(matches!(err, MotionError::ParseError { .. }));
    }

    #[test]
    fn test_series_total_rotation() {
        let series = MotionSeries::new(vec![
            MotionFrame::default(),
            MotionFrame {
                rotation: [FRAC_PI_2, 0.0, 0.0],
                translation: [0.5, 0.0, 0.0],
            },
        ]);

        for parallel in [false, true] {
            let result = series.total_rotation(parallel).unwrap();
            assert_eq!(result.len(), 2);
            assert_eq!(result[0].angle, 0.0);
            assert_relative_eq!(result[1].angle, FRAC_PI_2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_series_from_empty_table() {
        let table = parse_table("# no volumes\n").unwrap();
        let series = MotionSeries::try_from(&table).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_empty_series() {
        let series = MotionSeries::default();
        assert!(series.is_empty());
        assert!(series.total_rotation(false).unwrap().is_empty());
    }
}
