use serde::Serialize;

/// Name of the pose every path chain starts from.
pub const START_POSE_NAME: &str = "startPose";

/// Whole `.pp` document as it comes out of the JSON loader.
///
/// Kept close to the file: optional fields stay `Option` so a missing
/// heading is still distinguishable from an explicit `0` here. The
/// processor decides the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDocument {
    pub start_point: Point,
    pub lines: Vec<Segment>,
}

/// ─────────────────────────────────────────────────────
/// Raw document pieces
/// ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub start_deg: Option<f64>,
    /// `degrees` and `end_deg` both mean "end heading"; `degrees` wins.
    pub degrees: Option<f64>,
    pub end_deg: Option<f64>,
    pub heading: Option<HeadingMode>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

/// One named leg of the path ("line" in the editor's file).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub end_point: Point,
    pub control_points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingMode {
    /// Sweep from the previous pose's heading to this one.
    #[default]
    Linear,
    /// Hold the end heading for the whole segment.
    Constant,
}

impl HeadingMode {
    /// Only `"constant"` is special, every other word means linear.
    pub fn from_label(label: &str) -> Self {
        match label {
            "constant" => HeadingMode::Constant,
            _ => HeadingMode::Linear,
        }
    }
}

/// ─────────────────────────────────────────────────────
/// Normalized representation handed to `writer`
/// ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSegment {
    /// Segment name exactly as written in the file (used for comments).
    pub name: String,
    pub identifier: String,
    pub end_pose: Pose,
    pub control_point: Option<ControlPoint>,
    pub heading_mode: HeadingMode,
}

impl NormalizedSegment {
    pub fn pose_name(&self) -> String {
        format!("{}Pose", self.identifier)
    }

    pub fn path_name(&self) -> String {
        format!("{}Path", self.identifier)
    }
}

/// Fully processed path; `segments[i]` belongs to `lines[i]` of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPath {
    pub start_pose: Pose,
    pub segments: Vec<NormalizedSegment>,
}
