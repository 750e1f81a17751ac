//! The functional core: raw document -> normalized path.
//!
//! Resolves headings, control points and identifiers so the writer only
//! has to format what it is given.
pub mod ident;

pub use ident::identifier;

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{
    ControlPoint, NormalizedPath, NormalizedSegment, PathDocument, Point, Pose, START_POSE_NAME,
};

/// Validates and normalizes a document. Output order == input order.
pub fn normalize(doc: &PathDocument) -> Result<NormalizedPath> {
    let start = &doc.start_point;
    let start_pose = Pose {
        x: start.x,
        y: start.y,
        heading_deg: start
            .start_deg
            .or(start.degrees)
            .or(start.end_deg)
            .unwrap_or(0.0),
    };

    // identifier -> original name, to catch names that collapse together
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut segments = Vec::with_capacity(doc.lines.len());

    for line in &doc.lines {
        // the name ends up in a `//` comment, it has to stay on one line
        if line.name.chars().any(char::is_control) {
            return Err(Error::malformed(format!(
                "segment name {:?} contains control characters",
                line.name
            )));
        }
        let identifier = identifier(&line.name)?;

        if format!("{identifier}Pose") == START_POSE_NAME {
            return Err(Error::malformed(format!(
                "segment `{}` would shadow the start pose",
                line.name
            )));
        }
        if let Some(prev) = seen.insert(identifier.clone(), &line.name) {
            return Err(Error::malformed(format!(
                "segments `{prev}` and `{}` both map to identifier `{identifier}`",
                line.name
            )));
        }

        let control_point = match line.control_points.as_slice() {
            [] => None,
            [cp] => Some(ControlPoint { x: cp.x, y: cp.y }),
            more => {
                return Err(Error::UnsupportedShape {
                    segment: line.name.clone(),
                    count: more.len(),
                });
            }
        };

        segments.push(NormalizedSegment {
            name: line.name.clone(),
            identifier,
            end_pose: end_pose(&line.end_point),
            control_point,
            heading_mode: line.end_point.heading.unwrap_or_default(),
        });
    }

    log::debug!("Normalized {} segments", segments.len());

    Ok(NormalizedPath {
        start_pose,
        segments,
    })
}

fn end_pose(p: &Point) -> Pose {
    Pose {
        x: p.x,
        y: p.y,
        heading_deg: p.degrees.or(p.end_deg).unwrap_or(0.0),
    }
}
