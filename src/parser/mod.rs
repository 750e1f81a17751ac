use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{HeadingMode, PathDocument, Point, Segment};

/// Read a `.pp` file from disk and parse it.
pub fn load_file(path: &Path) -> Result<PathDocument> {
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    log::info!("Loaded {} ({} bytes)", path.display(), json.len());
    load_from_json(&json)
}

/// Parse the whole input JSON string into a `PathDocument`.
///
/// The editor's file is expected to look like
///
/// ```json
/// { "startPoint": { "x": 0, "y": 0, "startDeg": 0 },
///   "lines": [ { "name": "Score_1",
///                "endPoint": { "x": 24, "y": 36, "degrees": 90 },
///                "controlPoints": [] } ] }
/// ```
///
/// Every other key (colours, ids, editor settings) is ignored. A missing
/// required key or a value of the wrong type is reported with its location.
pub fn load_from_json(json: &str) -> Result<PathDocument> {
    let root: Value = serde_json::from_str(json)?;
    let root = root
        .as_object()
        .ok_or_else(|| Error::malformed("top level is not a JSON object"))?;

    let start = root
        .get("startPoint")
        .ok_or_else(|| Error::malformed("file has no `startPoint`"))?;
    let start_point = parse_point(start, "startPoint")?;

    let lines = root
        .get("lines")
        .and_then(|v| v.as_array())
        .ok_or_else(|| Error::malformed("file has no `lines` array"))?;

    log::debug!("Found {} lines", lines.len());

    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_segment(line, i))
        .collect::<Result<Vec<_>>>()?;

    Ok(PathDocument { start_point, lines })
}

// ─────────────────────────────────────────────────────
/// Helper: parse one entry of `lines`.
fn parse_segment(line: &Value, idx: usize) -> Result<Segment> {
    let at = format!("lines[{idx}]");
    let obj = as_object(line, &at)?;

    let name = obj
        .get("name")
        .ok_or_else(|| Error::malformed(format!("{at} missing `name`")))?
        .as_str()
        .ok_or_else(|| Error::malformed(format!("{at}.name is not a string")))?
        .to_string();

    let end = obj
        .get("endPoint")
        .ok_or_else(|| Error::malformed(format!("{at} missing `endPoint`")))?;
    let end_point = parse_point(end, &format!("{at}.endPoint"))?;

    let control_points = obj
        .get("controlPoints")
        .ok_or_else(|| Error::malformed(format!("{at} missing `controlPoints`")))?
        .as_array()
        .ok_or_else(|| Error::malformed(format!("{at}.controlPoints is not an array")))?
        .iter()
        .enumerate()
        .map(|(j, cp)| parse_point(cp, &format!("{at}.controlPoints[{j}]")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Segment {
        name,
        end_point,
        control_points,
    })
}

fn parse_point(value: &Value, at: &str) -> Result<Point> {
    let obj = as_object(value, at)?;

    let x = required_number(obj, "x", at)?;
    let y = required_number(obj, "y", at)?;

    let heading = match obj.get("heading") {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) => Some(HeadingMode::from_label(label)),
        Some(_) => {
            return Err(Error::malformed(format!("{at}.heading is not a string")));
        }
    };

    Ok(Point {
        x,
        y,
        start_deg: optional_number(obj, "startDeg", at)?,
        degrees: optional_number(obj, "degrees", at)?,
        end_deg: optional_number(obj, "endDeg", at)?,
        heading,
    })
}

fn as_object<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::malformed(format!("{at} is not an object")))
}

fn required_number(obj: &Map<String, Value>, key: &str, at: &str) -> Result<f64> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(Error::malformed(format!("{at} missing `{key}`"))),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| Error::malformed(format!("{at}.{key} is not a number"))),
    }
}

/// `null` and absence are the same thing for optional fields.
fn optional_number(obj: &Map<String, Value>, key: &str, at: &str) -> Result<Option<f64>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::malformed(format!("{at}.{key} is not a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn malformed_message(json: &str) -> String {
        let err = load_from_json(json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed, "got {err}");
        err.to_string()
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = load_from_json(
            r##"{
                "startPoint": {"x": 0, "y": 0, "startDeg": 0},
                "lines": [{
                    "name": "Score_1",
                    "endPoint": {"x": 24, "y": 36.5, "degrees": 90, "heading": "constant"},
                    "controlPoints": [{"x": 10, "y": 12}],
                    "color": "#00FF00"
                }],
                "version": 3
            }"##,
        )
        .expect("valid document");

        assert_eq!(doc.start_point.start_deg, Some(0.0));
        assert_eq!(doc.lines.len(), 1);

        let line = &doc.lines[0];
        assert_eq!(line.name, "Score_1");
        assert_eq!(line.end_point.x, 24.0);
        assert_eq!(line.end_point.y, 36.5);
        assert_eq!(line.end_point.degrees, Some(90.0));
        assert_eq!(line.end_point.end_deg, None);
        assert_eq!(line.end_point.heading, Some(HeadingMode::Constant));
        assert_eq!(line.control_points, vec![Point::new(10.0, 12.0)]);
    }

    #[test]
    fn test_absent_and_null_optionals_stay_none() {
        let doc = load_from_json(
            r#"{"startPoint": {"x": 1, "y": 2, "startDeg": null, "heading": null}, "lines": []}"#,
        )
        .unwrap();
        assert_eq!(doc.start_point, Point::new(1.0, 2.0));
        assert!(doc.lines.is_empty());
    }

    #[test]
    fn test_unknown_heading_word_is_linear() {
        let doc = load_from_json(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [{"name": "a", "endPoint": {"x": 1, "y": 1, "heading": "tangential"}, "controlPoints": []}]}"#,
        )
        .unwrap();
        assert_eq!(doc.lines[0].end_point.heading, Some(HeadingMode::Linear));
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(malformed_message(r#"{"lines": []}"#).contains("startPoint"));
        assert!(malformed_message(r#"{"startPoint": {"x": 0, "y": 0}}"#).contains("lines"));
        assert!(
            malformed_message(r#"{"startPoint": {"y": 0}, "lines": []}"#)
                .contains("startPoint missing `x`")
        );

        let msg = malformed_message(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [
                    {"name": "a", "endPoint": {"x": 1, "y": 1}, "controlPoints": []},
                    {"name": "b", "endPoint": {"x": 1}, "controlPoints": []}
                ]}"#,
        );
        assert!(msg.contains("lines[1].endPoint missing `y`"), "got {msg}");

        let msg = malformed_message(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [{"name": "a", "endPoint": {"x": 1, "y": 1}}]}"#,
        );
        assert!(msg.contains("lines[0] missing `controlPoints`"), "got {msg}");
    }

    #[test]
    fn test_wrong_types() {
        let msg = malformed_message(r#"{"startPoint": {"x": "0", "y": 0}, "lines": []}"#);
        assert!(msg.contains("startPoint.x is not a number"), "got {msg}");

        let msg = malformed_message(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [{"name": 7, "endPoint": {"x": 1, "y": 1}, "controlPoints": []}]}"#,
        );
        assert!(msg.contains("lines[0].name is not a string"), "got {msg}");

        let msg = malformed_message(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [{"name": "a", "endPoint": {"x": 1, "y": 1, "degrees": "90"}, "controlPoints": []}]}"#,
        );
        assert!(msg.contains("lines[0].endPoint.degrees"), "got {msg}");

        let msg = malformed_message(
            r#"{"startPoint": {"x": 0, "y": 0},
                "lines": [{"name": "a", "endPoint": {"x": 1, "y": 1},
                           "controlPoints": [{"x": 2, "y": true}]}]}"#,
        );
        assert!(msg.contains("lines[0].controlPoints[0].y"), "got {msg}");

        assert!(malformed_message("[1, 2]").contains("not a JSON object"));
        assert!(malformed_message("not json").contains("invalid JSON"));
    }

    #[test]
    fn test_load_file_missing_is_io() {
        let err = load_file(Path::new("/definitely/not/here.pp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
