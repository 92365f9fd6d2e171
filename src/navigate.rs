//! Guarded navigation over a decoded JSON tree.
//!
//! The upstream data is addressed by position (array indices) and by a few
//! numeric map keys. Every access checks type, bounds, and key presence and
//! reports which step failed instead of panicking.

use std::fmt;

use serde_json::Value;

/// One access in a navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Element of an array.
    Index(usize),
    /// Member of an object.
    Key(&'static str),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Key(k) => write!(f, "[\"{k}\"]"),
        }
    }
}

/// Why a step could not be taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Miss {
    /// Expected an array, found something else.
    #[error("expected array, found {0}")]
    NotArray(&'static str),
    /// Index past the end of the array.
    #[error("index out of range (len {0})")]
    OutOfRange(usize),
    /// Expected an object, found something else.
    #[error("expected object, found {0}")]
    NotObject(&'static str),
    /// Key absent from the object.
    #[error("key missing")]
    MissingKey,
    /// Expected a string leaf, found something else.
    #[error("expected string, found {0}")]
    NotString(&'static str),
}

/// A failed navigation, with the position of the failing step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("step {depth} {step}: {miss}")]
pub struct PathError {
    /// Zero-based position of the failing step in the path.
    pub depth: usize,
    /// The step that failed.
    pub step: Step,
    /// What was wrong.
    pub miss: Miss,
}

/// Name of a JSON value's type, for diagnostics.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn take<'a>(value: &'a Value, step: Step) -> Result<&'a Value, Miss> {
    match step {
        Step::Index(i) => {
            let arr = value.as_array().ok_or(Miss::NotArray(type_name(value)))?;
            arr.get(i).ok_or(Miss::OutOfRange(arr.len()))
        }
        Step::Key(k) => {
            let obj = value.as_object().ok_or(Miss::NotObject(type_name(value)))?;
            obj.get(k).ok_or(Miss::MissingKey)
        }
    }
}

/// Follow `path` from `root`.
///
/// # Example
///
/// ```rust
/// use rs_imagesearch::navigate::{get, Step};
/// use serde_json::json;
///
/// let tree = json!([0, {"7": ["a", "b"]}]);
/// let v = get(&tree, &[Step::Index(1), Step::Key("7"), Step::Index(1)]).unwrap();
/// assert_eq!(v, "b");
///
/// let err = get(&tree, &[Step::Index(0), Step::Index(0)]).unwrap_err();
/// assert_eq!(err.depth, 1);
/// ```
pub fn get<'a>(root: &'a Value, path: &[Step]) -> Result<&'a Value, PathError> {
    path.iter()
        .enumerate()
        .try_fold(root, |value, (depth, &step)| {
            take(value, step).map_err(|miss| PathError { depth, step, miss })
        })
}

/// Follow `path` from `root` and require a string at the end.
pub fn get_str<'a>(root: &'a Value, path: &[Step]) -> Result<&'a str, PathError> {
    let value = get(root, path)?;
    value.as_str().ok_or_else(|| PathError {
        depth: path.len().saturating_sub(1),
        step: path.last().copied().unwrap_or(Step::Index(0)),
        miss: Miss::NotString(type_name(value)),
    })
}

/// Follow `path` from `root` and require an array at the end.
pub fn get_array<'a>(root: &'a Value, path: &[Step]) -> Result<&'a [Value], PathError> {
    let value = get(root, path)?;
    value.as_array().map(Vec::as_slice).ok_or_else(|| PathError {
        depth: path.len().saturating_sub(1),
        step: path.last().copied().unwrap_or(Step::Index(0)),
        miss: Miss::NotArray(type_name(value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_path_returns_root() {
        let tree = json!({"a": 1});
        assert_eq!(get(&tree, &[]), Ok(&tree));
    }

    #[test]
    fn mixed_index_and_key_path() {
        let tree = json!([[null, {"2003": [0, 1, "x"]}]]);
        let path = [Step::Index(0), Step::Index(1), Step::Key("2003"), Step::Index(2)];
        assert_eq!(get_str(&tree, &path), Ok("x"));
    }

    #[test]
    fn index_into_non_array() {
        let tree = json!({"a": 1});
        let err = get(&tree, &[Step::Index(0)]).expect_err("object is not indexable");
        assert_eq!(err.depth, 0);
        assert_eq!(err.miss, Miss::NotArray("object"));
    }

    #[test]
    fn index_out_of_range_reports_len() {
        let tree = json!([[1, 2]]);
        let err = get(&tree, &[Step::Index(0), Step::Index(5)]).expect_err("short array");
        assert_eq!(err.depth, 1);
        assert_eq!(err.step, Step::Index(5));
        assert_eq!(err.miss, Miss::OutOfRange(2));
        assert_eq!(err.to_string(), "step 1 [5]: index out of range (len 2)");
    }

    #[test]
    fn key_on_array_and_missing_key() {
        let tree = json!([{"x": 1}]);
        let err = get(&tree, &[Step::Key("x")]).expect_err("array has no keys");
        assert_eq!(err.miss, Miss::NotObject("array"));

        let err = get(&tree, &[Step::Index(0), Step::Key("y")]).expect_err("no key y");
        assert_eq!(err.depth, 1);
        assert_eq!(err.miss, Miss::MissingKey);
        assert_eq!(err.to_string(), "step 1 [\"y\"]: key missing");
    }

    #[test]
    fn null_is_a_type_mismatch_not_a_panic() {
        let tree = json!([null]);
        let err = get(&tree, &[Step::Index(0), Step::Index(0)]).expect_err("null");
        assert_eq!(err.miss, Miss::NotArray("null"));
    }

    #[test]
    fn get_str_rejects_non_string_leaf() {
        let tree = json!([42]);
        let err = get_str(&tree, &[Step::Index(0)]).expect_err("number");
        assert_eq!(err.miss, Miss::NotString("number"));
    }

    #[test]
    fn get_array_rejects_non_array_leaf() {
        let tree = json!([{"a": []}]);
        assert_eq!(get_array(&tree, &[Step::Index(0), Step::Key("a")]).map(<[Value]>::len), Ok(0));
        let err = get_array(&tree, &[Step::Index(0)]).expect_err("object");
        assert_eq!(err.miss, Miss::NotArray("object"));
    }
}
