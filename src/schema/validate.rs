use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

use crate::foundation::duration::parse_interval;
use crate::panel::text::{CodeLanguage, TextMode};
use crate::playlist::model::{Playlist, PlaylistItemType};

/// One step of a JSON path into a playlist or panel options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

impl fmt::Display for SchemaPathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A single shape problem and where it sits in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub path: Vec<SchemaPathElem>,
    pub message: String,
}

impl SchemaError {
    pub fn new(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// `$.items[1].value` style rendering of [`Self::path`]; `$` is the document root.
    pub fn path_string(&self) -> String {
        self.path.iter().fold(String::from("$"), |mut s, elem| {
            s.push_str(&elem.to_string());
            s
        })
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

/// Every problem found in one validation pass, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors {
    pub errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&lines.join("; "))
    }
}

impl std::error::Error for SchemaErrors {}

fn finish(errors: Vec<SchemaError>) -> Result<(), SchemaErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

/// Semantic checks on a decoded playlist. Item values are checked against
/// their declared type structurally only; whether a dashboard exists is not
/// known here.
#[tracing::instrument(skip(playlist), fields(uid = %playlist.uid))]
pub fn validate_playlist(playlist: &Playlist) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if playlist.uid.trim().is_empty() {
        errors.push(SchemaError::new(
            &[SchemaPathElem::Field("uid")],
            "uid must be non-empty",
        ));
    }
    if playlist.name.trim().is_empty() {
        errors.push(SchemaError::new(
            &[SchemaPathElem::Field("name")],
            "name must be non-empty",
        ));
    }
    if let Err(e) = parse_interval(&playlist.interval) {
        errors.push(SchemaError::new(
            &[SchemaPathElem::Field("interval")],
            e.to_string(),
        ));
    }

    let mut seen = HashSet::<(PlaylistItemType, &str)>::new();
    for (i, item) in playlist.items.iter().enumerate() {
        let path = [
            SchemaPathElem::Field("items"),
            SchemaPathElem::Index(i),
            SchemaPathElem::Field("value"),
        ];
        if item.value.trim().is_empty() {
            errors.push(SchemaError::new(&path, "value must be non-empty"));
            continue;
        }
        if let Err(e) = item.dashboard_id() {
            errors.push(SchemaError::new(&path, e.to_string()));
        }
        if !seen.insert((item.kind, item.value.as_str())) {
            tracing::debug!(index = i, value = %item.value, "duplicate playlist item");
        }
    }

    finish(errors)
}

/// Shape check on raw playlist JSON, reporting every problem rather than the
/// first one serde would stop at.
pub fn validate_playlist_json(value: &Value) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();
    let Some(obj) = value.as_object() else {
        errors.push(SchemaError::new(&[], "playlist must be a JSON object"));
        return finish(errors);
    };

    for key in ["uid", "name", "interval"] {
        let path = [SchemaPathElem::Field(key)];
        match obj.get(key) {
            None => errors.push(SchemaError::new(&path, "required field is missing")),
            Some(v) if !v.is_string() => {
                errors.push(SchemaError::new(&path, "must be a string"))
            }
            Some(_) => {}
        }
    }

    match obj.get("items") {
        None => {}
        Some(Value::Array(items)) => {
            let allowed: Vec<&str> = PlaylistItemType::ALL.iter().map(|t| t.as_str()).collect();
            for (i, item) in items.iter().enumerate() {
                let mut path = vec![SchemaPathElem::Field("items"), SchemaPathElem::Index(i)];
                let Some(item) = item.as_object() else {
                    errors.push(SchemaError::new(&path, "item must be a JSON object"));
                    continue;
                };
                path.push(SchemaPathElem::Field("type"));
                check_literal(item.get("type"), &allowed, &path, &mut errors);
                path.pop();
                path.push(SchemaPathElem::Field("value"));
                match item.get("value") {
                    None => errors.push(SchemaError::new(&path, "required field is missing")),
                    Some(v) if !v.is_string() => {
                        errors.push(SchemaError::new(&path, "must be a string"))
                    }
                    Some(_) => {}
                }
            }
        }
        Some(_) => errors.push(SchemaError::new(
            &[SchemaPathElem::Field("items")],
            "must be an array",
        )),
    }

    finish(errors)
}

/// Shape check on raw text panel options JSON: required fields, field types
/// and the closed `mode` / `code.language` literal sets.
pub fn validate_panel_options_json(value: &Value) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();
    let Some(obj) = value.as_object() else {
        errors.push(SchemaError::new(&[], "panel options must be a JSON object"));
        return finish(errors);
    };

    let modes: Vec<&str> = TextMode::ALL.iter().map(|m| m.as_str()).collect();
    check_literal(
        obj.get("mode"),
        &modes,
        &[SchemaPathElem::Field("mode")],
        &mut errors,
    );

    match obj.get("content") {
        None => errors.push(SchemaError::new(
            &[SchemaPathElem::Field("content")],
            "required field is missing",
        )),
        Some(v) if !v.is_string() => errors.push(SchemaError::new(
            &[SchemaPathElem::Field("content")],
            "must be a string",
        )),
        Some(_) => {}
    }

    match obj.get("code") {
        None | Some(Value::Null) => {}
        Some(Value::Object(code)) => {
            let languages: Vec<&str> = CodeLanguage::ALL.iter().map(|l| l.as_str()).collect();
            check_literal(
                code.get("language"),
                &languages,
                &[SchemaPathElem::Field("code"), SchemaPathElem::Field("language")],
                &mut errors,
            );
            for key in ["showLineNumbers", "showMiniMap"] {
                let path = [SchemaPathElem::Field("code"), SchemaPathElem::Field(key)];
                match code.get(key) {
                    None => errors.push(SchemaError::new(&path, "required field is missing")),
                    Some(v) if !v.is_boolean() => {
                        errors.push(SchemaError::new(&path, "must be a boolean"))
                    }
                    Some(_) => {}
                }
            }
        }
        Some(_) => errors.push(SchemaError::new(
            &[SchemaPathElem::Field("code")],
            "must be an object",
        )),
    }

    finish(errors)
}

fn check_literal(
    value: Option<&Value>,
    allowed: &[&str],
    path: &[SchemaPathElem],
    errors: &mut Vec<SchemaError>,
) {
    match value {
        None => errors.push(SchemaError::new(path, "required field is missing")),
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
        Some(Value::String(s)) => errors.push(SchemaError::new(
            path,
            format!("unknown literal {s:?}, expected one of: {}", allowed.join(", ")),
        )),
        Some(_) => errors.push(SchemaError::new(path, "must be a string")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
