use serde_json::{Map, Value};

use rowforge_core::{Error, Result};

/// JSON kinds a named parameter may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    Int,
    UInt,
    Float,
    String,
}

/// Declaration of one named parameter a table function accepts.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub const fn new(key: &'static str, kind: ParamKind, required: bool) -> Self {
        Self {
            key,
            kind,
            required,
        }
    }
}

/// Validated view over a call's named arguments.
#[derive(Debug)]
pub struct ParamMap<'a> {
    map: Option<&'a Map<String, Value>>,
}

/// Checks the given arguments against a function's parameter table.
///
/// Unknown keys, wrong kinds, and missing required parameters are all
/// rejected here so the bind implementations only deal with semantics.
pub fn validate_params<'a>(
    params: Option<&'a Value>,
    specs: &[ParamSpec],
    ctx: &'static str,
) -> Result<ParamMap<'a>> {
    let map = match params {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            return Err(Error::InvalidInput(format!(
                "{ctx}: arguments must be a JSON object"
            )));
        }
    };

    if let Some(map) = map {
        for (key, value) in map {
            let Some(spec) = specs.iter().find(|spec| spec.key == key.as_str()) else {
                return Err(Error::InvalidInput(format!("{ctx}: unknown param '{key}'")));
            };
            validate_kind(ctx, key, spec.kind, value)?;
        }
    }

    for spec in specs {
        if spec.required && !map.is_some_and(|map| map.contains_key(spec.key)) {
            return Err(Error::InvalidInput(format!(
                "{ctx}: missing required param '{}'",
                spec.key
            )));
        }
    }

    Ok(ParamMap { map })
}

impl<'a> ParamMap<'a> {
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_i64())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_u64())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_f64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_bool())
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.map
            .and_then(|map| map.get(key))
            .and_then(|value| value.as_str())
    }
}

fn validate_kind(ctx: &'static str, key: &str, kind: ParamKind, value: &Value) -> Result<()> {
    let valid = match kind {
        ParamKind::Bool => value.is_boolean(),
        ParamKind::Int => value.as_i64().is_some(),
        ParamKind::UInt => value.as_u64().is_some(),
        ParamKind::Float => value.as_f64().is_some(),
        ParamKind::String => value.is_string(),
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{ctx}: invalid value for param '{key}'"
        )))
    }
}
