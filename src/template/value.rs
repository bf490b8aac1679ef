use serde_json::Value;

use crate::template::Context;

/// Lexical scope for rendering: the message context plus loop bindings.
pub(crate) struct Scope<'a> {
    vars: &'a Context,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn root(vars: &'a Context) -> Self {
        Self { vars, parent: None }
    }

    pub(crate) fn child(vars: &'a Context, parent: &'a Scope<'a>) -> Self {
        Self {
            vars,
            parent: Some(parent),
        }
    }

    /// Resolve a dotted path such as `field.label` or `items.0`.
    ///
    /// The first segment is looked up in the innermost scope that defines it.
    pub(crate) fn lookup(&self, path: &str) -> Option<&'a Value> {
        let mut segments = path.split('.');
        let head = segments.next()?;
        let mut current = self.find(head)?;
        for segment in segments {
            current = descend(current, segment)?;
        }
        Some(current)
    }

    fn find(&self, key: &str) -> Option<&'a Value> {
        match self.vars.get(key) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.find(key)),
        }
    }
}

fn descend<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Text form of a substituted value. Missing and null render as nothing.
pub(crate) fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
