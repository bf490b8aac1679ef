/// Language used when neither the constructor nor the registry names one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Raw (unescaped) interpolation: `{{{expr}}}`.
///
/// Source form `{{{([^{}#][\s\S]+?)}}}`, with the literal braces escaped for the regex crate.
pub const DEFAULT_INTERPOLATE: &str = r"\{\{\{([^{}#][\s\S]+?)\}\}\}";

/// HTML-escaped interpolation: `{{expr}}`.
///
/// Source form `{{([^{}#][\s\S]+?)}}`.
pub const DEFAULT_ESCAPE: &str = r"\{\{([^{}#][\s\S]+?)\}\}";

/// Evaluate blocks such as `{{#if value}}`. Not applied unless configured.
///
/// Source form `{{#([^{}].*?)}}`.
pub const SUGGESTED_EVALUATE: &str = r"\{\{#([^{}].*?)\}\}";

/// Reserved key of a per-field message map used when no field-specific entry matches
pub const DEFAULT_FIELD_KEY: &str = "_default";

/// Wildcard segment replacing array indexes in generic field names
pub const GENERIC_SEGMENT: &str = "$";

/// Field name rendered in the fallback message when the error carries no name
/// (`"field is invalid"` reads better to end users than a placeholder like `undefined`)
pub const UNNAMED_FIELD: &str = "field";
