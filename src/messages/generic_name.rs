use crate::config::consts::GENERIC_SEGMENT;

/// Replace every array-index segment of a field path with the `$` wildcard.
///
/// A segment is an index when it is a non-empty run of ASCII digits. All other
/// segments are left untouched, so one template keyed by `items.$.name` serves
/// `items.0.name`, `items.1.name` and so on, at any nesting depth.
///
/// Returns `None` when there is no name.
///
/// # Example
/// ```
/// use message_box::messages::make_name_generic;
///
/// assert_eq!(make_name_generic(Some("a.0.b.3")).as_deref(), Some("a.$.b.$"));
/// assert_eq!(make_name_generic(Some("a.b")).as_deref(), Some("a.b"));
/// assert_eq!(make_name_generic(None), None);
/// ```
pub fn make_name_generic(name: Option<&str>) -> Option<String> {
    let name = name?;
    let generic = name
        .split('.')
        .map(|segment| if is_index(segment) { GENERIC_SEGMENT } else { segment })
        .collect::<Vec<_>>()
        .join(".");
    Some(generic)
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_name_generic_table_driven() {
        struct TestCase {
            name: &'static str,
            input: Option<&'static str>,
            expected: Option<&'static str>,
        }

        let test_cases = vec![
            TestCase { name: "plain field", input: Some("email"), expected: Some("email") },
            TestCase { name: "nested object", input: Some("a.b"), expected: Some("a.b") },
            TestCase { name: "trailing index", input: Some("items.2"), expected: Some("items.$") },
            TestCase { name: "inner index", input: Some("items.2.label"), expected: Some("items.$.label") },
            TestCase { name: "multiple indexes", input: Some("a.0.b.3"), expected: Some("a.$.b.$") },
            TestCase { name: "adjacent indexes", input: Some("matrix.1.22"), expected: Some("matrix.$.$") },
            TestCase { name: "leading index", input: Some("0.name"), expected: Some("$.name") },
            TestCase { name: "digits inside segment", input: Some("foo2.bar"), expected: Some("foo2.bar") },
            TestCase { name: "signed number", input: Some("a.-1"), expected: Some("a.-1") },
            TestCase { name: "already generic", input: Some("foo2.$.bar"), expected: Some("foo2.$.bar") },
            TestCase { name: "empty segment", input: Some("a..b"), expected: Some("a..b") },
            TestCase { name: "empty name", input: Some(""), expected: Some("") },
            TestCase { name: "no name", input: None, expected: None },
        ];

        for test_case in test_cases {
            assert_eq!(
                make_name_generic(test_case.input).as_deref(),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }
}
