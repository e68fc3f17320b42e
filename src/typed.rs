//! Field transfer between typed structs with optional fields.
//!
//! The wire helpers in [`crate::fields`] name fields by string at runtime.
//! When both sides are Rust structs, the caller instead selects fields by
//! borrowing them (`&mut dest.foo`, `&src.foo`), so a misspelled or wrongly
//! typed field name is a compile error rather than a runtime one. Renaming
//! is just borrowing differently-named fields on each side.

/// Copy `src` into `dest` if it is set. `None` leaves `dest` unchanged,
/// including when `dest` already holds a value.
pub fn copy_if_present<T: Clone>(dest: &mut Option<T>, src: &Option<T>) {
    if let Some(value) = src {
        *dest = Some(value.clone());
    }
}

/// Copy `src` into `dest` if it is set, converting the value on the way.
pub fn convert_if_present<S, T, F>(dest: &mut Option<T>, src: &Option<S>, convert: F)
where
    F: FnOnce(&S) -> T,
{
    if let Some(value) = src {
        *dest = Some(convert(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct DestShape {
        foo: Option<String>,
        dest_foo: Option<String>,
        timeout: Option<String>,
    }

    #[derive(Default)]
    struct SrcShape {
        foo: Option<String>,
        src_foo: Option<String>,
        timeout_seconds: Option<f64>,
    }

    #[test]
    fn test_copy_present_field() {
        let mut dest = DestShape::default();
        let src = SrcShape {
            foo: Some("baz".to_string()),
            ..Default::default()
        };
        copy_if_present(&mut dest.foo, &src.foo);
        assert_eq!(dest.foo.as_deref(), Some("baz"));
    }

    #[test]
    fn test_copy_missing_field_is_noop() {
        let mut dest = DestShape::default();
        let src = SrcShape::default();
        copy_if_present(&mut dest.foo, &src.foo);
        assert!(dest.foo.is_none());
    }

    #[test]
    fn test_copy_missing_field_keeps_existing_value() {
        let mut dest = DestShape {
            foo: Some("original".to_string()),
            ..Default::default()
        };
        let src = SrcShape::default();
        copy_if_present(&mut dest.foo, &src.foo);
        assert_eq!(dest.foo.as_deref(), Some("original"));
    }

    #[test]
    fn test_rename_by_borrowing_different_fields() {
        let mut dest = DestShape::default();
        let src = SrcShape {
            src_foo: Some("baz".to_string()),
            ..Default::default()
        };
        copy_if_present(&mut dest.dest_foo, &src.src_foo);
        assert_eq!(dest.dest_foo.as_deref(), Some("baz"));
    }

    #[test]
    fn test_convert_present_field() {
        let mut dest = DestShape::default();
        let src = SrcShape {
            foo: Some("baz".to_string()),
            ..Default::default()
        };
        convert_if_present(&mut dest.foo, &src.foo, |s| format!("{s} transformed"));
        assert_eq!(dest.foo.as_deref(), Some("baz transformed"));
    }

    #[test]
    fn test_convert_across_types() {
        let mut dest = DestShape::default();
        let src = SrcShape {
            timeout_seconds: Some(60.0),
            ..Default::default()
        };
        convert_if_present(&mut dest.timeout, &src.timeout_seconds, |&secs| {
            crate::duration::from_seconds(secs)
        });
        assert_eq!(dest.timeout.as_deref(), Some("60s"));
    }
}
