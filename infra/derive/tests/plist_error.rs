use plist_derive::plist_error;
use std::borrow::Cow;

#[plist_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing record{}: {name}", format_context(.context))]
    Missing { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing(name: &str) -> Result<(), SampleError> {
    Err(SampleError::Missing { name: name.to_owned(), context: None })
}

#[test]
fn context_is_rendered_in_display() {
    let err = missing("a.com").context("Looking up domain").unwrap_err();
    assert_eq!(err.to_string(), "Missing record (Looking up domain): a.com");
}

#[test]
fn display_without_context_has_no_suffix() {
    let err = missing("a.com").unwrap_err();
    assert_eq!(err.to_string(), "Missing record: a.com");
}

#[test]
fn source_errors_convert_with_context() {
    let io: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    let err = io.context("Reading seed").unwrap_err();

    assert!(matches!(err, SampleError::Io { context: Some(ref c), .. } if c == "Reading seed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn open() -> Result<(), SampleError> {
        Err(std::io::Error::other("denied"))?;
        Ok(())
    }

    assert!(matches!(open(), Err(SampleError::Io { context: None, .. })));
}

#[test]
fn strings_convert_into_internal() {
    let from_static: SampleError = "static failure".into();
    let from_owned: SampleError = String::from("owned failure").into();

    assert!(matches!(from_static, SampleError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal error: owned failure");
}
