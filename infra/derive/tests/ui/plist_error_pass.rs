use plist_derive::plist_error;
use std::borrow::Cow;

#[plist_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Conflict{}: {name}", format_context(.context))]
    Conflict { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, DemoError> {
    std::fs::read_to_string(path).context("Reading demo file")
}

fn main() {
    let _ = read("missing.txt");
    let _: DemoError = "boom".into();
}
