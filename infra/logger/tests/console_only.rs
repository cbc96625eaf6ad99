use plist_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("plist-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(publishers = 0, "console logging ready");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
