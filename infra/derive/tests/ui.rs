#[test]
fn macros_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/plist_error_pass.rs");
    t.pass("tests/ui/api_model_pass.rs");
}
