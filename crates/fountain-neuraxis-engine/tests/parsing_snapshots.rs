use fountain_neuraxis_engine::{Diagnostic, parse_with_sink};

#[test]
fn fixture_brick_and_steel() {
    assert_fixture("brick_and_steel");
}

fn assert_fixture(name: &str) {
    let source = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.fountain",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let doc = parse_with_sink(&source, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");

    insta::assert_yaml_snapshot!(name, doc);
}
