use std::fs;

use tempfile::tempdir;

use lore_lang::{codegen::Codegen, lexer::Lexer, parser, preprocessor::preprocess};

fn emit(source: &str) -> String {
    let tokens = Lexer::new(source).lex().expect("lexing failed");
    let program = parser::parse(&mut tokens.into()).expect("parsing failed");
    Codegen::new().generate(&program)
}

#[test]
fn incorporated_function_compiles_with_the_main_file() {
    let dir = tempdir().expect("tempdir failed");
    fs::write(
        dir.path().join("lib.inc"),
        "algorithm double(x: whole) -> whole begin result x * 2; end",
    )
    .expect("writing include failed");

    let source = "incorporate \"lib.inc\"
algorithm main() -> whole begin
    reveal(double(21));
    result 0;
end";

    let expanded = preprocess(source, dir.path()).expect("preprocessing failed");
    let cpp = emit(&expanded);

    assert!(cpp.contains("int double(int x) {"));
    assert!(cpp.contains("reveal(double(21));"));
}

#[test]
fn missing_include_is_a_fatal_error_naming_both_locations() {
    let dir = tempdir().expect("tempdir failed");

    let error = preprocess("incorporate \"lib.inc\"", dir.path())
        .expect_err("preprocessing should fail");

    let message = error.to_string();
    assert!(message.contains("Could not find included file: 'lib.inc'"));
    assert!(message.contains(&dir.path().display().to_string()));
}

#[test]
fn include_directory_wins_over_working_directory() {
    let dir = tempdir().expect("tempdir failed");
    fs::write(dir.path().join("common.inc"), "datum origin: whole = 1;")
        .expect("writing include failed");

    let expanded =
        preprocess("incorporate \"common.inc\"", dir.path()).expect("preprocessing failed");

    assert_eq!("datum origin: whole = 1;", expanded);
}
