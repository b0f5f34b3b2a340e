//! Golden-file tests over generated IR text. Each snapshot is the
//! exact, newline-joined `Display` rendering of a program's
//! instruction listing — a regression in label/temp allocation or
//! instruction shape shows up as a snapshot diff.

fn ir_listing(source: &str) -> String {
    let output = minilangc_driver::compile(source).expect("source should compile");
    output
        .ir
        .iter()
        .map(|instr| instr.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn golden_if_else() {
    insta::assert_snapshot!(ir_listing(
        "var a; a = 1; if (a > 0) { print(1); } else { print(0); }"
    ));
}

#[test]
fn golden_while_loop() {
    insta::assert_snapshot!(ir_listing(
        "var i; i = 0; while (i < 3) { print(i); i = i + 1; }"
    ));
}

#[test]
fn golden_unary_and_precedence() {
    insta::assert_snapshot!(ir_listing("var a; a = -(1 + 2) * 3;"));
}
