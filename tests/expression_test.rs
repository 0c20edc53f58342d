mod common;
use common::*;

fn expr(e: &str) -> String {
    block(&compile(&format!("10 PRINT {}", e)), 10)
        .trim_end_matches("print cr ")
        .to_string()
}

#[test]
fn test_precedence() {
    assert_eq!(expr("2 + 3 * 4"), "2 3 4 * + ");
    assert_eq!(expr("2 * 3 + 4"), "2 3 * 4 + ");
    assert_eq!(expr("(2 + 3) * 4"), "2 3 + 4 * ");
    assert_eq!(expr("((2))"), "2 ");
}

#[test]
fn test_left_to_right() {
    assert_eq!(expr("9 - 3 - 2"), "9 3 - 2 - ");
    assert_eq!(expr("100/10/5"), "100 10 / 5 / ");
    assert_eq!(expr("7 % 3 * 2"), "7 3 mod 2 * ");
}

#[test]
fn test_variables_load() {
    let out = compile("10 PRINT A + B * A");
    assert_eq!(block(&out, 10), "A @ B @ A @ * + print cr ");
    assert_eq!(data(&out), vec![":var A", ":var B"]);
}

#[test]
fn test_intrinsics() {
    assert_eq!(expr("ABS(X - 10)"), "X @ 10 - abs ");
    assert_eq!(expr("SGN(X)"), "X @ sgn ");
    assert_eq!(expr("PEEK(4096 + 2)"), "4096 2 + @ ");
    assert_eq!(expr("RND(100)"), "100 rnd ");
    assert_eq!(expr("MAX(1, 2) * MIN(3 + 4, 5)"), "1 2 max 3 4 + 5 min * ");
}

#[test]
fn test_var_reference_is_not_declared() {
    let out = compile("10 POKE VAR(A), 3");
    assert_eq!(block(&out, 10), "A 3 ! ");
    assert!(data(&out).is_empty());
}

#[test]
fn test_print_list() {
    let out = compile("10 PRINT \"A=\", A, \"B=\", B");
    assert_eq!(
        block(&out, 10),
        "\"A=\" prints A @ print \"B=\" prints B @ print cr "
    );
}
