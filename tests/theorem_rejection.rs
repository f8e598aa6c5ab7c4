//! Compile-time rejection of ill-typed theorems.
//!
//! Each file under `tests/ui/` claims a theorem its proof does not prove,
//! and must fail to type-check with the recorded diagnostic.

#[test]
fn ill_typed_theorems_are_rejected() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
