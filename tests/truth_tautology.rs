//! Integration tests for the two-valued tautology checker.

use conlogic::truth::{
    MAX_VARIABLES, TautologyError, Truth, TruthDiagnosticCode, Valuations, check_tautology,
    is_tautology,
};
use proptest::prelude::*;
use rstest::rstest;

use Truth::{False as F, True as T};

// ── Required scenarios ──────────────────────────────────────────────

#[rstest]
#[case::syllogism_f_t_f(Truth::syllogism(F, T, F), T)]
#[case::false_implies_false(F.implies(F), T)]
#[case::true_equiv_false(T.equiv(F), F)]
#[case::false_equiv_false(F.equiv(F), T)]
fn literal_scenarios_hold(#[case] actual: Truth, #[case] expected: Truth) {
    assert_eq!(actual, expected);
}

#[rstest]
fn syllogism_holds_under_every_valuation(
    #[values(T, F)] a: Truth,
    #[values(T, F)] b: Truth,
    #[values(T, F)] c: Truth,
) {
    assert_eq!(Truth::syllogism(a, b, c), T);
}

// ── Tautologies and non-tautologies ─────────────────────────────────

#[rstest]
#[case::excluded_middle(is_tautology(|[a]: [Truth; 1]| a | !a))]
#[case::double_negation(is_tautology(|[a]: [Truth; 1]| (!!a).equiv(a)))]
#[case::contraposition(is_tautology(|[a, b]: [Truth; 2]| {
    a.implies(b).equiv((!b).implies(!a))
}))]
#[case::de_morgan(is_tautology(|[a, b]: [Truth; 2]| (!(a | b)).equiv(!a & !b)))]
#[case::peirce(is_tautology(|[a, b]: [Truth; 2]| a.implies(b).implies(a).implies(a)))]
#[case::syllogism(is_tautology(|[a, b, c]: [Truth; 3]| Truth::syllogism(a, b, c)))]
fn classical_laws_are_tautologies(#[case] holds: Result<bool, TautologyError>) {
    assert_eq!(holds, Ok(true));
}

#[test]
fn affirming_the_consequent_is_falsified() {
    let result = check_tautology(|[a, b]: [Truth; 2]| a.implies(b).and(b).implies(a));
    assert_eq!(
        result,
        Err(TautologyError::Falsified {
            valuation: vec![F, T],
        })
    );
}

#[test]
fn contradiction_is_falsified_by_the_first_valuation() {
    let result = check_tautology(|[a]: [Truth; 1]| a & !a);
    assert_eq!(result, Err(TautologyError::Falsified { valuation: vec![T] }));
}

#[test]
fn formulas_without_variables_are_checked_once() {
    assert_eq!(is_tautology(|[]: [Truth; 0]| T), Ok(true));
    assert_eq!(is_tautology(|[]: [Truth; 0]| F), Ok(false));
}

#[test]
fn a_constant_truth_over_too_many_variables_is_not_judged() {
    assert_eq!(
        is_tautology(|_: [Truth; 17]| T),
        Err(TautologyError::TooManyVariables {
            requested: 17,
            max: MAX_VARIABLES,
        })
    );
}

#[test]
fn the_variable_limit_is_enforced() {
    assert!(Valuations::<MAX_VARIABLES>::new().is_ok());
    let result = check_tautology(|_: [Truth; 17]| T);
    assert_eq!(
        result,
        Err(TautologyError::TooManyVariables {
            requested: 17,
            max: 16,
        })
    );
}

// ── Diagnostics ─────────────────────────────────────────────────────

#[test]
fn falsified_diagnostic_renders_the_valuation() {
    let Err(error) = check_tautology(|[a, b]: [Truth; 2]| a.implies(b)) else {
        panic!("implication is not a tautology");
    };
    let diagnostic = error.diagnostic();
    assert_eq!(diagnostic.code, TruthDiagnosticCode::Falsified);
    assert_eq!(
        diagnostic.render(),
        "truth.falsified | formula is falsified by the valuation [T, F]"
    );
}

#[test]
fn too_many_variables_diagnostic_renders_the_limit() {
    let Err(error) = check_tautology(|_: [Truth; 20]| T) else {
        panic!("twenty variables are over the limit");
    };
    assert_eq!(
        error.diagnostic().render(),
        "truth.too_many_variables | cannot enumerate 20 variables; at most 16 are supported"
    );
}

// ── Agreement with `bool` ───────────────────────────────────────────

proptest! {
    #[test]
    fn connectives_agree_with_bool(a in any::<bool>(), b in any::<bool>()) {
        let (ta, tb) = (Truth::from(a), Truth::from(b));
        prop_assert_eq!(bool::from(ta & tb), a && b);
        prop_assert_eq!(bool::from(ta | tb), a || b);
        prop_assert_eq!(bool::from(!ta), !a);
        prop_assert_eq!(bool::from(ta.implies(tb)), !a || b);
        prop_assert_eq!(bool::from(ta.equiv(tb)), a == b);
    }
}
