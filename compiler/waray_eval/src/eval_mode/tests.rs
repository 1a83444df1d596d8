use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_interpret() {
    assert_eq!(EvalMode::default(), EvalMode::Interpret);
}

#[test]
fn only_transpile_emits_source() {
    assert!(!EvalMode::Interpret.emits_source());
    assert!(EvalMode::Transpile.emits_source());
}

#[test]
fn both_modes_share_call_depth() {
    assert_eq!(EvalMode::Interpret.max_call_depth(), 10_000);
    assert_eq!(
        EvalMode::Transpile.max_call_depth(),
        EvalMode::Interpret.max_call_depth()
    );
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("Interpret".parse::<EvalMode>(), Ok(EvalMode::Interpret));
    assert_eq!(" TRANSPILE ".parse::<EvalMode>(), Ok(EvalMode::Transpile));
}

#[test]
fn parse_rejects_unknown_mode() {
    assert_eq!(
        "compile".parse::<EvalMode>(),
        Err(UnknownMode("compile".to_string()))
    );
}

#[test]
fn display_round_trips() {
    for mode in [EvalMode::Interpret, EvalMode::Transpile] {
        assert_eq!(mode.to_string().parse::<EvalMode>(), Ok(mode));
    }
}
