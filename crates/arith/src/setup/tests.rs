use pretty_assertions::assert_eq;
use rstest::rstest;
use strata_table::{Action, HandlerKind};

use super::*;

fn elements() -> Vec<Element> {
	vec![
		Element::add(5),
		Element::mult(10),
		Element::add(-20),
		Element::mult(-5).ignored(),
		Element::add(3).reversed(),
	]
}

fn run(registry: &ArithRegistry, kind: OperationKind) -> Result<i64, RegistryError> {
	let mut operation = Operation::of_kind(kind);
	registry.apply_to_all(&mut operation, &elements())?;
	Ok(operation.retrieve())
}

#[rstest]
#[case::default(Setup::Default, 27, 4)]
#[case::ignore(Setup::Ignore, 30, 3)]
#[case::bypass(Setup::Bypass, -147, 5)]
fn test_preset_results(#[case] setup: Setup, #[case] total: i64, #[case] count: i64) {
	let registry = standard_registry(setup).unwrap();
	assert_eq!(run(&registry, OperationKind::Total), Ok(total));
	assert_eq!(run(&registry, OperationKind::Count), Ok(count));
}

#[test]
fn test_strict_preset_rejects_decorations() {
	let registry = standard_registry(Setup::Strict).unwrap();
	let expected = Err(RegistryError::UnsupportedDispatch {
		action: "Total".to_string(),
		subject: "Ignore".to_string(),
	});
	assert_eq!(run(&registry, OperationKind::Total), expected);

	let mut total = Operation::total();
	let _ = registry.apply_to_all(&mut total, &elements());
	assert_eq!(total.retrieve(), 30);
}

#[rstest]
fn test_presets_lock_decoration_rows(#[values(Setup::Strict, Setup::Ignore, Setup::Default, Setup::Bypass)] setup: Setup) {
	let registry = standard_registry(setup).unwrap();
	for kind in ElementKind::DECORATIONS {
		assert_eq!(registry.is_subject_locked(kind), Ok(true));
	}
	for kind in ElementKind::BASE {
		assert_eq!(registry.is_subject_locked(kind), Ok(false));
		assert_eq!(registry.strategy_kind_for(OperationKind::Count, kind), Ok(HandlerKind::Custom("count-element")));
	}
	assert_eq!(registry.policy(), setup.policy());
}

#[test]
fn test_default_preset_ignores_the_ignore_row() {
	let registry = standard_registry(Setup::Default).unwrap();
	for action in OperationKind::ALL {
		assert_eq!(registry.strategy_kind_for(action, ElementKind::Ignore), Ok(HandlerKind::Noop));
		assert_eq!(registry.strategy_kind_for(action, ElementKind::Reverse), Ok(HandlerKind::Substitute));
	}
}

#[rstest]
#[case("strict", Setup::Strict)]
#[case("illegal", Setup::Strict)]
#[case("null", Setup::Ignore)]
#[case("No-Defer", Setup::Ignore)]
#[case(" default ", Setup::Default)]
#[case("BYPASS", Setup::Bypass)]
fn test_setup_names_parse(#[case] input: &str, #[case] expected: Setup) {
	assert_eq!(input.parse::<Setup>(), Ok(expected));
}

#[test]
fn test_setup_display_round_trips() {
	for setup in Setup::ALL {
		assert_eq!(setup.to_string().parse::<Setup>(), Ok(setup));
	}
	assert!("sideways".parse::<Setup>().is_err());
}

#[test]
fn test_extra_locks_keep_policy_defaults() {
	let registry = standard_registry_with_locks(Setup::Default, [KindLock::Element(ElementKind::Mult)]).unwrap();
	assert_eq!(registry.strategy_kind_for(OperationKind::Total, ElementKind::Mult), Ok(HandlerKind::Noop));
	assert_eq!(registry.strategy_kind_for(OperationKind::Count, ElementKind::Mult), Ok(HandlerKind::Noop));
	assert_eq!(run(&registry, OperationKind::Total), Ok(-18));
	assert_eq!(run(&registry, OperationKind::Count), Ok(3));

	let registry = standard_registry_with_locks(Setup::Bypass, [KindLock::Operation(OperationKind::Count)]).unwrap();
	assert_eq!(run(&registry, OperationKind::Count), Ok(0));
	assert_eq!(run(&registry, OperationKind::Total), Ok(-147));
}

#[test]
fn test_lock_names_cover_both_axes() {
	assert_eq!("ignore".parse::<KindLock>(), Ok(KindLock::Element(ElementKind::Ignore)));
	assert_eq!("count".parse::<KindLock>(), Ok(KindLock::Operation(OperationKind::Count)));
	assert_eq!(KindLock::Operation(OperationKind::Total).to_string(), "Total");
	assert!("sum".parse::<KindLock>().is_err());
}
