use super::*;

#[test]
fn test_decorations_transform_value() {
	assert_eq!(Element::add(5).value(), 5);
	assert_eq!(Element::add(5).ignored().value(), 5);
	assert_eq!(Element::add(5).reversed().value(), -5);
	assert_eq!(Element::mult(-3).reversed().reversed().value(), -3);
	assert_eq!(Element::mult(i64::MIN).reversed().value(), i64::MIN);
}

#[test]
fn test_kinds_and_levels() {
	let element = Element::mult(2).reversed().ignored();
	assert_eq!(element.kind(), ElementKind::Ignore);
	assert_eq!(element.decoration_level(), 2);
	assert_eq!(element.decoratee().map(Subject::kind), Some(ElementKind::Reverse));
	assert_eq!(element.base().kind(), ElementKind::Mult);
	assert_eq!(element.as_decoration_at_level(0), Ok(&Element::mult(2)));
}

#[test]
fn test_display() {
	assert_eq!(Element::add(5).to_string(), "Add(5)");
	assert_eq!(Element::mult(-2).reversed().ignored().to_string(), "[Ignore] [Reverse] Mult(-2)");
}

#[test]
fn test_kind_names_parse_case_insensitively() {
	assert_eq!("reverse".parse::<ElementKind>(), Ok(ElementKind::Reverse));
	assert_eq!(" MULT".parse::<ElementKind>(), Ok(ElementKind::Mult));
	assert_eq!("Total".parse::<ElementKind>(), Err(UnknownKindName("Total".to_string())));
}

#[test]
fn test_decoration_kinds_are_flagged() {
	for kind in ElementKind::BASE {
		assert!(!kind.is_decoration());
	}
	for kind in ElementKind::DECORATIONS {
		assert!(kind.is_decoration());
	}
}

#[test]
fn test_uncached_elements_do_not_share_bases() {
	let a = Element::add(1);
	let b = Element::add(1);
	assert_eq!(a, b);
	assert!(!a.shares_base_with(&b));
	assert!(a.shares_base_with(&a.clone().reversed()));
}
