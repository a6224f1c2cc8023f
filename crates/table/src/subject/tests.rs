use proptest::prelude::*;

use super::*;
use crate::testing::Node;

fn chain(base: Node, flips: &[bool]) -> Node {
	flips
		.iter()
		.fold(base, |node, &flip| if flip { node.flip() } else { node.quiet() })
}

#[test]
fn test_base_subject_has_level_zero() {
	let node = Node::Lit(3);
	assert!(!node.is_decoration());
	assert_eq!(node.decoration_level(), 0);
	assert_eq!(node.as_decoration_at_level(0), Ok(&node));
	assert_eq!(node.base(), &node);
}

#[test]
fn test_base_subject_rejects_positive_level() {
	let node = Node::Scale(3);
	assert_eq!(
		node.as_decoration_at_level(1),
		Err(InvalidLevel { requested: 1, level: 0 })
	);
}

#[test]
fn test_decoration_walks_toward_base() {
	let node = Node::Lit(5).quiet().flip();
	assert!(node.is_decoration());
	assert_eq!(node.decoration_level(), 2);
	assert_eq!(node.value(), -5);

	assert_eq!(node.as_decoration_at_level(1), Ok(&Node::Lit(5).quiet()));
	assert_eq!(node.as_decoration_at_level(0), Ok(&Node::Lit(5)));
	assert_eq!(
		node.as_decoration_at_level(3),
		Err(InvalidLevel { requested: 3, level: 2 })
	);
}

#[test]
fn test_invalid_level_message() {
	let err = Node::Lit(1).quiet().as_decoration_at_level(4).unwrap_err();
	assert_eq!(err.to_string(), "subject at decoration level 1 cannot be viewed at level 4");
}

proptest! {
	#[test]
	fn prop_level_zero_is_terminal_base(value in -1000i64..1000, flips in prop::collection::vec(any::<bool>(), 0..16)) {
		let node = chain(Node::Lit(value), &flips);
		prop_assert_eq!(node.decoration_level(), flips.len());
		prop_assert_eq!(node.as_decoration_at_level(0).unwrap(), &Node::Lit(value));
		prop_assert_eq!(node.base(), &Node::Lit(value));
	}

	#[test]
	fn prop_own_level_is_same_instance(value in any::<i32>(), flips in prop::collection::vec(any::<bool>(), 0..16)) {
		let node = chain(Node::Scale(i64::from(value)), &flips);
		let own = node.as_decoration_at_level(node.decoration_level()).unwrap();
		prop_assert!(std::ptr::eq(own, &node));
	}

	#[test]
	fn prop_every_intermediate_level_matches(flips in prop::collection::vec(any::<bool>(), 1..12)) {
		let node = chain(Node::Lit(7), &flips);
		for level in 0..=flips.len() {
			let view = node.as_decoration_at_level(level).unwrap();
			prop_assert_eq!(view.decoration_level(), level);
			prop_assert_eq!(view, &chain(Node::Lit(7), &flips[..level]));
		}
		prop_assert!(node.as_decoration_at_level(flips.len() + 1).is_err());
	}
}
