//! Property tests for selection evaluation
//!
//! AND behaves as set intersection, OR as set union, and a single atom-name
//! predicate selects exactly the atoms carrying that name.

use proptest::prelude::*;

use prosel::{compile, structure::Atom};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

fn atom_name_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("N"), Just("CA"), Just("C"), Just("O"), Just("CB")]
}

fn residue_name_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ALA"), Just("GLY"), Just("SER"), Just("LYS")]
}

fn chain_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("A"), Just("B"), Just("H")]
}

/// Atoms with consecutive positions and random labels
fn atoms_strategy() -> impl Strategy<Value = Vec<Atom>> {
    prop::collection::vec(
        (atom_name_strategy(), residue_name_strategy(), 1..=6i64, chain_strategy()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, res, num, chain))| {
                Atom::new(i, name, format!("{res}-{num}-"), chain)
            })
            .collect()
    })
}

/// A single leaf predicate as selection source
fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        atom_name_strategy().prop_map(|n| format!("atom {n}")),
        (0..40usize).prop_map(|n| format!("atom {n}")),
        residue_name_strategy().prop_map(|r| format!("residue {r}")),
        (1..=6i64).prop_map(|n| format!("residue {n}")),
        (1..=6i64, 0..=3i64).prop_map(|(s, w)| format!("residue {s} to {}", s + w)),
        chain_strategy().prop_map(|c| format!("chain {c}")),
    ]
}

/// A small expression, possibly grouped
fn expression_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(3, 8, 2, |inner| {
        (inner.clone(), prop_oneof![Just("and"), Just("or")], inner)
            .prop_map(|(l, op, r)| format!("({l}) {op} ({r})"))
    })
}

fn select(source: &str, atoms: &[Atom]) -> Vec<usize> {
    compile(source).unwrap().evaluate(atoms).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn and_is_intersection(
        atoms in atoms_strategy(),
        a in expression_strategy(),
        b in expression_strategy(),
    ) {
        let left = select(&a, &atoms);
        let right = select(&b, &atoms);
        let expected: Vec<usize> = left.iter().copied().filter(|i| right.contains(i)).collect();
        prop_assert_eq!(select(&format!("({a}) and ({b})"), &atoms), expected);
    }

    #[test]
    fn or_is_union(
        atoms in atoms_strategy(),
        a in expression_strategy(),
        b in expression_strategy(),
    ) {
        let left = select(&a, &atoms);
        let right = select(&b, &atoms);
        let expected: Vec<usize> = (0..atoms.len())
            .filter(|i| left.contains(i) || right.contains(i))
            .collect();
        prop_assert_eq!(select(&format!("({a}) or ({b})"), &atoms), expected);
    }

    #[test]
    fn atom_name_selects_exact_matches(atoms in atoms_strategy(), name in atom_name_strategy()) {
        let expected: Vec<usize> = atoms
            .iter()
            .filter(|a| a.name == name)
            .map(|a| a.position)
            .collect();
        prop_assert_eq!(select(&format!("atom {name}"), &atoms), expected);
    }

    #[test]
    fn results_are_ascending_and_unique(atoms in atoms_strategy(), expr in expression_strategy()) {
        let result = select(&expr, &atoms);
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn evaluation_is_idempotent(atoms in atoms_strategy(), expr in expression_strategy()) {
        let selection = compile(&expr).unwrap();
        prop_assert_eq!(selection.evaluate(&atoms).unwrap(), selection.evaluate(&atoms).unwrap());
    }

    #[test]
    fn rendered_tree_reparses_to_same_tree(expr in expression_strategy()) {
        let first = compile(&expr).unwrap();
        let second = compile(&first.root().to_string()).unwrap();
        prop_assert_eq!(first.root(), second.root());
    }
}
