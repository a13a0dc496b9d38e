//! Host-side view of the atoms a selection runs against.
//!
//! The selection engine only needs four read-only attributes per atom, exposed
//! through [`Candidate`]. [`Atom`] is a plain owned implementation used by the
//! CLI and the tests; structure libraries implement [`Candidate`] on their own
//! atom handles instead.

use std::sync::LazyLock;

use regex::Regex;

/// What the interpreter reads from an atom.
pub trait Candidate {
    /// Atom name, e.g. `CA`
    fn name(&self) -> &str;

    /// Zero-based position of the atom within its structure
    fn position(&self) -> usize;

    /// Owning residue as `NAME-NUMBER[-INSERTION]`, e.g. `ALA-1-`
    fn residue_label(&self) -> &str;

    /// Owning chain, e.g. `H`
    fn chain_label(&self) -> &str;
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn residue_label(&self) -> &str {
        (**self).residue_label()
    }

    fn chain_label(&self) -> &str {
        (**self).chain_label()
    }
}

/// An atom with its residue and chain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub name: String,
    pub position: usize,
    pub residue: String,
    pub chain: String,
}

impl Atom {
    pub fn new(
        position: usize,
        name: impl Into<String>,
        residue: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        Atom {
            name: name.into(),
            position,
            residue: residue.into(),
            chain: chain.into(),
        }
    }
}

impl Candidate for Atom {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> usize {
        self.position
    }

    fn residue_label(&self) -> &str {
        &self.residue
    }

    fn chain_label(&self) -> &str {
        &self.chain
    }
}

// The number may be negative (`ALA--3-`), so it gets its own alternative
// before the generic "anything up to the next dash".
static RESIDUE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<name>[^-]*)-(?<number>-?[0-9]+|[^-]*)(?:-(?<insertion>.*))?$")
        .expect("residue label pattern is valid")
});

/// A residue label split into its parts.
///
/// ```
/// use prosel::structure::ResidueLabel;
///
/// let label = ResidueLabel::parse("GLY-52-A");
/// assert_eq!(label.name, "GLY");
/// assert_eq!(label.number(), Some(52));
/// assert_eq!(label.insertion, Some("A"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueLabel<'a> {
    pub name: &'a str,
    /// Number component as written, `None` when the label has no separator
    pub number: Option<&'a str>,
    /// Insertion code, `Some("")` for a trailing separator
    pub insertion: Option<&'a str>,
}

impl<'a> ResidueLabel<'a> {
    /// Splits a label. A label without any `-` is taken to be a bare residue
    /// name.
    pub fn parse(label: &'a str) -> Self {
        match RESIDUE_LABEL.captures(label) {
            Some(caps) => ResidueLabel {
                name: caps.name("name").map_or("", |m| m.as_str()),
                number: caps.name("number").map(|m| m.as_str()),
                insertion: caps.name("insertion").map(|m| m.as_str()),
            },
            None => ResidueLabel {
                name: label,
                number: None,
                insertion: None,
            },
        }
    }

    /// Number component as an integer, used for range comparisons.
    pub fn number(&self) -> Option<i64> {
        self.number.and_then(|n| n.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_empty_insertion() {
        let label = ResidueLabel::parse("ALA-1-");
        assert_eq!(label.name, "ALA");
        assert_eq!(label.number, Some("1"));
        assert_eq!(label.number(), Some(1));
        assert_eq!(label.insertion, Some(""));
    }

    #[test]
    fn label_without_insertion() {
        let label = ResidueLabel::parse("SER-140");
        assert_eq!(label.name, "SER");
        assert_eq!(label.number(), Some(140));
        assert_eq!(label.insertion, None);
    }

    #[test]
    fn label_with_negative_number() {
        let label = ResidueLabel::parse("MET--3-B");
        assert_eq!(label.name, "MET");
        assert_eq!(label.number(), Some(-3));
        assert_eq!(label.insertion, Some("B"));
    }

    #[test]
    fn bare_name() {
        let label = ResidueLabel::parse("HOH");
        assert_eq!(label.name, "HOH");
        assert_eq!(label.number(), None);
    }

    #[test]
    fn non_numeric_number_component() {
        let label = ResidueLabel::parse("ALA-x1-");
        assert_eq!(label.number, Some("x1"));
        assert_eq!(label.number(), None);
    }

    #[test]
    fn candidate_through_reference() {
        let atom = Atom::new(3, "CB", "ALA-1-", "A");
        let by_ref: &Atom = &atom;
        assert_eq!(Candidate::name(&by_ref), "CB");
        assert_eq!(Candidate::position(&by_ref), 3);
    }
}
