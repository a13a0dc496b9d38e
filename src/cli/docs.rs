//! Documentation content for prosel CLI

/// Get the grammar reference shown by `prosel docs`
pub fn get_docs_overview() -> &'static str {
    r#"PROSEL SELECTION LANGUAGE

A selection picks atoms out of a structure by name, position, residue and
chain. Keywords are case-insensitive; values are matched exactly.

PREDICATES

  atom CA             Atoms named CA
  atom 12             The atom at zero-based position 12
  residue ALA         Atoms of residues named ALA
  residue 10          Atoms of residue number 10
  residue 10 to 20    Atoms of residues 10 through 20 (inclusive)
  chain H             Atoms of chain H

  A value made only of digits is a number; anything containing a letter
  is a name. 'chain' takes names only.

OPERATORS

  and                 Both sides must match
  or                  Either side must match
  ( ... )             Grouping

  'and' and 'or' have the SAME precedence and group from the left:

    atom CA or atom CB and residue ALA
    reads as (atom CA or atom CB) and residue ALA

  Add parentheses when you mean something else:

    atom CA or (atom CB and residue ALA)

INPUT

  'prosel check' reads a JSON array of atoms from --input or stdin:

    [{"name": "CA", "residue": "ALA-1-", "chain": "A"}, ...]

  Residue labels are NAME-NUMBER[-INSERTION]. The position of an atom is
  its array index unless a "position" field is given.

EXAMPLES

  prosel check 'atom CA and chain A' --input atoms.json
  prosel tokens '(atom CA or atom CB) and residue ALA'
  prosel tree 'atom CA or atom CB and residue ALA'
"#
}
