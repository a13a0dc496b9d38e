use std::fmt;

/// Selection keyword that opens a leaf predicate.
///
/// Keywords are matched case-insensitively; the value after them is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Atom,
    Residue,
    Chain,
}

impl Keyword {
    /// Looks up a keyword by its source text, ignoring case.
    pub fn lookup(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "atom" => Some(Keyword::Atom),
            "residue" => Some(Keyword::Residue),
            "chain" => Some(Keyword::Chain),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Atom => "atom",
            Keyword::Residue => "residue",
            Keyword::Chain => "chain",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved category of a leaf predicate.
///
/// Determined once by the parser from the keyword and the lexical kind of its
/// value. A leaf never carries an unresolved kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    AtomName,
    AtomNumber,
    ResidueName,
    ResidueNumber,
    ResidueRange,
    ChainName,
}

impl LeafKind {
    pub fn name(self) -> &'static str {
        match self {
            LeafKind::AtomName => "atom-name",
            LeafKind::AtomNumber => "atom-number",
            LeafKind::ResidueName => "residue-name",
            LeafKind::ResidueNumber => "residue-number",
            LeafKind::ResidueRange => "residue-range",
            LeafKind::ChainName => "chain-name",
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single attribute comparison against a candidate atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Atom name equals the value (exact, case-sensitive)
    ///
    /// # Example
    /// ```text
    /// atom CA
    /// ```
    AtomName(String),

    /// Zero-based atom position equals the value
    ///
    /// # Example
    /// ```text
    /// atom 12
    /// ```
    AtomNumber(usize),

    /// Residue name component of the residue label equals the value
    ///
    /// # Example
    /// ```text
    /// residue ALA
    /// ```
    ResidueName(String),

    /// Number component of the residue label equals the value as written,
    /// so `residue 02` does not match `ALA-2-`
    ///
    /// # Example
    /// ```text
    /// residue 10
    /// ```
    ResidueNumber(String),

    /// Residue sequence number lies in `start..=end`
    ///
    /// # Example
    /// ```text
    /// residue 10 to 20
    /// ```
    ResidueRange { start: i64, end: i64 },

    /// Chain label equals the value
    ///
    /// # Example
    /// ```text
    /// chain H
    /// ```
    ChainName(String),
}

impl Predicate {
    pub fn kind(&self) -> LeafKind {
        match self {
            Predicate::AtomName(_) => LeafKind::AtomName,
            Predicate::AtomNumber(_) => LeafKind::AtomNumber,
            Predicate::ResidueName(_) => LeafKind::ResidueName,
            Predicate::ResidueNumber(_) => LeafKind::ResidueNumber,
            Predicate::ResidueRange { .. } => LeafKind::ResidueRange,
            Predicate::ChainName(_) => LeafKind::ChainName,
        }
    }

    pub fn keyword(&self) -> Keyword {
        match self {
            Predicate::AtomName(_) | Predicate::AtomNumber(_) => Keyword::Atom,
            Predicate::ResidueName(_)
            | Predicate::ResidueNumber(_)
            | Predicate::ResidueRange { .. } => Keyword::Residue,
            Predicate::ChainName(_) => Keyword::Chain,
        }
    }

    /// The comparison value as it would be written in a selection.
    pub fn value(&self) -> String {
        match self {
            Predicate::AtomName(text)
            | Predicate::ResidueName(text)
            | Predicate::ResidueNumber(text)
            | Predicate::ChainName(text) => text.clone(),
            Predicate::AtomNumber(n) => n.to_string(),
            Predicate::ResidueRange { start, end } => format!("{start} to {end}"),
        }
    }
}

/// Renders the predicate back as selection source, e.g. `residue 10 to 20`.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword(), self.value())
    }
}
