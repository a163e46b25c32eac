/// Join clause kind for multi-root queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
}

impl JoinKind {
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Inner => "join",
            Self::LeftOuter => "left outer join",
        }
    }
}

#[derive(Debug, Clone)]
struct JoinEntry {
    kind: JoinKind,
    on: String,
}

/// User-declared ordered list of extra join clauses for multi-root queries.
///
/// ON fragments are raw SQL referencing the positional root aliases
/// `o1..oN`; nothing is validated or escaped, so callers must not embed
/// untrusted input.
#[derive(Debug, Clone, Default)]
pub struct JoinSpec {
    entries: Vec<JoinEntry>,
}

impl JoinSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an inner join clause.
    #[must_use]
    pub fn ij(mut self, on: &str) -> Self {
        self.entries.push(JoinEntry {
            kind: JoinKind::Inner,
            on: on.to_string(),
        });
        self
    }

    /// Appends a left outer join clause.
    #[must_use]
    pub fn loj(mut self, on: &str) -> Self {
        self.entries.push(JoinEntry {
            kind: JoinKind::LeftOuter,
            on: on.to_string(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kind(&self, i: usize) -> JoinKind {
        self.entries[i].kind
    }

    pub fn on(&self, i: usize) -> &str {
        &self.entries[i].on
    }
}

/// Starts a join specification with one inner join.
pub fn ij(on: &str) -> JoinSpec {
    JoinSpec::new().ij(on)
}

/// Starts a join specification with one left outer join.
pub fn loj(on: &str) -> JoinSpec {
    JoinSpec::new().loj(on)
}
