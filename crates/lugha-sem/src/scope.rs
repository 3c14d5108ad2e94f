use lugha_util::Symbol;
use rustc_hash::FxHashSet;

/// A stack of lexical scopes (ribs). Declaring a name inserts into the
/// top rib; looking one up searches from the top down.
pub struct ScopeStack {
    ribs: Vec<FxHashSet<Symbol>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            ribs: vec![FxHashSet::default()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.ribs.push(FxHashSet::default());
    }

    pub fn exit_scope(&mut self) {
        self.ribs.pop();
    }

    /// Declares `name` in the innermost scope. Returns `false` if it was
    /// already declared there.
    pub fn declare(&mut self, name: Symbol) -> bool {
        self.ribs
            .last_mut()
            .expect("scope stack is never empty")
            .insert(name)
    }

    /// Whether `name` is visible from the innermost scope outward.
    pub fn is_declared(&self, name: Symbol) -> bool {
        self.ribs.iter().rev().any(|rib| rib.contains(&name))
    }
}
