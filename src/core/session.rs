// This module provides arena-based compilation session management using the bumpalo crate.
// CompilationSession is the per-compilation state object: it borrows the arena that owns
// temporary names and the emitter's operand stack, hands out sequential temporaries
// (t0, t1, ...) from a counter that starts at zero for every session, and records
// compilation statistics. A session is created for exactly one compilation and dropped with
// its arena, so concurrent compilations never share scratch state. SessionStats tracks
// tokens lexed, instructions emitted, the per-mnemonic instruction breakdown (kept in a
// hashbrown map) and the deepest operand stack observed while emitting.

//! Arena-based compilation session management.
//!
//! All scratch data of one compilation is tied to the session lifetime.

use bumpalo::Bump;
use hashbrown::HashMap;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Per-compilation state: arena, temporary counter and statistics.
pub struct CompilationSession<'arena> {
    /// Arena allocator for temporaries and operand stacks.
    arena: &'arena Bump,

    /// Index of the next temporary to hand out.
    next_temp: Cell<u32>,

    /// Session statistics for debugging.
    stats: RefCell<SessionStats>,
}

impl<'arena> CompilationSession<'arena> {
    /// Create a new compilation session with the given arena.
    pub fn new(arena: &'arena Bump) -> Self {
        Self {
            arena,
            next_temp: Cell::new(0),
            stats: RefCell::new(SessionStats::default()),
        }
    }

    /// Get access to the arena allocator.
    pub fn arena(&self) -> &'arena Bump {
        self.arena
    }

    /// Allocate the next temporary name in the arena.
    pub fn next_temp(&self) -> &'arena str {
        let index = self.next_temp.get();
        self.next_temp.set(index + 1);
        self.stats.borrow_mut().temporaries_allocated += 1;
        bumpalo::format!(in self.arena, "t{}", index).into_bump_str()
    }

    /// Number of temporaries handed out so far.
    pub fn temp_count(&self) -> u32 {
        self.next_temp.get()
    }

    pub fn record_tokens(&self, count: usize) {
        self.stats.borrow_mut().tokens_lexed += count;
    }

    /// Record an emitted instruction.
    pub fn record_instruction(&self, mnemonic: &'static str) {
        let mut stats = self.stats.borrow_mut();
        stats.instructions_emitted += 1;
        *stats.instruction_counts.entry(mnemonic).or_insert(0) += 1;
    }

    pub fn record_stack_depth(&self, depth: usize) {
        let mut stats = self.stats.borrow_mut();
        stats.max_operand_depth = stats.max_operand_depth.max(depth);
    }

    /// Snapshot of the compilation statistics.
    pub fn stats(&self) -> SessionStats {
        self.stats.borrow().clone()
    }
}

/// Compilation session statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub tokens_lexed: usize,
    pub temporaries_allocated: usize,
    pub instructions_emitted: usize,
    /// Breakdown by TAC mnemonic.
    pub instruction_counts: HashMap<&'static str, usize>,
    pub max_operand_depth: usize,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compilation Statistics:")?;
        writeln!(f, "  Tokens lexed: {}", self.tokens_lexed)?;
        writeln!(f, "  Instructions emitted: {}", self.instructions_emitted)?;
        writeln!(f, "  Temporaries allocated: {}", self.temporaries_allocated)?;
        writeln!(f, "  Max operand stack depth: {}", self.max_operand_depth)?;

        if !self.instruction_counts.is_empty() {
            writeln!(f, "  Instruction breakdown:")?;
            let mut counts: Vec<_> = self.instruction_counts.iter().collect();
            counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
            for (mnemonic, count) in counts {
                writeln!(f, "    {}: {}", mnemonic, count)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporaries_are_sequential_from_zero() {
        let arena = Bump::new();
        let session = CompilationSession::new(&arena);

        assert_eq!(session.next_temp(), "t0");
        assert_eq!(session.next_temp(), "t1");
        assert_eq!(session.next_temp(), "t2");
        assert_eq!(session.temp_count(), 3);
        assert_eq!(session.stats().temporaries_allocated, 3);
    }

    #[test]
    fn test_fresh_session_restarts_counter() {
        let arena = Bump::new();
        let first = CompilationSession::new(&arena);
        first.next_temp();
        first.next_temp();

        let second = CompilationSession::new(&arena);
        assert_eq!(second.next_temp(), "t0");
    }

    #[test]
    fn test_instruction_statistics() {
        let arena = Bump::new();
        let session = CompilationSession::new(&arena);
        session.record_instruction("ADD");
        session.record_instruction("ADD");
        session.record_instruction("MUL");
        session.record_stack_depth(3);
        session.record_stack_depth(1);

        let stats = session.stats();
        assert_eq!(stats.instructions_emitted, 3);
        assert_eq!(stats.instruction_counts.get("ADD"), Some(&2));
        assert_eq!(stats.instruction_counts.get("MUL"), Some(&1));
        assert_eq!(stats.max_operand_depth, 3);

        let rendered = stats.to_string();
        assert!(rendered.contains("ADD: 2"));
        assert!(rendered.contains("Instructions emitted: 3"));
    }
}
