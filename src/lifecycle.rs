//! Lifecycle guard for deferred measurement callbacks.
//!
//! Every measurement request takes a ticket. A callback may only apply its
//! result while the guard is active and its ticket is the newest one, so
//! results from superseded requests or from a released tooltip are dropped.

/// Identifies one measurement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureTicket(u64);

#[derive(Debug)]
pub struct MeasureGuard {
    active: bool,
    generation: u64,
}

impl MeasureGuard {
    pub fn new() -> Self {
        Self {
            active: true,
            generation: 0,
        }
    }

    /// Starts a new request, invalidating every earlier ticket
    pub fn begin(&mut self) -> MeasureTicket {
        self.generation += 1;
        MeasureTicket(self.generation)
    }

    pub fn accepts(&self, ticket: MeasureTicket) -> bool {
        self.active && ticket.0 == self.generation
    }

    /// Called on teardown; no ticket is accepted afterwards
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Default for MeasureGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_accepted() {
        let mut guard = MeasureGuard::new();
        let ticket = guard.begin();
        assert!(guard.accepts(ticket));
    }

    #[test]
    fn superseded_ticket_is_rejected() {
        let mut guard = MeasureGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn nothing_is_accepted_after_deactivate() {
        let mut guard = MeasureGuard::new();
        let ticket = guard.begin();
        guard.deactivate();

        assert!(!guard.accepts(ticket));
        let later = guard.begin();
        assert!(!guard.accepts(later));
    }
}
