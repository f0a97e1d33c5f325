//! Explicit debounce state.
//!
//! The caller owns the actual timer. Each [`Debouncer::schedule`] supersedes
//! the previous trigger and hands back a [`Ticket`]; when a timer expires it
//! presents its ticket to [`Debouncer::fire`], which yields the value only
//! for the most recent trigger.

/// Identifies one scheduled trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Collapses bursts of triggers into the last one.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            generation: 0,
            pending: None,
        }
    }

    /// Quiet period the caller's timer should wait.
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record a trigger, superseding any pending one.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Drop the pending trigger; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Take the pending value if `ticket` belongs to the latest trigger.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_trigger_fires() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.schedule("ru");
        let second = debouncer.schedule("rus");
        let third = debouncer.schedule("rust");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(third), Some("rust"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.schedule(1);

        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.schedule(1);
        debouncer.cancel();

        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.wait_ms(), 300);
    }
}
