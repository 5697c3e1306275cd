/// Identifies one asynchronous request started by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// Drops responses that arrive after the screen moved on.
///
/// Every new request and every [`RequestGuard::invalidate`] bumps the epoch,
/// so only the latest ticket is accepted.
#[derive(Debug, Default)]
pub struct RequestGuard {
    epoch: u64,
}

impl RequestGuard {
    pub fn issue(&mut self) -> Ticket {
        self.epoch += 1;
        Ticket { epoch: self.epoch }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.epoch
    }

    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut guard = RequestGuard::default();
        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        guard.invalidate();
        assert!(!guard.is_current(second));
    }
}
