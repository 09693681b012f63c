/// Identifies one navigation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Generation counter; only the newest navigation may touch the content area.
#[derive(Debug, Clone, Default)]
pub struct NavigationGuard {
    generation: u64,
}

impl NavigationGuard {
    pub fn begin(&mut self) -> NavigationTicket {
        self.generation = self.generation.wrapping_add(1);
        NavigationTicket(self.generation)
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        ticket.0 == self.generation
    }
}
