/// Ticket of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Latest-wins ordering of overlapping requests.
///
/// Each request takes a ticket before it is sent; a response is applied only
/// when its ticket is still the latest one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn next(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequencer::default();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_out_of_order_arrival() {
        let mut seq = RequestSequencer::default();
        let tickets: Vec<Ticket> = (0..3).map(|_| seq.next()).collect();
        // responses arrive last, first, middle
        let applied: Vec<bool> = [2, 0, 1].iter().map(|&i| seq.is_current(tickets[i])).collect();
        assert_eq!(applied, vec![true, false, false]);
    }
}
