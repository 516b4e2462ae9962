//! Begrenztes Protokoll der Auswahl- und Planungsübergänge.

use crate::core::Coordinate;
use crate::planner::PlanTicket;
use std::collections::VecDeque;

/// Ein beobachtbarer Übergang des Controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    DragStarted { anchor: Coordinate },
    PreviewUpdated,
    /// Geste verworfen (zu klein oder ungültig)
    Rejected,
    Committed { ticket: PlanTicket, corners: usize },
    RouteApplied { ticket: PlanTicket, points: usize },
    /// Ergebnis eines überholten Tickets verworfen
    RouteDropped { ticket: PlanTicket },
    PlanFailed { ticket: PlanTicket, message: String },
    TornDown,
}

/// Ringpuffer der letzten `CAPACITY` Übergänge, älteste zuerst.
#[derive(Debug, Default)]
pub struct TransitionLog {
    ring: VecDeque<Transition>,
}

impl TransitionLog {
    pub const CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Übergang an; ist der Puffer voll, fällt der älteste heraus.
    pub fn record(&mut self, transition: Transition) {
        log::debug!("Übergang: {:?}", transition);
        if self.ring.len() == Self::CAPACITY {
            self.ring.pop_front();
        }
        self.ring.push_back(transition);
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.ring.iter()
    }

    /// Anzahl der Übergänge, die `pred` erfüllen.
    pub fn count_where(&self, pred: impl Fn(&Transition) -> bool) -> usize {
        self.ring.iter().filter(|t| pred(t)).count()
    }

    pub fn last(&self) -> Option<&Transition> {
        self.ring.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_log_drops_oldest_entry() {
        let mut log = TransitionLog::new();
        log.record(Transition::TornDown);
        for _ in 1..TransitionLog::CAPACITY {
            log.record(Transition::PreviewUpdated);
        }
        assert_eq!(log.len(), TransitionLog::CAPACITY);
        assert_eq!(log.iter().next(), Some(&Transition::TornDown));

        log.record(Transition::Rejected);
        assert_eq!(log.len(), TransitionLog::CAPACITY);
        assert_eq!(log.count_where(|t| *t == Transition::TornDown), 0);
        assert_eq!(log.iter().next(), Some(&Transition::PreviewUpdated));
        assert_eq!(log.last(), Some(&Transition::Rejected));
    }
}
