//! Ablaufsteuerung der Planung: synchron oder auf einem Hintergrund-Worker.
//!
//! Jede Planung trägt ein `PlanTicket`. Ergebnisse werden über `poll()`
//! abgeholt; ob ein Ergebnis noch gilt, entscheidet der Aufrufer anhand des
//! Tickets.

use super::{PathPlanner, PlanError};
use crate::core::{Coordinate, Route};
use anyhow::Context;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Fortlaufende Kennung einer Planungsanfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanTicket(pub u64);

impl PlanTicket {
    /// Nächstes Ticket in der Folge.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for PlanTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ergebnis einer Planung samt Ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub ticket: PlanTicket,
    pub result: Result<Route, PlanError>,
}

/// Nimmt Planungsanfragen entgegen und liefert fertige Ergebnisse.
pub trait PlanScheduler {
    /// Startet die Planung für eine frisch bestätigte Fläche.
    fn submit(&mut self, ticket: PlanTicket, area: Vec<Coordinate>);

    /// Liefert alle seit dem letzten Aufruf fertig gewordenen Ergebnisse.
    fn poll(&mut self) -> Vec<PlanOutcome>;
}

impl<S: PlanScheduler + ?Sized> PlanScheduler for Box<S> {
    fn submit(&mut self, ticket: PlanTicket, area: Vec<Coordinate>) {
        (**self).submit(ticket, area)
    }

    fn poll(&mut self) -> Vec<PlanOutcome> {
        (**self).poll()
    }
}

// ── Synchron ────────────────────────────────────────────────────────

/// Führt den Planer direkt in `submit` aus.
pub struct ImmediateScheduler<P> {
    planner: P,
    ready: Vec<PlanOutcome>,
}

impl<P: PathPlanner> ImmediateScheduler<P> {
    pub fn new(planner: P) -> Self {
        Self {
            planner,
            ready: Vec::new(),
        }
    }
}

impl<P: PathPlanner> PlanScheduler for ImmediateScheduler<P> {
    fn submit(&mut self, ticket: PlanTicket, area: Vec<Coordinate>) {
        let result = plan_contained(&self.planner, ticket, &area);
        self.ready.push(PlanOutcome { ticket, result });
    }

    fn poll(&mut self) -> Vec<PlanOutcome> {
        std::mem::take(&mut self.ready)
    }
}

// ── Hintergrund ─────────────────────────────────────────────────────

struct PlanJob {
    ticket: PlanTicket,
    area: Vec<Coordinate>,
}

/// Führt den Planer auf einem eigenen Worker-Thread aus.
///
/// Der Worker fasst wartende Aufträge zusammen und rechnet nur den neuesten;
/// Aufträge, die vor ihrem Start überholt wurden, werden übersprungen.
/// Beim Drop wird der Worker beendet und eingesammelt.
pub struct BackgroundScheduler {
    job_tx: Option<Sender<PlanJob>>,
    result_rx: Receiver<PlanOutcome>,
    latest_ticket: Arc<AtomicU64>,
    worker: Option<thread::JoinHandle<()>>,
    undeliverable: Vec<PlanOutcome>,
}

impl BackgroundScheduler {
    /// Startet den Worker-Thread mit dem übergebenen Planer.
    pub fn spawn<P>(planner: P) -> anyhow::Result<Self>
    where
        P: PathPlanner + Send + 'static,
    {
        let (job_tx, job_rx) = crossbeam_channel::unbounded::<PlanJob>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<PlanOutcome>();
        let latest_ticket = Arc::new(AtomicU64::new(0));

        let worker_latest = latest_ticket.clone();
        let worker = thread::Builder::new()
            .name("route-planner".into())
            .spawn(move || run_worker(planner, job_rx, result_tx, worker_latest))
            .context("Planer-Worker konnte nicht gestartet werden")?;

        log::info!("Planer-Worker gestartet");

        Ok(Self {
            job_tx: Some(job_tx),
            result_rx,
            latest_ticket,
            worker: Some(worker),
            undeliverable: Vec::new(),
        })
    }

    /// Wartet bis zu `timeout` auf das erste Ergebnis und liefert dann alle fertigen.
    pub fn poll_timeout(&mut self, timeout: Duration) -> Vec<PlanOutcome> {
        let mut outcomes = std::mem::take(&mut self.undeliverable);
        if outcomes.is_empty() {
            match self.result_rx.recv_timeout(timeout) {
                Ok(outcome) => outcomes.push(outcome),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return outcomes;
                }
            }
        }
        outcomes.extend(self.result_rx.try_iter());
        outcomes
    }
}

impl PlanScheduler for BackgroundScheduler {
    fn submit(&mut self, ticket: PlanTicket, area: Vec<Coordinate>) {
        self.latest_ticket.store(ticket.0, Ordering::Release);

        let sent = self
            .job_tx
            .as_ref()
            .is_some_and(|tx| tx.send(PlanJob { ticket, area }).is_ok());

        if !sent {
            log::error!("Planer-Worker nicht erreichbar, Auftrag {} verworfen", ticket);
            self.undeliverable.push(PlanOutcome {
                ticket,
                result: Err(PlanError::WorkerUnavailable),
            });
        }
    }

    fn poll(&mut self) -> Vec<PlanOutcome> {
        let mut outcomes = std::mem::take(&mut self.undeliverable);
        outcomes.extend(self.result_rx.try_iter());
        outcomes
    }
}

impl Drop for BackgroundScheduler {
    fn drop(&mut self) {
        // Sender schließen → recv() im Worker endet
        self.job_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Planer-Worker ist abgestürzt");
            }
        }
    }
}

/// Ruft den Planer auf und wandelt einen Panic in `PlanError::Panicked`.
fn plan_contained<P: PathPlanner>(
    planner: &P,
    ticket: PlanTicket,
    area: &[Coordinate],
) -> Result<Route, PlanError> {
    panic::catch_unwind(AssertUnwindSafe(|| planner.plan(area))).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unbekannte Ursache".to_string());
        log::error!("Planer bei Auftrag {} abgestürzt: {}", ticket, message);
        Err(PlanError::Panicked(message))
    })
}

fn run_worker<P: PathPlanner>(
    planner: P,
    job_rx: Receiver<PlanJob>,
    result_tx: Sender<PlanOutcome>,
    latest_ticket: Arc<AtomicU64>,
) {
    while let Ok(mut job) = job_rx.recv() {
        // Nur den neuesten wartenden Auftrag rechnen
        while let Ok(newer) = job_rx.try_recv() {
            job = newer;
        }
        if job.ticket.0 < latest_ticket.load(Ordering::Acquire) {
            log::debug!("Planung {} überholt, übersprungen", job.ticket);
            continue;
        }

        let result = plan_contained(&planner, job.ticket, &job.area);
        if result_tx
            .send(PlanOutcome {
                ticket: job.ticket,
                result,
            })
            .is_err()
        {
            break;
        }
    }
    log::debug!("Planer-Worker beendet");
}
