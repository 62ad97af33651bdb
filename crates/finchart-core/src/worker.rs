//! Background execution of pipeline runs with last-request-wins delivery.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::debug;

use finchart_domain::{DisplaySpec, FilterSpec, Operation};

use crate::error::CoreError;
use crate::pipeline::{ChartOutput, ChartPipeline};

/// Snapshot of everything one pipeline run needs. Runs share no state, so
/// no locking happens during computation.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub operations: Vec<Operation>,
    pub filter: FilterSpec,
    pub display: DisplaySpec,
}

/// Finished result tagged with the ticket of the request that produced it.
#[derive(Debug)]
pub struct ChartDelivery {
    pub ticket: u64,
    pub output: ChartOutput,
}

struct Job {
    ticket: u64,
    request: ChartRequest,
}

/// Single background worker computing chart data off the interactive
/// thread. Each submit supersedes all earlier ones; superseded results are
/// discarded rather than delivered.
pub struct ChartWorker {
    sender: Option<Sender<Job>>,
    current: Arc<AtomicU64>,
    slot: Arc<Mutex<Option<ChartDelivery>>>,
    handle: Option<JoinHandle<()>>,
}

impl ChartWorker {
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let current = Arc::new(AtomicU64::new(0));
        let slot: Arc<Mutex<Option<ChartDelivery>>> = Arc::new(Mutex::new(None));
        let worker_current = Arc::clone(&current);
        let worker_slot = Arc::clone(&slot);
        let handle = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                if job.ticket != worker_current.load(Ordering::SeqCst) {
                    debug!("skipping superseded chart request {}", job.ticket);
                    continue;
                }
                let pipeline = ChartPipeline::new(job.request.filter, job.request.display);
                let output = pipeline.run(&job.request.operations);
                if job.ticket != worker_current.load(Ordering::SeqCst) {
                    debug!("discarding stale chart result {}", job.ticket);
                    continue;
                }
                if let Ok(mut latest) = worker_slot.lock() {
                    *latest = Some(ChartDelivery {
                        ticket: job.ticket,
                        output,
                    });
                }
            }
        });
        Self {
            sender: Some(sender),
            current,
            slot,
            handle: Some(handle),
        }
    }

    /// Enqueues a run and returns its ticket. The new ticket immediately
    /// supersedes every earlier submission.
    pub fn submit(&self, request: ChartRequest) -> Result<u64, CoreError> {
        let ticket = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        let sender = self.sender.as_ref().ok_or(CoreError::WorkerStopped)?;
        sender
            .send(Job { ticket, request })
            .map_err(|_| CoreError::WorkerStopped)?;
        Ok(ticket)
    }

    /// Takes the latest delivered result, if any. A result superseded
    /// between delivery and this call is dropped here, so the interactive
    /// side never renders output for an outdated request.
    pub fn take_latest(&self) -> Option<ChartDelivery> {
        let mut slot = self.slot.lock().ok()?;
        let delivery = slot.take()?;
        if delivery.ticket != self.current.load(Ordering::SeqCst) {
            debug!("dropping superseded chart delivery {}", delivery.ticket);
            return None;
        }
        Some(delivery)
    }

    /// Stops the worker after it finishes any in-flight job.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ChartWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
