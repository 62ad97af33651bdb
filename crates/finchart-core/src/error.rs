use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("chart worker is not running")]
    WorkerStopped,
}
