//! Form Submission
//!
//! One submission attempt: check readiness, build the parameter record,
//! call the record library once and log the outcome.

use console_logger::emit;
use log::{Level, Log};

use crate::commands::RecordLibrary;
use crate::error::RecordsError;
use crate::models::{FormState, LibraryStatus, RecordBatch, RecordQuery};
use crate::scan_range::ScanRange;

const TARGET: &str = "form";

/// Retry a failed library init before a submission. Other states pass through.
pub async fn ensure_ready<L: RecordLibrary>(
    library: &L,
    status: LibraryStatus,
    logger: &dyn Log,
) -> LibraryStatus {
    if !matches!(status, LibraryStatus::Failed(_)) {
        return status;
    }
    match library.initialize().await {
        Ok(()) => {
            emit(
                logger,
                Level::Info,
                "lib",
                format_args!("[LIB] Record library ready after retry"),
            );
            LibraryStatus::Ready
        }
        Err(e) => {
            emit(logger, Level::Error, "lib", format_args!("[LIB] {}", e));
            LibraryStatus::Failed(e.to_string())
        }
    }
}

/// Submit a snapshot of the form. Exactly one of the info/error outcome
/// lines is logged when the library is called; no retry is attempted.
pub async fn submit<L: RecordLibrary>(
    library: &L,
    status: &LibraryStatus,
    state: &FormState,
    logger: &dyn Log,
) -> Result<RecordBatch, RecordsError> {
    if !status.is_ready() {
        emit(
            logger,
            Level::Warn,
            TARGET,
            format_args!("[FORM] Submit ignored, record library not ready ({:?})", status),
        );
        return Err(RecordsError::NotReady);
    }

    let query = match RecordQuery::from_state(state) {
        Ok(query) => query,
        Err(e) => {
            emit(logger, Level::Warn, TARGET, format_args!("[FORM] Submit ignored: {}", e));
            return Err(e);
        }
    };

    match serde_json::to_string(&query) {
        Ok(json) => emit(
            logger,
            Level::Debug,
            TARGET,
            format_args!("[FORM] Requesting records with {}", json),
        ),
        Err(e) => emit(
            logger,
            Level::Debug,
            TARGET,
            format_args!("[FORM] Requesting records (unserializable query: {})", e),
        ),
    }
    if let Err(e) = ScanRange::resolve(query.start, query.end, query.last) {
        emit(
            logger,
            Level::Warn,
            TARGET,
            format_args!("[FORM] Block range will likely be rejected: {}", e),
        );
    }

    match library.request_records(&query).await {
        Ok(batch) => {
            emit(
                logger,
                Level::Info,
                TARGET,
                format_args!(
                    "[FORM] Retrieved {} records: {:?}",
                    batch.records.len(),
                    batch.records
                ),
            );
            Ok(batch)
        }
        Err(e) => {
            emit(
                logger,
                Level::Error,
                TARGET,
                format_args!("[FORM] Failed to request records: {}", e),
            );
            Err(e)
        }
    }
}
