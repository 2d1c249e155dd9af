//! Transactional event writes for series reconciliation.
//!
//! Each write or removal runs in its own savepoint nested in the caller's
//! transaction, so a failed item rolls back only itself.

use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::event::EventRepository,
    model::{
        batch::BatchOutcome,
        event::CreateEventParams,
        series::{EventTemplate, Occurrence},
    },
    service::series::expansion::OccurrenceWriter,
};

pub struct TxnEventWriter<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxnEventWriter<'a> {
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Deletes one event inside a savepoint.
    ///
    /// # Returns
    /// - `Ok(())` - Event removed
    /// - `Err(DbErr::RecordNotFound)` - Event was already gone
    /// - `Err(DbErr)` - Database error; the savepoint is rolled back
    pub async fn remove(&self, event_id: i32) -> Result<(), DbErr> {
        let savepoint = self.txn.begin().await?;

        if !EventRepository::new(&savepoint).delete(event_id).await? {
            return Err(DbErr::RecordNotFound(format!(
                "Event {} not found",
                event_id
            )));
        }

        savepoint.commit().await
    }

    /// Deletes each event, recording per-item outcomes instead of stopping.
    pub async fn remove_all(&self, event_ids: &[i32]) -> BatchOutcome<i32> {
        let mut outcome = BatchOutcome::new();

        for event_id in event_ids {
            match self.remove(*event_id).await {
                Ok(()) => outcome.record_success(*event_id),
                Err(e) => {
                    tracing::warn!(event_id, error = %e, "failed to remove series event");
                    outcome.record_failure(event_id, e);
                }
            }
        }

        outcome
    }
}

impl OccurrenceWriter for TxnEventWriter<'_> {
    async fn write(&self, occurrence: &Occurrence, template: &EventTemplate) -> Result<i32, DbErr> {
        let savepoint = self.txn.begin().await?;

        let event = EventRepository::new(&savepoint)
            .create(CreateEventParams {
                location_id: template.location_id,
                start_time: occurrence.start,
                end_time: occurrence.end,
                summary: template.summary.clone(),
                description: template.description.clone(),
                facilitator: template.facilitator.clone(),
                status: template.status,
                series_id: None,
                created_by: template.created_by.clone(),
                modified_by: template.modified_by.clone(),
            })
            .await?;

        savepoint.commit().await?;

        Ok(event.id)
    }
}
