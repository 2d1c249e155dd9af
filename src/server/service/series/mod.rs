//! Series service: create, update and delete a series together with its events.
//!
//! Every operation runs in one database transaction. Event generation goes through
//! the expansion engine in [`expansion`]; individual event writes and removals are
//! recorded in a `BatchOutcome` rather than aborting the operation.

pub mod expansion;
pub mod writer;


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{event::EventRepository, series::SeriesRepository},
    error::AppError,
    model::series::{
        Reconciliation, SeriesCreated, SeriesDeleted, SeriesParams, SeriesUpdated,
        SeriesWithEvents,
    },
    service::series::{
        expansion::{is_schedule_equivalent, materialize, validate_schedule},
        writer::TxnEventWriter,
    },
};

pub struct SeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a series with its events.
    ///
    /// # Returns
    /// - `Ok(SeriesWithEvents)` - Series and its events ordered by start time
    /// - `Err(AppError::NotFound)` - No series with that id
    pub async fn get(&self, id: i32) -> Result<SeriesWithEvents, AppError> {
        let series = SeriesRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series {} not found", id)))?;
        let events = EventRepository::new(self.db).get_by_series(id).await?;

        Ok(SeriesWithEvents { series, events })
    }

    /// Creates a series and generates its events.
    ///
    /// Events are generated unlinked, then the series row is inserted and the events
    /// are linked to it. A failed series insert rolls back the generated events too.
    ///
    /// # Returns
    /// - `Ok(SeriesCreated)` - Series, its linked events and the generation outcome
    /// - `Err(AppError::Validation)` - Payload or schedule rejected
    /// - `Err(AppError::DbErr)` - Series insert or commit failed
    #[tracing::instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create(&self, params: SeriesParams) -> Result<SeriesCreated, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        let writer = TxnEventWriter::new(&txn);

        let template = params.template(&params.actor);
        let generation = materialize(&writer, &params.schedule, &template).await;

        let series = SeriesRepository::new(&txn).create(&params).await?;

        let event_repo = EventRepository::new(&txn);
        event_repo
            .connect_to_series(&generation.succeeded, series.id)
            .await?;
        let events = event_repo.get_by_series(series.id).await?;

        txn.commit().await?;

        tracing::info!(
            series_id = series.id,
            created = generation.succeeded.len(),
            failed = generation.failed.len(),
            "created series"
        );

        Ok(SeriesCreated {
            series: SeriesWithEvents { series, events },
            generation,
        })
    }

    /// Updates a series and reconciles its events.
    ///
    /// When the recurrence is unchanged every linked event keeps its date and gets
    /// the new daily times and descriptive fields; the first failure aborts the whole
    /// update. Otherwise the linked events are removed one by one and generated again
    /// from the new schedule.
    ///
    /// # Returns
    /// - `Ok(SeriesUpdated)` - Updated series, its events and how they were reconciled
    /// - `Err(AppError::Validation)` - Payload or schedule rejected
    /// - `Err(AppError::NotFound)` - No series with that id
    /// - `Err(AppError::DbErr)` - In-place update, series update or commit failed
    #[tracing::instrument(skip(self, params), fields(series_id = id))]
    pub async fn update(&self, id: i32, params: SeriesParams) -> Result<SeriesUpdated, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        let series_repo = SeriesRepository::new(&txn);
        let event_repo = EventRepository::new(&txn);

        let existing = series_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series {} not found", id)))?;
        let linked = event_repo.get_by_series(id).await?;

        let template = params.template(&existing.created_by);

        let reconciliation = if is_schedule_equivalent(&existing.schedule, &params.schedule) {
            let mut events_updated = 0;
            for event in &linked {
                let date = event.start_time.date_naive();
                event_repo
                    .update_from_template(
                        event.id,
                        date.and_time(params.schedule.start_time).and_utc(),
                        date.and_time(params.schedule.end_time).and_utc(),
                        &template,
                    )
                    .await?;
                events_updated += 1;
            }

            Reconciliation::InPlace { events_updated }
        } else {
            let writer = TxnEventWriter::new(&txn);

            let ids: Vec<i32> = linked.iter().map(|e| e.id).collect();
            let removal = writer.remove_all(&ids).await;
            let generation = materialize(&writer, &params.schedule, &template).await;
            event_repo
                .connect_to_series(&generation.succeeded, id)
                .await?;

            Reconciliation::Regenerated {
                removal,
                generation,
            }
        };

        let series = series_repo.update(id, &params).await?;
        let events = event_repo.get_by_series(id).await?;

        txn.commit().await?;

        tracing::info!(series_id = id, ?reconciliation, "updated series");

        Ok(SeriesUpdated {
            series: SeriesWithEvents { series, events },
            reconciliation,
        })
    }

    /// Deletes a series after removing its events.
    ///
    /// # Returns
    /// - `Ok(SeriesDeleted)` - Series removed, with the per-event removal outcome
    /// - `Err(AppError::NotFound)` - No series with that id
    /// - `Err(AppError::Conflict)` - Some events could not be removed; nothing is deleted
    /// - `Err(AppError::DbErr)` - Series delete or commit failed
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<SeriesDeleted, AppError> {
        let txn = self.db.begin().await?;

        if SeriesRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Series {} not found", id)));
        }

        let ids: Vec<i32> = EventRepository::new(&txn)
            .get_by_series(id)
            .await?
            .iter()
            .map(|e| e.id)
            .collect();
        let removal = TxnEventWriter::new(&txn).remove_all(&ids).await;

        // Remaining events still reference the series row.
        if !removal.is_complete() {
            txn.rollback().await?;
            let failed: Vec<String> = removal
                .failed
                .iter()
                .map(|f| format!("event {} ({})", f.item, f.error))
                .collect();
            return Err(AppError::Conflict(format!(
                "Series {} not deleted, events could not be removed: {}",
                id,
                failed.join(", ")
            )));
        }

        SeriesRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(series_id = id, removed = removal.succeeded.len(), "deleted series");

        Ok(SeriesDeleted { id, removal })
    }
}

/// Collects field and schedule errors into one validation failure.
fn validate(params: &SeriesParams) -> Result<(), AppError> {
    let mut errors = params.validate_fields();
    if let Err(schedule_errors) = validate_schedule(&params.schedule) {
        errors.extend(schedule_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
