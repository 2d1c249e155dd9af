//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a location owned by that user.
///
/// Every event and series needs both an auditing user and a location, so most
/// schedule tests start here.
///
/// # Returns
/// - `Ok((user, location))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::location::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db, &user.email).await?;

    Ok((user, location))
}

/// Creates a user, a location and a series with `event_count` linked events.
///
/// The events are inserted directly and are not derived from the series schedule.
///
/// # Returns
/// - `Ok((user, location, series, events))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_series_with_events(
    db: &DatabaseConnection,
    event_count: usize,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::series::Model,
        Vec<entity::event::Model>,
    ),
    DbErr,
> {
    let (user, location) = create_event_dependencies(db).await?;
    let series = crate::factory::series::create_series(db, location.id, &user.email).await?;

    let mut events = Vec::with_capacity(event_count);
    for day in 0..event_count {
        let event = crate::factory::event::EventFactory::new(db, location.id, &user.email)
            .series_id(series.id)
            .day_offset(day as i64)
            .build()
            .await?;
        events.push(event);
    }

    Ok((user, location, series, events))
}
