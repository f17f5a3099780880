pub mod events;
pub mod schedule;

pub use events::EventService;
pub use schedule::ScheduleService;

/// Day the test store is seeded relative to (a Wednesday).
#[cfg(test)]
pub(crate) fn seed_day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

#[cfg(test)]
pub(crate) async fn test_state(seed: bool) -> std::sync::Arc<crate::AppState> {
    let db = crate::db::init::connect_in_memory().await.unwrap();
    if seed {
        crate::db::seed::seed_mock_data(&db, seed_day()).await.unwrap();
    }

    std::sync::Arc::new(crate::AppState {
        db,
        config: crate::config::Config::default(),
    })
}
