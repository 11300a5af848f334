use ingestor::adapters::maps_sea;
use ingestor::db::txn::with_txn;
use ingestor::entities::Maps;
use ingestor::{build_state, AppError, DbProfile};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn commits_on_ok() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::InMemory).build().await?;

    let created = with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, created) = maps_sea::ensure_by_script_name(txn, "Tabula v4.2").await?;
            Ok(created)
        })
    })
    .await?;

    assert!(created);
    assert_eq!(Maps::find().count(state.db()).await?, 1);
    Ok(())
}

#[tokio::test]
async fn rolls_back_on_err_and_keeps_error() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::InMemory).build().await?;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            maps_sea::ensure_by_script_name(txn, "Tabula v4.2").await?;
            Err(AppError::invalid_record("boom"))
        })
    })
    .await;

    assert!(matches!(result, Err(AppError::InvalidRecord { ref detail }) if detail == "boom"));
    assert_eq!(Maps::find().count(state.db()).await?, 0);
    Ok(())
}

#[tokio::test]
async fn ensure_map_is_idempotent_inside_one_txn() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::InMemory).build().await?;

    let (first, second) = with_txn(&state, |txn| {
        Box::pin(async move {
            let first = maps_sea::ensure_by_script_name(txn, "Glacier Pass 1.2").await?;
            let second = maps_sea::ensure_by_script_name(txn, "Glacier Pass 1.2").await?;
            Ok((first, second))
        })
    })
    .await?;

    assert!(first.1);
    assert!(!second.1);
    assert_eq!(first.0.id, second.0.id);
    Ok(())
}
