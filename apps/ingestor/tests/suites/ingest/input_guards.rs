use ingest_test_support::unique_helpers::{unique_game_id, unique_user_id};
use ingestor::config::app::DEFAULT_MAX_FILE_SIZE_BYTES;
use ingestor::entities::Demos;
use ingestor::{ingest_file, AppError, ErrorCode, IngestConfig, JsonReplayParser};
use sea_orm::{EntityTrait, PaginatorTrait};
use tempfile::TempDir;

use crate::support::replay_fixture::{json_file, sized_file, ReplayBuilder};
use crate::support::state::{memory_state, memory_state_with};
use crate::support::static_parser::{BrokenParser, StaticParser};

#[tokio::test]
async fn oversized_file_is_rejected_before_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "huge.sdfz", DEFAULT_MAX_FILE_SIZE_BYTES + 1);
    let parser = StaticParser::new(ReplayBuilder::new(&unique_game_id()).build());

    let err = ingest_file(&state, &parser, &path).await.unwrap_err();

    assert!(matches!(err, AppError::FileTooLarge { size, .. } if size == 20_971_521));
    assert!(!err.is_retryable());
    assert_eq!(parser.calls(), 0);
    assert_eq!(Demos::find().count(state.db()).await?, 0);
    Ok(())
}

#[tokio::test]
async fn file_at_threshold_is_ingested() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "exact.sdfz", DEFAULT_MAX_FILE_SIZE_BYTES);
    let parser = StaticParser::new(ReplayBuilder::new(&unique_game_id()).build());

    ingest_file(&state, &parser, &path).await?;

    assert_eq!(parser.calls(), 1);
    assert_eq!(Demos::find().count(state.db()).await?, 1);
    Ok(())
}

#[tokio::test]
async fn configured_limit_overrides_default() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) =
        memory_state_with(IngestConfig::default().with_max_file_size(1_000)).await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "small.sdfz", 1_001);
    let parser = StaticParser::new(ReplayBuilder::new(&unique_game_id()).build());

    let err = ingest_file(&state, &parser, &path).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::FileTooLarge);
    assert_eq!(parser.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn parser_rejection_is_parse_failure() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "corrupt.sdfz", 64);

    let err = ingest_file(&state, &BrokenParser, &path).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ParseFailure);
    assert!(!err.is_retryable());
    assert_eq!(Demos::find().count(state.db()).await?, 0);
    Ok(())
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new().unwrap();
    let parser = StaticParser::new(ReplayBuilder::new(&unique_game_id()).build());

    let err = ingest_file(&state, &parser, &dir.path().join("gone.sdfz"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
    assert_eq!(parser.calls(), 0);
}

#[tokio::test]
async fn json_parser_reads_decoded_records_from_disk() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let game_id = unique_game_id();
    let record = ReplayBuilder::new(&game_id)
        .winners(&[0])
        .player(unique_user_id(), "alpha", 0)
        .player(unique_user_id(), "bravo", 1)
        .build();
    let path = json_file(&dir, "decoded.json", &record);

    let summary = ingest_file(&state, &JsonReplayParser, &path).await?;
    assert_eq!(summary.game_id, game_id);
    assert_eq!(summary.players, 2);
    Ok(())
}
