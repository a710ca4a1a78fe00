//! Tests for the FileCoordinateProvider service

use assert_matches::assert_matches;
use shared::{Coordinate, Zone};

use super::fixtures::*;
use crate::core::is_valid_landing_zone;
use crate::error::WebServerError;
use crate::services::FileCoordinateProvider;
use crate::traits::CoordinateProvider;

#[tokio::test]
async fn test_reads_zone_reports() {
    let file = create_test_zone_file();
    let provider = FileCoordinateProvider::new(file.path());

    let input = provider.get_coordinates(Zone::Z1).await.unwrap();
    assert_eq!(input.r1.len(), 3);
    assert_eq!(input.r2, vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
    assert!(is_valid_landing_zone(&input).unwrap());

    let input = provider.get_coordinates(Zone::Z2).await.unwrap();
    assert!(!is_valid_landing_zone(&input).unwrap());
}

#[tokio::test]
async fn test_missing_zone() {
    let file = create_test_zone_file();
    let provider = FileCoordinateProvider::new(file.path());

    let result = provider.get_coordinates(Zone::Z9).await;
    assert_matches!(result, Err(WebServerError::ZoneDataMissing { zone: Zone::Z9 }));
}

#[tokio::test]
async fn test_rereads_file_on_each_request() {
    let file = write_temp_file(r#"{"Z3": {"R1": [[5, 5]], "R2": []}}"#);
    let provider = FileCoordinateProvider::new(file.path());

    let first = provider.get_coordinates(Zone::Z3).await.unwrap();
    assert!(first.r2.is_empty());

    std::fs::write(file.path(), r#"{"Z3": {"R1": [[5, 5]], "R2": [[6, 6]]}}"#).unwrap();
    let second = provider.get_coordinates(Zone::Z3).await.unwrap();
    assert_eq!(second.r2, vec![Coordinate::new(6.0, 6.0)]);
}

#[tokio::test]
async fn test_unknown_zone_keys_are_ignored() {
    let file = write_temp_file(r#"{"Z4": {"R1": [], "R2": []}, "Z42": {"R1": [], "R2": []}}"#);
    let provider = FileCoordinateProvider::new(file.path());

    assert!(provider.get_coordinates(Zone::Z4).await.is_ok());
}

#[tokio::test]
async fn test_malformed_file() {
    let file = write_temp_file(r#"{"Z1": {"R1": [[1, "two"]], "R2": []}}"#);
    let provider = FileCoordinateProvider::new(file.path());

    let result = provider.get_coordinates(Zone::Z1).await;
    assert_matches!(result, Err(WebServerError::JsonError(_)));
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let provider = FileCoordinateProvider::new(dir.path().join("absent.json"));

    let result = provider.get_coordinates(Zone::Z1).await;
    assert_matches!(result, Err(WebServerError::IoError(_)));
    assert_eq!(provider.source_name(), "file");
}
