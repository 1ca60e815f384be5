//! SQLite backend integration tests.
//!
//! These tests exercise paging, inserts and file persistence through the
//! public storage API.

mod common;

use std::sync::Arc;

use advocate_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};
use advocate_persistence::core::{Backend, RecordStorage};
use advocate_persistence::repository::Repository;
use advocate_persistence::search::Predicate;
use advocate_persistence::types::{NewAdvocate, PageRequest};

use common::*;

// ============================================================================
// Insert Tests
// ============================================================================

#[tokio::test]
async fn test_bulk_insert_assigns_ids_in_order() {
    let backend = create_backend();
    let stored = backend.insert_many(directory()).await.unwrap();

    let ids: Vec<i64> = stored.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(stored[2].first_name, "Bob");
    assert_eq!(
        stored[2].specialties,
        vec!["Depression".to_string(), "Anxiety".to_string(), "CBT".to_string()]
    );
}

#[tokio::test]
async fn test_inserted_records_read_back_unchanged() {
    let backend = create_backend();
    let stored = backend.insert_many(directory()).await.unwrap();

    let page = backend
        .fetch_page(&Predicate::Always, PageRequest::first(10))
        .await
        .unwrap();
    assert_eq!(page.data, stored);
}

#[tokio::test]
async fn test_unicode_and_quotes_survive() {
    let backend = create_backend();
    let record = NewAdvocate::new("Zoë", "O'Brien", "San José", "MD")
        .with_specialties(["Eating \"disorders\"", "Grief"])
        .with_years_of_experience(3)
        .with_phone_number(2125550199);
    let stored = backend.insert_many(vec![record.clone()]).await.unwrap();

    assert_eq!(stored[0].first_name, "Zoë");
    assert_eq!(stored[0].specialties, record.specialties);
}

// ============================================================================
// Paging Tests
// ============================================================================

#[tokio::test]
async fn test_pages_partition_the_matching_set() {
    let backend = create_backend();
    backend.insert_many(generated(25, "Grief")).await.unwrap();
    let repo = Repository::advocates(Arc::new(backend)).unwrap();

    let mut seen = Vec::new();
    for page_number in 1..=3 {
        let page = repo
            .get_all(PageRequest::new(page_number, 10), Some("grief"))
            .await
            .unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(10), 3);
        seen.extend(page.data.iter().map(|a| a.id));
    }

    assert_eq!(seen, (1..=25).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let backend = create_backend();
    backend.insert_many(generated(25, "Grief")).await.unwrap();

    let page = backend
        .fetch_page(&Predicate::Always, PageRequest::new(3, 10))
        .await
        .unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page.total, 25);
}

#[tokio::test]
async fn test_page_past_end_reports_true_total() {
    let repo = seeded_repository().await;

    let page = repo
        .get_all(PageRequest::new(2, 10), Some("Depression"))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 4);
}

#[tokio::test]
async fn test_total_is_independent_of_page_size() {
    let repo = seeded_repository().await;

    for page_size in [1, 2, 3, 50] {
        let page = repo
            .get_all(PageRequest::new(1, page_size), Some("Anxiety"))
            .await
            .unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(page.len(), (page_size as usize).min(4));
    }
}

#[tokio::test]
async fn test_small_pages_follow_id_order() {
    let repo = seeded_repository().await;

    let first = repo
        .get_all(PageRequest::new(1, 2), Some("PTSD OR Trauma"))
        .await
        .unwrap();
    let second = repo
        .get_all(PageRequest::new(2, 2), Some("PTSD OR Trauma"))
        .await
        .unwrap();

    assert_eq!(ids(&first.data), id_set(&[2, 4]));
    assert_eq!(ids(&second.data), id_set(&[6, 7]));
}

// ============================================================================
// Pool and File Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_searches_share_one_pool() {
    let repo = seeded_repository().await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.get_all(PageRequest::first(10), Some("CBT"))
                    .await
                    .map(|page| page.total)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 4);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_memory_database_interleaves_inserts_and_searches() {
    let repo = Repository::advocates(Arc::new(create_backend())).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|task| {
            let repo = repo.clone();
            tokio::spawn(async move {
                for round in 0..30 {
                    if (task + round) % 2 == 0 {
                        repo.bulk_insert(generated(20, "CBT")).await?;
                    } else {
                        let page = repo.get_all(PageRequest::first(10), Some("CBT")).await?;
                        assert!(page.len() <= 10);
                    }
                }
                Ok::<_, advocate_persistence::error::StorageError>(())
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = repo
        .get_all(PageRequest::first(10), Some("CBT"))
        .await
        .unwrap();
    assert_eq!(page.total, 16 * 15 * 20);
}

#[tokio::test]
async fn test_file_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("advocates.db");

    {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        backend.insert_many(directory()).await.unwrap();
    }

    let backend = SqliteBackend::with_config(
        &path,
        SqliteBackendConfig::default().with_max_connections(2),
    )
    .unwrap();
    backend.init_schema().unwrap();
    assert!(!backend.is_memory());
    assert!(backend.health_check().await.is_ok());

    let page = backend
        .fetch_page(&Predicate::Always, PageRequest::first(10))
        .await
        .unwrap();
    assert_eq!(page.total, 7);
}
