//! Property-style tests for the filter/sort/page behavior through the service

use chrono::{TimeZone, Utc};
use spacedock::prelude::*;

fn payload(name: &str, speed: f64, crew: i32, year: i32, used: bool) -> ShipPayload {
    ShipPayload {
        name: Some(name.to_string()),
        planet: Some("Earth".to_string()),
        ship_type: Some(ShipType::Transport),
        prod_date: Some(
            Utc.with_ymd_and_hms(year, 3, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis(),
        ),
        is_used: Some(used),
        speed: Some(speed),
        crew_size: Some(crew),
    }
}

async fn seeded_service(count: usize) -> ShipService {
    let service = ShipService::new(Arc::new(InMemoryShipStore::new()));
    for i in 0..count {
        let speed = 0.01 + 0.07 * (i as f64 % 14.0);
        let year = 2800 + ((i * 37) % 220) as i32;
        let crew = 1 + ((i * 613) % 9999) as i32;
        service
            .create(payload(
                &format!("Ship-{i:03}"),
                (speed * 100.0).round() / 100.0,
                crew,
                year,
                i % 3 == 0,
            ))
            .await
            .unwrap();
    }
    service
}

#[tokio::test]
async fn test_single_filter_yields_exactly_the_matching_records() {
    let service = seeded_service(30).await;

    let filter = ShipFilter {
        min_speed: Some(0.5),
        ..Default::default()
    };
    let page = service
        .list(&filter, ShipOrder::default(), PageRequest::new(0, 100))
        .await
        .unwrap();

    assert!(page.iter().all(|s| s.speed >= 0.5));

    let everything = service
        .list(
            &ShipFilter::default(),
            ShipOrder::default(),
            PageRequest::new(0, 100),
        )
        .await
        .unwrap();
    let expected = everything.iter().filter(|s| s.speed >= 0.5).count();
    assert_eq!(page.len(), expected);
}

#[tokio::test]
async fn test_combined_filters_are_the_intersection() {
    let service = seeded_service(30).await;
    let wide = PageRequest::new(0, 100);

    let used = ShipFilter {
        is_used: Some(true),
        ..Default::default()
    };
    let crewed = ShipFilter {
        min_crew_size: Some(3000),
        ..Default::default()
    };
    let both = ShipFilter {
        is_used: Some(true),
        min_crew_size: Some(3000),
        ..Default::default()
    };

    let ids = |ships: Vec<Ship>| -> Vec<i64> { ships.into_iter().map(|s| s.id).collect() };
    let used_ids = ids(service.list(&used, ShipOrder::Id, wide).await.unwrap());
    let crewed_ids = ids(service.list(&crewed, ShipOrder::Id, wide).await.unwrap());
    let both_ids = ids(service.list(&both, ShipOrder::Id, wide).await.unwrap());

    let expected: Vec<i64> = used_ids
        .into_iter()
        .filter(|id| crewed_ids.contains(id))
        .collect();
    assert_eq!(both_ids, expected);
    assert!(!both_ids.is_empty());
}

#[tokio::test]
async fn test_rating_sort_is_monotone() {
    let service = seeded_service(30).await;

    let ships = service
        .list(
            &ShipFilter::default(),
            ShipOrder::Rating,
            PageRequest::new(0, 100),
        )
        .await
        .unwrap();
    assert_eq!(ships.len(), 30);
    for pair in ships.windows(2) {
        assert!(pair[0].rating <= pair[1].rating);
    }
}

#[tokio::test]
async fn test_page_concatenation_reconstructs_the_sorted_set() {
    let service = seeded_service(23).await;
    let filter = ShipFilter {
        max_speed: Some(0.8),
        ..Default::default()
    };

    let full = service
        .list(&filter, ShipOrder::Speed, PageRequest::new(0, 1000))
        .await
        .unwrap();
    let total = service.count(&filter).await.unwrap();
    assert_eq!(full.len(), total);

    let page_size = 4;
    let mut collected = Vec::new();
    let pages = total.div_ceil(page_size);
    for page_number in 0..pages {
        let page = service
            .list(&filter, ShipOrder::Speed, PageRequest::new(page_number, page_size))
            .await
            .unwrap();
        assert!(page.len() <= page_size);
        if page_number < pages - 1 {
            assert_eq!(page.len(), page_size);
        }
        collected.extend(page);
    }

    let collected_ids: Vec<i64> = collected.iter().map(|s| s.id).collect();
    let full_ids: Vec<i64> = full.iter().map(|s| s.id).collect();
    assert_eq!(collected_ids, full_ids);
}

#[tokio::test]
async fn test_page_beyond_the_end_never_errors() {
    let service = seeded_service(5).await;

    for page_number in [2, 3, 100, usize::MAX / 8] {
        let page = service
            .list(
                &ShipFilter::default(),
                ShipOrder::default(),
                PageRequest::new(page_number, 3),
            )
            .await
            .unwrap();
        assert!(page.len() <= 3);
    }
}

#[tokio::test]
async fn test_count_matches_unpaged_list_length() {
    let service = seeded_service(30).await;

    let filter = ShipFilter {
        ship_type: Some(ShipType::Transport),
        min_rating: Some(0.5),
        ..Default::default()
    };
    let listed = service
        .list(&filter, ShipOrder::default(), PageRequest::new(0, 1000))
        .await
        .unwrap();
    let counted = service.count(&filter).await.unwrap();
    assert_eq!(listed.len(), counted);
}
