use std::time::Duration;

use catalog::{Completion, EntityStore, SelectionController, SelectionState, fetch_detail};
use common::FetchError;

use crate::common::{Call, MockApi, sample_mtc_records, sample_wells};

async fn loaded_store(api: &MockApi) -> EntityStore {
    let mut store = EntityStore::new();
    store.load(api).await.unwrap();
    store
}

mod select {
    use super::*;

    #[tokio::test]
    async fn selected_well_detail_is_composed() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        controller.select(&api, &mut store, 1).await.unwrap();

        let detail = controller.detail().expect("detail published");
        assert_eq!(detail.well.name, "Pozo-1");
        assert_eq!(detail.equipment.len(), 2);
        assert_eq!(detail.mtc_record.as_ref().map(|r| r.id), Some(10));
        assert_eq!(detail.summary.site_name, "Samaria");
        assert_eq!(detail.summary.equipment_count, 2);
        assert!(detail.summary.has_ip_address);
        assert!(detail.summary.has_mtc_record);
        assert_eq!(detail.primary_equipment().map(|e| e.id), Some(100));
    }

    #[tokio::test]
    async fn well_without_mtc_or_equipment_still_selects() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        controller.select(&api, &mut store, 2).await.unwrap();

        let detail = controller.detail().unwrap();
        assert!(detail.mtc_record.is_none());
        assert!(detail.equipment.is_empty());
        assert!(!detail.summary.has_ip_address);
        assert!(!detail.summary.has_mtc_record);
        assert!(detail.primary_equipment().is_none());
    }

    #[tokio::test]
    async fn missing_well_ends_in_failed_without_touching_store() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let before = store.clone();
        let mut controller = SelectionController::new();

        let err = controller.select(&api, &mut store, 7).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            controller.state(),
            &SelectionState::Failed {
                well_id: 7,
                error: FetchError::Status {
                    operation: "fetch_well_by_id",
                    status: 404,
                },
            }
        );
        assert!(controller.detail().is_none());
        assert_eq!(store.wells(), before.wells());
        assert_eq!(store.mtc_records(), before.mtc_records());
    }

    #[tokio::test]
    async fn failure_replaces_a_previous_detail() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        controller.select(&api, &mut store, 1).await.unwrap();
        api.fail(Call::Equipment, 500);
        assert!(controller.select(&api, &mut store, 3).await.is_err());

        assert!(controller.detail().is_none());
        assert_eq!(controller.well_id(), Some(3));
    }

    #[tokio::test]
    async fn empty_mtc_collection_is_fetched_once_on_demand() {
        let api = MockApi::sample();
        let mut store = EntityStore::from_parts(sample_wells(), vec![]);
        let mut controller = SelectionController::new();

        controller.select(&api, &mut store, 1).await.unwrap();
        controller.select(&api, &mut store, 3).await.unwrap();

        assert_eq!(api.calls(Call::MtcRecords), 1);
        assert_eq!(store.mtc_records(), sample_mtc_records().as_slice());
        assert_eq!(
            controller.detail().unwrap().mtc_record.as_ref().map(|r| r.id),
            Some(11)
        );
    }

    #[tokio::test]
    async fn failed_selection_does_not_install_fetched_mtc_records() {
        let api = MockApi::sample();
        let mut store = EntityStore::from_parts(sample_wells(), vec![]);
        let mut controller = SelectionController::new();

        assert!(controller.select(&api, &mut store, 42).await.is_err());

        assert!(store.mtc_records().is_empty());
    }
}

mod concurrency {
    use super::*;

    #[tokio::test]
    async fn detail_requests_run_concurrently() {
        // Each of the three requests waits until all three have started.
        let api = MockApi::sample().with_rendezvous(3);
        let mut store = EntityStore::from_parts(sample_wells(), vec![]);
        let mut controller = SelectionController::new();

        tokio::time::timeout(
            Duration::from_secs(5),
            controller.select(&api, &mut store, 1),
        )
        .await
        .expect("requests were not issued together")
        .unwrap();

        assert!(controller.detail().is_some());
    }

    #[tokio::test]
    async fn first_failure_short_circuits_the_join() {
        let api = MockApi::sample();
        api.stall(Call::Equipment);
        api.fail(Call::WellById, 404);
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            controller.select(&api, &mut store, 1),
        )
        .await
        .expect("select waited for a stalled request after a failure");

        assert!(result.is_err());
        assert!(matches!(controller.state(), SelectionState::Failed { .. }));
    }

    #[tokio::test]
    async fn overlapping_selections_apply_only_the_latest() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        let first = controller.begin(1);
        let second = controller.begin(3);
        let (slow, fast) = tokio::join!(
            fetch_detail(&api, &store, 1),
            fetch_detail(&api, &store, 3),
        );

        assert_eq!(controller.complete(second, fast, &mut store), Completion::Applied);
        assert_eq!(controller.complete(first, slow, &mut store), Completion::Stale);

        let detail = controller.detail().unwrap();
        assert_eq!(detail.well.id, 3);
    }

    #[tokio::test]
    async fn older_result_arriving_first_is_discarded() {
        let api = MockApi::sample();
        let mut store = loaded_store(&api).await;
        let mut controller = SelectionController::new();

        let first = controller.begin(1);
        let second = controller.begin(3);
        let older = fetch_detail(&api, &store, 1).await;

        assert_eq!(controller.complete(first, older, &mut store), Completion::Stale);
        assert_eq!(controller.state(), &SelectionState::Loading { well_id: 3 });

        let newer = fetch_detail(&api, &store, 3).await;
        assert_eq!(controller.complete(second, newer, &mut store), Completion::Applied);
        assert_eq!(controller.well_id(), Some(3));
    }
}

#[tokio::test]
async fn clear_returns_to_idle() {
    let api = MockApi::sample();
    let mut store = loaded_store(&api).await;
    let mut controller = SelectionController::new();

    controller.select(&api, &mut store, 1).await.unwrap();
    controller.clear();

    assert_eq!(controller.state(), &SelectionState::Idle);
    assert!(controller.detail().is_none());
    assert_eq!(controller.well_id(), None);
}
