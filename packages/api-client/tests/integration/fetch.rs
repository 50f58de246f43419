use api_client::{HttpWellsApi, WellsApi};
use axum::http::StatusCode;
use common::{AvailabilityStatus, FetchError, Site};

use crate::common::{Endpoint, StubBackend};

mod collections {
    use super::*;

    #[tokio::test]
    async fn wells_are_decoded_from_backend_field_names() {
        let backend = StubBackend::spawn().await;

        let wells = backend.client().fetch_wells().await.unwrap();

        assert_eq!(wells.len(), 2);
        assert_eq!(wells[0].name, "Pozo-1");
        assert_eq!(wells[0].site(), Some(Site::Samaria));
        assert_eq!(wells[0].gateway_code.as_deref(), Some("P01"));
        assert!(!wells[1].active);
        assert_eq!(wells[1].gateway_code, None);
    }

    #[tokio::test]
    async fn mtc_records_are_decoded_with_status_and_date() {
        let backend = StubBackend::spawn().await;

        let records = backend.client().fetch_mtc_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].well_id, 1);
        assert_eq!(records[0].availability(), Some(AvailabilityStatus::Operating));
        assert!(records[0].install_date.is_some());
        assert_eq!(records[1].availability(), Some(AvailabilityStatus::Available));
        assert_eq!(records[1].install_date, None);
    }

    #[tokio::test]
    async fn error_status_becomes_fetch_error_with_code() {
        let backend = StubBackend::spawn().await;
        backend.fail(Endpoint::Wells, StatusCode::INTERNAL_SERVER_ERROR);

        let err = backend.client().fetch_wells().await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                operation: "fetch_wells",
                status: 500
            }
        );
    }

    #[tokio::test]
    async fn malformed_body_becomes_decode_error() {
        let backend = StubBackend::spawn().await;
        backend.serve_malformed(Endpoint::MtcRecords);

        let err = backend.client().fetch_mtc_records().await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { operation: "fetch_mtc_records", .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn unreachable_backend_becomes_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpWellsApi::with_client(reqwest::Client::new(), &format!("http://{addr}/api"));
        let err = api.fetch_wells().await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { operation: "fetch_wells", .. }));
    }
}

mod single_well {
    use super::*;

    #[tokio::test]
    async fn well_is_fetched_by_id() {
        let backend = StubBackend::spawn().await;

        let well = backend.client().fetch_well_by_id(2).await.unwrap();

        assert_eq!(well.id, 2);
        assert_eq!(well.site_name(), "Muspac");
    }

    #[tokio::test]
    async fn missing_well_reports_not_found() {
        let backend = StubBackend::spawn().await;

        let err = backend.client().fetch_well_by_id(7).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.operation(), "fetch_well_by_id");
    }

    #[tokio::test]
    async fn equipment_is_scoped_to_the_well() {
        let backend = StubBackend::spawn().await;
        let api = backend.client();

        let equipment = api.fetch_equipment_by_well(1).await.unwrap();
        assert_eq!(equipment.len(), 2);
        assert!(equipment[0].is_primary());
        assert_eq!(equipment[1].brand.as_deref(), Some("ABB"));

        let none = api.fetch_equipment_by_well(2).await.unwrap();
        assert!(none.is_empty());
    }
}
