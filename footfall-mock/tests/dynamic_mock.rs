use chrono::NaiveDate;
use footfall_core::connector::{FootfallConnector, VisitorDataProvider};
use footfall_core::{FootfallError, VisitorRequest, VisitorSeries};
use footfall_mock::{DynamicMock, MockBehavior, MockConnector};

fn request(shop: &str) -> VisitorRequest {
    VisitorRequest {
        shop: shop.into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

#[tokio::test]
async fn fixture_series_is_deterministic() {
    let mock = MockConnector::new();
    let a = mock.visitor_data(&request("shop-12")).await.unwrap();
    let b = mock.visitor_data(&request("shop-12")).await.unwrap();
    assert_eq!(a, b);
    assert!(!a.samples.is_empty());

    // Different shops see different nights.
    let other = mock.visitor_data(&request("shop-21")).await.unwrap();
    assert_ne!(a.samples, other.samples);
}

#[tokio::test]
async fn forced_failure_shop_fails() {
    let mock = MockConnector::new();
    let err = mock.visitor_data(&request("FAIL")).await.expect_err("FAIL shop");
    assert!(matches!(err, FootfallError::Connector { .. }));
}

#[tokio::test]
async fn dynamic_mock_scripts_per_request() {
    let (mock, controller) = DynamicMock::new("scripted");
    let req = request("shop-12");
    let series = VisitorSeries {
        shop: req.shop.clone(),
        date: req.date,
        samples: vec![],
    };
    controller
        .set_visitor_behavior(req.clone(), MockBehavior::Return(series.clone()))
        .await;

    assert_eq!(mock.visitor_data(&req).await.unwrap(), series);

    // Unscripted request: not found.
    let err = mock
        .visitor_data(&request("shop-99"))
        .await
        .expect_err("unscripted");
    assert!(matches!(err, FootfallError::NotFound { .. }));
}

#[tokio::test]
async fn dynamic_mock_can_fail_on_command() {
    let (mock, controller) = DynamicMock::new("scripted");
    let req = request("shop-12");
    controller
        .set_visitor_behavior(
            req.clone(),
            MockBehavior::Fail(FootfallError::connector("scripted", "boom")),
        )
        .await;
    let err = mock.visitor_data(&req).await.expect_err("scripted failure");
    assert!(matches!(err, FootfallError::Connector { .. }));
}

#[test]
fn mock_advertises_both_capabilities() {
    let mock = MockConnector::new();
    assert!(mock.as_visitor_data_provider().is_some());
    assert!(mock.as_shop_directory_provider().is_some());
    assert_eq!(mock.key().as_str(), "footfall-mock");
}
