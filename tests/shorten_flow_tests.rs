//! Submission flow tests against a recording gateway

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::RecordingGateway;
use linkform::client::{ClientError, ShortenRequest};
use linkform::services::{FormState, ShortenService, SubmitState, ToastQueue, ToastVariant};
use linkform::utils::TimeOfDay;

fn service(gateway: &std::sync::Arc<RecordingGateway>) -> ShortenService {
    ShortenService::new(gateway.clone())
}

#[tokio::test]
async fn test_empty_url_never_calls_gateway() {
    let gateway = RecordingGateway::new();
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    for input in ["", "   "] {
        form.long_url = input.to_string();
        let state = service.submit(&mut form, &mut toasts).await;
        assert_eq!(state, SubmitState::Idle);

        let toast = toasts.latest().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.description, "Please enter a URL");
    }

    assert!(gateway.created().is_empty());
    assert!(form.short_url.is_none());
}

#[tokio::test]
async fn test_invalid_url_never_calls_gateway() {
    let gateway = RecordingGateway::new();
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "javascript:alert(1)".into();
    service.submit(&mut form, &mut toasts).await;

    assert!(gateway.created().is_empty());
    assert_eq!(
        toasts.latest().map(|t| t.description.as_str()),
        Some("This URL protocol is not allowed")
    );
}

#[tokio::test]
async fn test_no_expiration_without_date() {
    let gateway = RecordingGateway::new();
    gateway.on_create(Ok("abc123".into()));
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com/very-long-url".into();
    // A time on its own does not make an expiration
    form.expiration_time = TimeOfDay::new(18, 30).unwrap();
    service.submit(&mut form, &mut toasts).await;

    assert_eq!(
        gateway.created(),
        vec![ShortenRequest::new("https://example.com/very-long-url", None)]
    );
}

#[tokio::test]
async fn test_expiration_is_utc_epoch_seconds() {
    let gateway = RecordingGateway::new();
    gateway.on_create(Ok("abc123".into()));
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com".into();
    form.expiration_date = NaiveDate::from_ymd_opt(2026, 12, 31);
    form.expiration_time = TimeOfDay::new(23, 30).unwrap();
    service.submit(&mut form, &mut toasts).await;

    let expected = Utc
        .with_ymd_and_hms(2026, 12, 31, 23, 30, 0)
        .unwrap()
        .timestamp();
    let created = gateway.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].expiration, Some(expected));
}

#[tokio::test]
async fn test_success_displays_short_url() {
    let gateway = RecordingGateway::new();
    gateway.on_create(Ok("abc123".into()));
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com".into();
    let state = service.submit(&mut form, &mut toasts).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert!(!form.is_submitting());
    assert_eq!(form.short_url.as_deref(), Some("https://short.url/?u=abc123"));

    let toast = toasts.latest().unwrap();
    assert_eq!(toast.title.as_deref(), Some("Success!"));
    assert_eq!(toast.description, "Your URL has been shortened");
    assert_eq!(toast.variant, ToastVariant::Default);
}

#[tokio::test]
async fn test_failure_shows_error_and_leaves_submitting() {
    let gateway = RecordingGateway::new();
    gateway.on_create(Err(ClientError::Status {
        code: 502,
        body: "bad gateway".into(),
    }));
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com".into();
    let state = service.submit(&mut form, &mut toasts).await;

    assert_eq!(state, SubmitState::Failed);
    assert!(!form.is_submitting());
    assert!(form.short_url.is_none());

    let toast = toasts.latest().unwrap();
    assert_eq!(toast.title.as_deref(), Some("Error"));
    assert_eq!(toast.description, "Failed to shorten URL");
    assert!(toast.is_destructive());
}

#[tokio::test]
async fn test_submit_ignored_while_submitting() {
    let gateway = RecordingGateway::new();
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com".into();
    assert!(service.begin(&mut form, &mut toasts).is_some());
    assert_eq!(form.submit_label(), "Shortening...");

    // Second press while the first is in flight
    assert!(service.begin(&mut form, &mut toasts).is_none());
    assert!(toasts.is_empty());
}

#[tokio::test]
async fn test_resubmit_after_failure() {
    let gateway = RecordingGateway::new();
    gateway.on_create(Err(ClientError::Transport("connection refused".into())));
    gateway.on_create(Ok("xyz789".into()));
    let service = service(&gateway);
    let mut form = FormState::new();
    let mut toasts = ToastQueue::new();

    form.long_url = "https://example.com".into();
    service.submit(&mut form, &mut toasts).await;
    let state = service.submit(&mut form, &mut toasts).await;

    assert_eq!(state, SubmitState::Succeeded);
    assert_eq!(gateway.created().len(), 2);
    assert_eq!(form.short_url.as_deref(), Some("https://short.url/?u=xyz789"));
}

#[test]
fn test_custom_domain() {
    let gateway = RecordingGateway::new();
    let service = ShortenService::with_domain(gateway, "https://s.example.org/");
    assert_eq!(
        service.build_short_url("abc123"),
        "https://s.example.org/?u=abc123"
    );
}

#[test]
fn test_short_url_token_is_encoded() {
    let gateway = RecordingGateway::new();
    let service = ShortenService::new(gateway);
    assert_eq!(
        service.build_short_url("a b&c=d"),
        "https://short.url/?u=a%20b%26c%3Dd"
    );
}
