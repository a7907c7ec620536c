//! End-to-end publish pipeline tests with mock providers

use std::sync::Arc;

use libmusecast::generation::MockGenerator;
use libmusecast::platforms::MockPlatform;
use libmusecast::types::{MSG_NO_CONTENT, MSG_SUCCESS};
use libmusecast::{ContentPublisher, ExecutionOutcome};
use serial_test::serial;

fn publisher(generator: &MockGenerator, platform: &MockPlatform) -> ContentPublisher {
    ContentPublisher::new(Arc::new(generator.clone()), Arc::new(platform.clone()))
}

// HAPPY PATH

#[tokio::test]
async fn test_generated_text_is_published_verbatim() {
    let generator = MockGenerator::returns("He said it plainly.");
    let platform = MockPlatform::with_post_id("x", "123");

    let outcome = publisher(&generator, &platform).run().await;

    match outcome {
        ExecutionOutcome::Success {
            content, post_id, ..
        } => {
            assert_eq!(content, "He said it plainly.");
            assert_eq!(post_id, "123");
        }
        other => panic!("expected Success, got {other:?}"),
    }

    assert_eq!(generator.call_count(), 1);
    assert_eq!(platform.publish_call_count(), 1);
    assert_eq!(platform.published_texts(), vec!["He said it plainly."]);
}

#[tokio::test]
async fn test_success_report_carries_standard_message() {
    let generator = MockGenerator::returns("Ship early.");
    let platform = MockPlatform::success("x");

    let report = publisher(&generator, &platform).run().await.report();

    assert!(report.success);
    assert_eq!(report.message, MSG_SUCCESS);
    assert!(report.post_id.is_some());
}

// SANITIZATION

#[tokio::test]
async fn test_quoted_output_is_stripped_before_publishing() {
    let generator = MockGenerator::returns("\"Ship early.\"");
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    assert!(matches!(outcome, ExecutionOutcome::Success { .. }));
    assert_eq!(platform.published_texts(), vec!["Ship early."]);
}

#[tokio::test]
async fn test_curly_quotes_and_padding_are_stripped() {
    let generator = MockGenerator::returns("  “Don't wait for permission.”  ");
    let platform = MockPlatform::success("x");

    publisher(&generator, &platform).run().await;

    assert_eq!(platform.published_texts(), vec!["Don't wait for permission."]);
}

// NO CONTENT

#[tokio::test]
async fn test_empty_generation_skips_publishing() {
    let generator = MockGenerator::empty();
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    assert!(matches!(outcome, ExecutionOutcome::NoContent { .. }));
    assert_eq!(platform.publish_call_count(), 0);

    let report = outcome.report();
    assert!(report.success);
    assert_eq!(report.message, MSG_NO_CONTENT);
}

#[tokio::test]
async fn test_whitespace_and_quotes_only_generation_skips_publishing() {
    let generator = MockGenerator::returns("  \"\"  \n");
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    assert!(matches!(outcome, ExecutionOutcome::NoContent { .. }));
    assert_eq!(platform.publish_call_count(), 0);
}

// LENGTH ENFORCEMENT

#[tokio::test]
async fn test_exactly_at_limit_is_published() {
    let generator = MockGenerator::returns("a".repeat(280));
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    assert!(matches!(outcome, ExecutionOutcome::Success { .. }));
    assert_eq!(platform.publish_call_count(), 1);
}

#[tokio::test]
async fn test_over_limit_fails_without_truncation_or_publishing() {
    let generator = MockGenerator::returns("a".repeat(281));
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    match outcome {
        ExecutionOutcome::Failure { reason, content, .. } => {
            assert!(reason.contains("too long"));
            assert!(reason.contains("281"));
            // The oversized text is reported for diagnostics, untouched.
            assert_eq!(content.as_deref().map(|c| c.chars().count()), Some(281));
        }
        other => panic!("expected Failure, got {other:?}"),
    }

    assert_eq!(platform.publish_call_count(), 0);
}

#[tokio::test]
async fn test_limit_comes_from_the_platform() {
    let generator = MockGenerator::returns("fifty characters of text padded out to length....!");
    let platform = MockPlatform::success("x").with_limit(40);

    let outcome = publisher(&generator, &platform).run().await;

    assert!(matches!(outcome, ExecutionOutcome::Failure { .. }));
    assert_eq!(platform.publish_call_count(), 0);
}

// PROVIDER FAILURES

#[tokio::test]
async fn test_publish_rejection_carries_provider_detail() {
    let generator = MockGenerator::returns("Ship early.");
    let platform = MockPlatform::auth_failure("x", "Request failed with code 401: auth");

    let outcome = publisher(&generator, &platform).run().await;

    match outcome {
        ExecutionOutcome::Failure {
            ref reason,
            ref content,
            ..
        } => {
            assert!(reason.contains("auth"));
            assert!(reason.contains("Authentication failed"));
            assert_eq!(content.as_deref(), Some("Ship early."));
        }
        ref other => panic!("expected Failure, got {other:?}"),
    }

    let report = outcome.report();
    assert!(!report.success);
    assert!(report.error.unwrap().contains("401"));
}

#[tokio::test]
async fn test_generation_failure_never_reaches_the_platform() {
    let generator = MockGenerator::api_failure("model decommissioned");
    let platform = MockPlatform::success("x");

    let outcome = publisher(&generator, &platform).run().await;

    match outcome {
        ExecutionOutcome::Failure { reason, content, .. } => {
            assert!(reason.contains("Generation error"));
            assert!(reason.contains("model decommissioned"));
            assert!(content.is_none());
        }
        other => panic!("expected Failure, got {other:?}"),
    }

    assert_eq!(platform.publish_call_count(), 0);
}

#[tokio::test]
async fn test_failed_cycle_does_not_poison_the_next_one() {
    let generator = MockGenerator::returns("Ship early.");
    let failing = MockPlatform::post_failure("x", "flaky");
    let healthy = MockPlatform::success("x");

    let outcome = publisher(&generator, &failing).run().await;
    assert!(matches!(outcome, ExecutionOutcome::Failure { .. }));

    let outcome = publisher(&generator, &healthy).run().await;
    assert!(matches!(outcome, ExecutionOutcome::Success { .. }));
}

// CONFIGURATION

#[tokio::test]
#[serial]
async fn test_missing_credentials_fail_before_any_provider_contact() {
    for name in [
        "GROQ_API_KEY",
        "X_API_KEY",
        "X_API_SECRET",
        "X_ACCESS_TOKEN",
        "X_ACCESS_TOKEN_SECRET",
    ] {
        std::env::remove_var(name);
    }

    let outcome = ContentPublisher::run_from_env().await;

    match outcome {
        ExecutionOutcome::Failure { reason, content, .. } => {
            assert!(reason.contains("Configuration error"));
            assert!(reason.contains("GROQ_API_KEY"));
            assert!(content.is_none());
        }
        other => panic!("expected Failure, got {other:?}"),
    }
}
