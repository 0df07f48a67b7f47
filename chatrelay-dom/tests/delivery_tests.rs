//! Integration tests for the delivery pipeline.

use std::sync::Arc;

use chatrelay_dom::delivery::steps;
use chatrelay_dom::{
    DeliveryContext, DeliveryPipeline, DeliverySettings, KeyPhase, MemoryClipboard,
    PasteModifier, SnapshotTarget, StepStatus, SyntheticEvent, TargetKind,
};

fn ctx_with(clipboard: Arc<MemoryClipboard>) -> DeliveryContext {
    DeliveryContext::builder()
        .clipboard(clipboard)
        .paste_modifier(PasteModifier::Ctrl)
        .build()
}

#[tokio::test]
async fn test_standard_order() {
    assert_eq!(
        DeliveryPipeline::standard().step_ids(),
        vec![
            steps::FOCUS,
            steps::CLIPBOARD,
            steps::SYNTHETIC_PASTE,
            steps::ASSIGN,
            steps::INPUT_EVENTS,
            steps::PASTE_SHORTCUT,
        ]
    );
}

#[tokio::test]
async fn test_all_steps_applied_to_textarea() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let ctx = ctx_with(clipboard.clone());
    let mut target = SnapshotTarget::new(TargetKind::TextArea, "textarea");

    let report = DeliveryPipeline::standard()
        .deliver("Hello there", &mut target, &ctx)
        .await;

    assert!(report.steps.iter().all(|s| s.status == StepStatus::Ok));
    assert!(report.clipboard_used());
    assert_eq!(clipboard.contents().as_deref(), Some("Hello there"));
    assert!(target.is_focused());
    assert_eq!(target.text(), "Hello there");
    assert_eq!(
        target.event_names(),
        vec!["paste", "input", "input", "change", "keydown", "keypress", "keyup"]
    );
    assert_eq!(
        target.events()[1],
        SyntheticEvent::insert_text("Hello there")
    );
    assert_eq!(
        target.events()[6],
        SyntheticEvent::Key {
            phase: KeyPhase::Up,
            key: "v".to_string(),
            modifier: PasteModifier::Ctrl,
        }
    );
}

#[tokio::test]
async fn test_clipboard_denied_does_not_abort() {
    let ctx = DeliveryContext::builder()
        .clipboard(Arc::new(MemoryClipboard::denied()))
        .build();
    let mut target = SnapshotTarget::new(TargetKind::ContentEditable, "div");

    let report = DeliveryPipeline::standard().deliver("text", &mut target, &ctx).await;

    assert_eq!(report.step(steps::CLIPBOARD).unwrap().status, StepStatus::Failed);
    assert!(!report.clipboard_used());
    assert!(report.succeeded(steps::ASSIGN));
    assert!(report.succeeded(steps::PASTE_SHORTCUT));
    assert_eq!(target.text(), "text");
}

#[tokio::test]
async fn test_read_only_target_still_gets_events() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let ctx = ctx_with(clipboard);
    let mut target = SnapshotTarget::new(TargetKind::TextArea, "textarea").read_only();

    let report = DeliveryPipeline::standard().deliver("x", &mut target, &ctx).await;

    assert!(!report.succeeded(steps::ASSIGN));
    assert!(report.succeeded(steps::INPUT_EVENTS));
    assert_eq!(report.failures().count(), 1);
    assert_eq!(target.text(), "");
}

#[tokio::test]
async fn test_detached_target_records_every_failure() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let ctx = ctx_with(clipboard.clone());
    let mut target = SnapshotTarget::new(TargetKind::TextBox, "div").detached();

    let report = DeliveryPipeline::standard().deliver("x", &mut target, &ctx).await;

    assert_eq!(report.steps.len(), 6);
    assert!(report.clipboard_used());
    assert!(!report.succeeded(steps::FOCUS));
    assert!(!report.succeeded(steps::SYNTHETIC_PASTE));
    assert!(report.any_succeeded());
}

#[tokio::test]
async fn test_disabled_steps_are_skipped() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let ctx = DeliveryContext::builder()
        .clipboard(clipboard.clone())
        .settings(DeliverySettings {
            clipboard: false,
            synthetic_paste: false,
            paste_shortcut: false,
            paste_modifier: PasteModifier::Meta,
        })
        .build();
    let mut target = SnapshotTarget::new(TargetKind::TextArea, "textarea");

    let report = DeliveryPipeline::standard().deliver("x", &mut target, &ctx).await;

    assert_eq!(report.step(steps::CLIPBOARD).unwrap().status, StepStatus::Skipped);
    assert_eq!(report.step(steps::PASTE_SHORTCUT).unwrap().status, StepStatus::Skipped);
    assert_eq!(clipboard.contents(), None);
    assert_eq!(target.event_names(), vec!["input", "input", "change"]);
    assert_eq!(target.text(), "x");
}
