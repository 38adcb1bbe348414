mod common;

use std::cell::RefCell;
use std::time::Duration;

use common::{MockClient, Scripted, envelope, full_analysis, refund_analysis};
use ticket_analysis::analysis::{AnalysisResult, Feeling, Level, UrgencyLevel};
use ticket_analysis::commands::{fetch_once, format_show};
use ticket_analysis::tui::analysis::model::{
    CloseControl, EMPTY_MESSAGE, LOADING_MESSAGE, ModalBody, Section, SectionKind,
};
use ticket_analysis::tui::analysis::{
    FetchController, ViewState, compute_view_model, fetch_view_state, run_fetch_cycle,
};
use ticket_analysis::tui::{confidence_color, sentiment_color};
use ticket_analysis::{AnalysisEnvelope, HttpAnalysisClient, TicketId};

// ============================================================================
// Fetch lifecycle
// ============================================================================

#[test]
fn test_activation_shows_loading_before_response() {
    let mut controller = FetchController::new();
    controller.activate(TicketId(1));

    let vm = compute_view_model(controller.state());
    assert_eq!(
        vm.body,
        ModalBody::Loading {
            message: LOADING_MESSAGE
        }
    );
    assert_eq!(
        vm.close_controls,
        [
            CloseControl::HeaderButton,
            CloseControl::FooterButton,
            CloseControl::Backdrop
        ]
    );
}

#[tokio::test]
async fn test_ticket_42_refund_scenario() {
    let client =
        MockClient::new().respond(42, Scripted::Envelope(AnalysisEnvelope::success(refund_analysis())));

    let state = fetch_once(&client, TicketId(42)).await;
    assert_eq!(state, ViewState::Success(refund_analysis()));

    let vm = compute_view_model(&state);
    assert_eq!(
        vm.section_kinds(),
        vec![SectionKind::Summary, SectionKind::Sentiment]
    );

    let ModalBody::Sections(sections) = &vm.body else {
        panic!("expected sections");
    };
    let Section::Sentiment(sentiment) = &sections[1] else {
        panic!("expected sentiment section");
    };
    assert_eq!(sentiment.feeling_label, "FRUSTRATED");
    assert_eq!(sentiment.feeling_color, sentiment_color(Feeling::Frustrated));
    assert_eq!(sentiment.urgency_label, "HIGH");
    assert_eq!(sentiment.urgency_color, confidence_color(Level::High));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_ticket_42_decoded_from_wire_json() {
    let client = MockClient::new().respond(
        42,
        Scripted::Envelope(envelope(
            r#"{
                "status": "success",
                "analysis": {
                    "status": "success",
                    "analysis": {
                        "summary": "Customer wants refund",
                        "possible_categories": [],
                        "possible_automations": [],
                        "user_sentiment": {
                            "overall_feeling": "frustrated",
                            "indicators": ["angry tone"],
                            "urgency_level": "high"
                        }
                    }
                }
            }"#,
        )),
    );

    let state = fetch_once(&client, TicketId(42)).await;
    let result = state.result().expect("success state");
    assert_eq!(result.summary, "Customer wants refund");
    let sentiment = result.user_sentiment.as_ref().expect("sentiment record");
    assert_eq!(sentiment.overall_feeling, Feeling::Frustrated);
    assert_eq!(sentiment.urgency_level, UrgencyLevel::High);
    assert_eq!(sentiment.indicators, vec!["angry tone".to_string()]);

    let vm = compute_view_model(&state);
    assert_eq!(
        vm.section_kinds(),
        vec![SectionKind::Summary, SectionKind::Sentiment]
    );

    let ModalBody::Sections(sections) = &vm.body else {
        panic!("expected sections");
    };
    assert_eq!(
        sections[0],
        Section::Summary {
            text: "Customer wants refund".to_string()
        }
    );
    let Section::Sentiment(view) = &sections[1] else {
        panic!("expected sentiment section");
    };
    assert_eq!(view.feeling_color, sentiment_color(Feeling::Frustrated));
    assert_eq!(view.urgency_color, confidence_color(Level::High));
    assert_eq!(view.indicators, vec!["\"angry tone\"".to_string()]);
}

#[tokio::test]
async fn test_full_analysis_shows_all_sections_in_order() {
    let client =
        MockClient::new().respond(5, Scripted::Envelope(AnalysisEnvelope::success(full_analysis())));

    let state = fetch_once(&client, TicketId(5)).await;
    let vm = compute_view_model(&state);
    assert_eq!(
        vm.section_kinds(),
        vec![
            SectionKind::Summary,
            SectionKind::Categories,
            SectionKind::Automations,
            SectionKind::Sentiment
        ]
    );

    let ModalBody::Sections(sections) = &vm.body else {
        panic!("expected sections");
    };
    let Section::Categories { rows } = &sections[1] else {
        panic!("expected categories");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].badge, "high");
    assert_eq!(rows[0].badge_color, confidence_color(Level::High));
    assert_eq!(rows[1].badge_color, confidence_color(Level::Low));
}

// ============================================================================
// Failure layers
// ============================================================================

#[tokio::test]
async fn test_outer_failure_uses_inner_message() {
    let client = MockClient::new().respond(
        3,
        Scripted::Envelope(envelope(
            r#"{"status": "error", "analysis": {"status": "error", "message": "Ticket not found"}}"#,
        )),
    );

    let state = fetch_once(&client, TicketId(3)).await;
    assert_eq!(state, ViewState::Error("Ticket not found".to_string()));
}

#[tokio::test]
async fn test_outer_failure_without_message_is_generic() {
    let client = MockClient::new().respond(3, Scripted::Envelope(envelope(r#"{"status": "error"}"#)));

    let state = fetch_once(&client, TicketId(3)).await;
    assert_eq!(state, ViewState::Error("Failed to analyze ticket".to_string()));
}

#[tokio::test]
async fn test_inner_failure_uses_its_message() {
    let client = MockClient::new().respond(
        4,
        Scripted::Envelope(AnalysisEnvelope::analysis_failed(Some("Model overloaded"))),
    );

    let state = fetch_once(&client, TicketId(4)).await;
    assert_eq!(state, ViewState::Error("Model overloaded".to_string()));

    let vm = compute_view_model(&state);
    assert!(matches!(vm.body, ModalBody::Error { ref message, .. } if message == "Model overloaded"));
}

#[tokio::test]
async fn test_inner_failure_without_message_is_generic() {
    let client =
        MockClient::new().respond(4, Scripted::Envelope(AnalysisEnvelope::analysis_failed(None)));

    let state = fetch_once(&client, TicketId(4)).await;
    assert_eq!(state, ViewState::Error("Failed to analyze ticket".to_string()));
}

#[tokio::test]
async fn test_transport_rejection_without_message_is_generic() {
    let client = MockClient::new().respond(9, Scripted::Reject(String::new()));

    let state = fetch_once(&client, TicketId(9)).await;
    assert_eq!(state, ViewState::Error("Failed to analyze ticket".to_string()));
}

#[tokio::test]
async fn test_transport_rejection_with_message() {
    let client = MockClient::new().respond(9, Scripted::Reject("connection reset".to_string()));

    let state = fetch_once(&client, TicketId(9)).await;
    assert_eq!(state, ViewState::Error("connection reset".to_string()));
}

#[tokio::test]
async fn test_success_without_payload_is_empty() {
    let client = MockClient::new()
        .respond(
            6,
            Scripted::Envelope(envelope(
                r#"{"status": "success", "analysis": {"status": "success", "analysis": null}}"#,
            )),
        )
        .respond(
            7,
            Scripted::Envelope(AnalysisEnvelope::success(AnalysisResult::default())),
        );

    for id in [6, 7] {
        let state = fetch_once(&client, TicketId(id)).await;
        assert_eq!(state, ViewState::Empty, "ticket {id}");
        assert_eq!(
            compute_view_model(&state).body,
            ModalBody::Empty {
                message: EMPTY_MESSAGE
            }
        );
    }
}

#[tokio::test]
async fn test_unreachable_backend_settles_to_error() {
    let client =
        HttpAnalysisClient::new("http://127.0.0.1:1/api", None, Duration::from_secs(2)).unwrap();

    let state = fetch_view_state(&client, TicketId(1)).await;
    match state {
        ViewState::Error(message) => assert!(!message.is_empty()),
        other => panic!("expected error, got {other:?}"),
    }
}

// ============================================================================
// Epoch gating
// ============================================================================

#[tokio::test]
async fn test_late_response_for_previous_ticket_is_dropped() {
    let mut a = refund_analysis();
    a.summary = "Ticket A".to_string();
    let mut b = refund_analysis();
    b.summary = "Ticket B".to_string();

    let client = MockClient::new()
        .respond(1, Scripted::Envelope(AnalysisEnvelope::success(a)))
        .respond(2, Scripted::Envelope(AnalysisEnvelope::success(b.clone())))
        .gated(1);
    let controller = RefCell::new(FetchController::new());

    let token_a = controller.borrow_mut().activate(TicketId(1));
    let fetch_a = async {
        let state = fetch_view_state(&client, TicketId(1)).await;
        controller.borrow_mut().apply(token_a, state)
    };
    let switch_to_b = async {
        let token_b = controller.borrow_mut().activate(TicketId(2));
        let state = fetch_view_state(&client, TicketId(2)).await;
        let applied = controller.borrow_mut().apply(token_b, state);
        // A only answers after B has settled
        client.release(1);
        applied
    };

    let (applied_a, applied_b) = tokio::join!(fetch_a, switch_to_b);

    assert!(applied_b);
    assert!(!applied_a);
    let controller = controller.into_inner();
    assert_eq!(controller.state(), &ViewState::Success(b));
    assert_eq!(controller.active_ticket(), Some(TicketId(2)));
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_response_after_close_is_dropped() {
    let client = MockClient::new()
        .respond(1, Scripted::Envelope(AnalysisEnvelope::success(refund_analysis())))
        .gated(1);
    let controller = RefCell::new(FetchController::new());

    let token = controller.borrow_mut().activate(TicketId(1));
    let fetch = async {
        let state = fetch_view_state(&client, TicketId(1)).await;
        controller.borrow_mut().apply(token, state)
    };
    let close = async {
        controller.borrow_mut().unmount();
        client.release(1);
    };

    let (applied, ()) = tokio::join!(fetch, close);

    assert!(!applied);
    let controller = controller.into_inner();
    assert!(!controller.is_mounted());
    assert!(controller.state().is_loading());
}

#[tokio::test]
async fn test_sequential_cycles_each_settle() {
    let client = MockClient::new()
        .respond(1, Scripted::Reject("boom".to_string()))
        .respond(2, Scripted::Envelope(AnalysisEnvelope::success(refund_analysis())));
    let mut controller = FetchController::new();

    let first = run_fetch_cycle(&mut controller, &client, TicketId(1)).await;
    assert!(controller.state().is_error());

    let second = run_fetch_cycle(&mut controller, &client, TicketId(2)).await;
    assert!(second.epoch() > first.epoch());
    assert_eq!(controller.state().result(), Some(&refund_analysis()));
}

// ============================================================================
// Text output
// ============================================================================

#[tokio::test]
async fn test_show_text_for_ticket_42() {
    let client =
        MockClient::new().respond(42, Scripted::Envelope(AnalysisEnvelope::success(refund_analysis())));

    let state = fetch_once(&client, TicketId(42)).await;
    let text = format_show(&state, TicketId(42), false, false).unwrap();

    insta::assert_snapshot!(text, @r#"
    AI Analysis  #42

    Summary
      Refund not received

    User Sentiment
      Overall Feeling: FRUSTRATED
      Urgency Level: HIGH
      Indicators:
        "waited 3 weeks"
    "#);
}
