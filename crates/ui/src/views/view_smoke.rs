use std::time::Duration;

use quiz_core::QuestionBank;
use services::FlowSettings;

use super::test_harness::{ViewHarness, fast_settings, setup_view_harness};
use crate::vm::FlowIntent;

fn sign_in(harness: &mut ViewHarness) {
    harness.dispatch(FlowIntent::Start);
    harness.dispatch(FlowIntent::EditUsername("alex".to_string()));
    harness.dispatch(FlowIntent::EditPassword("x".to_string()));
    harness.dispatch(FlowIntent::SubmitCredentials);
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_call_to_action() {
    let harness = setup_view_harness(QuestionBank::reference(), fast_settings());
    let html = harness.render();
    assert!(html.contains("Are you free?"), "missing title in {html}");
    assert!(html.contains("I am free"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_toggles_heading() {
    let mut harness = setup_view_harness(QuestionBank::reference(), fast_settings());
    harness.dispatch(FlowIntent::Start);
    let html = harness.render();
    assert!(html.contains("Welcome Back"), "missing sign-in heading in {html}");

    harness.dispatch(FlowIntent::ToggleAuthMode);
    let html = harness.render();
    assert!(html.contains("Create Account"), "missing sign-up heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_smoke_blocks_blank_credentials() {
    let mut harness = setup_view_harness(QuestionBank::reference(), fast_settings());
    harness.dispatch(FlowIntent::Start);
    harness.dispatch(FlowIntent::EditUsername("alex".to_string()));
    harness.dispatch(FlowIntent::SubmitCredentials);

    let html = harness.render();
    assert!(html.contains("Please fill in all fields"), "missing error in {html}");
    assert!(html.contains("Welcome Back"), "left auth stage in {html}");

    harness.dispatch(FlowIntent::EditPassword("x".to_string()));
    harness.dispatch(FlowIntent::SubmitCredentials);
    let html = harness.render();
    assert!(html.contains("Question 1 of 7"), "missing progress in {html}");
    assert!(!html.contains("Please fill in all fields"), "stale error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_rejects_blank_answer() {
    let mut harness = setup_view_harness(QuestionBank::reference(), fast_settings());
    sign_in(&mut harness);
    harness.dispatch(FlowIntent::EditAnswer("   ".to_string()));
    harness.dispatch(FlowIntent::SubmitAnswer);

    let html = harness.render();
    assert!(html.contains("Please enter your answer"), "missing error in {html}");
    assert!(html.contains("Question 1 of 7"), "advanced past question in {html}");
    assert!(html.contains("What makes you feel most alive?"), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_flow_smoke_counts_down_to_summary_and_restarts() {
    let bank = QuestionBank::new(["First question?", "Second question?"]).unwrap();
    let mut harness = setup_view_harness(bank, fast_settings());
    sign_in(&mut harness);

    harness.dispatch(FlowIntent::EditAnswer("one".to_string()));
    harness.dispatch(FlowIntent::SubmitAnswer);
    assert!(harness.drive_until("Question 2 of 2").await, "{}", harness.render());
    assert!(harness.render().contains("Finish"));

    harness.dispatch(FlowIntent::EditAnswer("two".to_string()));
    harness.dispatch(FlowIntent::SubmitAnswer);
    assert!(harness.drive_until("Start Over").await, "{}", harness.render());

    let html = harness.render();
    assert!(html.contains("Thank you, alex"), "missing greeting in {html}");
    let first = html.find("First question?").expect("first question listed");
    let second = html.find("Second question?").expect("second question listed");
    assert!(first < second, "answers out of order in {html}");
    assert!(html.contains("one") && html.contains("two"), "missing answers in {html}");

    harness.dispatch(FlowIntent::Restart);
    let html = harness.render();
    assert!(html.contains("I am free"), "did not return to landing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_view_smoke_shows_number_then_summary() {
    let bank = QuestionBank::new(["Only question?"]).unwrap();
    let settings = FlowSettings {
        tick_period: Duration::from_millis(20),
        submit_delay: Duration::ZERO,
    };
    let mut harness = setup_view_harness(bank, settings);
    sign_in(&mut harness);

    harness.dispatch(FlowIntent::EditAnswer("yes".to_string()));
    harness.dispatch(FlowIntent::SubmitAnswer);
    assert!(harness.drive_until("Get ready").await, "{}", harness.render());

    let html = harness.render();
    assert!(html.contains("countdown__value"), "missing counter in {html}");
    assert!(
        (0..=5).any(|n| html.contains(&format!(">{n}</p>"))),
        "missing countdown number in {html}"
    );

    assert!(harness.drive_until("Start Over").await, "{}", harness.render());

    // The tick task is gone once the summary shows: nothing else changes the screen.
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Thank you, alex"), "left the summary in {html}");
    assert!(!html.contains("Get ready"), "countdown still mounted in {html}");
    assert!(!html.contains("experience__fault"), "late tick surfaced in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_shows_processing_while_submit_is_pending() {
    let bank = QuestionBank::new(["First question?", "Second question?"]).unwrap();
    let settings = FlowSettings {
        submit_delay: Duration::from_millis(150),
        ..fast_settings()
    };
    let mut harness = setup_view_harness(bank, settings);
    sign_in(&mut harness);

    harness.dispatch(FlowIntent::EditAnswer("one".to_string()));
    harness.dispatch(FlowIntent::SubmitAnswer);

    let html = harness.render();
    let label = html.find("Processing...").expect("pending label rendered");
    let button_start = html[..label].rfind("<button").expect("submit button rendered");
    let button = &html[button_start..label];
    assert!(button.contains("disabled"), "submit button enabled in {button}");
    assert!(html.contains("Question 1 of 2"), "advanced before the delay in {html}");

    assert!(harness.drive_until("Question 2 of 2").await, "{}", harness.render());
    let html = harness.render();
    assert!(!html.contains("Processing..."), "pending label stuck in {html}");
    assert!(html.contains("Second question?"), "missing next prompt in {html}");
}
