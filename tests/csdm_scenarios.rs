//! End-to-end walks through the built-in CSDM trees.

use csdm_wizard::catalog::{self, CatalogSource};
use csdm_wizard::engine::{Session, StepView, WizardEngine, WizardError};
use csdm_wizard::{ChoiceId, DomainCategory, StepId};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine() -> WizardEngine {
    init_logging();
    WizardEngine::new(catalog::csdm_v4())
}

fn walk(engine: &WizardEngine, choices: &[&str]) -> csdm_wizard::WizardState {
    choices.iter().fold(engine.start(), |state, choice| {
        engine
            .advance(&state, *choice)
            .unwrap_or_else(|e| panic!("walk {choices:?} failed: {e}"))
    })
}

#[test]
fn business_ability_is_a_business_capability() {
    let engine = engine();
    let state = walk(&engine, &["yes"]);

    let result = engine.lookup_result(state.current()).unwrap();
    assert_eq!(result.title, "Business Capability");
    assert_eq!(result.domain, DomainCategory::Design);
    assert_eq!(result.naming_template, "[Noun] [Management/Processing]");
}

#[test]
fn container_is_a_service_portfolio() {
    let engine = engine();

    let state = walk(&engine, &["no"]);
    assert_eq!(state.current(), "check_container");
    assert!(!engine.is_terminal(state.current()));

    let state = engine.advance(&state, true).unwrap();
    let result = engine.lookup_result(state.current()).unwrap();
    assert_eq!(result.title, "Service Portfolio");
    assert_eq!(result.domain, DomainCategory::SellConsume);
}

#[test]
fn every_path_reaches_its_classification() {
    let engine = engine();
    let cases: &[(&[&str], &str)] = &[
        (&["yes"], "Business Capability"),
        (&["no", "yes"], "Service Portfolio"),
        (&["no", "no", "yes", "product"], "Business Application"),
        (&["no", "no", "yes", "instance"], "Application Service"),
        (&["no", "no", "no", "business_user"], "Business Service"),
        (
            &["no", "no", "no", "it_team", "offering"],
            "Technical Service Offering",
        ),
        (&["no", "no", "no", "it_team", "service"], "Technical Service"),
    ];

    for (choices, title) in cases {
        let state = walk(&engine, choices);
        let result = engine.lookup_result(state.current()).unwrap();
        assert_eq!(&result.title, title, "path {choices:?}");
        assert_eq!(state.depth(), choices.len());
    }
}

#[test]
fn going_back_from_a_result_returns_to_last_question() {
    let engine = engine();
    let results = [
        walk(&engine, &["yes"]),
        walk(&engine, &["no", "no", "yes", "instance"]),
        walk(&engine, &["no", "no", "no", "it_team", "service"]),
    ];

    for state in results {
        let last_question = state.history().last().unwrap().from.clone();

        let back = engine.go_back(&state);

        assert_eq!(back.current(), &last_question);
        assert!(!engine.is_terminal(back.current()));
        assert!(engine.view(&back).unwrap().result().is_none());
    }
}

#[test]
fn invalid_choice_is_reported_and_state_kept() {
    let engine = engine();
    let state = walk(&engine, &["no", "no", "yes"]);
    let before = state.clone();

    let err = engine.advance(&state, "yes").unwrap_err();

    assert_eq!(
        err,
        WizardError::InvalidTransition {
            step: StepId::from("software_split"),
            choice: ChoiceId::YES,
        }
    );
    assert_eq!(state, before);
    assert_eq!(
        err.to_string(),
        "No choice 'yes' available from step 'software_split'"
    );
}

#[test]
fn lookup_result_on_question_is_not_terminal() {
    let engine = engine();

    let err = engine
        .lookup_result(&StepId::from("check_software"))
        .unwrap_err();
    assert!(matches!(err, WizardError::NotTerminal { .. }));
}

#[test]
fn question_view_carries_content_for_renderer() {
    let engine = engine();
    let state = walk(&engine, &["no", "no", "no"]);

    match engine.view(&state).unwrap() {
        StepView::Question {
            step,
            content,
            can_go_back,
        } => {
            assert_eq!(step, "check_service");
            assert!(can_go_back);
            assert_eq!(content.heading.as_deref(), Some("Step 4: The Service Type"));
            assert_eq!(
                content.litmus_test.as_deref(),
                Some("Who is the customer requesting this?")
            );
            let labels: Vec<&str> = content.choices.iter().map(|c| c.label.as_str()).collect();
            assert_eq!(labels, vec!["Business User", "IT / Technical Team"]);
        }
        StepView::Result { .. } => panic!("Expected a question"),
    }
}

#[test]
fn view_serializes_for_json_renderers() {
    let engine = engine();
    let state = walk(&engine, &["no", "yes"]);

    let json = serde_json::to_value(engine.view(&state).unwrap()).unwrap();

    assert_eq!(json["kind"], "result");
    assert_eq!(json["step"], "res_svc_port");
    assert_eq!(json["data"]["title"], "Service Portfolio");
    assert_eq!(json["data"]["domain"], "sell_consume");
    assert_eq!(json["can_go_back"], true);
}

#[test]
fn express_variant_has_three_way_service_question() {
    init_logging();
    let engine = WizardEngine::new(catalog::csdm_v4_express());
    let state = walk(&engine, &["no", "no", "no"]);

    assert_eq!(engine.choices(state.current()).len(), 3);

    let offering = engine.advance(&state, "it_offering").unwrap();
    assert_eq!(
        engine.lookup_result(offering.current()).unwrap().title,
        "Technical Service Offering"
    );
}

#[test]
fn session_walkthrough_with_back_and_restart() {
    init_logging();
    let engine = CatalogSource::default()
        .load()
        .map(WizardEngine::new)
        .unwrap();
    let mut session = Session::new(engine);

    session.advance(false).unwrap();
    session.advance(false).unwrap();
    session.advance(true).unwrap();
    session.advance("product").unwrap();
    assert!(session.is_complete());
    assert_eq!(session.result().unwrap().title, "Business Application");

    session.go_back();
    session.advance("instance").unwrap();
    assert_eq!(session.result().unwrap().title, "Application Service");
    assert_eq!(session.state().depth(), 4);

    let path: Vec<&str> = session
        .engine()
        .path(session.state())
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(
        path,
        vec![
            "start",
            "check_container",
            "check_software",
            "software_split",
            "res_app_svc"
        ]
    );

    session.restart();
    assert_eq!(session.state().current(), "start");
    assert!(!session.view().unwrap().can_go_back());
}
