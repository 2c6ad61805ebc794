//! CSDM Walkthrough
//!
//! Walks a decision tree with answers given on the command line and prints
//! each step the way a plain-text renderer would.
//!
//! Key concepts:
//! - Choosing a tree through `CSDM_WIZARD_TREE` (`builtin:<name>` or a JSON path)
//! - Pure engine operations driven by a session
//! - "back" and "restart" as ordinary answers
//!
//! Run with:
//!   cargo run --example csdm_walkthrough -- no no yes instance
//!   cargo run --example csdm_walkthrough -- no back yes
//!   cargo run --example csdm_walkthrough -- --dump > csdm-v4.json

use csdm_wizard::catalog::{self, CatalogSource};
use csdm_wizard::engine::{Session, StepView, WizardEngine};
use std::error::Error;

fn render(view: &StepView<'_>) {
    match view {
        StepView::Question { step, content, .. } => {
            if let Some(heading) = &content.heading {
                println!("── {heading}");
            }
            println!("[{step}] {}", content.prompt);
            if let Some(definition) = &content.definition {
                println!("  Definition:  {definition}");
            }
            if let Some(test) = &content.litmus_test {
                println!("  Litmus test: {test}");
            }
            if !content.examples.is_empty() {
                println!("  Examples:    {}", content.examples.join(", "));
            }
            for choice in &content.choices {
                println!("    ({}) {}", choice.choice, choice.label);
            }
        }
        StepView::Result { data, .. } => {
            println!("🎯 Classification: {}", data.title);
            println!("   Domain:          {}", data.domain);
            println!("   Definition:      {}", data.definition);
            println!("   Examples:        {}", data.examples.join(", "));
            println!("   Naming standard: {}", data.naming_template);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let source = match std::env::var("CSDM_WIZARD_TREE") {
        Ok(value) => value.parse::<CatalogSource>()?,
        Err(_) => CatalogSource::default(),
    };

    let answers: Vec<String> = std::env::args().skip(1).collect();
    if answers.iter().any(|a| a == "--dump") {
        let definition = match &source {
            CatalogSource::Builtin(name) => catalog::builtin_definition(name)?,
            CatalogSource::File(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        };
        println!("{}", serde_json::to_string_pretty(&definition)?);
        return Ok(());
    }

    let tree = source.load()?;
    println!("=== {} ({source}) ===\n", tree.title());

    let mut session = Session::new(WizardEngine::new(tree));
    render(&session.view()?);

    for answer in answers {
        println!("\n> {answer}\n");
        match answer.as_str() {
            "back" => {
                session.go_back();
            }
            "restart" => {
                session.restart();
            }
            choice => {
                if let Err(e) = session.advance(choice) {
                    println!("!! {e}");
                    continue;
                }
            }
        }
        render(&session.view()?);
    }

    if session.is_complete() {
        let path: Vec<String> = session
            .engine()
            .path(session.state())
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("\nPath: {}", path.join(" → "));
    }

    Ok(())
}
