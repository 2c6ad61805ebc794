//! ServiceNow Common Service Data Model (CSDM v4) classification trees.

use crate::tree::{ChoiceDef, DomainCategory, QuestionDef, ResultDef, TreeDefinition};

/// Name of the full CSDM v4 tree.
pub const CSDM_V4: &str = "csdm-v4";

/// Name of the shorter variant with a three-way service question.
pub const CSDM_V4_EXPRESS: &str = "csdm-v4-express";

const TITLE: &str = "CubeSimple CSDM v4 Framework";

/// The full CSDM v4 decision wizard.
///
/// ```text
/// start ─yes→ Business Capability
///   └no→ check_container ─yes→ Service Portfolio
///          └no→ check_software ─yes→ software_split ─product→ Business Application
///                 │                      └instance→ Application Service
///                 └no→ check_service ─business_user→ Business Service
///                        └it_team→ check_tech_svc_type ─offering→ Technical Service Offering
///                                     └service→ Technical Service
/// ```
pub fn csdm_v4_definition() -> TreeDefinition {
    TreeDefinition {
        name: CSDM_V4.to_string(),
        title: TITLE.to_string(),
        start: "start".into(),
        questions: vec![
            strategy_check(),
            container_check(),
            software_check(),
            software_split(),
            QuestionDef::new("check_service", "Is this an Action or Help Request?")
                .heading("Step 4: The Service Type")
                .definition("Something a user interacts with to get value.")
                .litmus_test("Who is the customer requesting this?")
                .examples(["Onboard Employee (User)", "Server Hosting (IT Admin)"])
                .add_choice(
                    ChoiceDef::new("business_user", "Business User", "res_bus_svc")
                        .hint("(HR, Finance, Sales, Employee)"),
                )
                .add_choice(
                    ChoiceDef::new("it_team", "IT / Technical Team", "check_tech_svc_type")
                        .hint("(Server Admins, Developers, Network Team)"),
                ),
            QuestionDef::new("check_tech_svc_type", "Service vs. Offering")
                .heading("Step 5: Technical Service Detail")
                .definition(
                    "An Offering is a specific flavor of the service with defined \
                     commitments (SLA/Price).",
                )
                .litmus_test("Does this have a tier (Gold/Silver) or specific SLA attached?")
                .examples(["Windows Hosting (Service) vs. Gold Windows Hosting (Offering)"])
                .choice("offering", "It's a Specific Tier (Offering)", "res_tech_svc_off")
                .choice("service", "It's the General Service", "res_tech_svc"),
        ],
        results: all_results(),
    }
}

/// CSDM v4 with the service type and technical detail merged into one
/// three-way question.
pub fn csdm_v4_express_definition() -> TreeDefinition {
    TreeDefinition {
        name: CSDM_V4_EXPRESS.to_string(),
        title: format!("{TITLE} (Express)"),
        start: "start".into(),
        questions: vec![
            strategy_check(),
            container_check(),
            software_check(),
            software_split(),
            QuestionDef::new("check_service", "Who consumes this service?")
                .heading("Step 4: The Service Type")
                .definition("Something a user interacts with to get value.")
                .litmus_test("Who is the customer, and is a tier or SLA attached?")
                .add_choice(
                    ChoiceDef::new("business_user", "Business User", "res_bus_svc")
                        .hint("(HR, Finance, Sales, Employee)"),
                )
                .add_choice(
                    ChoiceDef::new("it_service", "IT Team, General Service", "res_tech_svc")
                        .hint("(Windows Server Hosting, Storage Management)"),
                )
                .add_choice(
                    ChoiceDef::new("it_offering", "IT Team, Specific Tier", "res_tech_svc_off")
                        .hint("(Gold Windows Hosting, Standard Storage)"),
                ),
        ],
        results: all_results(),
    }
}

fn strategy_check() -> QuestionDef {
    QuestionDef::new("start", "Is this a High-Level Business Ability?")
        .heading("Step 1: The Strategy Check")
        .definition(
            "An abstract ability of the organization (Strategy). It defines WHAT we do, not HOW.",
        )
        .litmus_test(
            "Does this exist even without any computers? (e.g., We would still do \
             'Recruiting' with pen and paper).",
        )
        .examples([
            "Recruiting",
            "Payroll Processing",
            "Logistics",
            "Market Research",
        ])
        .choice("yes", "Yes, it's a Business Ability", "res_bus_cap")
        .choice("no", "No, it's something else", "check_container")
}

fn container_check() -> QuestionDef {
    QuestionDef::new("check_container", "Is this just a Folder or Container?")
        .heading("Step 2: The Container Check")
        .definition("A logical grouping used for reporting. You cannot 'order' this directly.")
        .litmus_test("Is this just a bucket to hold other services?")
        .examples([
            "HR Services",
            "Communication Tools",
            "IT Support Services",
        ])
        .choice("yes", "Yes, it's a Portfolio/Container", "res_svc_port")
        .choice("no", "No, continue", "check_software")
}

fn software_check() -> QuestionDef {
    QuestionDef::new("check_software", "Does this represent a Software Product?")
        .heading("Step 3: The Software Check")
        .choice("yes", "Yes, it involves Software", "software_split")
        .choice("no", "No, it's a Service/Action", "check_service")
}

fn software_split() -> QuestionDef {
    QuestionDef::new(
        "software_split",
        "Is this the Brand/Product or the Running Instance?",
    )
    .heading("Critical CSDM Decision Point")
    .add_choice(
        ChoiceDef::new("product", "It's the Product (Concept)", "res_bus_app").hint(
            "Used for Planning, Costing, & Licensing. Represents all instances \
             (Dev/Test/Prod). Is this the name on the invoice from the vendor?",
        ),
    )
    .add_choice(
        ChoiceDef::new("instance", "It's the Running Instance", "res_app_svc").hint(
            "Used for Operations, Incidents, & Changes. It has a specific \
             Environment (Prod/Dev). Can I log into this specific one right now?",
        ),
    )
}

fn all_results() -> Vec<ResultDef> {
    vec![
        ResultDef::new("res_bus_cap", "Business Capability", DomainCategory::Design)
            .definition("The highest level of abstraction. Represents WHAT the business does.")
            .examples(["Global Recruiting", "Logistics Management"])
            .naming_template("[Noun] [Management/Processing]"),
        ResultDef::new("res_bus_app", "Business Application", DomainCategory::Design)
            .definition(
                "The logical software product. Used for Portfolio Management. NOT for Incidents.",
            )
            .examples(["Zoom", "Salesforce", "SAP S/4HANA"])
            .naming_template("[Vendor] [Product Name]"),
        ResultDef::new(
            "res_app_svc",
            "Application Service",
            DomainCategory::ManageTechnical,
        )
        .definition(
            "The specific deployed stack. This is the Configuration Item (CI) for Incidents.",
        )
        .examples(["Zoom - Production", "SAP - Dev", "Workday - Test"])
        .naming_template("[App Name] - [Environment]"),
        ResultDef::new(
            "res_tech_svc",
            "Technical Service",
            DomainCategory::ManageTechnical,
        )
        .definition("A service provided by IT to IT to support infrastructure.")
        .examples(["Windows Server Hosting", "Storage Management"])
        .naming_template("[Technology] [Hosting/Support]"),
        ResultDef::new(
            "res_tech_svc_off",
            "Technical Service Offering",
            DomainCategory::ManageTechnical,
        )
        .definition("A specific option of a Technical Service with SLAs/Commitments.")
        .examples(["Gold Windows Hosting (99.9%)", "Standard Storage"])
        .naming_template("[Service] - [Tier/SLA]"),
        ResultDef::new("res_svc_port", "Service Portfolio", DomainCategory::SellConsume)
            .definition("A container used to group services for reporting.")
            .examples(["HR Services", "IT Support Services"])
            .naming_template("[Department/Topic] Services"),
        ResultDef::new("res_bus_svc", "Business Service", DomainCategory::SellConsume)
            .definition("A service consumed by business users to complete a task.")
            .examples(["Onboard New Hire", "Reset Password"])
            .naming_template("[Verb] [Noun]"),
    ]
}
