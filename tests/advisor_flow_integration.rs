//! Integration tests for the advisor flow.
//!
//! These wire the application handlers together with the in-memory
//! session store and the mock AI provider, covering the path a real
//! session takes: login, questionnaire, generation, comparison, chat,
//! and export. No network, no real provider.

use std::sync::Arc;

use secrecy::Secret;

use car_advisor::adapters::ai::MockAiProvider;
use car_advisor::adapters::export::PulldownExportService;
use car_advisor::adapters::session::InMemorySessionStore;
use car_advisor::application::handlers::auth::{LoginCommand, LoginError, LoginHandler};
use car_advisor::application::handlers::chat::{AskExpertCommand, AskExpertHandler};
use car_advisor::application::handlers::comparison::{
    ComparisonAction, GetComparisonHandler, UpdateComparisonCommand, UpdateComparisonHandler,
};
use car_advisor::application::handlers::export::{
    ExportReportCommand, ExportReportHandler, ExportScope,
};
use car_advisor::application::handlers::questionnaire::{AnswerStepCommand, AnswerStepHandler};
use car_advisor::application::handlers::recommendation::{GenerateCommand, GenerateHandler};
use car_advisor::config::{AuthConfig, LimitsConfig};
use car_advisor::domain::foundation::SessionToken;
use car_advisor::domain::questionnaire::{AnswerValue, InputKind};
use car_advisor::ports::{AiError, ExportFormat, SessionStore};

const PASSWORD: &str = "senior_car_guide_2024";

const RECOMMENDATIONS_FIXTURE: &str = r#"Here you go:
[
  {
    "make": "Maruti Suzuki",
    "model": "Swift VXi AMT",
    "years": "2023-2025",
    "price": "₹6L - ₹9L",
    "why_suitable": "Easy to drive and park, with service available everywhere.",
    "key_features": ["AMT gearbox", "High fuel efficiency", "Compact size"],
    "pros": ["Low running costs", "Easy parking"],
    "cons": ["Tight rear seat"],
    "senior_friendly_rating": 9,
    "fuel_efficiency": "22-24 kmpl",
    "safety_rating": "4 stars",
    "maintenance_cost": "Low"
  },
  {
    "make": "Hyundai",
    "model": "Creta SX",
    "years": "2023-2025",
    "price": "₹11L - ₹18L",
    "why_suitable": "High seating position for easy entry and excellent visibility.",
    "key_features": ["360-degree camera", "High seating", "Six airbags"],
    "pros": ["Easy entry/exit", "Feature loaded"],
    "cons": ["Firm ride"],
    "senior_friendly_rating": 8,
    "fuel_efficiency": "15-17 kmpl",
    "safety_rating": "5 stars",
    "maintenance_cost": "Medium"
  }
]"#;

struct TestApp {
    store: Arc<InMemorySessionStore>,
    provider: Arc<MockAiProvider>,
    login: LoginHandler,
    answer: AnswerStepHandler,
    generate: GenerateHandler,
    ask: AskExpertHandler,
    update_comparison: UpdateComparisonHandler,
    get_comparison: GetComparisonHandler,
    export: ExportReportHandler,
}

fn test_app(provider: MockAiProvider) -> TestApp {
    let store = Arc::new(InMemorySessionStore::new());
    let provider = Arc::new(provider);
    let store_dyn: Arc<dyn SessionStore> = store.clone();
    let limits = LimitsConfig::default();
    let auth = AuthConfig {
        login_password: Secret::new(PASSWORD.to_string()),
    };

    TestApp {
        store: store.clone(),
        provider: provider.clone(),
        login: LoginHandler::new(store_dyn.clone(), auth, limits.clone()),
        answer: AnswerStepHandler::new(store_dyn.clone()),
        generate: GenerateHandler::new(store_dyn.clone(), provider.clone(), limits.clone()),
        ask: AskExpertHandler::new(store_dyn.clone(), provider, limits),
        update_comparison: UpdateComparisonHandler::new(store_dyn.clone()),
        get_comparison: GetComparisonHandler::new(store_dyn.clone()),
        export: ExportReportHandler::new(
            store_dyn,
            Arc::new(PulldownExportService::new()),
            "Car Advisor",
        ),
    }
}

async fn login(app: &TestApp) -> SessionToken {
    app.login
        .handle(LoginCommand {
            password: PASSWORD.to_string(),
        })
        .await
        .expect("login with the right password succeeds")
        .token
}

async fn complete_questionnaire(app: &TestApp, token: SessionToken) {
    loop {
        let state = app.store.load(token).await.unwrap();
        let Some(step) = state.engine.current_step().cloned() else {
            break;
        };
        let answer = match &step.input {
            InputKind::SingleSelect { options } => AnswerValue::choice(options[0].clone()),
            InputKind::MultiSelect { options } => AnswerValue::multi([options[0].clone()]),
            InputKind::BudgetRange { floor, .. } => AnswerValue::range(*floor, *floor + 500_000),
            InputKind::FreeText { .. } => AnswerValue::text("easy entry is important"),
        };
        app.answer
            .handle(AnswerStepCommand { token, answer })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn wrong_password_creates_no_session() {
    let app = test_app(MockAiProvider::new());

    let err = app
        .login
        .handle(LoginCommand {
            password: "not the password".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, LoginError::InvalidPassword);
    assert_eq!(app.store.session_count().await, 0);
}

#[tokio::test]
async fn full_flow_from_login_to_export() {
    let app = test_app(MockAiProvider::new().with_response(RECOMMENDATIONS_FIXTURE));
    let token = login(&app).await;

    complete_questionnaire(&app, token).await;

    // Generation happens exactly once and yields presentable entities.
    let cars = app
        .generate
        .handle(GenerateCommand {
            token,
            force: false,
        })
        .await
        .unwrap();
    assert_eq!(cars.len(), 2);
    for car in &cars {
        assert!(!car.make.is_empty());
        assert!(!car.model.is_empty());
        assert!(!car.price_range.is_empty());
    }
    assert_eq!(app.provider.call_count(), 1);

    // Select both cars and derive the table.
    for car in &cars {
        app.update_comparison
            .handle(UpdateComparisonCommand {
                token,
                action: ComparisonAction::Add(car.id),
            })
            .await
            .unwrap();
    }
    let table = app.get_comparison.handle(token).await.unwrap();
    assert_eq!(table.columns.len(), 2);
    assert!(table
        .attributes
        .iter()
        .any(|row| row.attribute == "Price Range"));

    // Export the comparison selection as markdown.
    let report = app
        .export
        .handle(ExportReportCommand {
            token,
            format: ExportFormat::Markdown,
            scope: ExportScope::Comparison,
        })
        .await
        .unwrap();
    let text = String::from_utf8(report.bytes).unwrap();
    assert!(text.contains("Maruti Suzuki Swift VXi AMT"));
    assert!(text.contains("Hyundai Creta SX"));
}

#[tokio::test]
async fn generation_is_refused_until_the_questionnaire_completes() {
    let app = test_app(MockAiProvider::new().with_response(RECOMMENDATIONS_FIXTURE));
    let token = login(&app).await;

    // Answer only the first step.
    app.answer
        .handle(AnswerStepCommand {
            token,
            answer: AnswerValue::choice("I have a budget in mind"),
        })
        .await
        .unwrap();

    let result = app
        .generate
        .handle(GenerateCommand {
            token,
            force: false,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(app.provider.call_count(), 0, "no API call before Complete");
}

#[tokio::test]
async fn failed_generation_preserves_session_state() {
    let app = test_app(MockAiProvider::new().with_error(AiError::unavailable("maintenance")));
    let token = login(&app).await;
    complete_questionnaire(&app, token).await;

    let before = app.store.load(token).await.unwrap();
    let result = app
        .generate
        .handle(GenerateCommand {
            token,
            force: false,
        })
        .await;
    assert!(result.is_err());

    let after = app.store.load(token).await.unwrap();
    assert_eq!(before.engine.answers(), after.engine.answers());
    assert!(after.recommendations.is_none());
}

#[tokio::test]
async fn failed_chat_turn_keeps_the_transcript_atomic() {
    let app = test_app(
        MockAiProvider::new()
            .with_response("Petrol suits low annual mileage.")
            .with_error(AiError::rate_limited(30)),
    );
    let token = login(&app).await;

    app.ask
        .handle(AskExpertCommand {
            token,
            question: "Petrol or diesel?".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(app.store.load(token).await.unwrap().transcript.len(), 2);

    let result = app
        .ask
        .handle(AskExpertCommand {
            token,
            question: "And what about CNG?".to_string(),
        })
        .await;
    assert!(result.is_err());

    // The failed exchange left nothing behind.
    let transcript = app.store.load(token).await.unwrap().transcript;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[0].text, "Petrol or diesel?");
}

#[tokio::test]
async fn export_with_no_recommendations_fails_cleanly() {
    let app = test_app(MockAiProvider::new());
    let token = login(&app).await;

    let result = app
        .export
        .handle(ExportReportCommand {
            token,
            format: ExportFormat::Markdown,
            scope: ExportScope::All,
        })
        .await;

    assert!(result.is_err());
}
