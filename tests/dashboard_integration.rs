//! End-to-end tests for the dashboard.
//!
//! Drives `AppState` with key events the way the event loop does and
//! renders full frames into a `TestBackend`.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use rstest::rstest;

use hospitality_ai::core::i18n::Language;
use hospitality_ai::core::scenario::{ScenarioSource, SimulatedScenarios};
use hospitality_ai::tui::app::AppState;
use hospitality_ai::tui::events::{AppEvent, View};
use hospitality_ai::tui::services::Services;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 60;

fn app_with_seed(seed: u64) -> AppState {
    let services = Services::with_source(Arc::new(SimulatedScenarios::with_seed(seed)));
    AppState::new(services, Language::English, View::GuestExperience)
}

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(
        code,
        KeyModifiers::NONE,
    ))));
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &AppState) -> String {
    screen_sized(app, WIDTH, HEIGHT)
}

fn screen_sized(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[case('1', "Guest Experience Personalization", "Recommended Amenities")]
#[case('2', "Revenue Management Optimization", "Upselling Opportunities")]
#[case('3', "Sentiment Analysis of Guest Feedback", "AI-Generated Recommendations")]
#[case('4', "Staff Performance Optimization", "Personalized Training Recommendations")]
fn view_without_action_shows_no_data(
    #[case] key: char,
    #[case] label: &str,
    #[case] data_section: &str,
) {
    let mut app = app_with_seed(1);
    press(&mut app, KeyCode::Char(key));

    let text = screen(&app);
    assert!(text.contains(label), "missing view label {label}");
    assert!(text.contains("Press Enter") || text.contains("Enter a guest ID") || text.contains("Attach a CSV"));
    assert!(!text.contains(data_section), "{data_section} rendered before the action ran");
}

#[rstest]
#[case(View::GuestExperience)]
#[case(View::SentimentAnalysis)]
fn disabled_action_is_a_no_op(#[case] view: View) {
    let mut app = app_with_seed(2);
    app.handle_event(AppEvent::Action(
        hospitality_ai::tui::events::Action::SelectView(view),
    ));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('g'));

    assert!(app.guest.bundle().is_none());
    assert!(app.sentiment.bundle().is_none());
    assert!(app.running);
}

#[test]
fn guest_flow_renders_recommendations() {
    let mut app = app_with_seed(3);
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "G-100");
    assert!(screen(&app).contains("INSERT"));
    press(&mut app, KeyCode::Enter);

    let text = screen(&app);
    assert!(!text.contains("INSERT"));
    assert!(text.contains("\"id\": \"G-100\""));
    assert!(text.contains("Personalized Dining Recommendations"));
    assert!(text.contains("The Gourmet Room"));
}

#[test]
fn sentiment_flow_attach_then_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.csv");
    std::fs::write(&path, "review\nLovely stay\n").unwrap();

    let mut app = app_with_seed(4);
    press(&mut app, KeyCode::Char('3'));

    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, &path.display().to_string());
    press(&mut app, KeyCode::Enter);
    assert!(app.sentiment.upload().is_some());
    assert!(app.sentiment.bundle().is_none());

    press(&mut app, KeyCode::Enter);
    let text = screen(&app);
    assert!(text.contains("Overall Sentiment Distribution"));
    assert!(text.contains("Key Topics in Guest Feedback"));
    assert!(text.contains("reviews.csv"));
}

#[test]
fn rejected_attach_keeps_analysis_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not a csv").unwrap();

    let mut app = app_with_seed(5);
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, &path.display().to_string());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert!(app.sentiment.upload().is_none());
    assert!(app.sentiment.attach_error().is_some());
    assert!(app.sentiment.bundle().is_none());
}

#[test]
fn language_switch_relabels_without_touching_data() {
    let mut app = app_with_seed(6);
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    let bundle = app.revenue.bundle().cloned();
    assert!(bundle.is_some());

    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.language, Language::Greek);
    assert_eq!(app.view, View::RevenueManagement);
    assert_eq!(app.revenue.bundle().cloned(), bundle);

    let text = screen(&app);
    assert!(text.contains("Βελτιστοποίηση Διαχείρισης Εσόδων"));
    assert!(text.contains("Dynamic Pricing Recommendations"));
}

#[test]
fn same_seed_same_dashboard() {
    let drive = |seed| {
        let mut app = app_with_seed(seed);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        app.staff.bundle().cloned()
    };
    assert_eq!(drive(77), drive(77));

    let direct = SimulatedScenarios::with_seed(77).analyze_staff_performance();
    assert_eq!(drive(77), Some(direct));
}

#[test]
fn narrow_terminal_hides_sidebar() {
    let mut app = app_with_seed(8);
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);

    assert!(screen(&app).contains("Navigation"));
    assert!(!screen_sized(&app, 24, 20).contains("Navigation"));
}
