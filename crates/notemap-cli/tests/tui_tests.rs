use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use notemap::presentation::tui::{MindMapApp, draw};
use notemap_runtime::{SourceSet, Viewport};
use notemap_testing::fixtures::{geography_sources, geography_tree};
use ratatui::{Terminal, backend::TestBackend};

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn render(app: &mut MindMapApp) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| draw(app, f)).unwrap();
    screen_lines(&terminal)
}

fn geography_app() -> MindMapApp {
    MindMapApp::new(
        SourceSet::new(geography_sources()),
        Viewport::new().with_source("a"),
        24,
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_idle_screen_prompts_for_generation() {
    let mut app = geography_app();
    let lines = render(&mut app);

    assert!(lines[0].contains("Source:"));
    assert!(lines[0].contains("Doc A"));
    assert!(lines.iter().any(|l| l.contains("Press [g] to generate")));
}

#[test]
fn test_loading_then_ready_screen() {
    let mut app = geography_app();
    let request = app.handle_key(key(KeyCode::Char('g'))).unwrap();

    let lines = render(&mut app);
    assert!(lines.iter().any(|l| l.contains("Generating mind map")));

    app.apply_generation(request.seq, Ok(geography_tree()));
    let lines = render(&mut app);
    assert!(lines[2].contains("[-] Geography ───── France"));
    assert!(lines.iter().any(|l| l.contains("Mind map ready")));
}

#[test]
fn test_popup_shows_description_and_closes_on_outside_click() {
    let mut app = geography_app();
    let request = app.request_generate().unwrap();
    app.apply_generation(request.seq, Ok(geography_tree()));
    render(&mut app);

    // body starts at (1, 2); France's label is at column 20 of the layout
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1 + 22,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    let lines = render(&mut app);
    assert!(lines[2].contains("France *"));
    assert!(lines[3].contains("France"));
    assert!(lines[4].contains("European country"));

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 7,
        modifiers: KeyModifiers::NONE,
    });
    let lines = render(&mut app);
    assert!(!lines.iter().any(|l| l.contains("European country")));
    assert!(app.mounted().unwrap().open_popups().is_empty());
}

#[test]
fn test_failure_shows_single_message() {
    let mut app = geography_app();
    let request = app.request_generate().unwrap();
    app.apply_generation(
        request.seq,
        Err(notemap_runtime::Error::Generator("rate limited".to_string())),
    );

    let lines = render(&mut app);
    assert!(
        lines
            .iter()
            .any(|l| l.contains("Failed to generate the mind map. Please try again."))
    );
    assert!(!lines.iter().any(|l| l.contains("rate limited")));
}
