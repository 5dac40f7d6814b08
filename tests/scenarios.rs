use ratatui::Terminal;
use ratatui::backend::TestBackend;
use skeleton::core::action::{Action, update};
use skeleton::core::command::Command;
use skeleton::core::input::InputLine;
use skeleton::core::key::Key;
use skeleton::core::state::{App, Screen};
use skeleton::tui::styles::Styles;
use skeleton::tui::ui::draw_ui;

// ============================================================================
// Helper Functions
// ============================================================================

fn ready_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::Resize(80, 24));
    update(&mut app, Action::InitialLoadComplete);
    app
}

fn press(app: &mut App, key: Key) -> Vec<Command> {
    update(app, Action::Key(key))
}

/// Renders the app into a test terminal and returns one string per row
fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| draw_ui(f, app, &Styles::default()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Cheap deterministic pseudo-random sequence (xorshift)
fn sequence(seed: u64, len: usize) -> Vec<u64> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_a_startup_to_main_screen() {
    let mut app = App::new();
    assert!(render(&app, 80, 24).join("\n").contains("Loading..."));

    update(&mut app, Action::Resize(80, 24));
    update(&mut app, Action::InitialLoadComplete);
    assert!(app.ready);
    assert_eq!(app.screen, Screen::Main);

    let lines = render(&app, 80, 24);
    assert_eq!(lines.len(), 24);
    assert!(lines[1].contains("Skeleton"), "header title: {:?}", lines[1]);
    assert!(lines.iter().any(|l| l.contains("Welcome!")));
    assert!(lines[23].starts_with(" Ready "));
    assert!(lines[23].ends_with(" 80x24 "));
}

#[test]
fn scenario_b_enter_input_with_empty_buffer() {
    let mut app = ready_app();
    assert!(press(&mut app, Key::Char('i')).is_empty());
    assert_eq!(app.screen, Screen::Input);
    assert_eq!(app.input.cursor(), 0);
}

#[test]
fn scenario_c_backspace_at_end() {
    let mut app = ready_app();
    app.screen = Screen::Input;
    app.input = InputLine::from("hello");
    press(&mut app, Key::Backspace);
    assert_eq!(app.input.text(), "hell");
    assert_eq!(app.input.cursor(), 4);
}

#[test]
fn scenario_d_insert_mid_buffer() {
    let mut app = ready_app();
    app.screen = Screen::Input;
    app.input = InputLine::from("abc");
    press(&mut app, Key::Home);
    press(&mut app, Key::Right);
    press(&mut app, Key::Char('X'));
    assert_eq!(app.input.text(), "aXbc");
    assert_eq!(app.input.cursor(), 2);
}

#[tokio::test(start_paused = true)]
async fn scenario_e_refresh_keeps_main_screen() {
    let mut app = ready_app();
    let commands = press(&mut app, Key::Char('r'));
    assert_eq!(commands, vec![Command::Refresh]);

    let start = tokio::time::Instant::now();
    let completion = Command::Refresh.perform().await.unwrap();
    assert!(start.elapsed() >= std::time::Duration::from_millis(200));

    assert!(update(&mut app, completion).is_empty());
    assert_eq!(app.screen, Screen::Main);
}

#[test]
fn scenario_f_help_back_to_main() {
    let mut app = ready_app();
    press(&mut app, Key::Char('h'));
    assert_eq!(app.screen, Screen::Help);
    press(&mut app, Key::Char('q'));
    assert_eq!(app.screen, Screen::Main);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn cursor_stays_in_bounds_for_any_edit_sequence() {
    let keys = [Key::Backspace, Key::Left, Key::Right, Key::Home, Key::End];
    for seed in 1..50u64 {
        let mut app = ready_app();
        press(&mut app, Key::Char('i'));
        for c in "some text".chars() {
            press(&mut app, Key::Char(c));
        }
        for n in sequence(seed, 40) {
            press(&mut app, keys[(n % keys.len() as u64) as usize].clone());
            let len = app.input.text().chars().count();
            assert!(app.input.cursor() <= len, "seed {seed}: {:?}", app.input);
        }
    }
}

#[test]
fn submit_always_clears_buffer() {
    for text in ["", "x", "hello world", "ünïcödé"] {
        let mut app = ready_app();
        press(&mut app, Key::Char('i'));
        for c in text.chars() {
            press(&mut app, Key::Char(c));
        }
        press(&mut app, Key::Home);
        let commands = press(&mut app, Key::Enter);
        assert_eq!(commands, vec![Command::ProcessInput(text.to_string())]);
        assert_eq!(app.input.text(), "");
        assert_eq!(app.input.cursor(), 0);
        assert_eq!(app.screen, Screen::Main);
    }
}

#[test]
fn reentering_input_appends() {
    let mut app = ready_app();
    press(&mut app, Key::Char('i'));
    for c in "abc".chars() {
        press(&mut app, Key::Char(c));
    }
    press(&mut app, Key::Left);
    press(&mut app, Key::Left);
    press(&mut app, Key::Esc);
    assert_eq!(app.screen, Screen::Main);

    press(&mut app, Key::Char('i'));
    assert_eq!(app.input.cursor(), 3);
    press(&mut app, Key::Char('d'));
    assert_eq!(app.input.text(), "abcd");
}

#[test]
fn resize_is_idempotent_and_render_is_pure() {
    let mut app = ready_app();
    update(&mut app, Action::Resize(100, 30));
    let first = app.clone();
    update(&mut app, Action::Resize(100, 30));
    assert_eq!(app, first);
    assert_eq!(render(&app, 100, 30), render(&app, 100, 30));
    assert!(render(&app, 100, 30)[29].ends_with(" 100x30 "));
}
