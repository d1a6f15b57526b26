mod tests {
    use crate::{
        app::App,
        screens::{
            help_screen::HelpScreen,
            scoreboard_screen::ScoreboardScreen,
            screen::{AppAction, Screen},
        },
        shapes::{enums::TeamSideEnum, settings::Settings},
        tests::StepClock,
    };
    use crokey::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    fn draw(screen: &mut dyn Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 33)).expect("expected a terminal");
        terminal
            .draw(|f| {
                screen.render(
                    f,
                    Rect::new(0, 0, 80, 30),
                    Rect::new(0, 30, 40, 3),
                    Rect::new(40, 30, 40, 3),
                )
            })
            .expect("expected a frame");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn press(screen: &mut dyn Screen, code: KeyCode) -> AppAction {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(screen: &mut dyn Screen, kind: MouseEventKind, column: u16, row: u16) -> AppAction {
        screen.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn new_screen() -> ScoreboardScreen<StepClock> {
        let mut screen = ScoreboardScreen::new(Settings::default(), StepClock::new());
        // key bindings are resolved while drawing
        draw(&mut screen);
        screen
    }

    #[test]
    fn keys_score_points_for_each_side() {
        let mut screen = new_screen();
        press(&mut screen, KeyCode::Char('a'));
        press(&mut screen, KeyCode::Char('a'));
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Char('l'));
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Char('x'));
        let state = screen.state();
        assert_eq!((state.score_a, state.score_b), (3, 2));
        assert_eq!(state.timeline.current_set().len(), 5);
        // the fifth point is odd: the server flipped twice
        assert_eq!(state.server, TeamSideEnum::A);
    }

    #[test]
    fn points_carry_the_clock_time() {
        let mut screen = new_screen();
        press(&mut screen, KeyCode::Char('a'));
        press(&mut screen, KeyCode::Char('l'));
        let points = screen.state().timeline.current_set();
        assert!(points[0].timestamp < points[1].timestamp);
    }

    #[test]
    fn winning_a_set_shows_a_banner_until_the_next_key() {
        let mut screen = new_screen();
        for _ in 0..11 {
            press(&mut screen, KeyCode::Char('a'));
        }
        assert_eq!(screen.state().sets_won_a, 1);
        assert_eq!(screen.state().score_a, 0);
        let content = draw(&mut screen);
        assert!(content.contains("set won by blue team"), "missing banner");
        assert!(content.contains("set 1 · 11-0"), "missing archived set");

        press(&mut screen, KeyCode::Char('l'));
        let content = draw(&mut screen);
        assert!(!content.contains("set won by"), "banner not dismissed");
        assert_eq!(screen.state().score_b, 1);
    }

    #[test]
    fn reset_key_starts_a_new_match() {
        let mut screen = new_screen();
        for _ in 0..13 {
            press(&mut screen, KeyCode::Char('l'));
        }
        press(&mut screen, KeyCode::Char('r'));
        let state = screen.state();
        assert_eq!((state.score_a, state.score_b), (0, 0));
        assert_eq!((state.sets_won_a, state.sets_won_b), (0, 0));
        assert_eq!(state.server, TeamSideEnum::A);
        assert_eq!(state.timeline.completed_set_count(), 0);
        let content = draw(&mut screen);
        assert!(content.contains("match reset"));
        assert!(content.contains("current set · 0-0"));
        assert!(content.contains("no points yet"));
    }

    #[test]
    fn clicking_a_panel_scores_for_its_side() {
        let mut screen = new_screen();
        click(&mut screen, MouseEventKind::Down(MouseButton::Left), 5, 3);
        click(&mut screen, MouseEventKind::Down(MouseButton::Left), 45, 3);
        click(&mut screen, MouseEventKind::Down(MouseButton::Left), 46, 4);
        let state = screen.state();
        assert_eq!((state.score_a, state.score_b), (1, 2));
    }

    #[test]
    fn other_clicks_are_ignored() {
        let mut screen = new_screen();
        click(&mut screen, MouseEventKind::Down(MouseButton::Right), 5, 3);
        click(&mut screen, MouseEventKind::Up(MouseButton::Left), 5, 3);
        click(&mut screen, MouseEventKind::Moved, 5, 3);
        // below the panels, on the timeline
        click(&mut screen, MouseEventKind::Down(MouseButton::Left), 5, 20);
        let state = screen.state();
        assert_eq!((state.score_a, state.score_b), (0, 0));
    }

    #[test]
    fn set_selection_follows_the_history() {
        let mut screen = new_screen();
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.selected_set(), 0, "no finished set to select yet");

        for _ in 0..11 {
            press(&mut screen, KeyCode::Char('a'));
        }
        draw(&mut screen);
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.selected_set(), 1);
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.selected_set(), 1, "selection past the oldest set");

        // a new archived set keeps the same set selected
        for _ in 0..11 {
            press(&mut screen, KeyCode::Char('l'));
        }
        assert_eq!(screen.selected_set(), 2);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.selected_set(), 0);
    }

    #[test]
    fn help_is_pushed_and_popped() {
        let mut app = App::new(Box::new(new_screen()));
        let action = app
            .current_screen()
            .map(|screen| screen.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)));
        match action {
            Some(AppAction::SwitchScreen(help)) => app.push_screen(help),
            _ => panic!("expected the help screen"),
        }
        assert_eq!(app.depth(), 2);
        app.pop_screen();
        app.pop_screen();
        assert_eq!(app.depth(), 1, "the scoreboard is never popped");
    }

    #[test]
    fn help_lists_every_action() {
        let mut help = HelpScreen::new(Settings::default());
        let content = draw(&mut help);
        assert!(content.contains("key bindings"));
        assert!(content.contains("point blue"));
        assert!(content.contains("point red"));
        assert!(matches!(press(&mut help, KeyCode::Esc), AppAction::Back));
        assert!(matches!(press(&mut help, KeyCode::Char('a')), AppAction::None));
    }

    #[test]
    fn quit_key_quits() {
        let mut screen = new_screen();
        assert!(matches!(
            press(&mut screen, KeyCode::Char('q')),
            AppAction::Quit
        ));
    }
}
