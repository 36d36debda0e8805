use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect};

use crate::config::GameConfig;
use crate::game::{Session, StepOutcome};
use crate::input::HeldKeys;
use crate::scores::HighScores;

pub const MAX_NAME_LEN: usize = 12;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scene {
    Menu,
    Playing,
    Lose,
    NameEntry,
    HighScore,
    Help,
}

impl Scene {
    /// Scenes shown in the header bar.
    pub fn tabs() -> &'static [Scene] {
        &[Scene::Menu, Scene::Playing, Scene::HighScore, Scene::Help]
    }

    pub fn title(&self) -> &str {
        match self {
            Scene::Menu => " Menu ",
            Scene::Playing | Scene::Lose | Scene::NameEntry => " Play ",
            Scene::HighScore => " Highscores ",
            Scene::Help => " How to Play ",
        }
    }

    pub fn tab_index(&self) -> usize {
        match self {
            Scene::Menu => 0,
            Scene::Playing | Scene::Lose | Scene::NameEntry => 1,
            Scene::HighScore => 2,
            Scene::Help => 3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuItem {
    Start,
    HighScore,
    Help,
    Quit,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[MenuItem::Start, MenuItem::HighScore, MenuItem::Help, MenuItem::Quit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::HighScore => "Highscore",
            MenuItem::Help => "How to Play",
            MenuItem::Quit => "Quit",
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub scene: Scene,
    pub config: GameConfig,
    pub session: Session,
    pub high_scores: HighScores,
    pub selected: usize,
    pub name_buffer: String,
    pub held: HeldKeys,
    /// Button areas from the last menu render, for mouse hit-testing.
    pub menu_buttons: Vec<(Rect, MenuItem)>,
    seed: Option<u64>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let high_scores = HighScores::load(config.scores_path());
        Self {
            should_quit: false,
            scene: Scene::Menu,
            session: Session::new(config.clone()),
            config,
            high_scores,
            selected: 0,
            name_buffer: String::new(),
            held: HeldKeys::new(),
            menu_buttons: Vec::new(),
            seed: None,
        }
    }

    /// Every game started from this app replays the same spawn sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let mut app = Self::new(config);
        app.seed = Some(seed);
        app
    }

    fn set_scene(&mut self, scene: Scene) {
        log::debug!("Scene {:?} -> {:?}", self.scene, scene);
        self.scene = scene;
    }

    pub fn on_tick(&mut self) {
        match self.scene {
            Scene::Playing => {
                self.held.next_frame();
                let input = self.held.snapshot();
                if self.session.step(input) == StepOutcome::JustLost {
                    self.set_scene(Scene::Lose);
                }
            }
            Scene::Lose => self.begin_name_entry(),
            Scene::Menu | Scene::NameEntry | Scene::HighScore | Scene::Help => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.scene == Scene::Playing {
            self.held.record(&key);
            return;
        }

        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.scene {
            Scene::Menu => self.handle_menu_input(key),
            Scene::Lose => self.begin_name_entry(),
            Scene::NameEntry => self.handle_name_input(key),
            Scene::HighScore | Scene::Help => self.set_scene(Scene::Menu),
            Scene::Playing => {}
        }
    }

    pub fn on_click(&mut self, column: u16, row: u16) {
        if self.scene != Scene::Menu {
            return;
        }
        let hit = self
            .menu_buttons
            .iter()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, item)| *item);
        if let Some(item) = hit {
            self.activate(item);
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        let items = MenuItem::all();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + items.len() - 1) % items.len();
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.selected = (self.selected + 1) % items.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(items[self.selected]),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.selected = idx;
                self.activate(items[idx]);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    pub fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Start => self.start_game(),
            MenuItem::HighScore => {
                self.high_scores.reload();
                self.set_scene(Scene::HighScore);
            }
            MenuItem::Help => self.set_scene(Scene::Help),
            MenuItem::Quit => self.should_quit = true,
        }
    }

    fn start_game(&mut self) {
        let config = self.config.clone();
        self.session = match self.seed {
            Some(seed) => Session::with_seed(config, seed),
            None => Session::new(config),
        };
        self.held.clear();
        log::info!("Game started");
        self.set_scene(Scene::Playing);
    }

    fn begin_name_entry(&mut self) {
        self.name_buffer.clear();
        self.set_scene(Scene::NameEntry);
    }

    fn handle_name_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let name = self.name_buffer.trim().to_string();
                if name.is_empty() {
                    return;
                }
                if let Err(e) = self.high_scores.submit(&name, self.session.score) {
                    log::warn!("Could not save score: {e}");
                }
                self.name_buffer.clear();
                self.set_scene(Scene::Menu);
            }
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            KeyCode::Char(c) => {
                let plain = !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                if plain && !c.is_control() && self.name_buffer.chars().count() < MAX_NAME_LEN {
                    self.name_buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            scores_path: Some(dir.path().join("scores.json")),
            ..GameConfig::default()
        };
        (dir, App::with_seed(config, 11))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn menu_navigation_wraps() {
        let (_dir, mut app) = new_app();
        app.on_key(press(KeyCode::Up));
        assert_eq!(app.selected, 3);
        app.on_key(press(KeyCode::Down));
        app.on_key(press(KeyCode::Down));
        assert_eq!(app.selected, 1);
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.scene, Scene::HighScore);
    }

    #[test]
    fn highscore_and_help_return_on_any_key() {
        let (_dir, mut app) = new_app();
        app.on_key(press(KeyCode::Char('3')));
        assert_eq!(app.scene, Scene::Help);
        app.on_key(press(KeyCode::Char('x')));
        assert_eq!(app.scene, Scene::Menu);

        app.on_key(press(KeyCode::Char('2')));
        assert_eq!(app.scene, Scene::HighScore);
        app.on_key(press(KeyCode::Left));
        assert_eq!(app.scene, Scene::Menu);
    }

    #[test]
    fn quit_from_menu_or_ctrl_c() {
        let (_dir, mut app) = new_app();
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (_dir, mut app) = new_app();
        app.on_key(press(KeyCode::Char('1')));
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn click_activates_button() {
        let (_dir, mut app) = new_app();
        app.menu_buttons = vec![
            (Rect::new(10, 5, 20, 3), MenuItem::Start),
            (Rect::new(10, 9, 20, 3), MenuItem::Help),
        ];
        app.on_click(0, 0);
        assert_eq!(app.scene, Scene::Menu);
        app.on_click(15, 10);
        assert_eq!(app.scene, Scene::Help);
    }

    #[test]
    fn start_resets_session() {
        let (_dir, mut app) = new_app();
        app.session.score = 99;
        app.session.player.health = 10;
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.scene, Scene::Playing);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.player.health, 100);
    }

    #[test]
    fn name_entry_limits_and_edits() {
        let (_dir, mut app) = new_app();
        app.scene = Scene::NameEntry;
        type_str(&mut app, "abcdefghijklmnop");
        assert_eq!(app.name_buffer, "abcdefghijkl");
        app.on_key(press(KeyCode::Backspace));
        assert_eq!(app.name_buffer, "abcdefghijk");
        app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.name_buffer, "abcdefghijk");
    }

    #[test]
    fn blank_name_is_ignored() {
        let (_dir, mut app) = new_app();
        app.scene = Scene::NameEntry;
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.scene, Scene::NameEntry);
        type_str(&mut app, "   ");
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.scene, Scene::NameEntry);
        assert!(app.high_scores.entries().is_empty());
    }

    #[test]
    fn confirmed_name_is_trimmed_and_saved() {
        let (_dir, mut app) = new_app();
        app.scene = Scene::NameEntry;
        app.session.score = 17;
        type_str(&mut app, " Ann ");
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.scene, Scene::Menu);
        assert_eq!(app.high_scores.entries()[0].name, "Ann");
        assert_eq!(app.high_scores.best(), 17);
    }

    #[test]
    fn lose_moves_to_name_entry_with_empty_buffer() {
        let (_dir, mut app) = new_app();
        app.name_buffer = "stale".into();
        app.scene = Scene::Lose;
        app.on_tick();
        assert_eq!(app.scene, Scene::NameEntry);
        assert!(app.name_buffer.is_empty());
    }
}
