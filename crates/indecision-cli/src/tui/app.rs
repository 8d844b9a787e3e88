use crossterm::event::{KeyCode, KeyModifiers};
use indecision_core::{AddOptionForm, KeyValueStore, OptionManager, RandomSource, ViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App<S, R> {
    pub manager: OptionManager<S, R>,
    pub form: AddOptionForm,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Option list state
    pub cursor: usize,

    // Result of the last pick, shown as a popup until dismissed
    pub picked: Option<String>,

    pub status: String,
    pub should_quit: bool,
}

impl<S: KeyValueStore, R: RandomSource> App<S, R> {
    pub fn new(manager: OptionManager<S, R>) -> Self {
        let status = match manager.load_error() {
            Some(e) => format!("Saved options unavailable ({e}); starting fresh"),
            None => String::new(),
        };
        Self {
            manager,
            form: AddOptionForm::new(),
            input_mode: InputMode::Normal,
            show_help: false,
            cursor: 0,
            picked: None,
            status,
            should_quit: false,
        }
    }

    pub fn view(&self) -> ViewModel {
        self.manager.snapshot()
    }

    pub fn selected(&self) -> Option<&str> {
        self.manager.options().get(self.cursor)
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+C always quits
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.picked.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.picked = None;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('j') | KeyCode::Down => self.move_down(),
                KeyCode::Char('k') | KeyCode::Up => self.move_up(),
                KeyCode::Char('a') | KeyCode::Char('i') => self.start_editing(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('D') => self.delete_all(),
                KeyCode::Char('p') | KeyCode::Char(' ') => self.pick(),
                KeyCode::Char('?') => self.toggle_help(),
                KeyCode::Esc => self.show_help = false,
                _ => {}
            },
            InputMode::Editing => match code {
                KeyCode::Esc => self.cancel_editing(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(c) => self.form.push(c),
                _ => {}
            },
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.manager.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.show_help = false;
    }

    pub fn cancel_editing(&mut self) {
        self.form.reset();
        self.input_mode = InputMode::Normal;
    }

    pub fn submit(&mut self) {
        let text = self.form.input.trim().to_string();
        if self.form.submit(&mut self.manager) {
            self.cursor = self.manager.len() - 1;
            self.status = format!("Added \"{text}\"");
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(option) = self.selected().map(str::to_string) else {
            return;
        };
        self.manager.delete_option(&option);
        self.clamp_cursor();
        self.status = format!("Removed \"{option}\"");
    }

    pub fn delete_all(&mut self) {
        if !self.manager.has_options() {
            return;
        }
        self.manager.delete_all_options();
        self.cursor = 0;
        self.status = "Removed all options".to_string();
    }

    /// Disabled while the list is empty.
    pub fn pick(&mut self) {
        if !self.manager.has_options() {
            self.status = "Add an option first".to_string();
            return;
        }
        match self.manager.pick_random() {
            Ok(choice) => self.picked = Some(choice.to_string()),
            Err(e) => self.status = e.to_string(),
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn clamp_cursor(&mut self) {
        let len = self.manager.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
