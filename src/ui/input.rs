use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::navigation::NavigationIntent;
use crate::ui::screen::Screen;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Esc && matches!(app.screen(), Screen::List(_)) {
        app.request_quit();
        return;
    }

    let navigation = match app.screen_mut() {
        Screen::List(view) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                view.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                view.select_next();
                None
            }
            KeyCode::Enter => view.open_selected(),
            _ => None,
        },
        Screen::Detail(view) => match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(NavigationIntent::Back),
            KeyCode::Right | KeyCode::Char('n') => {
                view.step(1);
                None
            }
            KeyCode::Left | KeyCode::Char('p') => {
                view.step(-1);
                None
            }
            _ => None,
        },
    };

    if let Some(intent) = navigation {
        app.navigate(intent);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
