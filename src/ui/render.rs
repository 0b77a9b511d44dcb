use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SELECTION_BG};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let screen = app.screen();

    frame.render_widget(Header::widget(screen.title(), app.source()), header);
    frame.render_widget(Clear, body);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", screen.title()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let lines = screen.lines(app.spinner());

    match screen {
        Screen::List(view) if view.state().selected_index().is_some() => {
            let list = List::new(lines)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(SELECTION_BG)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("› ");
            let mut state = ListState::default().with_selected(view.state().selected_index());
            frame.render_stateful_widget(list, body, &mut state);
        }
        _ => {
            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, body);
        }
    }

    frame.render_widget(Footer::widget(app.route(), footer), footer);
}
