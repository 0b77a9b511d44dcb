use crate::ui::app::App;
use crate::ui::fetch::FetchReceiver;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::io;
use std::time::Duration;

/// Runs the terminal UI until the user quits.
///
/// Single-threaded: fetch tasks, terminal input and the spinner tick are
/// all multiplexed on this loop, and only this loop mutates view state.
pub async fn run(mut app: App, mut fetches: FetchReceiver, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            Some(event) = fetches.recv() => {
                app.on_fetch(event);
            }
            event = input.next() => match event {
                Some(Ok(Event::Key(key))) => handle_key(&mut app, key),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "terminal input error");
                    app.request_quit();
                }
                None => app.request_quit(),
            },
            _ = ticker.tick() => app.on_tick(),
            _ = &mut ctrl_c => {
                tracing::info!("interrupt received");
                app.request_quit();
            }
        }
    }

    drop(guard);
    Ok(())
}
