//! Application main loop

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application main loop
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. Render the UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check whether the app should exit
        if app.should_quit {
            break;
        }

        // 3. Drain completions from the analysis tasks
        while let Some(msg) = app.try_recv_completion() {
            update::update(app, msg);
        }

        // 4. Advance the loading animation once per tick
        app.tick();

        // 5. Poll input (100 ms timeout keeps the UI repainting while loading)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
