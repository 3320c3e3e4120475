use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::SystemTime};

use samos::{App, Args, FileCatalog, InputMode, SortKey, ui};

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press {
                if app.show_help {
                    app.show_help = false;
                    continue;
                }

                let editing = !matches!(app.input, InputMode::Browse);
                if editing {
                    match key.code {
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Enter => app.submit_input(),
                        KeyCode::Backspace => app.pop_input(),
                        KeyCode::Char(c) => app.push_input(c),
                        _ => {}
                    }
                    continue;
                }

                // Clear the acknowledgement on any key press
                app.status_message = None;

                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return Ok(()),
                    (KeyCode::Char('?'), _) => app.show_help = true,
                    // Navigation
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.down(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.up(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.previous(),
                    (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => app.page_down(),
                    (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => app.page_up(),
                    (KeyCode::Home, _) => app.go_to_first(),
                    (KeyCode::End, _) => app.go_to_last(),
                    (KeyCode::Enter, _) | (KeyCode::Char('o'), _) => app.open_selected(),
                    (KeyCode::Backspace, _) | (KeyCode::Char('b'), _) => app.go_back(),
                    (KeyCode::Char(c @ '1'..='9'), _) => {
                        app.navigate_to_slot(c as usize - '0' as usize)
                    }
                    // Actions
                    (KeyCode::Char('s'), _) => app.star_selected(),
                    (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => app.delete_selected(),
                    (KeyCode::Char('x'), _) => app.download_selected(),
                    (KeyCode::Char('p'), _) => app.preview_selected(),
                    (KeyCode::Char('S'), _) => app.share_selected(),
                    (KeyCode::Char('c'), _) => app.copy_selected(),
                    (KeyCode::Char('u'), _) => app.upload_demo_batch(),
                    (KeyCode::Char('n'), _) => app.begin_new_folder(),
                    // Display
                    (KeyCode::Char('/'), _) => app.begin_search(),
                    (KeyCode::Char('v'), _) | (KeyCode::Tab, _) => app.toggle_view_mode(),
                    (KeyCode::Char('a'), _) => app.toggle_sort(SortKey::Name),
                    (KeyCode::Char('m'), _) => app.toggle_sort(SortKey::Modified),
                    (KeyCode::Char('z'), _) => app.toggle_sort(SortKey::Size),
                    _ => {}
                }
            }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let catalog = FileCatalog::seed(SystemTime::now());

    // Setup panic hook before entering raw mode
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(catalog, &args);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}
