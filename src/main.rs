// memtty: interactive stack-memory grid visualizer for the terminal

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use memtty::script::Script;
use memtty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("memtty");
        eprintln!("Error: No script file provided");
        eprintln!();
        eprintln!("Usage: {} <script.mw>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/stack.mw          # A stack frame being filled in",
            program_name
        );
        eprintln!(
            "  {} demos/based.mw          # Same grid, absolute address labels",
            program_name
        );
        std::process::exit(1);
    }

    let script_file = &args[1];

    if !Path::new(script_file).exists() {
        eprintln!("Error: File '{}' not found", script_file);
        eprintln!(
            "Usage: {} <script.mw>",
            args.get(0).map(|s| s.as_str()).unwrap_or("memtty")
        );
        std::process::exit(1);
    }

    // Read and parse the script
    let source = fs::read_to_string(script_file)?;
    let script = match Script::parse(&source) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Script error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "loaded {}: {} bytes, {} writes",
        script_file,
        script.size,
        script.writes.len()
    );

    // Build the session up front so construction errors surface before the
    // terminal switches to the alternate screen
    let mut app = match App::new(script) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
