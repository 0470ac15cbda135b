use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rowscan::cli::CliArgs;
use rowscan::terminal::FileHost;
use rowscan::{ScanError, Session};

fn main() -> Result<()> {
    rowscan::trace::init();

    let args = CliArgs::parse();
    let config = args.scan_config();

    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut host = FileHost::new(text);
    let mut session = Session::new(config);

    match session.invoke(&mut host) {
        Ok(_) => {}
        Err(ScanError::EmptyInput) => {
            eprintln!("{}: empty file, nothing to scan", args.path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let flagged = session.result().is_some_and(|r| r.has_findings());

    if args.report {
        // Index 0 is the export action; the terminal host prints the report.
        session.select(Some(0), &mut host);
    } else if args.interactive {
        run_interactive(&mut session, &mut host)?;
    } else {
        for item in session.menu_items() {
            println!("{}", item);
        }
    }

    // Non-zero exit when rows were flagged, so CI can gate on it.
    if flagged {
        std::process::exit(1);
    }
    Ok(())
}

/// Stdin-driven selection loop over the findings menu
///
/// Prints the menu with indices, reads one index per line, and feeds it to
/// the session. An empty line or `q` quits; clearing the search triggers a
/// fresh scan on the next round.
fn run_interactive(session: &mut Session, host: &mut FileHost) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let menu = session.invoke(host)?.to_vec();
        for (index, item) in menu.iter().enumerate() {
            println!("{:>3}  {}", index, item);
        }

        print!("select> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line == "q" {
            session.select(None, host);
            break;
        }

        match line.parse::<usize>() {
            Ok(index) => session.select(Some(index), host),
            Err(_) => println!("enter a menu index, or q to quit"),
        }
    }

    Ok(())
}
