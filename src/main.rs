use std::{
    collections::HashSet,
    io, thread,
    time::{Duration, Instant},
};

mod console;
mod options;
mod stats;

use lifegrid::{Cell, LifeEngine, PatternCodec, RunLengthEncoded, Session};
use stats::Recorder;

/// Event/render cadence of the interactive loop, decoupled from the
/// per-generation interval so input stays responsive at slow speeds.
const FRAME: Duration = Duration::from_millis(33);

fn initial_living(args: &options::Args, engine: &LifeEngine) -> io::Result<HashSet<Cell>> {
    if let Some(file_name) = args.input_file() {
        let decoder = RunLengthEncoded::default();
        let encoded_str = std::fs::read_to_string(file_name)?;
        // cells outside the board are dropped at this boundary
        return Ok(decoder
            .decode(&encoded_str)
            .into_iter()
            .filter(|&cell| engine.in_bounds(cell))
            .collect());
    }

    Ok(args
        .fill_mode()
        .create_living(engine.width(), engine.height()))
}

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };

    let (width, height) = args.board_size();
    let engine = LifeEngine::new(width, height);
    let living = initial_living(&args, &engine)?;
    if !args.console() {
        println!("alive: {}", living.len());
    }

    let mut session = Session::new(engine, living);
    if let Some(sleep) = args.sleep() {
        session.set_interval(sleep);
    }
    // headless runs immediately; the console starts paused for editing
    session.set_running(!args.console());

    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let mut stats = stats::CsvRecord::new(session.alive_count());

    let max_gens = args.generations();
    let mut last_tick = Instant::now();
    'ticks: while session.generation() < max_gens {
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events(&mut session)? {
                if matches!(cmd, console::ConsoleCommand::Exit) {
                    break 'ticks;
                }
            }
        }

        // report metrics every 500ms or always if in console mode
        if stats.has_report(console.is_some()) {
            let report = stats.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => println!("{}", report),
            }
        }

        // compute the next generation; in console mode only once the
        // per-generation interval has elapsed
        let tick_due = match console {
            Some(_) => last_tick.elapsed() >= session.interval(),
            None => true,
        };
        if session.is_running() && tick_due {
            session.advance();
            stats.record(session.alive_count());
            last_tick = Instant::now();
        }

        match console {
            Some(ref mut console) => {
                console.render(&session)?;
                thread::sleep(FRAME);
            }
            None => {
                // auto-stop on extinction is driver policy, not an engine rule
                if session.is_extinct() {
                    break;
                }
                if let Some(sleep) = args.sleep() {
                    thread::sleep(sleep);
                }
            }
        }
    }
    std::mem::drop(console);

    let living = session.take_living();
    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("lifegrid generated pattern");
        std::fs::write(file_name, encoder.encode(&living))?;
    }
    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }

    Ok(())
}
