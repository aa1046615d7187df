use std::{io, thread};

mod console;
mod options;
mod stats;

use sparselife::GameOfLife;

fn main() -> io::Result<()> {
    env_logger::init();

    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };

    // setup the alive cells based on args
    let (region_w, region_h) = args.seed_region();
    let alive = args.fill_mode().create_alive(region_w, region_h);
    log::info!(
        "seeded {} live cells in a {}x{} region",
        alive.len(),
        region_w,
        region_h
    );

    // setup the engine and reporting metrics
    let mut game = GameOfLife::from_alive(alive);
    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep();
    let parallel = args.multithreading();

    let mut stats = stats::Recorder::new(game.alive_count(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Handled => {}
                }
            }
            console.render(&game)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        if parallel {
            game.next_generation_parallel();
        } else {
            game.next_generation();
        }
        stats.record(game.alive_count());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    if let Some(file_name) = args.stats_file() {
        stats.save(&file_name)?;
        log::info!("wrote stats csv to {}", file_name);
    }

    Ok(())
}
