use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskling::cli::Cli;
use taskling::config::Config;
use taskling::list::TaskList;
use taskling::math;
use taskling::task::Task;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_tasks(label: &str, tasks: &[Task], json: bool) {
    println!("\n{label}");
    if json {
        match serde_json::to_string_pretty(tasks) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("error: {e}"),
        }
        return;
    }
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for task in tasks {
        println!(" - {task}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    info!(?config, "config loaded");

    println!("===== Taskling Demo =====");

    let mut todo = TaskList::new();
    for description in &config.tasks {
        let task = todo.add_task(description.clone());
        info!(id = task.id, "task added");
    }

    print_tasks("All tasks:", &todo.all(), config.json);

    // A missing id is reported but does not abort the run.
    for id in &config.mark_done {
        if let Err(e) = todo.mark_done(*id) {
            eprintln!("error marking task complete: {e}");
        }
    }

    print_tasks("Completed tasks:", &todo.complete(), config.json);
    print_tasks("Incomplete tasks:", &todo.incomplete(), config.json);

    println!("\n--- Countdown from {} ---", config.countdown_from);
    if let Err(e) = math::countdown(config.countdown_from, &mut std::io::stdout()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    println!("\n--- Summation demo ---");
    println!(
        "Sum of numbers from 1 to {} is: {}",
        config.sum_to,
        math::sum_to(config.sum_to)
    );

    println!("\n===== End of Taskling Demo =====");
}
