use clap::Parser;
use study_tree::config::DataArgs;
use study_tree::loader;
use study_tree::render;
use study_tree::viewer::StudyViewer;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "study-cli")]
#[command(about = "Browse a study sheet from the terminal")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,
}

fn print_help() {
    println!("Commands:");
    println!("  root: Expand or collapse the root");
    println!("  branch <name>: Open or close a branch");
    println!("  topic <name>: Open or close a topic of the open branch");
    println!("  sub <name>: Show a subtopic of the open branch/topic");
    println!("  prev: Previous subtopic");
    println!("  next: Next subtopic (closes after the last one)");
    println!("  close: Close the description");
    println!("  q: Quit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let dataset = loader::load_or_empty(&cli.data.data, &cli.data.sheet);
    let mut viewer = StudyViewer::new(&cli.data.title, dataset);

    let mut status = String::from("ok");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let snapshot = viewer.snapshot();
        print!("{}", render::render(&snapshot));
        print!("({}) > ", status);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        let (verb, arg) = match command.split_once(' ') {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (command, ""),
        };

        status = String::from("ok");
        match verb {
            "q" | "quit" => break,
            "help" => print_help(),
            "root" => viewer.toggle_root(),
            "prev" | "p" => viewer.previous(),
            "next" | "n" => viewer.next(),
            "close" | "x" => viewer.close_modal(),
            "branch" | "b" if !arg.is_empty() => viewer.select_branch(arg),
            "topic" | "t" if !arg.is_empty() => viewer.select_topic(arg),
            "sub" | "s" if !arg.is_empty() => {
                if !viewer.select_visible_subtopic(arg) {
                    status = format!("no visible subtopic '{}'", arg);
                }
            }
            "" => status = String::from("invalid command"),
            _ => status = format!("invalid command '{}'", command),
        }
    }

    Ok(())
}
