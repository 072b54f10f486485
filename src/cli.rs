use clap::{Parser, Subcommand};
use plain_bst::{dot, script::Session, Tree};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bst")]
#[command(about = "Build, inspect and rebalance a binary search tree")]
struct Args {
    /// Log tree operations (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through adding, removing and rebalancing on a small tree of letters
    Demo,
    /// Run a script of tree commands, one per line
    Run {
        /// Script to run; reads standard input when omitted
        file: Option<PathBuf>,
    },
    /// Print a Graphviz DOT description of a tree built from the values
    Dot {
        /// Rebalance the tree before printing it
        #[arg(long)]
        balance: bool,

        /// Values to add, in order
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match args.command {
        Command::Demo => {
            demo();
            ExitCode::SUCCESS
        }
        Command::Run { file } => match run(file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(message) => {
                eprintln!("{}", message);
                ExitCode::FAILURE
            }
        },
        Command::Dot { balance, values } => {
            let mut tree: Tree<String> = values.into_iter().collect();
            if balance {
                tree.balance();
            }
            println!("{}", dot::to_dot_format(tree.root()));
            ExitCode::SUCCESS
        }
    }
}

fn demo() {
    let letters = ["a", "b", "c", "d", "e", "f", "g"];

    for removed in letters {
        let mut tree: Tree<&str> = ["d", "b", "a", "c", "f", "e", "g"].into_iter().collect();

        println!("{}", tree.inorder_iter().copied().collect::<String>());
        println!("{}", tree.preorder_iter().copied().collect::<String>());
        println!("{}", tree.postorder_iter().copied().collect::<String>());
        println!("{}", tree.remove(&removed));
        println!("{}", tree.inorder_iter().copied().collect::<String>());
    }

    let mut tree: Tree<&str> = letters.into_iter().collect();
    println!("{}", tree.size());
    println!("{}", tree.height());
    println!("{}", tree.is_balanced());
    tree.balance();
    println!("{}", tree.size());
    println!("{}", tree.height());
    println!("{}", tree.is_balanced());
}

fn run(file: Option<PathBuf>) -> Result<(), String> {
    let script = match &file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {}", path.display(), err))?,
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .map_err(|err| format!("cannot read standard input: {}", err))?;
            script
        }
    };

    let mut session = Session::<String>::new();
    for (index, text) in script.lines().enumerate() {
        match session.execute_line(index + 1, text) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(err) => {
                log::error!("script stopped: {}", err);
                return Err(err.to_string());
            }
        }
    }
    Ok(())
}
