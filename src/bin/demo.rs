//! Builds a tree from the keys given on the command line (or `5 1 4 3 2 6`), prints it, removes
//! the root, prints it again, then clears it.
//!
//! ```text
//! bstree-demo [-v|-vv] [KEY...]
//! ```

use std::env;
use std::num::ParseIntError;
use std::process::ExitCode;

use bstree::Tree;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const DEFAULT_KEYS: [i32; 6] = [5, 1, 4, 3, 2, 6];

struct Args {
    level: LevelFilter,
    keys: Vec<i32>,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ParseIntError> {
        let mut level = LevelFilter::Warn;
        let mut keys = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-v" => level = LevelFilter::Debug,
                "-vv" => level = LevelFilter::Trace,
                key => keys.push(key.parse()?),
            }
        }
        if keys.is_empty() {
            keys.extend(DEFAULT_KEYS);
        }
        Ok(Self { level, keys })
    }
}

fn initialize_logging(level: LevelFilter) {
    if TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("a logger was already installed");
    }
}

fn main() -> ExitCode {
    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("keys must be integers: {}", err);
            return ExitCode::FAILURE;
        }
    };
    initialize_logging(args.level);

    let mut tree = Tree::new();
    let listed: Vec<_> = args.keys.iter().map(i32::to_string).collect();
    println!("== insert: {}", listed.join(" "));
    tree.extend(args.keys);
    println!("== tree:");
    tree.print();

    if let Some(root) = tree.root().map(|n| *n.key()) {
        println!("== remove root: {}", root);
        tree.remove(&root);
        println!("== tree:");
        tree.print();
    }

    if let Err(err) = tree.check_invariants() {
        error!("{}", err);
        return ExitCode::FAILURE;
    }
    info!("{} keys left, invariants hold", tree.len());

    println!("== clear");
    tree.clear();
    println!("== tree:");
    tree.print();

    ExitCode::SUCCESS
}
