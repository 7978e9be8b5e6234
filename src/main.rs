//! A text-mode driver for the "special AVL" tree.
//!
//! It inserts an initial list of keys one at a time, then reads `insert`, `remove`, `search`,
//! `print` and `quit` commands from stdin. With `--flat <target>` it runs the flat binary search
//! over the initial keys instead.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use midpoint_bst::command::Command;
use midpoint_bst::flat;
use midpoint_bst::keys::SortedKeys;
use midpoint_bst::layout::{draw_commands, DrawCommand, Viewport};
use midpoint_bst::rebuild::{Node, Tree};

const DEFAULT_KEYS: [i32; 20] = [
    15, 23, 29, 33, 37, 41, 44, 49, 52, 54, 60, 62, 68, 70, 75, 85, 90, 95, 100, 110,
];

#[derive(Parser)]
#[command(name = "special-avl")]
#[command(about = "Binary search and a rebuild-balanced search tree, step by step")]
struct Args {
    /// Keys inserted before reading commands, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = DEFAULT_KEYS)]
    initial: Vec<i32>,

    /// Run the flat binary search for this target over the initial keys and exit
    #[arg(long, allow_hyphen_values = true)]
    flat: Option<i32>,

    /// Print the draw commands for the tree after every change or search
    #[arg(long)]
    layout: bool,

    /// Viewport width used by --layout
    #[arg(long, default_value_t = 1600.0)]
    width: f32,

    /// Viewport height used by --layout
    #[arg(long, default_value_t = 1000.0)]
    height: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(target) = args.flat {
        return run_flat(&mut out, &args.initial, target);
    }

    let layout = args.layout.then_some(Viewport {
        width: args.width,
        height: args.height,
    });
    let mut tree = Tree::new();
    insert_initial(&mut out, &mut tree, &args.initial, layout)?;

    let stdin = io::stdin();
    run_session(stdin.lock(), &mut out, &mut tree, layout)
}

/// Inserts `initial` one key at a time, printing the keys after each insert.
fn insert_initial(
    out: &mut impl Write,
    tree: &mut Tree<i32>,
    initial: &[i32],
    layout: Option<Viewport>,
) -> anyhow::Result<()> {
    for &key in initial {
        let caption = format!("Inserting {}", key);
        tracing::info!("{}", caption);
        tree.insert(key);
        writeln!(out, "{}", tree)?;
        if let Some(viewport) = layout {
            print_layout(out, tree.root(), &[], Some(caption.as_str()), viewport)?;
        }
    }
    tracing::info!(keys = tree.len(), height = tree.height(), "initial tree complete");
    Ok(())
}

/// Applies the commands read from `input` to `tree` until the input ends or a `quit` command.
/// Lines that aren't commands are logged and skipped.
fn run_session(
    input: impl BufRead,
    out: &mut impl Write,
    tree: &mut Tree<i32>,
    layout: Option<Viewport>,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read a command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("skipping `{}`: {}", line.trim(), e);
                continue;
            }
        };

        let caption = match command {
            Command::Insert(key) => {
                tracing::info!("Inserting {}", key);
                if !tree.insert(key) {
                    tracing::info!("{} is already in the tree", key);
                }
                writeln!(out, "{}", tree)?;
                format!("Inserting {}", key)
            }
            Command::Remove(key) => {
                tracing::info!("Removing {}", key);
                if !tree.remove(&key) {
                    tracing::info!("{} is not in the tree", key);
                }
                writeln!(out, "{}", tree)?;
                format!("Removing {}", key)
            }
            Command::Search(key) => {
                let path = tree.search_path(&key);
                let verdict = if path.found(&key) { "Found" } else { "Not Found" };
                let caption = format!("{} {}", verdict, key);
                writeln!(out, "{}", caption)?;
                write!(out, "Path:")?;
                for visited in path.keys() {
                    write!(out, " {}", visited)?;
                }
                writeln!(out)?;
                if let Some(viewport) = layout {
                    print_layout(out, tree.root(), path.nodes(), Some(caption.as_str()), viewport)?;
                }
                continue;
            }
            Command::Print => {
                writeln!(out, "{}", tree)?;
                continue;
            }
            Command::Quit => break,
        };

        if let Some(viewport) = layout {
            print_layout(out, tree.root(), &[], Some(caption.as_str()), viewport)?;
        }
    }

    Ok(())
}

fn run_flat(out: &mut impl Write, initial: &[i32], target: i32) -> anyhow::Result<()> {
    let keys: SortedKeys<i32> = initial.iter().copied().collect();
    let probe = flat::search(keys.as_slice(), &target);

    writeln!(out, "{}", probe.path_taken(keys.as_slice()))?;
    match probe.index {
        Some(index) => writeln!(out, "Element {} found at index {}", target, index)?,
        None => writeln!(out, "Element not found")?,
    }
    Ok(())
}

fn print_layout(
    out: &mut impl Write,
    root: Option<&Node<i32>>,
    path: &[&Node<i32>],
    caption: Option<&str>,
    viewport: Viewport,
) -> io::Result<()> {
    for command in draw_commands(root, path, caption, viewport) {
        let mark = |highlighted: bool| if highlighted { " *" } else { "" };
        match command {
            DrawCommand::Edge {
                from,
                to,
                highlighted,
            } => writeln!(
                out,
                "  edge ({}, {}) -> ({}, {}){}",
                from.x,
                from.y,
                to.x,
                to.y,
                mark(highlighted)
            )?,
            DrawCommand::Node {
                key,
                center,
                radius,
                highlighted,
            } => writeln!(
                out,
                "  node {} at ({}, {}) r={}{}",
                key,
                center.x,
                center.y,
                radius,
                mark(highlighted)
            )?,
            DrawCommand::Caption { text, at } => {
                writeln!(out, "  caption \"{}\" at ({}, {})", text, at.x, at.y)?
            }
        }
    }
    Ok(())
}
