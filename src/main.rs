use anyhow::{Context, Result};
use avl_tree::{AVLTree, DuplicatePolicy};
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds an AVL tree, then prints its traversals after every deletion.
/// Set `RUST_LOG=avl_tree=trace` to see the rotations.
#[derive(Parser, Debug)]
#[command(name = "avl-demo", about = "Inserts and deletes values in an AVL tree")]
struct Cli {
    /// Values to insert, in order.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [9, 5, 10, 0, 6, 11, -1, 1, 2]
    )]
    insert: Vec<i64>,

    /// Values to delete after inserting, in order.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [10, 16]
    )]
    delete: Vec<i64>,

    /// Keep values equal to existing values instead of ignoring them.
    #[arg(long)]
    allow_duplicates: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let duplicates = if cli.allow_duplicates {
        DuplicatePolicy::Allow
    } else {
        DuplicatePolicy::Ignore
    };

    let mut tree = AVLTree::with_duplicates(duplicates);
    tree.extend(cli.insert);
    info!(height = tree.height(), "built tree");

    println!("Preorder traversal of the AVL tree");
    println!("{}", tree.pre_order().format(" "));
    println!();
    println!("Min is: {}", tree.min().context("no minimum")?);
    println!("Max is: {}", tree.max().context("no maximum")?);

    for value in cli.delete {
        match tree.delete(&value) {
            Some(_) => info!(value, "deleted"),
            None => info!(value, "not in the tree"),
        }
        println!();
        println!("Pre-order traversal after deletion of {}", value);
        println!("{}", tree.pre_order().format(" "));
    }

    println!();
    println!("{}", tree);
    Ok(())
}
