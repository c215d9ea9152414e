//! Builds a tree from random keys and walks through every operation, printing as it goes.
//!
//! ```text
//! RUST_LOG=debug cargo run --example driver -- --size 20 --seed 7
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rebalance_bst::Tree;

/// Exercise a rebalance-on-demand binary search tree.
#[derive(Parser, Debug)]
struct Args {
    /// How many random keys to build the tree from (duplicates are dropped)
    #[clap(short, long, default_value_t = 15)]
    size: usize,

    /// Random keys are drawn from 0..max
    #[clap(short, long, default_value_t = 100)]
    max: u32,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Keys inserted after building to unbalance the tree
    #[clap(short, long, value_delimiter = ' ', num_args = 1.., default_values_t = [150, 160, 170, 180, 190, 200])]
    extras: Vec<u32>,
}

fn print_traversals(tree: &Tree<u32>) {
    println!("Level order: {:?}", tree.level_order());
    println!("In order: {:?}", tree.in_order());
    println!("Pre order: {:?}", tree.pre_order());
    println!("Post order: {:?}", tree.post_order());
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let initial = (0..args.size)
        .map(|_| rng.gen_range(0..args.max.max(1)))
        .collect::<Vec<_>>();
    println!("Initial keys: {:?}", initial);

    let mut tree = Tree::build(initial);
    println!("\nTree built. is_balanced -> {}", tree.is_balanced());
    println!("\nPretty print:\n{}", tree);
    print_traversals(&tree);

    println!("\nInserting extras to unbalance: {:?}", args.extras);
    for key in &args.extras {
        tree.insert(*key);
    }
    println!("After inserts is_balanced -> {}", tree.is_balanced());
    println!("\nPretty print (unbalanced):\n{}", tree);

    println!("Rebalancing...");
    tree.rebalance();
    println!("After rebalance is_balanced -> {}", tree.is_balanced());
    println!("\nPretty print (rebalanced):\n{}", tree);

    println!("Traversals after rebalance:");
    print_traversals(&tree);

    let to_delete = tree.iter().take(3).copied().collect::<Vec<_>>();
    println!("\nDeleting first three in-order keys: {:?}", to_delete);
    for key in &to_delete {
        println!("delete {} -> {}", key, tree.delete(key));
    }
    println!("In order after deletes: {:?}", tree.in_order());

    match tree.root().map(|root| *root.key()) {
        Some(root) => {
            println!("\nRoot key: {}", root);
            println!("height(root): {:?}", tree.height(&root));
            println!("depth(root): {:?}", tree.depth(&root));
        }
        None => println!("\nThe tree is empty."),
    }

    println!("\nDone.");
}
