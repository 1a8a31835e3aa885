//! Show command implementation.
//!
//! Prints the channel trees to stdout in prefix form, one per line.

use clap::Args;

use crate::art::{seeded_rng, ChannelTrees, TreeBuilder};
use crate::error::Result;
use crate::output::{plural, Printer};

use super::{effective_seed, TreeArgs};

/// Print the channel trees a seed produces
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let config = args.tree.resolve()?;
    let seed = effective_seed(config.seed);

    printer.status(
        "Building",
        &format!(
            "channel trees (depth {}..{}, seed {})",
            config.min_depth, config.max_depth, seed
        ),
    );

    // Same draw order as `generate`, so a seed shows the trees behind its image.
    let builder = TreeBuilder::new(config.grammar);
    let trees = ChannelTrees::build(&builder, &mut seeded_rng(seed), config.min_depth, config.max_depth);

    for (name, tree) in trees.iter() {
        printer.info(
            name,
            &format!("depth {}, {}", tree.depth(), plural(tree.node_count(), "node", "nodes")),
        );
        println!("{}", tree);
    }

    Ok(())
}
