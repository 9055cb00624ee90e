use anyhow::Context;
use clap::{Parser, Subcommand};
use symviz::render::render_dot;
use symviz::symbol::SymbolGraph;
use symviz::viz::{self, Layout, VizOptions};

#[derive(Parser)]
#[command(name = "symviz")]
#[command(about = "Symbol graph visualizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a symbol JSON file as a Graphviz DOT graph.
    Render {
        /// Path to the *-symbol.json document.
        #[arg(long)]
        symbol: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Graph name embedded in the DOT output.
        #[arg(long, default_value = "network")]
        name: String,

        /// Rank direction; omit to leave it to Graphviz.
        #[arg(long, value_enum)]
        layout: Option<Layout>,

        /// Keep weight/bias/statistic leaf nodes instead of hiding them.
        #[arg(long)]
        keep_weights: bool,

        /// Skip output-slot bookkeeping for multi-output producers.
        #[arg(long)]
        no_shapes: bool,
    },
}

fn main() -> symviz::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            symbol,
            out,
            name,
            layout,
            keep_weights,
            no_shapes,
        } => {
            // 1) Decode the symbol document.
            let text = std::fs::read_to_string(&symbol)
                .with_context(|| format!("read symbol file {}", symbol))?;
            let graph = SymbolGraph::from_json(&text)?;

            // 2) Transform into the attributed viz graph.
            let opts = VizOptions {
                graph_name: name,
                layout,
                hide_weights: !keep_weights,
                draw_shapes: !no_shapes,
            };
            let viz = viz::build(&graph, &opts)?;

            // 3) Write DOT.
            std::fs::write(&out, render_dot(&viz))
                .with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
