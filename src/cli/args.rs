//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{NullPolicy, Traversal};

/// Binary tree visualizer: build from level-order values, inspect, replay traversals
#[derive(Parser, Debug)]
#[command(name = "btviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print it with its metrics
    Show {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the visit order of a traversal
    Traverse {
        #[command(flatten)]
        input: InputArgs,
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = OrderArg::InOrder)]
        order: OrderArg,
    },

    /// Animate a traversal step by step
    Replay {
        #[command(flatten)]
        input: InputArgs,
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = OrderArg::InOrder, conflicts_with = "all")]
        order: OrderArg,
        /// Replay all four orders one after another
        #[arg(long)]
        all: bool,
        /// Milliseconds between steps (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
}

/// Where tree values come from and how to read them.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Comma-separated level-order values, e.g. "1,2,null,3" ("-" reads stdin)
    #[arg(allow_hyphen_values = true, required_unless_present = "file")]
    pub values: Option<String>,

    /// Read values from a file
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "values")]
    pub file: Option<PathBuf>,

    /// Treat unparseable values as null
    #[arg(long)]
    pub lenient: bool,

    /// How null entries are handled (overrides config)
    #[arg(long, value_enum)]
    pub nulls: Option<NullsArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl From<OrderArg> for Traversal {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::InOrder => Traversal::InOrder,
            OrderArg::PreOrder => Traversal::PreOrder,
            OrderArg::PostOrder => Traversal::PostOrder,
            OrderArg::LevelOrder => Traversal::LevelOrder,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsArg {
    /// Null leaves its child slot empty
    Preserve,
    /// Nulls are removed before building
    Drop,
}

impl From<NullsArg> for NullPolicy {
    fn from(arg: NullsArg) -> Self {
        match arg {
            NullsArg::Preserve => NullPolicy::Preserve,
            NullsArg::Drop => NullPolicy::Drop,
        }
    }
}
