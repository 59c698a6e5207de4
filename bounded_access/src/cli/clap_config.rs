// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::AccessPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(bin_name = "bslice")]
#[command(
    about = "✂️ Slice and index a list of items using a strict, truncating, or safe access policy"
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'p',
        value_enum,
        default_value_t = AccessPolicy::Strict,
        help = "What to do when the request reaches outside of the items"
    )]
    pub policy: AccessPolicy,

    #[arg(
        global = true,
        long,
        short = 'o',
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "How to print the result"
    )]
    pub output: OutputFormat,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to stderr"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "📏 Take the half-open range START..END out of ITEMS\n💡 Eg: `bslice -p truncating range -1 2 a b c`")]
    Range {
        #[arg(allow_negative_numbers = true, help = "First offset, included")]
        start: isize,
        #[arg(allow_negative_numbers = true, help = "Last offset, excluded")]
        end: isize,
        #[arg(allow_negative_numbers = true, help = "The sequence to slice")]
        items: Vec<String>,
    },

    #[clap(about = "🎯 Take the single item at INDEX out of ITEMS\n💡 Eg: `bslice -p safe index 3 a b c`")]
    Index {
        #[arg(allow_negative_numbers = true, help = "Position of the item")]
        index: isize,
        #[arg(allow_negative_numbers = true, help = "The sequence to index into")]
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[clap(help = "Human readable: `[a, b]`, a single item, or `absent`")]
    Text,
    #[clap(help = "One JSON object with `policy`, `outcome` and `value` fields")]
    Json,
}
