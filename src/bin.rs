use std::io::stdout;

use anyhow::Result;
use filter_iter_lib::{demo_sequence, run, Predicate, Value};
use structopt::clap::AppSettings;
use structopt::StructOpt;

/// Lazily filter a sequence of literals and print the elements that pass.
#[derive(StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
struct Cli {
    /// Predicate deciding which elements are kept: truthy, even or odd.
    #[structopt(short, long, default_value = "truthy")]
    predicate: Predicate,

    /// Literals to filter, such as `1 -3 0 None fkj`. Defaults to a built-in demo sequence.
    values: Vec<Value>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::from_args();
    let values = if args.values.is_empty() {
        demo_sequence()
    } else {
        args.values
    };

    run(&values, args.predicate, &mut stdout().lock()).map(|_| ())
}
