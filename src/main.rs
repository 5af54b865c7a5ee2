use argh::FromArgs;

use rowsort::{RunError, SortMode};

/// Sort a comma-separated list of integers and print the result in rows of ten.
#[derive(FromArgs)]
struct Args {
    /// sort type, "bubble" or "selection"
    #[argh(option, short = 'm')]
    mode: Option<String>,

    /// comma-separated integers, e.g. "5,3,1,4,2"
    #[argh(positional)]
    values: String,
}

fn run(args: &Args) -> Result<(), RunError> {
    // A missing --mode reports the same way as an empty selector.
    let mode: SortMode = args.mode.as_deref().unwrap_or("").parse()?;
    let output = rowsort::run(&args.values, mode)?;

    println!("{output}");
    eprintln!("Time elapsed for sorting: {:.5} seconds", output.elapsed_secs());
    Ok(())
}

fn main() {
    let args: Args = argh::from_env();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
