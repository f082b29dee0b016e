use clap::Parser;
use linescript::run_script;

/// linescript is a small line-oriented scripting language with variables,
/// aggregate literals, conditionals and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linescript to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Prints the final variable bindings (sorted by name) after a
    /// successful run.
    #[arg(short, long)]
    variables: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        std::fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_script(&script) {
        Ok(interpreter) => {
            if args.variables {
                let mut bindings: Vec<_> = interpreter.variables().iter().collect();
                bindings.sort_by(|a, b| a.0.cmp(b.0));
                for (name, value) in bindings {
                    println!("{name} = {value}");
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
