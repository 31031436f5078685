use colored::Colorize;
use std::error::Error;
use subnet_toolbox::ToolRegistry;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));

    let registry = ToolRegistry::with_builtin_tools();
    let (tool, input) = match (positional.next(), positional.next()) {
        (Some(tool), Some(input)) => (tool.as_str(), input.as_str()),
        _ => {
            eprintln!("Usage: subnet-toolbox <tool> <input> [--json]");
            for (key, description) in registry.usage() {
                eprintln!("  {key:<12} {description}");
            }
            std::process::exit(2);
        }
    };

    let rendered = if json {
        registry
            .execute(tool, input)
            .map(|value| subnet_toolbox::output::json::to_pretty(&value))
    } else {
        registry.render(tool, input)
    };

    match rendered {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red());
            std::process::exit(1);
        }
    }
}
