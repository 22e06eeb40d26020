use generations::scenarios;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!(
            "Usage: solve <scenario>\n\nAvailable scenarios:\n  - {}",
            scenarios::names().join("\n  - ")
        );
        std::process::exit(2);
    }

    let scenario_name = &args[1];
    let Some(scn) = scenarios::by_name(scenario_name) else {
        eprintln!(
            "Unknown scenario: {scenario_name}\n\nAvailable scenarios:\n  - {}",
            scenarios::names().join("\n  - ")
        );
        std::process::exit(2);
    };

    if let Err(e) = scn.validate() {
        eprintln!("Invalid scenario {scenario_name}: {e}");
        std::process::exit(2);
    }

    let summary = match scn.run() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Scenario: {}", summary.name);
    match summary.length {
        Some(len) => {
            println!("  solution length: {len}");
            println!("  moves: {}", summary.moves.join(" "));
            if let Some(end) = &summary.end_state {
                println!("  end state: {end}");
            }
        }
        None => println!("  no solution"),
    }
    println!("  depth reached: {}", summary.depth_reached);
    println!("  states explored: {}", summary.explored);
    println!("  candidate moves generated: {}", summary.counts.edges);
}
