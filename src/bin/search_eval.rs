use std::path::PathBuf;

use generations::scenarios;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: search_eval <scenario.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let scn = match scenarios::from_json_file(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid scenario file {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    if let Err(e) = scn.validate() {
        eprintln!("Invalid scenario spec: {e}");
        std::process::exit(2);
    }

    let summary = match scn.run() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Evaluation failed: {e}");
            std::process::exit(1);
        }
    };

    let out = serde_json::json!({
        "limits": scn.limits(),
        "result": summary,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode result: {e}");
            std::process::exit(1);
        }
    }
}
