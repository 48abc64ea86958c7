use std::io::{self, Read};
use timetable_solver::{IlpEngine, TimetableResult, generate_from_json};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let mut raw = String::new();
    let result = match io::stdin().read_to_string(&mut raw) {
        Ok(_) => {
            // echo the parsed input back before solving, like any progress line
            if let Ok(echo) = serde_json::from_str::<serde_json::Value>(&raw) {
                println!("Input data received:");
                if let Ok(pretty) = serde_json::to_string_pretty(&echo) {
                    println!("{pretty}");
                }
            }
            generate_from_json(&raw, &IlpEngine::default())
        }
        Err(e) => TimetableResult::error(format!("Error in timetable generation: {e}")),
    };

    println!("Solution generated:");
    match serde_json::to_string_pretty(&result) {
        Ok(pretty) => println!("{pretty}"),
        Err(e) => println!("{{\"success\": false, \"error\": \"{e}\"}}"),
    }
    // payload success or error, the process itself always exits 0
}
