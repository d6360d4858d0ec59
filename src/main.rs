use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: chordwise <level.yaml> [count]");
        process::exit(1);
    }

    let level_path = &args[1];
    let count: usize = match args.get(2).map(|c| c.parse()) {
        None => 5,
        Some(Ok(count)) => count,
        Some(Err(_)) => {
            eprintln!("count must be a number");
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(level_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", level_path, e);
            process::exit(1);
        }
    };

    let level = match chordwise::LevelConfig::from_yaml(&source) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error in level configuration: {}", e);
            process::exit(1);
        }
    };

    // Progression levels print the whole resolved progression; chord
    // levels print a batch of drills.
    match chordwise::generate_progression_from_level(&level) {
        Ok(Some(progression)) => {
            println!("{} in {}:", progression.pattern.join(" - "), progression.key);
            for chord in &progression.chords {
                println!("  {:<8} {:?}", chord.expected_answer, chord.pitches);
            }
        }
        Ok(None) => {
            let mut rng = rand::thread_rng();
            let mut previous = None;
            for _ in 0..count {
                match chordwise::generate_from_level(&level, previous.as_ref(), &mut rng) {
                    Ok(chord) => {
                        println!("{:<8} {:?}", chord.expected_answer, chord.pitches);
                        previous = Some(chord);
                    }
                    Err(e) => {
                        eprintln!("Generation error: {}", e);
                        process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Generation error: {}", e);
            process::exit(1);
        }
    }
}
