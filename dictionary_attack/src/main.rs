use clap::Parser;
use vigenere_analysis::{dictionary_attack, Dictionary, DictionaryAttackOptions};

/// Command-line arguments for the dictionary attack program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the wordlist file, one word per line
    #[arg(short, long, help = "Path to the wordlist file")]
    wordlist: String,

    /// Minimum valid-word ratio for a candidate to be reported
    #[arg(short, long, default_value_t = 0.5, help = "Minimum valid word ratio (0.0-1.0)")]
    threshold: f64,

    /// Maximum number of candidates to report
    #[arg(short, long, default_value_t = 10, help = "Maximum number of results")]
    max_results: usize,
}

/// Runs the dictionary attack and prints ranked candidates as JSON.
fn main() {
    let cli: Cli = Cli::parse();
    let cipher_text: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // A broken wordlist degrades to the built-in common keys
    let dictionary = match Dictionary::load(&cli.wordlist) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Warning: {}; trying common keys only", e);
            Dictionary::default()
        }
    };

    let options = DictionaryAttackOptions {
        threshold: cli.threshold,
        max_results: cli.max_results,
    };
    let results = dictionary_attack(&cipher_text, &dictionary, &options);

    // JSON on stdout for consumption by a wrapping process
    let json = serde_json::to_string(&results)
        .expect("candidate results always serialize");
    println!("{}", json);
}
