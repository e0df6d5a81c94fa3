use clap::Parser;
use vigenere_analysis::{
    attack, cipher, crack_cipher, frequency, Dictionary, LanguageModel,
};

/// Command-line arguments for the Vigenère cracker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where the best decryption will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Optional wordlist enabling the dictionary attack tier
    #[arg(short, long, help = "Path to a wordlist file, one word per line")]
    wordlist: Option<String>,

    /// Optional known plaintext; switches to direct key derivation
    #[arg(short = 'p', long, help = "Path to a file containing the known plaintext")]
    known_plaintext: Option<String>,
}

fn main() {
    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    if let Some(plain_path) = &cli.known_plaintext {
        let plain = std::fs::read_to_string(plain_path)
            .expect("Failed to read known plaintext file");
        run_known_plaintext(&input, &plain, &cli.output);
        return;
    }

    // A wordlist is optional; a missing one degrades to the built-in keys
    let dictionary = cli.wordlist.as_ref().and_then(|path| {
        match Dictionary::load(path) {
            Ok(dictionary) => {
                println!("Loaded wordlist with {} words", dictionary.len());
                Some(dictionary)
            }
            Err(e) => {
                eprintln!("Warning: {}; continuing without a wordlist", e);
                None
            }
        }
    });

    let ic = frequency::index_of_coincidence(&input);
    println!("Index of coincidence: {:.4}", ic);

    let model = LanguageModel::english();
    let results = match crack_cipher(&input, dictionary.as_ref(), &model) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if results.is_empty() {
        eprintln!("No candidate keys found; try a longer ciphertext");
        std::process::exit(1);
    }

    println!("Candidate keys:");
    for candidate in &results {
        match candidate.valid_word_ratio {
            Some(ratio) => {
                println!("  {} (valid word ratio {:.2})", candidate.key, ratio)
            }
            None => println!("  {} (chi-squared {:.4})", candidate.key, candidate.score),
        }
    }

    let best = &results[0];
    println!("{}", best.key);

    std::fs::write(&cli.output, &best.decrypted)
        .expect("Failed to write output file");
}

/// Derives the key directly from a ciphertext/plaintext pair.
fn run_known_plaintext(cipher_text: &str, plain_text: &str, output: &str) {
    let recovered = match attack::derive_key(cipher_text, plain_text) {
        Ok(recovered) => recovered,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !recovered.periodic {
        eprintln!(
            "Warning: derived key stream never repeats ({} letters); \
the texts are probably misaligned",
            recovered.key.len()
        );
    }

    println!("{}", recovered.key);

    let decrypted = cipher::decrypt(cipher_text, &recovered.key)
        .expect("derived keys are always alphabetic");
    std::fs::write(output, decrypted)
        .expect("Failed to write output file");
}
