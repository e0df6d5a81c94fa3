use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vigenere_analysis::{
    cipher, crack_cipher, dictionary_attack, Dictionary, DictionaryAttackOptions, LanguageModel,
};

const SAMPLE: &str = "it was a bright cold day in april and the clocks were \
striking thirteen winston smith his chin nuzzled into his breast in an effort \
to escape the vile wind slipped quickly through the glass doors of victory \
mansions though not quickly enough to prevent a swirl of gritty dust from \
entering along with him";

fn transform_benchmark(c: &mut Criterion) {
    c.bench_function("encrypt_250_letters", |b| {
        b.iter(|| cipher::encrypt(black_box(SAMPLE), black_box("vigenere")))
    });
}

fn crack_benchmark(c: &mut Criterion) {
    let encrypted = cipher::encrypt(SAMPLE, "lemon").unwrap();
    let model = LanguageModel::english();

    c.bench_function("crack_statistical_tier", |b| {
        b.iter(|| crack_cipher(black_box(&encrypted), None, &model))
    });
}

fn dictionary_benchmark(c: &mut Criterion) {
    let dictionary = Dictionary::from_words([
        "welcome", "to", "my", "secret", "text", "python", "the", "quick", "brown", "fox",
        "jumps", "over", "lazy", "dog", "attack", "cipher", "garden", "window", "stream",
    ]);
    let options = DictionaryAttackOptions::default();

    c.bench_function("dictionary_attack_small_wordlist", |b| {
        b.iter(|| dictionary_attack(black_box("lcejczt rh tm ftaklh gtvm."), &dictionary, &options))
    });
}

criterion_group!(benches, transform_benchmark, crack_benchmark, dictionary_benchmark);
criterion_main!(benches);
