use criterion::{Criterion, black_box, criterion_group, criterion_main};
use statecomb::{
    BoxedParser, ParseState, Parser, between, choice, digits, letters, many, many1, str,
};

fn alternating_runs(c: &mut Criterion) {
    let source = "abc123def456ghi789".repeat(64);
    let parser = many1(choice([letters().boxed(), digits().boxed()]));

    c.bench_function("alternating_runs", |b| {
        b.iter(|| {
            let state: ParseState = parser.run(black_box(&source));
            state
        })
    });
}

fn bracketed_words(c: &mut Criterion) {
    let source = "(alpha)(beta)(gamma)(delta)".repeat(32);
    let word: BoxedParser<'_> = between(str("("), letters(), str(")")).boxed();
    let parser = many(word);

    c.bench_function("bracketed_words", |b| {
        b.iter(|| parser.run(black_box(&source)))
    });
}

fn failing_choice(c: &mut Criterion) {
    let source = "!".repeat(16);
    let parser = choice([
        str("let").boxed(),
        str("var").boxed(),
        letters().boxed(),
        digits().boxed(),
    ]);

    c.bench_function("failing_choice", |b| {
        b.iter(|| {
            let state: ParseState = parser.run(black_box(&source));
            state
        })
    });
}

criterion_group!(benches, alternating_runs, bracketed_words, failing_choice);
criterion_main!(benches);
