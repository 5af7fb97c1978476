use criterion::{criterion_group, criterion_main, Criterion};
use tfp_ranker::{rank_documents, TfpVectorizer};

/// Build a synthetic corpus with a controllable amount of term overlap.
fn synthetic_corpus(doc_count: usize, terms_per_doc: usize) -> Vec<String> {
    // xorshift32, deterministic across runs
    let mut state = 0x1234_5678_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..doc_count)
        .map(|_| {
            (0..terms_per_doc)
                .map(|_| format!("term{}", next() % 500))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn fit_transform_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 50);

    c.bench_function("fit_transform_200x50", |b| {
        b.iter(|| {
            let mut vectorizer = TfpVectorizer::new();
            vectorizer.fit_transform(&corpus)
        })
    });
}

fn pipeline_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 50);
    let query = "term1 term42 term300 term77";

    c.bench_function("rank_documents_200x50", |b| {
        b.iter(|| rank_documents(&corpus, query).unwrap())
    });
}

criterion_group!(benches, fit_transform_benchmark, pipeline_benchmark);
criterion_main!(benches);
