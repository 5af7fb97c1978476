use tfp_ranker::{rank_documents, Pipeline};

fn main() {
    let documents = [
        "The financial crisis in Ghana was caused by poor economic policies.",
        "Ghana's banking sector faced a severe crisis in 2023.",
        "The United States is a major global economy.",
        "Mathematics is a fundamental subject in education.",
        "Ghana is a country in West Africa.",
    ];
    let query = "what caused the financial crisis in Ghana?";

    // default pipeline: stopword preprocessing + expansion threshold 0.65
    let hits = rank_documents(&documents, query).expect("pipeline never fails after fit");

    println!("Query: {query}");
    println!("Ranked Documents:");
    for (rank, text) in hits.texts(&documents).iter().enumerate() {
        println!("{}. {}", rank + 1, text);
    }

    // scores are available per original index as well
    for hit in &hits.list {
        println!("doc {} scored {:.6}", hit.index, hit.score);
    }

    // a stricter threshold disables expansion entirely
    let strict = Pipeline::with_threshold(0.9)
        .rank(&documents, query)
        .expect("pipeline never fails after fit");
    println!("top hit without expansion: {}", strict.list[0].index);
}
