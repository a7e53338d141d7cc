use rag_client::RagClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());
    let client = RagClient::new(&base_url);

    println!("Adding a document to {base_url}...");
    let added = client
        .add_document("Retrieval-augmented generation answers questions by retrieving relevant source text and conditioning a language model on it.")
        .await?;
    println!("Added document (status: {}, id: {})", added.status, added.id);

    println!("\nSearching...");
    let results = client.query("What is RAG?", Some(3)).await?;
    for result in &results {
        println!("[{:.3}] {}: {}", result.score, result.id, result.text);
    }

    println!("\nGenerating an answer...");
    let response = client.generate_answer("What is RAG?").await?;
    println!("Answer: {}", response.answer);
    for (index, source) in response.sources.iter().enumerate() {
        println!("Document {}: {}", index + 1, source);
    }

    Ok(())
}
