//! Send one completion request and print the result.

use anthropic_complete::{Client, CompletionRequest, Error};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    // Credential comes from the environment, never from a literal.
    let client = Client::from_env()?;

    let request = CompletionRequest::new(
        "claude-v1",
        "Hello, Claude! How can you assist me today?",
        100,
    );

    let response = client.complete(&request).await?;
    println!("{}", response.completion);

    Ok(())
}
