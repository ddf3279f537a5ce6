use std::env;
use upload_constraints::{validate_file, CandidateFile, Client, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads BACKEND_URL and the optional UPLOAD_TIMEOUT_SECONDS
    let client = Client::new(Config::from_env()?)?;

    println!("Fetching upload constraints...");
    let constraints = client.fetch_constraints().await?;
    println!("Accepted: {}", constraints.format_hint());

    // Check the file given on the command line, or a made-up one
    let file = match env::args().nth(1) {
        Some(path) => CandidateFile::from_path(&path).await?,
        None => CandidateFile::new("audio/mpeg", "song.mp3", 5_000_000),
    };

    println!(
        "Checking {} ({}, {} bytes)",
        file.name, file.mime_type, file.size
    );

    match validate_file(&file, &constraints) {
        None => println!("Ready to upload"),
        Some(reason) => println!("Rejected: {}", reason),
    }

    Ok(())
}
