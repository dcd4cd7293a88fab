//! Run with: cargo run --bin test_prompts -- "Healthy Food"

use inspireai::config::provider::ProviderConfig;
use inspireai::modules::ideas::{model::Mode, parser::parse_ideas, prompt::build_instruction};
use inspireai::services::llm::{GeminiClient, TextGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    ideas: Vec<String>,
}

const MODES: [Mode; 3] = [Mode::Blog, Mode::Youtube, Mode::Tweet];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let topic = std::env::args().nth(1).unwrap_or_else(|| "Fitness".to_string());
    let base_url = std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let client = Client::new();

    println!("\n🧪 Testing idea prompts for \"{}\"\n", topic);

    for mode in MODES {
        println!("📝 Mode: {}", mode.as_str());

        let start = Instant::now();
        let response = client
            .post(format!("{}/api/generate", base_url))
            .json(&GenerateRequest { prompt: &topic, mode: mode.as_str() })
            .send()
            .await;
        let elapsed = start.elapsed().as_millis();

        match response {
            Ok(resp) if resp.status().is_success() => {
                let body: GenerateResponse = resp.json().await.unwrap();
                println!("⏱️  Response time: {}ms", elapsed);
                for (i, idea) in body.ideas.iter().enumerate() {
                    println!("  {}. {}", i + 1, idea);
                }
                println!();
            }
            Ok(resp) => {
                println!("❌ Error: {}", resp.text().await.unwrap_or_default());
            }
            Err(e) => {
                println!("❌ Request failed: {}. Is the server running?", e);
                println!("\nTesting directly with Gemini instead...\n");
                test_gemini_direct(&topic).await;
                return;
            }
        }
    }
}

async fn test_gemini_direct(topic: &str) {
    let config = ProviderConfig::from_env().expect("invalid provider configuration");
    let gemini = GeminiClient::new(&config).expect("failed to build Gemini client");

    for mode in MODES {
        let start = Instant::now();
        match gemini.generate(&build_instruction(topic, mode)).await {
            Ok(raw) => {
                println!("📝 Mode: {} ({}ms)", mode.as_str(), start.elapsed().as_millis());
                println!("Raw:\n{}\n", raw);
                println!("Parsed: {:#?}\n", parse_ideas(&raw));
            }
            Err(e) => println!("❌ {}: {}", mode.as_str(), e),
        }
    }
}
