//! # Streaming Chat Completion – Real-time Example
//!
//! This example shows how to consume incremental text **deltas** from the
//! SambaNova back-end via [`StreamingChatProvider::chat_complete_stream`].
//!
//! Whereas `StackClient::chat` collects the full reply before returning,
//! streaming lets you render partial output as soon as it arrives—perfect for
//! live terminals, web sockets, or any UX where latency matters.
//!
//! ```bash
//! export SAMBANOVA_API_KEY=…      # mandatory
//! cargo run -p ensemble --example sambanova_chat_stream
//! ```
//!
//! You should see the assistant’s reply appear character-by-character.
//!
//! ---------------------------------------------------------------------------

use ensemble::StackClient;
use ensemble::chat::Message;
use ensemble::distro::templates;
use ensemble::provider::StreamingChatProvider as _;
use ensemble::sambanova::SambaNovaAdapterBuilder;
use futures_util::StreamExt; // for `next`
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Spin up the SambaNova back-end (needs `SAMBANOVA_API_KEY` in the env).
    let backend = SambaNovaAdapterBuilder::new_from_env().build()?;

    // 2. Wrap it in a client carrying the template's alias table.
    let registry = templates::get("sambanova")?.run.model_registry()?;
    let client = StackClient::new(backend, registry);

    // 3. Resolve the public alias into backend-ready parameters.
    let params = client.resolve_params(
        "meta-llama/Llama-3.1-8B-Instruct",
        vec![
            Message::system("You are a real-time narrator. Respond sentence by sentence."),
            Message::user("Tell me a short story about llamas exploring the Andes."),
        ],
    )?;

    // 4. Kick off the streaming request on the backend itself.
    let mut stream = client.backend().chat_complete_stream(params);

    // 5. Render the assistant's output as it flows in.
    print!("Assistant: ");
    io::stdout().flush().ok();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(text) => {
                print!("{text}");
                io::stdout().flush().ok();
            }
            Err(e) => {
                eprintln!("\n\nError while streaming: {e}");
                break;
            }
        }
    }

    println!("\n\nStream finished ✅");
    Ok(())
}
