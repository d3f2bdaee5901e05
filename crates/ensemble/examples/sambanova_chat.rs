use ensemble::StackClient;
use ensemble::chat::Message;
use ensemble::distro::templates;
use ensemble::sambanova::SambaNovaAdapterBuilder;

/// # Chat Completion – Registry-routed Example
///
/// This example wires the SambaNova backend into a [`StackClient`] using the
/// alias table of the built-in `sambanova` template.  That means:
///
/// 1. **You** address models by their public alias
///    (`meta-llama/Llama-3.1-8B-Instruct`).
/// 2. The registry translates the alias into the provider-native checkpoint
///    name (`Meta-Llama-3.1-8B-Instruct`).
/// 3. The backend returns a normalised [`ChatResponse`] with a single
///    assistant message plus token usage statistics.
///
/// ```bash
/// export SAMBANOVA_API_KEY=…      # mandatory
/// cargo run -p ensemble --example sambanova_chat
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let template = templates::get("sambanova")?;

    let backend = SambaNovaAdapterBuilder::new_from_env().build()?;
    let client = StackClient::new(backend, template.run.model_registry()?);

    let response = client
        .chat(
            "meta-llama/Llama-3.1-8B-Instruct",
            vec![
                Message::system("You are a concise, witty assistant."),
                Message::user("Why is the Rust borrow checker important?"),
            ],
        )
        .await?;

    println!("Assistant: {}", response.message.content);

    if let Some(usage) = response.usage {
        println!(
            "Tokens – prompt: {}, completion: {}, total: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
