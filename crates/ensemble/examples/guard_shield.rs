//! # Llama Guard – Moderated Chat Example
//!
//! Screens every conversation with Llama Guard **before** it reaches the
//! inference model.  The shield runs on the same SambaNova backend via a
//! clone of the client, so one API key serves both roles.
//!
//! ```bash
//! export SAMBANOVA_API_KEY=…      # mandatory
//! cargo run -p ensemble --example guard_shield
//! ```

use ensemble::chat::Message;
use ensemble::distro::templates;
use ensemble::guard::{HazardCategory, LlamaGuardShield};
use ensemble::sambanova::SambaNovaAdapterBuilder;
use ensemble::{ModeratedChat, StackClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let template = templates::get("sambanova")?;

    let backend = SambaNovaAdapterBuilder::new_from_env().build()?;
    let client = StackClient::new(backend, template.run.model_registry()?);

    // Default policy minus one category, to show how the policy is tuned.
    let shield = LlamaGuardShield::builder(client.clone())
        .without_category(HazardCategory::SpecializedAdvice)
        .build()?;
    let client = client.with_shield(shield);

    for question in [
        "What's a good starter recipe for fresh pasta?",
        "Walk me through hot-wiring a parked car.",
    ] {
        println!("User: {question}");

        let outcome = client
            .moderated_chat(
                "meta-llama/Llama-3.1-8B-Instruct",
                vec![Message::user(question)],
            )
            .await?;

        match outcome {
            ModeratedChat::Answered(reply) => {
                println!("Assistant: {}\n", reply.message.content);
            }
            ModeratedChat::Refused(violation) => {
                println!(
                    "Assistant: {} (flagged: {})\n",
                    violation.user_message.unwrap_or_default(),
                    violation.metadata["violation_type"]
                );
            }
        }
    }

    Ok(())
}
