//! Assembly of the policy prompt the guard model is scored with.
//!
//! The wording follows the Llama Guard 3 instruction format: a task line,
//! the category list between sentinel markers, the conversation transcript,
//! then the answer-format contract.  The model was tuned on this exact
//! shape; deviating from it measurably degrades verdict quality.

use std::fmt::Write as _;

use ensemble_core::chat::{Message, Role};

use crate::categories::HazardCategory;

/// Transcript role labels the guard model was trained on.
fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        // System prompts are policy for the *other* model; the guard sees
        // them as agent-side context.
        Role::Assistant | Role::System => "Agent",
    }
}

/// Render the full screening prompt for `conversation`.
///
/// The caller guarantees `conversation` is non-empty; the last message
/// decides whether the user or the agent side is being assessed.
pub(crate) fn render_policy_prompt(
    categories: &[HazardCategory],
    conversation: &[Message],
) -> String {
    let target = conversation
        .last()
        .map(|message| speaker(message.role))
        .unwrap_or("User");

    let mut buffer = String::new();

    writeln!(
        buffer,
        "Task: Check if there is unsafe content in '{target}' messages in conversations according our safety policy with the below categories."
    )
    .expect("failed to write buffer");
    writeln!(buffer).expect("failed to write buffer");

    writeln!(buffer, "<BEGIN UNSAFE CONTENT CATEGORIES>").expect("failed to write buffer");
    for category in categories {
        writeln!(buffer, "{}: {}.", category.code(), category.title())
            .expect("failed to write buffer");
    }
    writeln!(buffer, "<END UNSAFE CONTENT CATEGORIES>").expect("failed to write buffer");
    writeln!(buffer).expect("failed to write buffer");

    writeln!(buffer, "<BEGIN CONVERSATION>").expect("failed to write buffer");
    writeln!(buffer).expect("failed to write buffer");
    for message in conversation {
        writeln!(buffer, "{}: {}", speaker(message.role), message.content)
            .expect("failed to write buffer");
    }
    writeln!(buffer).expect("failed to write buffer");
    writeln!(buffer, "<END CONVERSATION>").expect("failed to write buffer");
    writeln!(buffer).expect("failed to write buffer");

    writeln!(
        buffer,
        "Provide your safety assessment for ONLY THE LAST {target} message in the above conversation:"
    )
    .expect("failed to write buffer");
    writeln!(buffer, " - First line must read 'safe' or 'unsafe'.").expect("failed to write buffer");
    writeln!(
        buffer,
        " - If unsafe, a second line must include a comma-separated list of violated categories."
    )
    .expect("failed to write buffer");

    buffer
}
