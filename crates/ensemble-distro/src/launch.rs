//! Worked launch examples and their shell rendering.
//!
//! Launch commands are **documentation data**: this crate renders them into
//! fenced code blocks, it never executes anything.  Keeping them structured
//! (instead of free-form strings) lets [`validate`](crate::validate)
//! cross-check the environment variables each command references against the
//! distribution's declared environment table.

use std::fmt::Write as _;

use crate::config::ImageType;

/// One titled launch walkthrough on the documentation page.
#[derive(Debug, Clone)]
pub struct LaunchExample {
    /// Section heading, e.g. `Via Docker`.
    pub title: String,
    /// Optional lead-in paragraph.  Empty string renders nothing.
    pub intro: String,
    pub command: LaunchCommand,
}

impl LaunchExample {
    pub fn new(title: impl Into<String>, intro: impl Into<String>, command: LaunchCommand) -> Self {
        Self {
            title: title.into(),
            intro: intro.into(),
            command,
        }
    }
}

/// The two launch flavours a distribution documents.
#[derive(Debug, Clone)]
pub enum LaunchCommand {
    /// `docker run` against a pre-built image.
    Container {
        image: String,
        /// Shell variable holding the host port, e.g. `LLAMA_STACK_PORT`.
        port_var: String,
        /// Value assigned to `port_var` on the first line of the block.
        port_default: String,
        /// Environment variables forwarded with `--env KEY=$KEY`.
        env_keys: Vec<String>,
    },
    /// `llama stack build` followed by `llama stack run`.
    BuildAndRun {
        template: String,
        image_type: ImageType,
        /// Path passed to `llama stack run`, e.g. `./run.yaml`.
        config_path: String,
        port_var: String,
        env_keys: Vec<String>,
    },
}

impl LaunchCommand {
    /// The single shell variable this command uses for the server port.
    pub fn port_var(&self) -> &str {
        match self {
            LaunchCommand::Container { port_var, .. } => port_var,
            LaunchCommand::BuildAndRun { port_var, .. } => port_var,
        }
    }

    /// Environment variables the command forwards into the server.
    pub fn env_keys(&self) -> &[String] {
        match self {
            LaunchCommand::Container { env_keys, .. } => env_keys,
            LaunchCommand::BuildAndRun { env_keys, .. } => env_keys,
        }
    }

    /// Every shell variable the rendered block references: the port variable
    /// plus all forwarded keys.
    pub fn referenced_vars(&self) -> Vec<&str> {
        let mut vars = vec![self.port_var()];
        vars.extend(self.env_keys().iter().map(String::as_str));
        vars
    }

    /// Render the command as the body of a `bash` code block (no fence, no
    /// trailing newline).
    pub fn render_bash(&self) -> String {
        let mut out = String::new();
        match self {
            LaunchCommand::Container {
                image,
                port_var,
                port_default,
                env_keys,
            } => {
                writeln!(out, "{port_var}={port_default}").expect("failed to write buffer");
                write!(
                    out,
                    "docker run \\\n  -it \\\n  -p ${port_var}:${port_var} \\\n  {image} \\\n  --port ${port_var}"
                )
                .expect("failed to write buffer");
                for key in env_keys {
                    write!(out, " \\\n  --env {key}=${key}").expect("failed to write buffer");
                }
            }
            LaunchCommand::BuildAndRun {
                template,
                image_type,
                config_path,
                port_var,
                env_keys,
            } => {
                writeln!(
                    out,
                    "llama stack build --template {template} --image-type {image_type}"
                )
                .expect("failed to write buffer");
                write!(out, "llama stack run {config_path} \\\n  --port ${port_var}")
                    .expect("failed to write buffer");
                for key in env_keys {
                    write!(out, " \\\n  --env {key}=${key}").expect("failed to write buffer");
                }
            }
        }
        out
    }
}
