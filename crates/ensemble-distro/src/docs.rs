//! Composition of distribution documentation pages.
//!
//! ```text
//! ┌────────────────┐    DocSection     ┌─────────────────┐
//! │ FrontMatter    │ ─────────────────►│ MarkdownBuilder │
//! ├────────────────┤                   ├─────────────────┤
//! │ ProviderTable  │ ─────────────────►│ MarkdownBuilder │
//! ├────────────────┤                   ├─────────────────┤
//! │ …              │ ─────────────────►│ MarkdownBuilder │
//! └────────────────┘                   └─────────────────┘
//!            ▲                                   │
//!            └───────── DocChain::build() ◄──────┘
//! ```
//!
//! Every block of the page is its own [`DocSection`]: a small value that
//! knows how to append itself to a [`MarkdownBuilder`].  [`DocChain`] lines
//! the sections up **without** mutable builders or verbose `push` calls, and
//! [`render_distribution_page`] is the canonical chain producing the
//! standard page layout from a [`DistributionSpec`].
//!
//! Sections are public: a downstream doc pipeline can re-order them or
//! interleave its own.

use crate::launch::LaunchExample;
use crate::markdown::MarkdownBuilder;
use crate::spec::{DistributionSpec, EnvVarSpec, ModelEntry};

/// One renderable block of a documentation page.
pub trait DocSection {
    /// Append this section to `md` and hand the builder back.
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder;
}

/// Lightweight container that threads a [`MarkdownBuilder`] through a
/// sequence of [`DocSection`]s.
pub struct DocChain {
    md: MarkdownBuilder,
}

impl Default for DocChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DocChain {
    /// Start an empty page.
    pub fn new() -> Self {
        Self {
            md: MarkdownBuilder::new(),
        }
    }

    /// Append one section.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining.
    pub fn with(mut self, section: impl DocSection) -> Self {
        self.md = section.append(self.md);
        self
    }

    /// Consume the chain and return the accumulated markdown.
    pub fn build(self) -> String {
        self.md.finalize()
    }
}

/// YAML front matter (`--- … ---`) consumed by documentation hosts.
pub struct FrontMatter<'a> {
    pub entries: &'a [(&'a str, &'a str)],
}

impl DocSection for FrontMatter<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        let mut md = md.add_delimiter();
        for (key, value) in self.entries {
            md = md.add_line(format!("{key}: {value}"));
        }
        md.add_delimiter().add_blank_line()
    }
}

/// The `# {Name} Distribution` page heading.
pub struct PageHeader<'a> {
    pub display_name: &'a str,
}

impl DocSection for PageHeader<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        md.add_section_h1(format!("{} Distribution", self.display_name))
            .add_blank_line()
    }
}

/// The hidden self-referencing `{toctree}` directive Sphinx needs for
/// orphan pages.
pub struct TocTree;

impl DocSection for TocTree {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        md.add_directive("{toctree}", ":maxdepth: 2\n:hidden:\n\nself")
            .add_blank_line()
    }
}

/// Intro sentence plus the API / provider table.
pub struct ProviderTable<'a> {
    pub spec: &'a DistributionSpec,
}

impl DocSection for ProviderTable<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        let intro = match &self.spec.container_image {
            Some(image) => format!(
                "The `{image}` distribution consists of the following provider configurations."
            ),
            None => format!(
                "The {} distribution consists of the following provider configurations.",
                self.spec.name
            ),
        };

        let mut md = md
            .add_line(intro)
            .add_blank_line()
            .add_table_header(&["API", "Provider(s)"]);

        for binding in &self.spec.bindings {
            let providers: Vec<String> = binding
                .providers
                .iter()
                .map(|provider| format!("`{provider}`"))
                .collect();
            md = md.add_table_row(&[binding.api.as_str(), &providers.join(", ")]);
        }
        md.add_blank_line()
    }
}

/// The `### Environment Variables` block.
pub struct EnvVarsSection<'a> {
    pub env: &'a [EnvVarSpec],
}

impl DocSection for EnvVarsSection<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        let mut md = md
            .add_section_h3("Environment Variables")
            .add_blank_line()
            .add_line("The following environment variables can be configured:")
            .add_blank_line();
        for var in self.env {
            md = md.add_bullet(format!(
                "`{}`: {} (default: `{}`)",
                var.name, var.description, var.default
            ));
        }
        md.add_blank_line()
    }
}

/// The `### Models` block.
pub struct ModelsSection<'a> {
    pub models: &'a [ModelEntry],
}

impl DocSection for ModelsSection<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        let mut md = md
            .add_section_h3("Models")
            .add_blank_line()
            .add_line("The following models are available by default:")
            .add_blank_line();
        for model in self.models {
            md = md.add_bullet(format!(
                "`{} ({})`",
                model.model_id, model.provider_model_id
            ));
        }
        md.add_blank_line()
    }
}

/// The `### Prerequisite: API Keys` block.  Renders nothing when the spec
/// lists no prerequisites.
pub struct PrerequisitesSection<'a> {
    pub paragraphs: &'a [String],
}

impl DocSection for PrerequisitesSection<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        if self.paragraphs.is_empty() {
            return md;
        }
        let mut md = md.add_section_h3("Prerequisite: API Keys").add_blank_line();
        for paragraph in self.paragraphs {
            md = md.add_line(paragraph).add_blank_line();
        }
        md
    }
}

/// The `## Running Llama Stack with {Name}` block with one sub-section per
/// launch example.
pub struct LaunchSection<'a> {
    pub display_name: &'a str,
    pub overview: &'a str,
    pub examples: &'a [LaunchExample],
}

impl DocSection for LaunchSection<'_> {
    fn append(self, md: MarkdownBuilder) -> MarkdownBuilder {
        if self.examples.is_empty() {
            return md;
        }

        let mut md = md
            .add_section_h2(format!("Running Llama Stack with {}", self.display_name))
            .add_blank_line();
        if !self.overview.is_empty() {
            md = md.add_line(self.overview).add_blank_line();
        }

        for example in self.examples {
            md = md.add_section_h3(&example.title).add_blank_line();
            if !example.intro.is_empty() {
                md = md.add_line(&example.intro).add_blank_line();
            }
            md = md
                .add_text_bash(example.command.render_bash())
                .add_blank_line();
        }
        md
    }
}

/// Render the standard documentation page for `spec`.
///
/// The output is normalised to end with exactly one trailing newline.
pub fn render_distribution_page(spec: &DistributionSpec) -> String {
    let page = DocChain::new()
        .with(FrontMatter {
            entries: &[("orphan", "true")],
        })
        .with(PageHeader {
            display_name: &spec.display_name,
        })
        .with(TocTree)
        .with(ProviderTable { spec })
        .with(EnvVarsSection { env: &spec.env })
        .with(ModelsSection {
            models: &spec.default_models,
        })
        .with(PrerequisitesSection {
            paragraphs: &spec.prerequisites,
        })
        .with(LaunchSection {
            display_name: &spec.display_name,
            overview: &spec.launch_overview,
            examples: &spec.launch,
        })
        .build();

    format!("{}\n", page.trim_end())
}
