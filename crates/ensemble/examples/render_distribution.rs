use ensemble::distro::{docs, templates};

/// # Distribution Artefacts – Offline Example
///
/// Prints everything the built-in `sambanova` template ships: the rendered
/// documentation page, both manifests and the validation report.  Runs
/// entirely offline; no API key required.
///
/// ```bash
/// cargo run -p ensemble --example render_distribution
/// ```
fn main() -> anyhow::Result<()> {
    let template = templates::get("sambanova")?;

    println!("{}", docs::render_distribution_page(&template.spec));

    println!("----- run.yaml -----");
    println!("{}", template.run.to_yaml()?);

    println!("----- build.yaml -----");
    println!("{}", template.build.to_yaml()?);

    println!("----- validation -----");
    let findings = template.spec.validate();
    if findings.is_empty() {
        println!("spec is consistent");
    }
    for finding in findings {
        println!("{finding}");
    }

    Ok(())
}
