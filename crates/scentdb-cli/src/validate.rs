use std::path::Path;

/// Reads an exported dataset back and fails if it has any violation.
///
/// # Errors
///
/// Returns an error if a collection file cannot be read or parsed, or if
/// validation reports at least one violation.
pub(crate) fn run_validate(dir: &Path) -> anyhow::Result<()> {
    let dataset = scentdb_export::read_dataset(dir)?;
    let violations = scentdb_export::validate_dataset(&dataset);

    if violations.is_empty() {
        println!(
            "{}: {} brands, {} products, {} quantities, no violations",
            dir.display(),
            dataset.brands.len(),
            dataset.products.len(),
            dataset.quantities.len()
        );
        return Ok(());
    }

    for violation in &violations {
        tracing::error!(%violation, "dataset violation");
        println!("violation: {violation}");
    }
    anyhow::bail!("{} violation(s) in {}", violations.len(), dir.display())
}
