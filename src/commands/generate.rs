//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::RapidNews;

/// Export the whole site into the output directory
pub fn run(app: &RapidNews) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(app)?;
    let stats = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        stats.articles + stats.tags + 2,
        duration.as_secs_f64()
    );

    Ok(())
}
