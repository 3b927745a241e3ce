use crate::core::generator::{GenerationReport, ScaffoldGenerator};
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct ScaffoldEngine<S: Storage, C: ConfigProvider> {
    generator: ScaffoldGenerator<S, C>,
}

impl<S: Storage, C: ConfigProvider> ScaffoldEngine<S, C> {
    pub fn new(generator: ScaffoldGenerator<S, C>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &ScaffoldGenerator<S, C> {
        &self.generator
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<GenerationReport> {
        let range = self.generator.config().unit_range();
        let layout = self.generator.config().layout();
        let started = Instant::now();

        tracing::info!(
            "Generating {} units ({}..={}) under {}",
            range.len(),
            range.start,
            range.end,
            layout.root.display()
        );

        let report = self.generator.run(out)?;

        tracing::info!(
            "✅ Generated {} units in {:?}",
            report.units.len(),
            started.elapsed()
        );

        Ok(report)
    }
}
