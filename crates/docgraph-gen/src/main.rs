use docgraph_gen::{DocgenConfig, DocgenError, Pipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), DocgenError> {
    // Reports go to stdout; the level is fixed.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stdout),
        )
        .init();

    let mut pipeline = Pipeline::new(DocgenConfig::default())?;
    pipeline.run()?;

    Ok(())
}
