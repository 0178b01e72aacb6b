use anyhow::Context as _;
use clap::Parser;

/// Generate the DMG installer background next to this tool's sources.
///
/// Layout is fixed and must match the icon positions used by the DMG
/// packaging script.
#[derive(Parser, Debug)]
#[command(name = "dmg-background", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let Cli {} = Cli::parse();

    let cfg = dmg_background::SceneConfig::default();
    let out_path = dmg_background::default_output_path();
    let out = dmg_background::generate(&cfg, &out_path)
        .with_context(|| format!("generate '{}'", out_path.display()))?;

    println!(
        "Created: {} ({}x{})",
        out.path.display(),
        out.canvas.width,
        out.canvas.height
    );
    Ok(())
}
