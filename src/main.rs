use clap::Parser;
use tracing_subscriber::EnvFilter;

use docs_version_menu::config::MenuConfig;
use docs_version_menu::menu::{MenuBuilder, RenderedPage};

#[derive(Parser)]
#[command(name = "docs-version-menu")]
#[command(version, about = "Build a version dropdown menu for a documentation page")]
struct Cli {
    /// URL of the JSON manifest mapping version labels to path segments
    #[arg(long)]
    manifest_url: String,

    /// Base URL that version segments are appended to
    #[arg(long)]
    target_url: String,

    /// Visible text of the dropdown trigger button
    #[arg(long, default_value = "Other Versions")]
    text: String,

    /// URL of the page currently being viewed
    #[arg(long)]
    current_url: String,

    /// Root marker token (repeatable); defaults to "_site" and "array_api"
    #[arg(long = "marker")]
    markers: Vec<String>,

    /// Per-probe timeout in milliseconds (no timeout when omitted)
    #[arg(long)]
    probe_timeout_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MenuConfig::default();
    if !cli.markers.is_empty() {
        config.root_markers = cli.markers.clone();
    }
    config.probe_timeout_ms = cli.probe_timeout_ms;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let builder = MenuBuilder::new(config);
            let mut page = RenderedPage::new(&cli.current_url);
            builder
                .add_version_menu(&mut page, &cli.manifest_url, &cli.target_url, &cli.text)
                .await;
            println!("{}", page.render_header());
        });

    Ok(())
}
