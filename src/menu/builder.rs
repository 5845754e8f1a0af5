//! Menu construction orchestrator

use reqwest::Client;
use tracing::{error, info};

use crate::config::{MenuConfig, NOT_FOUND_TEXT};
use crate::menu::dom::Element;
use crate::menu::page::Page;
use crate::resolve::links::resolve_links;
use crate::resolve::manifest::fetch_manifest;
use crate::resolve::prober::{HttpProber, Prober};
use crate::resolve::subpath::current_subpath;

/// Builds version menus and attaches them to a page
pub struct MenuBuilder<P: Prober> {
    client: Client,
    prober: P,
    config: MenuConfig,
}

impl MenuBuilder<HttpProber> {
    pub fn new(config: MenuConfig) -> Self {
        let client = Client::new();
        let prober = HttpProber::new(client.clone()).with_timeout(config.probe_timeout());
        Self {
            client,
            prober,
            config,
        }
    }
}

impl<P: Prober> MenuBuilder<P> {
    /// Builder with a custom prober, used by tests
    pub fn with_prober(config: MenuConfig, client: Client, prober: P) -> Self {
        Self {
            client,
            prober,
            config,
        }
    }

    /// Adds a version dropdown menu to the page's navigation header.
    ///
    /// Fetches the manifest at `manifest_url`, resolves one link per version
    /// under `target_base`, and appends the assembled menu to the header.
    /// If the manifest cannot be loaded, the menu is attached with its
    /// trigger reading [`NOT_FOUND_TEXT`] and an empty content panel.
    ///
    /// The header gains exactly one element per call, on every completion
    /// path. Per-version probe failures resolve silently to that version's
    /// index page and never abort the menu. No error escapes this method.
    pub async fn add_version_menu(
        &self,
        page: &mut dyn Page,
        manifest_url: &str,
        target_base: &str,
        trigger_text: &str,
    ) {
        let mut dropdown = Element::dropdown();
        let mut button = Element::button();
        let mut content = Element::content();

        let manifest = match fetch_manifest(&self.client, manifest_url).await {
            Ok(manifest) => manifest,
            Err(e) => {
                error!("Failed to load version manifest from {}: {}", manifest_url, e);
                button.set_text(NOT_FOUND_TEXT);
                dropdown.append_child(button);
                dropdown.append_child(content);
                page.append_to_header(dropdown);
                return;
            }
        };

        let subpath = current_subpath(&page.current_url(), &self.config.root_markers);

        // All probes are joined before the page is touched, so the menu
        // never shows a partially resolved version set.
        let links = resolve_links(&self.prober, &manifest, target_base, &subpath).await;

        for link in &links {
            content.append_child(Element::link(&link.label, &link.href));
        }
        button.set_text(trigger_text);
        dropdown.append_child(button);
        dropdown.append_child(content);

        info!(
            "Attaching version menu with {} links for subpath {:?}",
            links.len(),
            subpath
        );
        page.append_to_header(dropdown);
    }
}
