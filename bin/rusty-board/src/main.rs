//! # Rusty-Board Binary
//!
//! Hydrates a saved thread page offline and prints the resulting thread
//! markup, page title and banner counters.

mod logging;
mod offline;

use std::fs;

use anyhow::Context;
use configs::Settings;
use rb_client::{ClientEnv, Hydrator, Outcome, ThreadPage};
use rb_core::LanguagePack;

use offline::{OfflineConnection, OfflineRenderer, OfflineSession, OfflineUi};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    logging::init_logging(&settings.log);

    let markup = fs::read_to_string(&settings.page)
        .with_context(|| format!("failed to read page {}", settings.page.display()))?;
    let lang = match &settings.lang_pack {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read language pack {}", path.display()))?;
            LanguagePack::from_json(&raw).context("invalid language pack")?
        }
        None => LanguagePack::default(),
    };

    let ui = OfflineUi::default();
    let session = OfflineSession {
        banned: settings.banned,
    };
    let hydrator = Hydrator::new(ClientEnv {
        options: &settings.options,
        lang: &lang,
        hidden: &settings.hidden,
        mine: &settings.mine,
        connection: &OfflineConnection,
        ui: &ui,
        session: &session,
        renderer: &OfflineRenderer,
    });

    let mut thread = ThreadPage::default();
    match hydrator
        .hydrate(&mut thread, Some(&markup))
        .context("hydration failed")?
    {
        Outcome::Banned => {
            tracing::warn!("banned from this board; page left as served");
            println!("{}", thread.page.to_html());
        }
        Outcome::Hydrated { thread: id, .. } => {
            tracing::info!(thread = id, "done");
            println!("{}", thread.page.to_html());
            println!("title: {}", ui.title());
            println!("counters: {}", thread.state.counters.text());
        }
    }
    Ok(())
}
