//! Command implementations shared by one-shot subcommands and `browse`

use anyhow::{anyhow, bail};
use application::error::ApplicationError;
use application::{HospitalDetailScreen, HospitalListScreen};
use domain::HospitalRecord;
use tracing::debug;

use crate::context::AppContext;
use crate::render;
use crate::selector::Selector;

/// Convert an application error into its user-facing message
pub fn user_error(e: &ApplicationError) -> anyhow::Error {
    anyhow!(e.user_message())
}

/// Mount a list screen, wait for the directory and apply `query`
pub async fn load_list(context: &AppContext, query: &str) -> anyhow::Result<HospitalListScreen> {
    let mut screen = context.list_screen();
    screen.mount();

    let status = screen.loaded().await;
    if let Some(message) = status.error() {
        bail!("{message}");
    }

    screen.set_query(query);
    Ok(screen)
}

/// Pick one hospital from the current list
pub fn pick(screen: &HospitalListScreen, selector: &Selector) -> anyhow::Result<HospitalRecord> {
    let mut visible = screen.visible();
    let Some(position) = selector.position(&visible) else {
        bail!("No hospital matches {selector}");
    };

    let hospital = visible.swap_remove(position);
    debug!(key = %hospital.list_key(position), "Hospital selected");
    Ok(hospital)
}

/// Detail view once address resolution has settled
pub async fn show(mut screen: HospitalDetailScreen) -> String {
    let map = screen.map_settled().await;
    let out = render::hospital_detail(screen.hospital(), &map);
    screen.leave();
    out
}

/// Resolve the address, then hand the hospital to the maps app
pub async fn open_map(mut screen: HospitalDetailScreen, dry_run: bool) -> String {
    let map = screen.map_settled().await;
    let outcome = screen.open_in_maps().await;
    screen.leave();

    let mut out = render::hospital_detail(screen.hospital(), &map);
    out.push_str(&render::action_outcome(&outcome, dry_run));
    out
}

/// Hand the hospital's phone number to the dialer
pub async fn call(mut screen: HospitalDetailScreen, dry_run: bool) -> String {
    let outcome = screen.call().await;
    screen.leave();
    render::action_outcome(&outcome, dry_run)
}
