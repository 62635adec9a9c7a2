use std::time::Duration;

use anyhow::Result;

use superspreader_game::{GameApp, TICK_INTERVAL_MS};
use superspreader_sdl2::{App, AssetPaths, SdlContext, SdlInitInfo};

/// Start a game session and run it until the window is closed.
pub fn run() -> Result<()> {
    let app = GameApp::default();
    let width = app.width();
    let height = app.height();
    let title = app.title();
    let init_info = SdlInitInfo::builder()
        .width(width)
        .height(height)
        .title(title)
        .tick_interval(Duration::from_millis(TICK_INTERVAL_MS))
        .assets(AssetPaths::default())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
