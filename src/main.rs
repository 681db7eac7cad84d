use media_assets::config::AssetConfig;
use media_assets::driver;

fn main() {
    // Per-file errors are already printed; the run always exits cleanly
    driver::run(&AssetConfig::default());
}
