use hms_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Prints where the config file is expected, whether it exists, and the
/// values in effect (file values or defaults).
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== hms Configuration ===\n");

        let path = Config::config_path()?;
        println!("Config File:");
        println!("  Path: {}", path.display());
        if !path.exists() {
            println!("  Status: Not found (using defaults)");
        } else if let Err(e) = Config::load() {
            println!("  Status: Invalid (using defaults)");
            println!("  Error: {e:#}");
        } else {
            println!("  Status: Found");
        }
        println!();

        println!("Store:");
        println!("  Capacity: {}", config.store.capacity);
        println!();

        println!("Menu:");
        println!("  Title: {}", config.menu.title);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}
