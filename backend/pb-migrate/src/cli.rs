use pb_config::Config;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pb-migrate")]
#[command(about = "Merge TimeBlocker users, daily plans and time blocks into the unified database")]
#[command(version)]
pub struct Cli {
    /// Config directory (default: PB_CONFIG_DIR or ./.pb)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Source (TimeBlocker) database URL
    #[arg(long)]
    pub source: Option<String>,

    /// Target (unified) database URL
    #[arg(long)]
    pub target: Option<String>,

    /// Fill missing calendar fields on users that already exist in the target
    #[arg(long)]
    pub backfill_profile: bool,

    /// Do not apply the unified schema to the target
    #[arg(long)]
    pub skip_schema: bool,

    /// Print the report as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Load config from `--config-dir` or the default directory.
    pub fn load_config(&self) -> pb_config::ConfigErrorResult<Config> {
        let mut config = match self.config_dir {
            Some(ref dir) => Config::load_from(dir)?,
            None => Config::load()?,
        };
        self.apply_to(&mut config);
        Ok(config)
    }

    /// Flags win over file and environment values.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref url) = self.source {
            config.source.url = url.clone();
        }
        if let Some(ref url) = self.target {
            config.target.url = url.clone();
        }
        if self.backfill_profile {
            config.migration.backfill_profile = true;
        }
        if self.skip_schema {
            config.migration.apply_target_schema = false;
        }
    }

    /// Where file logging goes, if configured: `<config dir>/<logging.dir>/<logging.file>`.
    pub fn log_file(&self, config: &Config) -> pb_config::ConfigErrorResult<Option<PathBuf>> {
        let Some(ref file) = config.logging.file else {
            return Ok(None);
        };
        let config_dir = match self.config_dir {
            Some(ref dir) => dir.clone(),
            None => Config::config_dir()?,
        };
        Ok(Some(config_dir.join(&config.logging.dir).join(file)))
    }
}
