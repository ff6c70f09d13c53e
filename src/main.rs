use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use semver_bump::config::{self, Config};
use semver_bump::domain::{compare_with, BumpDirective, CompareMode, Precedence, Version};
use semver_bump::git::{Git2Repository, ReleaseRepository};
use semver_bump::release::{execute_release, ReleasePlan};
use semver_bump::ui;
use semver_bump::version_file::VersionFile;
use semver_bump::warning::BumpWarning;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "SEMVER_BUMP_LOG";

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    about = "Parse, compare and bump semantic versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'v', long, help = "Print version information")]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Bump a version; without <VERSION> the tracked version is bumped
    Bump(BumpArgs),

    /// Print -1, 0 or 1 as VERSION is older, equal to or newer than OTHER_VERSION
    Compare {
        #[arg(value_name = "VERSION")]
        first: String,

        #[arg(value_name = "OTHER_VERSION")]
        second: String,

        #[arg(long, help = "Use strict semver.org precedence")]
        strict: bool,
    },

    /// Print one part of a version
    Get {
        #[arg(value_enum)]
        part: Part,

        #[arg(value_name = "VERSION")]
        version: String,
    },
}

#[derive(clap::Args)]
struct BumpArgs {
    #[command(subcommand)]
    unit: BumpUnit,

    #[arg(long, global = true, help = "Commit, tag and push the release")]
    tag: bool,

    #[arg(short, long, global = true, help = "Skip confirmation prompts")]
    yes: bool,

    #[arg(long, global = true, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

#[derive(clap::Subcommand)]
enum BumpUnit {
    Major {
        #[arg(value_name = "VERSION")]
        current: Option<String>,
    },
    Minor {
        #[arg(value_name = "VERSION")]
        current: Option<String>,
    },
    Patch {
        #[arg(value_name = "VERSION")]
        current: Option<String>,
    },
    /// Replace the prerelease part
    Prerel {
        label: String,
        #[arg(value_name = "VERSION")]
        current: Option<String>,
    },
    /// Replace the build metadata
    Build {
        label: String,
        #[arg(value_name = "VERSION")]
        current: Option<String>,
    },
}

impl BumpUnit {
    fn into_parts(self) -> (BumpDirective, Option<String>) {
        match self {
            BumpUnit::Major { current } => (BumpDirective::Major, current),
            BumpUnit::Minor { current } => (BumpDirective::Minor, current),
            BumpUnit::Patch { current } => (BumpDirective::Patch, current),
            BumpUnit::Prerel { label, current } => (BumpDirective::Prerelease(label), current),
            BumpUnit::Build { label, current } => (BumpDirective::Build(label), current),
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Part {
    Major,
    Minor,
    Patch,
    Prerel,
    Build,
    Release,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("semver-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingSubcommand,
                "a command is required",
            )
            .exit();
    };

    match command {
        Command::Compare {
            first,
            second,
            strict,
        } => {
            let mode = if strict {
                CompareMode::Strict
            } else {
                configured_compare_mode(args.config.as_deref())?
            };
            let precedence = compare_with(mode, &Version::parse(&first)?, &Version::parse(&second)?);
            println!("{}", precedence);
            Ok(())
        }
        Command::Get { part, version } => {
            println!("{}", get_part(&Version::parse(&version)?, part));
            Ok(())
        }
        Command::Bump(bump) => run_bump(bump, args.config.as_deref()),
    }
}

/// Compare mode from configuration. A discovered file that fails to load
/// falls back to the default mode; an explicit `--config` must load.
fn configured_compare_mode(config_path: Option<&str>) -> Result<CompareMode> {
    match config::load_config(config_path) {
        Ok(config) => Ok(config.compare_mode()),
        Err(e) if config_path.is_none() => {
            tracing::warn!(error = %e, "ignoring configuration for compare");
            Ok(CompareMode::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn get_part(version: &Version, part: Part) -> String {
    match part {
        Part::Major => version.major().to_string(),
        Part::Minor => version.minor().to_string(),
        Part::Patch => version.patch().to_string(),
        Part::Prerel => version
            .prerelease()
            .map(ToString::to_string)
            .unwrap_or_default(),
        Part::Build => version.build().map(ToString::to_string).unwrap_or_default(),
        Part::Release => version.release().to_string(),
    }
}

fn run_bump(bump: BumpArgs, config_path: Option<&str>) -> Result<()> {
    let (directive, explicit) = bump.unit.into_parts();

    // An explicit version is a pure calculation: no config, no files, no git.
    if let Some(current) = explicit {
        if bump.tag {
            bail!("--tag releases the tracked version; omit <VERSION>");
        }
        println!("{}", Version::parse(&current)?.bump(&directive)?);
        return Ok(());
    }

    let config = &config::load_config(config_path)?;

    let version_file = VersionFile::new(&config.version_file);
    let repo = Git2Repository::discover(".");
    if let Err(e) = &repo {
        tracing::debug!(error = %e, "no git repository available");
    }
    let repo_ref = repo.as_ref().ok();

    let (current, previous_tag) = resolve_current(config, &version_file, repo_ref)?;
    let next = current.bump(&directive)?;
    tracing::debug!(%current, %next, %directive, "bumped tracked version");

    if compare_with(config.compare_mode(), &next, &current) != Precedence::Newer {
        ui::display_warning(&BumpWarning::NotNewer {
            previous: current.to_string(),
            next: next.to_string(),
        });
    }
    println!("{}", next);

    if !bump.tag {
        if bump.dry_run {
            ui::display_status(&format!(
                "Dry run: would write {} to {}",
                next,
                version_file.path().display()
            ));
        } else {
            version_file.write(&next)?;
            tracing::info!(path = %version_file.path().display(), %next, "version file updated");
        }
        return Ok(());
    }

    let repo = match repo {
        Ok(repo) => repo,
        Err(e) => bail!("--tag needs a git repository: {}", e),
    };
    let plan = ReleasePlan::new(config, previous_tag, next.clone(), version_file.path());
    ui::display_release_plan(&plan);

    if bump.dry_run {
        ui::display_status("Dry run: no files written, nothing committed or tagged");
        return Ok(());
    }

    if repo.has_uncommitted_changes()? {
        ui::display_warning(&BumpWarning::UncommittedChanges);
    }

    if !bump.yes && !ui::confirm_action(&format!("Release {}?", plan.tag))? {
        ui::display_status("Release cancelled by user; nothing was changed.");
        return Ok(());
    }

    let outcome = execute_release(&repo, &plan)?;
    ui::display_release_outcome(&outcome, plan.remote.as_deref());
    Ok(())
}

/// Finds the version to bump: the marker, else the latest release tag, else
/// the configured initial version. Also returns the latest release tag.
fn resolve_current(
    config: &Config,
    version_file: &VersionFile,
    repo: Option<&Git2Repository>,
) -> Result<(Version, Option<String>)> {
    let pattern = config.tag_pattern();
    let latest_tag = match repo {
        Some(repo) => repo.latest_tag(&pattern)?,
        None => None,
    };

    if let Some(current) = version_file.load()? {
        return Ok((current, latest_tag));
    }

    if let Some(version) = latest_tag.as_deref().and_then(|tag| pattern.extract(tag)) {
        ui::display_warning(&BumpWarning::SeededFromTag {
            tag: latest_tag.clone().unwrap_or_default(),
        });
        return Ok((version, latest_tag));
    }

    let initial = config.initial_version()?;
    ui::display_warning(&BumpWarning::NoVersionMarker {
        path: version_file.path().to_path_buf(),
        seed: initial.to_string(),
    });
    Ok((initial, latest_tag))
}
