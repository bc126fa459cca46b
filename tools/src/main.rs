use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bagpipe_tools::edit;
use bagpipe_tools::logging::{init_logging, LogConfig};
use bagpipe_tools::{
    advisory_notice, format_dump_pretty, format_inspect_report, format_rewards, inspect_profile,
    reward_views, ProfileDump,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::{guess_game, load_profile, Profile, ProfileConfig, RewardStat, Warnings};
use glob::Pattern;

#[derive(Parser)]
#[command(
    name = "bagpipe",
    version,
    about = "Borderlands profile inspection and editing"
)]
struct Cli {
    /// More log output (-v warn, -vv info, -vvv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Refuse files whose stored hash does not match their content.
    #[arg(long, global = true)]
    verify_hash: bool,
    /// Decompressed size above which a profile is reported as too large.
    #[arg(long, global = true, default_value_t = codec::DEFAULT_SIZE_LIMIT)]
    size_limit: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect profile structure and sizes.
    Inspect {
        /// Profile file, or a directory of profile files.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// List every entry of a profile.
    Dump {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show the rewards stored in a String entry.
    Rewards {
        path: PathBuf,
        /// Id of the rewards entry.
        #[arg(long)]
        entry_id: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Set one rewards stat to the closest reachable bonus.
    SetReward {
        path: PathBuf,
        #[arg(long)]
        entry_id: u32,
        /// Stat name, e.g. `gun-damage`.
        #[arg(long)]
        stat: RewardStat,
        /// Bonus in percent.
        #[arg(long)]
        bonus: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Move a block of entries.
    Move {
        path: PathBuf,
        /// Indices to move.
        #[arg(long, required = true, value_delimiter = ',')]
        from: Vec<usize>,
        /// Insert position, counted before the move.
        #[arg(long)]
        to: usize,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Remove the entry at an index.
    Remove {
        path: PathBuf,
        #[arg(long)]
        index: usize,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show or set golden keys.
    GoldenKeys {
        path: PathBuf,
        #[arg(long)]
        entry_id: u32,
        /// Int32 entry counting spent keys, for the counter form.
        #[arg(long)]
        spent_id: Option<u32>,
        /// New key count. Omit to print the current count.
        #[arg(long)]
        set: Option<i32>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show or set the badass rank.
    BadassRank {
        path: PathBuf,
        #[arg(long)]
        entry_id: u32,
        /// Second entry that mirrors the point total.
        #[arg(long)]
        spent_id: Option<u32>,
        /// New rank. Omit to print the current rank.
        #[arg(long)]
        set: Option<i32>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Lock or unlock every customization.
    Customizations {
        path: PathBuf,
        #[arg(long)]
        entry_id: u32,
        #[arg(long, value_enum)]
        state: LockState,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Load and save a profile, normalizing its tail and refreshing the hash.
    Resave {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write to this file instead of replacing the input.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LockState {
    Locked,
    Unlocked,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet))?;
    let config = ProfileConfig {
        verify_hash: cli.verify_hash,
        size_limit: cli.size_limit,
        ..ProfileConfig::default()
    };

    match cli.command {
        Command::Inspect {
            path,
            glob,
            sort,
            limit,
            format,
        } => {
            if path.is_dir() {
                let entries = collect_profile_entries(&path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    inspect_one(&entry.path, &config, format)?;
                }
            } else {
                inspect_one(&path, &config, format)?;
            }
        }
        Command::Dump { path, format } => {
            let loaded = load(&path, &config)?;
            let game = guess_game(&path, &loaded.profile);
            let dump = ProfileDump::new(loaded.profile.entries(), game, loaded.warnings);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&dump).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print!("{}", format_dump_pretty(&dump)),
            }
            report_warnings(loaded.warnings);
        }
        Command::Rewards {
            path,
            entry_id,
            format,
        } => {
            let loaded = load(&path, &config)?;
            let points = edit::read_rewards(&loaded.profile, entry_id)?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&reward_views(&points))
                        .context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print!("{}", format_rewards(&points)),
            }
            report_warnings(loaded.warnings);
        }
        Command::SetReward {
            path,
            entry_id,
            stat,
            bonus,
            output,
        } => {
            edit_and_save(&path, &output, &config, |profile| {
                let points = edit::set_reward(profile, entry_id, stat, bonus)?;
                println!(
                    "{stat}: {} points, {:.2}% bonus",
                    points.points(stat),
                    points.bonus(stat)
                );
                Ok(())
            })?;
        }
        Command::Move {
            path,
            from,
            to,
            output,
        } => {
            edit_and_save(&path, &output, &config, |profile| {
                let range = profile.move_entries(&from, to)?;
                println!("moved {} entries to {}..{}", range.len(), range.start, range.end);
                Ok(())
            })?;
        }
        Command::Remove {
            path,
            index,
            output,
        } => {
            edit_and_save(&path, &output, &config, |profile| {
                let entry = profile.remove(index)?;
                println!("removed entry {} ({})", entry.id, entry.type_tag());
                Ok(())
            })?;
        }
        Command::GoldenKeys {
            path,
            entry_id,
            spent_id,
            set,
            output,
        } => match set {
            Some(keys) => edit_and_save(&path, &output, &config, |profile| {
                edit::set_golden_keys(profile, entry_id, spent_id, keys)
            })?,
            None => {
                let loaded = load(&path, &config)?;
                let keys = edit::read_golden_keys(&loaded.profile, entry_id, spent_id)?;
                println!("golden keys: {keys}");
                report_warnings(loaded.warnings);
            }
        },
        Command::BadassRank {
            path,
            entry_id,
            spent_id,
            set,
            output,
        } => match set {
            Some(rank) => edit_and_save(&path, &output, &config, |profile| {
                if !edit::set_badass_rank(profile, entry_id, spent_id, rank)? {
                    println!("badass rank already {rank}");
                }
                Ok(())
            })?,
            None => {
                let loaded = load(&path, &config)?;
                let rank = edit::read_badass_rank(&loaded.profile, entry_id)?;
                println!("badass rank: {rank}");
                report_warnings(loaded.warnings);
            }
        },
        Command::Customizations {
            path,
            entry_id,
            state,
            output,
        } => {
            let unlock = matches!(state, LockState::Unlocked);
            edit_and_save(&path, &output, &config, |profile| {
                edit::set_customizations(profile, entry_id, unlock)
            })?;
        }
        Command::Resave { path, output } => {
            edit_and_save(&path, &output, &config, |_| Ok(()))?;
        }
    }
    Ok(())
}

fn load(path: &Path, config: &ProfileConfig) -> Result<codec::LoadedProfile> {
    load_profile(path, config).with_context(|| format!("load profile {}", path.display()))
}

fn inspect_one(path: &Path, config: &ProfileConfig, format: OutputFormat) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read profile {}", path.display()))?;
    let report = inspect_profile(&bytes, path, config)
        .with_context(|| format!("inspect profile {}", path.display()))?;
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", format_inspect_report(&report)),
    }
    Ok(())
}

/// Loads `path`, applies `apply`, and saves to `--output` or back to `path`.
fn edit_and_save(
    path: &Path,
    output: &OutputArgs,
    config: &ProfileConfig,
    apply: impl FnOnce(&mut Profile) -> Result<()>,
) -> Result<()> {
    let loaded = load(path, config)?;
    let mut profile = loaded.profile;
    apply(&mut profile)?;

    let target = output.output.as_deref().unwrap_or(path);
    let report = profile
        .save(target, config)
        .with_context(|| format!("save profile {}", target.display()))?;
    println!(
        "saved {} ({} bytes compressed, {} decompressed)",
        target.display(),
        report.compressed_len,
        report.decompressed_len
    );
    if report.over_size_limit {
        eprintln!(
            "warning: payload is {} bytes, over the {} byte limit; the game may reject this profile",
            report.decompressed_len, config.size_limit
        );
    }
    report_warnings(loaded.warnings | report.warnings);
    Ok(())
}

fn report_warnings(warnings: Warnings) {
    if let Some(notice) = advisory_notice(warnings) {
        eprintln!("{notice}");
    }
}

struct ProfileEntry {
    path: PathBuf,
    size: u64,
}

fn collect_profile_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<ProfileEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(ProfileEntry { path, size });
    }
    if entries.is_empty() {
        bail!("no profile files found in {}", dir.display());
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<ProfileEntry>,
    sort: Option<InspectSort>,
) -> Vec<ProfileEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}
