//! Generate command - write test scaffolds for matching source files.

use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use testloom_analysis::{analyze_source, Framework};
use testloom_scaffold::{
    render_test_file, write_scaffold, ScaffoldError, ScaffoldOptions, Suffix,
};

use crate::config::load_config;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuffixArg {
    Test,
    Spec,
}

impl From<SuffixArg> for Suffix {
    fn from(value: SuffixArg) -> Self {
        match value {
            SuffixArg::Test => Suffix::Test,
            SuffixArg::Spec => Suffix::Spec,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrameworkArg {
    React,
    ReactNative,
}

impl From<FrameworkArg> for Framework {
    fn from(value: FrameworkArg) -> Self {
        match value {
            FrameworkArg::React => Framework::React,
            FrameworkArg::ReactNative => Framework::ReactNative,
        }
    }
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Glob pattern(s) for source files (default: walk the current directory)
    pub patterns: Vec<String>,

    /// Directory to write test files into (default: next to each source file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Test file suffix
    #[arg(long, value_enum)]
    pub suffix: Option<SuffixArg>,

    /// Force the target framework instead of inferring it from imports
    #[arg(long, value_enum)]
    pub framework: Option<FrameworkArg>,

    /// Overwrite existing test files
    #[arg(long)]
    pub force: bool,

    /// Print scaffolds to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Number of threads (default: number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

struct GenerateStats {
    generated: AtomicUsize,
    skipped: AtomicUsize,
    failed: AtomicUsize,
}

pub fn run(args: GenerateArgs) {
    let started = Instant::now();
    let config = load_config(None);

    let options = ScaffoldOptions {
        suffix: args
            .suffix
            .map(Suffix::from)
            .or(config.suffix)
            .unwrap_or_default(),
        framework: args.framework.map(Framework::from).or(config.framework),
    };
    let out_dir = args.output.or(config.output_dir);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    let files = super::collect_files(&args.patterns);
    if files.is_empty() {
        eprintln!("\x1b[33mWarning:\x1b[0m no source files matched");
        return;
    }

    let stats = GenerateStats {
        generated: AtomicUsize::new(0),
        skipped: AtomicUsize::new(0),
        failed: AtomicUsize::new(0),
    };

    files.par_iter().for_each(|path| {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("\x1b[31mError:\x1b[0m cannot read {}: {}", path.display(), e);
                stats.failed.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        let result = analyze_source(&source, &path.to_string_lossy());

        if args.dry_run {
            println!("// ---- {} ----", path.display());
            print!("{}", render_test_file(&result, &options));
            stats.generated.fetch_add(1, Ordering::Relaxed);
            return;
        }

        match write_scaffold(&result, &options, out_dir.as_deref(), args.force) {
            Ok(written) => {
                println!("\x1b[32mGenerated\x1b[0m {}", written.display());
                stats.generated.fetch_add(1, Ordering::Relaxed);
            }
            Err(ScaffoldError::NothingToScaffold(_)) => {
                stats.skipped.fetch_add(1, Ordering::Relaxed);
            }
            Err(ScaffoldError::AlreadyExists(target)) => {
                eprintln!(
                    "\x1b[33mSkipped\x1b[0m {} (already exists)",
                    target.display()
                );
                stats.skipped.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                eprintln!("\x1b[31mError:\x1b[0m {}: {}", path.display(), e);
                stats.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    let generated = stats.generated.load(Ordering::Relaxed);
    let skipped = stats.skipped.load(Ordering::Relaxed);
    let failed = stats.failed.load(Ordering::Relaxed);
    println!(
        "{} scaffold(s) generated, {} skipped, {} failed in {:.2?}",
        generated,
        skipped,
        failed,
        started.elapsed()
    );
}
