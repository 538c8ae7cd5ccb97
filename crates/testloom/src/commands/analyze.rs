//! Analyze command - print structural analysis as JSON.

use clap::Args;

use testloom_analysis::{analyze_source, FileAnalysisResult};

#[derive(Args, Default)]
pub struct AnalyzeArgs {
    /// Glob pattern(s) for source files (default: walk the current directory)
    pub patterns: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: AnalyzeArgs) {
    let files = super::collect_files(&args.patterns);
    if files.is_empty() {
        eprintln!("\x1b[33mWarning:\x1b[0m no source files matched");
        return;
    }

    let mut results: Vec<FileAnalysisResult> = Vec::with_capacity(files.len());
    for path in &files {
        match std::fs::read_to_string(path) {
            Ok(source) => results.push(analyze_source(&source, &path.to_string_lossy())),
            Err(e) => {
                eprintln!("\x1b[31mError:\x1b[0m cannot read {}: {}", path.display(), e);
            }
        }
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&results)
    } else {
        serde_json::to_string(&results)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("\x1b[31mError:\x1b[0m failed to serialize analysis: {}", e),
    }
}
