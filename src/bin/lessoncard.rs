use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lessoncard::{
    Assessment, Locale, RenderOptions, ReportConfig, ReportGenerator, Rgb8, SessionContext,
    assessment_or_default, parse_analysis,
};

#[derive(Parser, Debug)]
#[command(name = "lessoncard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an assessment JSON file as a report card PNG.
    Render(RenderArgs),
    /// Strictly parse raw model output and print the normalized assessment.
    Parse(ParseArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Assessment JSON (English or Spanish keys).
    #[arg(long)]
    assessment: PathBuf,

    #[arg(long, default_value = "")]
    student: String,

    #[arg(long, default_value = "")]
    teacher: String,

    /// Session index (1-based).
    #[arg(long, default_value_t = 1)]
    session: u32,

    /// Total number of sessions.
    #[arg(long, default_value_t = 8)]
    total: u32,

    /// Session date as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    photo: Option<PathBuf>,

    #[arg(long)]
    logo: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the reports directory.
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Fixed theme color (#RRGGBB) instead of extracting one from the logo.
    #[arg(long)]
    theme: Option<Rgb8>,

    #[arg(long)]
    locale: Option<Locale>,

    /// Print which font files were resolved.
    #[arg(long)]
    dump_fonts: bool,

    /// Print the layout summary as JSON after writing.
    #[arg(long)]
    summary: bool,
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Raw model output.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the default assessment instead of failing on malformed input.
    #[arg(long)]
    fallback: bool,

    #[arg(long, default_value = "es")]
    locale: Locale,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Parse(args) => cmd_parse(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReportConfig> {
    let cfg = match path {
        Some(p) => ReportConfig::from_json_file(p)?,
        None => ReportConfig::default(),
    };
    Ok(cfg.with_env_overrides()?)
}

fn read_assessment(path: &Path) -> anyhow::Result<Assessment> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read assessment '{}'", path.display()))?;
    let assessment: Assessment =
        serde_json::from_str(&text).with_context(|| "parse assessment JSON")?;
    Ok(assessment)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dir) = args.reports_dir {
        config.reports_dir = dir;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    if args.dump_fonts {
        let fonts = lessoncard::FontSet::load(&config.fonts);
        let (regular, bold) = fonts.sources();
        eprintln!("regular: {regular}");
        eprintln!("bold: {bold}");
    }

    let assessment = read_assessment(&args.assessment)?;
    let context = SessionContext {
        student_name: args.student,
        teacher_name: args.teacher,
        session_number: args.session,
        total_sessions: args.total,
        date: args.date,
        photo_path: args.photo,
        logo_path: args.logo,
    };
    let options = RenderOptions {
        theme_override: args.theme,
        today: None,
    };

    let generator = ReportGenerator::new(config);
    let report = generator.render(&assessment, &context, &options)?;
    let path = lessoncard::render::write_report(&report.image, &generator.config().reports_dir)?;

    if args.summary {
        eprintln!("{}", serde_json::to_string_pretty(&report.summary)?);
    }
    println!("{}", path.display());
    Ok(())
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read model output '{}'", args.in_path.display()))?;

    let parsed = parse_analysis(&raw);
    let assessment = if args.fallback {
        assessment_or_default(parsed, args.locale).0
    } else {
        parsed?
    };

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
