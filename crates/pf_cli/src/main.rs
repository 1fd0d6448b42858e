// crates/pf_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, logging, CLI parsing, the
// validate-only short-circuit and the full run path
// (load → project → views.json → optional dashboard rendering).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    /// No usable document (invalid JSON, non-object root); rendered as "No data".
    pub const UPSTREAM: i32 = 3;
    pub const IO: i32 = 4;
    pub const RENDER: i32 = 5;
}

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{parse_and_validate as parse_cli, Args, InputSource};

use pf_io::canonical_json;
use pf_io::ProfileDocument;
use pf_pipeline::{load, project_document, PipelineError, ProfileViews};
#[cfg(any(feature = "report-json", feature = "report-html"))]
use pf_report::ReportError;
use pf_report::{build_model, DashboardModel};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Upstream(String),
    Io(String),
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Upstream(m) => write!(f, "no data: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("profiler: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    init_tracing(args.verbose);

    let outcome = if args.validate_only {
        validate_only(&args)
    } else {
        run_once(&args)
    };

    let rc = match outcome {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("profiler: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// stderr logging; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Upstream(_) => UPSTREAM,
        MainError::Io(_) => IO,
        MainError::Render(_) => RENDER,
    }
}

fn map_pipeline_err(e: PipelineError) -> MainError {
    match e {
        PipelineError::Io(m) => MainError::Io(m),
        PipelineError::Upstream(m) => MainError::Upstream(m),
        PipelineError::Build(m) => MainError::Validation(m),
    }
}

#[cfg(any(feature = "report-json", feature = "report-html"))]
fn map_report_err(e: ReportError) -> MainError {
    MainError::Render(e.to_string())
}

fn load_input(args: &Args) -> Result<ProfileDocument, PipelineError> {
    match args.source() {
        InputSource::Stdin => load::load_from_reader(io::stdin().lock()),
        InputSource::File(p) => load::load_from_path(&p),
    }
}

/// Load + convert only; no artifacts.
fn validate_only(args: &Args) -> Result<(), MainError> {
    let doc = load_input(args).map_err(map_pipeline_err)?;
    if !args.quiet {
        eprintln!("validate-only: document OK ({})", doc.id);
    }
    Ok(())
}

fn run_once(args: &Args) -> Result<(), MainError> {
    // An unusable document is still a run: the dashboard shows "No data".
    let (doc, upstream) = match load_input(args) {
        Ok(d) => (Some(d), None),
        Err(PipelineError::Upstream(m)) => {
            tracing::warn!(reason = %m, "no usable document");
            (None, Some(m))
        }
        Err(e) => return Err(map_pipeline_err(e)),
    };

    let views = project_document(doc.as_ref());

    fs::create_dir_all(&args.out)
        .map_err(|e| MainError::Io(format!("mkdir {}: {e}", args.out.display())))?;

    if let Some(v) = &views {
        write_views(&args.out, v)?;
    }

    let model = build_model(views.as_ref());
    maybe_render_reports(args, &model)?;

    if let Some(m) = upstream {
        return Err(MainError::Upstream(m));
    }
    if !args.quiet {
        if let Some(v) = &views {
            eprintln!(
                "run: {} risk={} actors={} clusters={} out={}",
                v.document_id,
                v.threat_gauge.risk,
                v.actors.len(),
                v.radial_layout.nodes.len(),
                args.out.display()
            );
        }
    }
    Ok(())
}

fn write_views(out_dir: &Path, views: &ProfileViews) -> Result<(), MainError> {
    let path = out_dir.join("views.json");
    canonical_json::write_canonical_file(views, &path)
        .map_err(|e| MainError::Io(format!("write views.json: {e}")))?;
    tracing::info!(path = %path.display(), "views written");
    Ok(())
}

fn maybe_render_reports(args: &Args, model: &DashboardModel) -> Result<(), MainError> {
    for fmt in &args.render {
        match fmt.as_str() {
            "json" => render_json_report(model, &args.out)?,
            "html" => render_html_report(model, &args.out)?,
            other => return Err(MainError::Render(format!("unknown renderer: {other}"))),
        }
    }
    Ok(())
}

// Always accept the concrete model type; gate body by feature.
fn render_json_report(model: &DashboardModel, out_dir: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-json")]
    {
        let s = pf_report::render_json(model).map_err(map_report_err)?;
        write_text(&out_dir.join("dashboard.json"), &s)
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = (model, out_dir);
        Err(MainError::Render(
            "json renderer not enabled (build with feature `report-json`)".into(),
        ))
    }
}

fn render_html_report(model: &DashboardModel, out_dir: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        let s = pf_report::render_html(model).map_err(map_report_err)?;
        write_text(&out_dir.join("dashboard.html"), &s)
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (model, out_dir);
        Err(MainError::Render(
            "html renderer not enabled (build with feature `report-html`)".into(),
        ))
    }
}

#[cfg(any(feature = "report-json", feature = "report-html"))]
fn write_text(path: &Path, s: &str) -> Result<(), MainError> {
    fs::write(path, s).map_err(|e| MainError::Io(format!("write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "dashboard written");
    Ok(())
}
