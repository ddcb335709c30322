//! linkqr command-line entrypoint

use clap::Parser;
use linkqr::{LinkqrConfig, QrEncoder, QrRequest, Result, logging, prompt};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "linkqr",
    version,
    about = "Generate a QR-code image for a download URL"
)]
struct Cli {
    /// URL to encode. Prompted for on stdin when omitted.
    url: Option<String>,

    /// Image file to write; format follows the extension (default apk_qr_code.png)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Optional configuration file (toml/yaml). Defaults to linkqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pixels per QR module
    #[arg(long, value_name = "PX")]
    box_size: Option<u32>,

    /// Quiet-zone width in modules
    #[arg(long, value_name = "MODULES")]
    border: Option<u32>,

    /// Color of dark modules (name or #rrggbb)
    #[arg(long, value_name = "COLOR")]
    fill_color: Option<String>,

    /// Background color (name or #rrggbb)
    #[arg(long, value_name = "COLOR")]
    back_color: Option<String>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = LinkqrConfig::load(cli.config.as_deref())?;

    if let Some(output) = cli.output {
        config.qr.output = output;
    }
    if let Some(box_size) = cli.box_size {
        config.qr.box_size = box_size;
    }
    if let Some(border) = cli.border {
        config.qr.border = border;
    }
    if let Some(fill) = cli.fill_color {
        config.qr.fill_color = fill;
    }
    if let Some(back) = cli.back_color {
        config.qr.back_color = back;
    }

    let _log_guard = logging::init(&config.logging)?;

    let render = config.qr.render_settings()?;

    let url = match cli.url {
        Some(url) => url,
        None => prompt::read_url(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    tracing::debug!(?render, output = %config.qr.output.display(), "Generating QR code");

    let encoder = QrEncoder::with_render_settings(render);
    QrRequest::new(url)
        .with_output(config.qr.output)
        .run(&encoder, &mut io::stdout().lock())?;

    Ok(())
}
