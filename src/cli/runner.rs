use tracing::{info, warn};

use favpack::core::color::TRANSPARENT;
use favpack::{ColorError, GenerateParams, generate_favicons, try_parse_hex_rgba};

use super::args::CliArgs;

/// Build library params; a malformed `--bg` falls back to transparent and is
/// handed back so the caller can report it.
fn params_from_args(args: &CliArgs) -> (GenerateParams, Option<ColorError>) {
    let (background, bg_error) = match try_parse_hex_rgba(&args.bg) {
        Ok(color) => (color, None),
        Err(e) => (TRANSPARENT, Some(e)),
    };

    let params = GenerateParams {
        output_dir: args.out.clone(),
        mode: args.mode,
        background: background.0,
        brand: args.brand.clone(),
    };
    (params, bg_error)
}

fn bg_fallback_message(e: &ColorError) -> String {
    format!("Ignoring --bg: {}; using transparent background", e)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let (params, bg_error) = params_from_args(&args);
    if let Some(e) = bg_error {
        // Without --log no subscriber is installed, so go straight to stderr
        if args.log {
            warn!("{}", bg_fallback_message(&e));
        } else {
            eprintln!("warning: {}", bg_fallback_message(&e));
        }
    }
    info!("Generating favicons from: {:?}", args.input);

    let report = generate_favicons(&args.input, &params)?;
    let resolved = report
        .output_dir
        .canonicalize()
        .unwrap_or_else(|_| report.output_dir.clone());

    info!("Successfully wrote {} files", report.files.len());
    println!("Done! Files written to: {}", resolved.display());
    println!("\nAdd these tags to <head> of your site (also saved as html_snippet.txt):\n");
    println!("{}", report.html_snippet);

    Ok(())
}
