use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use spritekit::api;
use spritekit::models::edit::{DEFAULT_COLOR, DEFAULT_FEATHER, DEFAULT_SCALE};
use spritekit::models::{Edit, ServerConfig};
use spritekit::server;
use spritekit::services::Editor;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "spritekit")]
#[command(about = "Spritekit - background removal, padding and scaling for spritesheets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Make pixels matching a key color transparent
    RemoveBackground {
        /// Input image (PNG, JPEG, GIF, BMP or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Key color as #RRGGBB
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: String,

        /// Per-channel tolerance
        #[arg(short, long, default_value = DEFAULT_FEATHER)]
        feather: String,
    },
    /// Extend the canvas by replicating edge pixels
    SetPadding {
        /// Input image (PNG, JPEG, GIF, BMP or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// JSON object, e.g. '{"left":1,"right":1,"up":0,"down":0}'
        #[arg(short, long)]
        padding: String,
    },
    /// Scale the image with bilinear interpolation
    Resize {
        /// Input image (PNG, JPEG, GIF, BMP or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Scale factor (e.g. 0.5 or 2)
        #[arg(short, long, default_value = DEFAULT_SCALE)]
        scale: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spritekit API",
        description = "Spritesheet background removal, padding and scaling",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_remove_background,
        api::handle_set_padding,
        api::handle_resize,
    ),
    components(schemas(
        api::ImageResponse,
        api::EditErrorResponse,
        api::RemoveBackgroundForm,
        api::SetPaddingForm,
        api::ResizeForm,
    )),
    tags(
        (name = "Edit", description = "Single-image edits returning base64 PNG")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::RemoveBackground {
            input,
            output,
            color,
            feather,
        }) => run_edit_command(&input, &output, Edit::remove_background(&color, &feather)),
        Some(Commands::SetPadding {
            input,
            output,
            padding,
        }) => run_edit_command(&input, &output, Edit::set_padding(&padding)),
        Some(Commands::Resize {
            input,
            output,
            scale,
        }) => run_edit_command(&input, &output, Edit::resize(&scale)),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Apply one edit to a file on disk (no server needed)
fn run_edit_command(
    input: &Path,
    output: &Path,
    edit: Result<Edit, spritekit::error::EditError>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spritekit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let edit = edit?;
    let config = ServerConfig::load(config_file().as_deref());
    let editor = Editor::new(config.max_output_pixels);

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let png = editor.apply_png(&bytes, &edit)?;

    std::fs::write(output, &png)?;
    println!(
        "{}: wrote {} ({} bytes)",
        edit.name(),
        output.display(),
        png.len()
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Spritekit v{VERSION}");
    println!("Spritesheet background removal, padding and scaling\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr
            .as_deref()
            .unwrap_or(&format!("{DEFAULT_BIND_ADDR} (default)"))
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = match config_file.as_deref().map(Path::new) {
        Some(path) if path.exists() => match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|s| ServerConfig::from_yaml_str(&s).map_err(anyhow::Error::from))
        {
            Ok(config) => config,
            Err(e) => {
                println!("\n  (config file invalid: {e}; showing defaults)");
                ServerConfig::default()
            }
        },
        _ => ServerConfig::default(),
    };

    println!("\nConfiguration:");
    println!("  allowed_origins   = {}", config.allowed_origins.join(", "));
    println!("  max_upload_bytes  = {}", config.max_upload_bytes);
    println!("  max_output_pixels = {}", config.max_output_pixels);

    println!("\nCommands:");
    println!("  spritekit serve              Start the HTTP server");
    println!("  spritekit remove-background  Key out a background color");
    println!("  spritekit set-padding        Pad by edge replication");
    println!("  spritekit resize             Scale with bilinear interpolation");
    println!("\nRun 'spritekit --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spritekit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let config = ServerConfig::load(config_file().as_deref());

    tracing::info!(
        origins = ?config.allowed_origins,
        max_upload_bytes = config.max_upload_bytes,
        max_output_pixels = config.max_output_pixels,
        "Configuration ready"
    );

    let state = server::create_app_state(config);

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Spritekit server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn config_file() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}
