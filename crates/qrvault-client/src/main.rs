//! Command-line client for the vault service.
//!
//! ```bash
//! qrvault list --search wifi --sort oldest
//! qrvault create https://example.com --label Portfolio --foreground-color '#112233'
//! qrvault scan ./photo.png --note "conference badge"
//! qrvault render https://example.com --out code.svg
//! ```

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qrvault_bridge::render::{MAX_MODULE_PX, QrStyle, render_gray, render_svg};
use qrvault_client::api::HttpVaultApi;
use qrvault_client::draft::{CreateDraft, ScanDraft};
use qrvault_client::vault::VaultState;
use qrvault_domain::action::{ActionError, ActionState};
use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;
use qrvault_domain::sort::VaultSort;

#[derive(Parser)]
#[command(about = "Store, scan and render QR codes in a vault")]
struct Args {
    /// Base URL of the vault service
    #[arg(long, env = "QRVAULT_URL", default_value = "http://localhost:3120")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List generated and scanned codes
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// newest, oldest, az or za
        #[arg(long, default_value = "newest", value_parser = parse_sort)]
        sort: VaultSort,
    },
    /// Create a generated code
    Create {
        data: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, default_value = "#000000")]
        foreground_color: String,
        #[arg(long, default_value = "#FFFFFF")]
        background_color: String,
    },
    /// Decode an image and save its payload to the scan history
    Scan {
        image: PathBuf,
        #[arg(long)]
        note: Option<String>,
        /// Decode on the server instead of locally
        #[arg(long)]
        remote: bool,
    },
    /// Replace the label of a generated code
    Label { id: CodeId, label: String },
    /// Replace the note of a scanned code
    Note { id: CodeId, note: String },
    /// Render a code to an SVG file, or a black-on-white PNG when the output
    /// ends in `.png`
    Render {
        data: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "#000000")]
        foreground_color: String,
        #[arg(long, default_value = "#FFFFFF")]
        background_color: String,
        /// Pixels per module for PNG output
        #[arg(
            long,
            default_value_t = 8,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_MODULE_PX)),
        )]
        scale: u32,
    },
}

fn parse_sort(s: &str) -> Result<VaultSort, String> {
    VaultSort::from_kebab_case(s).ok_or_else(|| format!("unknown sort order: {s}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api = HttpVaultApi::new(&args.base_url);

    let state = match args.command {
        Command::List { search, sort } => {
            let mut vault = VaultState::new(api);
            vault.load().await;
            if let Some(error) = vault.error() {
                anyhow::bail!("{error}");
            }
            vault.set_search(search);
            vault.set_sort(sort);
            print_generated(&vault.visible_generated());
            print_scanned(&vault.visible_scanned());
            return Ok(());
        }
        Command::Create {
            data,
            label,
            foreground_color,
            background_color,
        } => {
            let mut draft = CreateDraft::default();
            draft.set_data(data);
            draft.set_label(label.unwrap_or_default());
            draft.set_foreground_color(foreground_color);
            draft.set_background_color(background_color);
            draft.submit(&mut VaultState::new(api)).await?
        }
        Command::Scan {
            image,
            note,
            remote,
        } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;
            let mut draft = ScanDraft::default();
            if remote {
                draft.capture(api.decode(bytes).await?);
            } else {
                draft.capture_image(&bytes)?;
            }
            if let Some(data) = draft.data() {
                println!("decoded: {data}");
            }
            draft.set_note(note.unwrap_or_default());
            draft.submit(&mut VaultState::new(api)).await?
        }
        Command::Label { id, label } => VaultState::new(api).save_label(id, &label).await?,
        Command::Note { id, note } => VaultState::new(api).save_note(id, &note).await?,
        Command::Render {
            data,
            out,
            foreground_color,
            background_color,
            scale,
        } => {
            let is_png = out.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            let bytes = if is_png {
                render_gray(&data, scale)?.to_png()?
            } else {
                let style = QrStyle::parse(&foreground_color, &background_color)?;
                render_svg(&data, &style)?.into_bytes()
            };
            std::fs::write(&out, bytes)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("wrote {}", out.display());
            return Ok(());
        }
    };

    report(&state)
}

fn report(state: &ActionState) -> Result<()> {
    if state.success {
        println!("{}", state.message);
        return Ok(());
    }
    if let Some(ActionError::Fields(fields)) = &state.error {
        for (field, messages) in fields {
            for message in messages {
                eprintln!("  {field}: {message}");
            }
        }
    }
    anyhow::bail!("{}", state.summary())
}

fn print_generated(codes: &[GeneratedCode]) {
    println!("Generated ({})", codes.len());
    for code in codes {
        println!(
            "  {}  {}  {}  [{} on {}]",
            code.id,
            code.created_at.format("%Y-%m-%d %H:%M"),
            code.label.as_deref().unwrap_or("-"),
            code.foreground_color,
            code.background_color,
        );
        println!("      {}", code.data);
    }
}

fn print_scanned(codes: &[ScannedCode]) {
    println!("Scanned ({})", codes.len());
    for code in codes {
        println!(
            "  {}  {}  {}",
            code.id,
            code.scanned_at.format("%Y-%m-%d %H:%M"),
            code.note.as_deref().unwrap_or("-"),
        );
        println!("      {}", code.data);
    }
}
