use byteprobe::{ByteBuffer, InspectError, Report, hex_window, inspect};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect the bytes around an offset in a file")]
struct Args {
    /// File to inspect
    path: PathBuf,

    /// Target byte offset (zero-based)
    offset: u64,

    /// Context bytes to show before and after the offset
    #[arg(long, default_value_t = 20)]
    window: u64,

    /// Marker appended to the target offset's row
    #[arg(long, default_value = "<<<< ERROR HERE")]
    marker: String,

    /// Also print a hex dump of the window range
    #[arg(long, action = ArgAction::SetTrue)]
    hex: bool,

    /// Emit JSON instead of human-readable text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("byteprobe: {err:#}");
            match err.downcast_ref::<InspectError>() {
                Some(InspectError::OffsetOutOfRange { .. }) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let buf = ByteBuffer::from_file(&args.path).map_err(|source| InspectError::FileAccess {
        path: args.path.clone(),
        source,
    })?;
    let report = inspect(&buf, args.offset, args.window)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, &args.marker);

    if args.hex {
        let (start, end) = buf.window_bounds(args.offset, args.window);
        let dump = hex_window(&buf, start, end - start);
        print!("\n{}", dump.hex);
    }

    Ok(())
}

fn print_report(report: &Report, marker: &str) {
    println!("File length: {}", report.total_length);
    for entry in &report.window_entries {
        let suffix = if entry.target {
            format!("  {marker}")
        } else {
            String::new()
        };
        println!(
            "Position {}: 0x{:02x} ({}) '{}'{}",
            entry.offset, entry.value, entry.value, entry.rendered, suffix
        );
    }
    println!();
    println!("{}", report.containing_line);
    println!("Offset within line: {}", report.column_in_line);
}
