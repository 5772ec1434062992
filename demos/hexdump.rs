use byteprobe::{ByteBuffer, hex_window};
use std::env;

// Hex-dump a range of bytes from a file. The range is clamped to EOF, so a
// length past the end of the file just produces a shorter dump.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <file> <offset> <length>", args[0]);
        std::process::exit(1);
    }

    let offset: u64 = args[2].parse()?;
    let length: u64 = args[3].parse()?;

    let buf = ByteBuffer::from_file(&args[1])?;
    let dump = hex_window(&buf, offset, length);
    print!("{}", dump.hex);

    Ok(())
}
