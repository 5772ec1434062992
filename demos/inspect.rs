use std::env;

// This example demonstrates how to use the `inspect_file` function from the
// `byteprobe` crate to examine the byte at a given offset in a file, along
// with the line of text that contains it.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <file> <offset>", args[0]);
        std::process::exit(1);
    }

    let file_path = &args[1];
    let offset: u64 = args[2].parse()?;

    let report = byteprobe::inspect_file(file_path, offset, /*window=*/ 10)?;
    println!(
        "byte at {}: 0x{:02x} '{}'",
        report.target_offset, report.target_byte.value, report.target_byte.rendered
    );
    println!("line: {}", report.containing_line);
    println!("column: {}", report.column_in_line);

    Ok(())
}
