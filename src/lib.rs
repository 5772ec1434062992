pub mod buffer;
pub mod inspect;
pub mod render;
pub mod report;

pub use buffer::ByteBuffer;
pub use inspect::{InspectError, hex_window, inspect, inspect_file};
pub use report::{HexDump, Report, TargetByte, WindowEntry};
