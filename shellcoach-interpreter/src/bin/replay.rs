//! Transcript replayer
//!
//! Feeds a recorded terminal transcript through the interpreter line by
//! line and prints each emitted event as a JSON line. Useful for tuning
//! detection patterns against captured sessions:
//!
//! ```text
//! shellcoach-replay session.log
//! cat session.log | shellcoach-replay
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::info;

use shellcoach_interpreter::OutputInterpreter;
use shellcoach_utils::{init_logging_with_config, CoachError, LogConfig, Result};

fn main() -> Result<()> {
    init_logging_with_config(LogConfig::tool())?;

    let mut interpreter = OutputInterpreter::new();
    let mut emitted = 0usize;

    match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let file = File::open(&path).map_err(|e| CoachError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path.display(), "replaying transcript");
            replay(BufReader::new(file), &mut interpreter, &mut emitted)?;
        }
        None => {
            info!("replaying transcript from stdin");
            let stdin = io::stdin();
            replay(stdin.lock(), &mut interpreter, &mut emitted)?;
        }
    }

    info!(events = emitted, "replay finished");
    Ok(())
}

fn replay<R: BufRead>(
    reader: R,
    interpreter: &mut OutputInterpreter,
    emitted: &mut usize,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        // Each transcript line is treated as one output chunk; the trailing
        // newline is part of the chunk so prompt shapes anchor correctly.
        let mut chunk = line;
        chunk.push('\n');

        for event in interpreter.on_output_chunk(&chunk) {
            let json = serde_json::to_string(&event)
                .map_err(|e| CoachError::internal(format!("Failed to encode event: {}", e)))?;
            println!("{}", json);
            *emitted += 1;
        }
    }
    Ok(())
}
