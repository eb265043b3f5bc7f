//! Patterns command implementation

use crate::deployer::FilePatterns;
use crate::error::Result;

/// Print the default library file patterns, one per line
pub fn run() -> Result<()> {
    println!("Default library patterns (matched anywhere in the file name):");
    for pattern in FilePatterns::default().as_strs() {
        println!("  {pattern}");
    }
    println!();
    println!("Files in binary directories are always deployed.");

    Ok(())
}
