//! Listing of blocks and transactions inside a chain directory.
//!
//! Layout: `<root>/b<N>/<transaction>/response.txt`.

use crate::utils::config::{BLOCK_PREFIX, RESPONSE_FILE_NAME};
use crate::utils::error::WalkError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// List the block directories under `root`
///
/// **Public** - first stage of the scan
///
/// # Arguments
/// * `root` - Chain directory
/// * `sorted` - Order blocks by numeric index instead of filesystem order
///
/// # Errors
/// * `WalkError::ReadDir` - `root` cannot be listed
pub fn list_blocks(root: &Path, sorted: bool) -> Result<Vec<String>, WalkError> {
    let mut blocks = Vec::new();

    for name in list_subdirectories(root)? {
        if block_index(&name).is_ok() {
            blocks.push(name);
        } else {
            warn!("Skipping {}: not a block directory", root.join(&name).display());
        }
    }

    if sorted {
        // every name passed block_index above
        blocks.sort_by_key(|name| block_index(name).unwrap_or(u64::MAX));
    }

    debug!("Found {} blocks under {}", blocks.len(), root.display());
    Ok(blocks)
}

/// List the transaction directories of a block
///
/// **Public** - second stage of the scan
///
/// # Errors
/// * `WalkError::ReadDir` - the block directory cannot be listed
pub fn list_transactions(root: &Path, block: &str, sorted: bool) -> Result<Vec<String>, WalkError> {
    let mut transactions = list_subdirectories(&root.join(block))?;

    if sorted {
        transactions.sort();
    }

    debug!("Block {}: {} transactions", block, transactions.len());
    Ok(transactions)
}

/// Path of the response file of a transaction
pub fn response_path(root: &Path, block: &str, transaction: &str) -> PathBuf {
    root.join(block).join(transaction).join(RESPONSE_FILE_NAME)
}

/// Numeric index of a block id: the id without its one-character prefix
///
/// **Public** - used for sorting and for the minimum block filter
pub fn block_index(block: &str) -> Result<u64, WalkError> {
    block
        .strip_prefix(BLOCK_PREFIX)
        .and_then(|index| index.parse::<u64>().ok())
        .ok_or_else(|| WalkError::InvalidBlockId(block.to_string()))
}

/// Names of the subdirectories of `dir`; plain files are skipped
///
/// **Private** - shared by both listing stages
fn list_subdirectories(dir: &Path) -> Result<Vec<String>, WalkError> {
    let read_dir_error = |source| WalkError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;

        if !file_type.is_dir() {
            debug!("Ignoring non-directory entry {}", entry.path().display());
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping entry with non UTF-8 name: {:?}", raw),
        }
    }

    Ok(names)
}
