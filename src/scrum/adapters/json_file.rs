//! JSON file board store.
//!
//! Each board lives in `<encoded job number>.board.json` inside one
//! directory. Job numbers are encoded byte-wise: ASCII letters, digits and
//! `-` are kept, every other byte becomes `_XX` (upper-case hex), so
//! `RRC/2025/001` is stored as `RRC_2F2025_2F001.board.json`. Saves write a
//! temporary file and rename it over the board file.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::scrum::{
    domain::{JobNumber, ScrumBoard},
    ports::{BoardStoreError, BoardStoreResult, ScrumBoardStore},
};

const BOARD_SUFFIX: &str = ".board.json";
const TEMP_SUFFIX: &str = ".tmp";

/// Board store persisting one JSON document per project.
#[derive(Debug, Clone)]
pub struct JsonFileBoardStore {
    dir: Arc<Dir>,
}

impl JsonFileBoardStore {
    /// Wraps an already opened directory capability.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Opens the directory at `path` using ambient authority.
    ///
    /// # Errors
    ///
    /// Returns the I/O error when the directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::new(dir))
    }

    async fn run_blocking<T, F>(&self, operation: F) -> BoardStoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> BoardStoreResult<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(BoardStoreError::persistence)?
    }
}

/// File name a board is stored under.
#[must_use]
pub fn board_file_name(job_no: &JobNumber) -> String {
    let mut name = String::with_capacity(job_no.as_str().len() + BOARD_SUFFIX.len());
    for byte in job_no.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(char::from(byte));
        } else {
            name.push_str(&format!("_{byte:02X}"));
        }
    }
    name.push_str(BOARD_SUFFIX);
    name
}

fn read_board(dir: &Dir, file_name: &str) -> BoardStoreResult<Option<ScrumBoard>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => serde_json::from_str(&contents)
            .map(Some)
            .map_err(BoardStoreError::persistence),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(BoardStoreError::persistence(err)),
    }
}

fn write_board(dir: &Dir, file_name: &str, contents: &str) -> BoardStoreResult<()> {
    let temp_name = format!("{file_name}{TEMP_SUFFIX}");
    dir.write(&temp_name, contents)
        .map_err(BoardStoreError::persistence)?;
    dir.rename(&temp_name, dir, file_name)
        .map_err(BoardStoreError::persistence)
}

fn read_all_boards(dir: &Dir) -> BoardStoreResult<Vec<ScrumBoard>> {
    let mut boards = Vec::new();
    for entry_result in dir.entries().map_err(BoardStoreError::persistence)? {
        let entry = entry_result.map_err(BoardStoreError::persistence)?;
        let file_name = entry.file_name().map_err(BoardStoreError::persistence)?;
        if !file_name.ends_with(BOARD_SUFFIX) {
            continue;
        }
        if let Some(board) = read_board(dir, &file_name)? {
            boards.push(board);
        }
    }
    boards.sort_by(|left, right| left.job_no().cmp(right.job_no()));
    Ok(boards)
}

#[async_trait]
impl ScrumBoardStore for JsonFileBoardStore {
    async fn load_board(&self, job_no: &JobNumber) -> BoardStoreResult<Option<ScrumBoard>> {
        let file_name = board_file_name(job_no);
        self.run_blocking(move |dir| read_board(dir, &file_name))
            .await
    }

    async fn save_board(&self, board: &ScrumBoard) -> BoardStoreResult<()> {
        let file_name = board_file_name(board.job_no());
        let contents =
            serde_json::to_string_pretty(board).map_err(BoardStoreError::persistence)?;
        self.run_blocking(move |dir| write_board(dir, &file_name, &contents))
            .await?;
        tracing::debug!(job_no = %board.job_no(), tasks = board.len(), "saved board");
        Ok(())
    }

    async fn list_boards(&self) -> BoardStoreResult<Vec<ScrumBoard>> {
        self.run_blocking(read_all_boards).await
    }
}
