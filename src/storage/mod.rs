use anyhow::*;
use directories_next::BaseDirs;
use std::fs;
use std::path::PathBuf;

#[cfg(test)]
pub mod mock;

pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, high_score: u32) -> Result<()>;
}

pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn in_user_data_dir() -> Result<FileHighScoreStore> {
        let mut path = BaseDirs::new()
            .context("could not locate system directories")?
            .data_dir()
            .to_path_buf();
        path.push("ballpark");
        path.push("high_score");
        Ok(FileHighScoreStore { path })
    }

    pub fn at_path(path: PathBuf) -> FileHighScoreStore {
        FileHighScoreStore { path }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(&self.path)?;
        let high_score = content
            .trim()
            .parse()
            .context("high score file is not an integer")?;
        Ok(high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, high_score.to_string())?;
        Ok(())
    }
}
