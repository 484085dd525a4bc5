//! 文件重命名
//! 只转换路径最后一段，目录部分、分隔符保持不变；目标已存在时拒绝执行，绝不覆盖
//! 所有情况都以结构化结果返回（成功标志 + 消息），不向调用方抛错

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RenameConfig;
use crate::converter::convert;

/// 单个文件/目录的重命名结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameResult {
    pub is_success: bool,
    pub message: String,
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
}

impl RenameResult {
    fn success(source: &Path, destination: PathBuf, message: String) -> Self {
        Self {
            is_success: true,
            message,
            source: source.to_path_buf(),
            destination: Some(destination),
        }
    }

    fn failure(source: &Path, destination: Option<PathBuf>, message: String) -> Self {
        warn!("{}", message);
        Self {
            is_success: false,
            message,
            source: source.to_path_buf(),
            destination,
        }
    }
}

/// 目录及其内容的重命名结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderRenameResult {
    pub is_success: bool,
    pub message: String,
    /// 成功重命名（或 dry-run 下将要重命名）的条目数
    pub renamed: usize,
    /// 转换后名称不变、无需处理的条目数
    pub unchanged: usize,
    pub failed: usize,
    pub entries: Vec<RenameResult>,
}

impl FolderRenameResult {
    fn failure(message: String) -> Self {
        warn!("{}", message);
        Self {
            is_success: false,
            message,
            ..Default::default()
        }
    }

    fn record(&mut self, result: RenameResult) {
        if result.is_success {
            self.renamed += 1;
        } else {
            self.failed += 1;
        }
        self.entries.push(result);
    }
}

/// 目录不存在时的提示信息
pub fn could_not_find_folder_message(path: &Path) -> String {
    format!("Could not find directory {}", path.display())
}

/// 文件重命名器
pub struct Renamer;

impl Renamer {
    /// 转换文件名并在同一目录内重命名
    ///
    /// 目标路径已存在（包括转换前后名称相同）时返回失败结果，原文件不动
    pub async fn rename_file(path: impl AsRef<Path>, config: &RenameConfig) -> RenameResult {
        let path = path.as_ref();

        let Some(file_name) = path.file_name() else {
            return RenameResult::failure(
                path,
                None,
                format!("Path {} has no file name to convert", path.display()),
            );
        };
        let Some(file_name) = file_name.to_str() else {
            return RenameResult::failure(
                path,
                None,
                format!("File name of {} is not valid UTF-8", path.display()),
            );
        };

        let new_name = convert(file_name, config.direction);
        Self::rename_to(path, file_name, &new_name, config).await
    }

    /// 以已转换好的名称重命名，名称校验由调用方完成
    async fn rename_to(path: &Path, file_name: &str, new_name: &str, config: &RenameConfig) -> RenameResult {
        let new_path = path.parent().unwrap_or_else(|| Path::new("")).join(new_name);

        if Self::exists(&new_path).await {
            let message = format!(
                "Failed to rename {} to {} because a file already exists at the location {}",
                file_name,
                new_name,
                new_path.display()
            );
            return RenameResult::failure(path, Some(new_path), message);
        }

        if config.dry_run {
            let message = format!("Would rename {} to {}", path.display(), new_path.display());
            debug!("{}", message);
            return RenameResult::success(path, new_path, message);
        }

        match tokio::fs::rename(path, &new_path).await {
            Ok(()) => {
                let message = format!("Renamed {} to {}", path.display(), new_path.display());
                if config.verbose {
                    info!("{}", message);
                } else {
                    debug!("{}", message);
                }
                RenameResult::success(path, new_path, message)
            }
            Err(e) => {
                let message = format!("Failed to rename {} to {}: {}", path.display(), new_path.display(), e);
                RenameResult::failure(path, Some(new_path), message)
            }
        }
    }

    /// 重命名目录下的所有条目，最后重命名目录本身
    ///
    /// 子条目先于父目录处理，保证父目录改名前子路径仍然有效；
    /// 名称转换后不变的条目计入 unchanged，不算失败
    pub async fn rename_folder_and_contents(
        path: impl AsRef<Path>,
        config: &RenameConfig,
    ) -> FolderRenameResult {
        let root = path.as_ref();

        match tokio::fs::metadata(root).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return FolderRenameResult::failure(could_not_find_folder_message(root)),
        }

        let entries = match Self::collect_entries(root, config.recursive).await {
            Ok(entries) => entries,
            Err(e) => {
                return FolderRenameResult::failure(format!(
                    "Failed to read directory {}: {}",
                    root.display(),
                    e
                ))
            }
        };
        debug!("Found {} entries under {}", entries.len(), root.display());

        let mut report = FolderRenameResult::default();
        // "." 或以 ".." 结尾的路径没有可转换的名称，只处理其内容
        let root_entry = root.file_name().map(|_| root);
        for entry in entries.iter().rev().map(PathBuf::as_path).chain(root_entry) {
            let Some(name) = entry.file_name().and_then(|name| name.to_str()) else {
                // 非 UTF-8 名称交给 rename_file 报告失败
                report.record(Self::rename_file(entry, config).await);
                continue;
            };
            let new_name = convert(name, config.direction);
            if new_name == name {
                report.unchanged += 1;
                continue;
            }
            report.record(Self::rename_to(entry, name, &new_name, config).await);
        }

        report.is_success = report.failed == 0;
        report.message = format!(
            "{} {} entries, {} unchanged, {} failed in {}",
            if config.dry_run { "Would rename" } else { "Renamed" },
            report.renamed,
            report.unchanged,
            report.failed,
            root.display()
        );
        info!("{}", report.message);
        report
    }

    /// 先序收集条目：父目录总是排在其后代之前
    async fn collect_entries(root: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut read_dir = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = read_dir.next_entry().await? {
                let path = entry.path();
                if recursive && entry.file_type().await?.is_dir() {
                    pending.push(path.clone());
                }
                entries.push(path);
            }
        }

        Ok(entries)
    }

    async fn exists(path: &Path) -> bool {
        tokio::fs::symlink_metadata(path).await.is_ok()
    }
}
