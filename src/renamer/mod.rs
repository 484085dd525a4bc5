//! 重命名模块：调用转换接口处理文件名，负责路径拆分、目标冲突检测与结果上报
pub mod rename;

pub use self::rename::{could_not_find_folder_message, FolderRenameResult, RenameResult, Renamer};
