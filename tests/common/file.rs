use derive_new::new;
use std::path::{Path, PathBuf};

/// A file to materialize beneath a comparison root.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub relative_path: PathBuf,
    pub content: String,
}

pub fn write_file(root: &Path, spec: &FileSpec) {
    let path = root.join(&spec.relative_path);

    // make sure the parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&path, &spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

pub fn generate_file_specs(files_count: usize) -> Vec<FileSpec> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|index| {
            let file_name = format!("{}_{}.txt", Word().fake::<String>(), index);
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

            FileSpec::new(PathBuf::from(file_name), file_content)
        })
        .collect::<Vec<_>>()
}
