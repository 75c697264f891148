use std::path::{Path, PathBuf};

/// One markdown source file and the output page derived from it.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub source_path: PathBuf,
}

impl Post {
    /// Derives a post from its source file path. The title is the file's
    /// base name with the extension stripped; paths without a base name
    /// yield `None`.
    pub fn from_source<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let title = path.file_stem()?.to_string_lossy().to_string();

        Some(Self {
            title,
            source_path: path.to_path_buf(),
        })
    }

    pub fn output_filename(&self) -> String {
        format!("{}.html", self.title)
    }

    /// Relative link to the post, as used on the index page.
    pub fn href(&self) -> String {
        format!("./{}", self.output_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_the_extension() {
        let post = Post::from_source("posts/hello.md").unwrap();
        assert_eq!(post.title, "hello");
        assert_eq!(post.output_filename(), "hello.html");
        assert_eq!(post.href(), "./hello.html");
    }

    #[test]
    fn extensionless_files_keep_their_name() {
        let post = Post::from_source("posts/notes").unwrap();
        assert_eq!(post.title, "notes");
        assert_eq!(post.output_filename(), "notes.html");
    }

    #[test]
    fn only_the_last_extension_is_stripped() {
        let post = Post::from_source("posts/archive.tar.gz").unwrap();
        assert_eq!(post.title, "archive.tar");
    }
}
