use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::bootstrap;
use crate::config::SiteConfig;
use crate::index;
use crate::layout::{LayoutError, LayoutRenderer};
use crate::markdown;
use crate::site::Post;

#[derive(Debug)]
pub enum BuildError {
    MissingSourceDir,
    WalkError(walkdir::Error),
    IoError(std::io::Error),
    LayoutError(LayoutError),
}

impl From<walkdir::Error> for BuildError {
    fn from(err: walkdir::Error) -> Self {
        BuildError::WalkError(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::IoError(err)
    }
}

impl From<LayoutError> for BuildError {
    fn from(err: LayoutError) -> Self {
        BuildError::LayoutError(err)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingSourceDir => write!(f, "Source directory not specified"),
            BuildError::WalkError(e) => write!(f, "Walk error: {}", e),
            BuildError::IoError(e) => write!(f, "IO error: {}", e),
            BuildError::LayoutError(e) => write!(f, "Layout error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

/// The single-pass build: walk the source directory, turn every file into
/// an HTML page, then write the index linking to all of them.
///
/// Files are processed one at a time in walk order (lexical within each
/// directory), and the first error of any kind aborts the run. Pages
/// written before the failure stay on disk.
pub struct SitePipeline {
    source_dir: Option<PathBuf>,
    output_dir: PathBuf,
    site: SiteConfig,
}

impl Default for SitePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SitePipeline {
    pub fn new() -> Self {
        Self {
            source_dir: None,
            output_dir: PathBuf::from("./public"),
            site: SiteConfig::default(),
        }
    }

    // Required configuration
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    // Optional configuration
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn site_config(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Runs the full build and returns the posts in the order their pages
    /// were written. The returned order is also the index page's order.
    pub fn build(self) -> Result<Vec<Post>, BuildError> {
        let source_dir = self.source_dir.ok_or(BuildError::MissingSourceDir)?;

        bootstrap::ensure_dir(&source_dir)?;
        bootstrap::ensure_dir(&self.output_dir)?;

        let renderer = LayoutRenderer::new(&self.site)?;

        println!("Building: {}", source_dir.display());

        let mut posts = Vec::new();
        for entry in WalkDir::new(&source_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            // Every file is a post, whatever its extension. Markdown
            // conversion is close to identity for plain text.
            let Some(post) = Post::from_source(entry.path()) else {
                continue;
            };

            let raw = std::fs::read_to_string(entry.path())?;
            let fragment = markdown::convert(&raw);
            let page = renderer.render(&post.title, &fragment)?;
            std::fs::write(self.output_dir.join(post.output_filename()), page)?;

            posts.push(post);
        }

        index::write_index(&renderer, &self.output_dir, &posts)?;

        Ok(posts)
    }
}
