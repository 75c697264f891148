use tera::{Context, Tera};

use crate::config::SiteConfig;

// The page shell is fixed: no theme directory, no external stylesheet.
const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");

#[derive(Debug)]
pub enum LayoutError {
    TeraError(tera::Error),
}

impl From<tera::Error> for LayoutError {
    fn from(err: tera::Error) -> Self {
        LayoutError::TeraError(err)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::TeraError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Wraps rendered HTML fragments in the site's page shell: a head with
/// the page title, an inline-styled header linking back to the index, a
/// main region holding the content, and an inline-styled footer.
pub struct LayoutRenderer {
    tera: Tera,
    site_title: String,
    footer: String,
}

impl LayoutRenderer {
    pub fn new(site: &SiteConfig) -> Result<Self, LayoutError> {
        let mut tera = Tera::default();
        tera.add_raw_template("layout.html", LAYOUT_TEMPLATE)?;

        Ok(Self {
            tera,
            site_title: site.title.clone(),
            footer: site.footer.clone(),
        })
    }

    /// Renders a full HTML document around `content`.
    ///
    /// `content` must already be valid HTML; it is injected into the main
    /// region as-is and never re-escaped. The title, site title and footer
    /// text go through tera's normal escaping.
    pub fn render(&self, title: &str, content: &str) -> Result<String, LayoutError> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("site_title", &self.site_title);
        context.insert("footer", &self.footer);
        context.insert("content", content);

        Ok(self.tera.render("layout.html", &context)?)
    }
}
