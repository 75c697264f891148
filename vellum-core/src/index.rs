use std::path::Path;

use crate::layout::LayoutRenderer;
use crate::pipeline::BuildError;
use crate::site::Post;

/// Renders the landing page linking to every generated post and writes it
/// to `<output_dir>/index.html`.
pub fn write_index(
    renderer: &LayoutRenderer,
    output_dir: &Path,
    posts: &[Post],
) -> Result<(), BuildError> {
    let page = renderer.render("Home", &link_list(posts))?;
    std::fs::write(output_dir.join("index.html"), page)?;

    Ok(())
}

// One <li> per post, in pipeline order. Labels show the output filename.
fn link_list(posts: &[Post]) -> String {
    let mut html = String::from("<ul>\n");
    for post in posts {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            html_escape::encode_quoted_attribute(&post.href()),
            html_escape::encode_text(&post.output_filename())
        ));
    }
    html.push_str("</ul>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_link_per_post() {
        let posts: Vec<Post> = ["a.md", "b.md", "c.md"]
            .iter()
            .map(|f| Post::from_source(f).unwrap())
            .collect();

        let html = link_list(&posts);

        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<a href=\"./a.html\">a.html</a>"));
        assert!(html.contains("<a href=\"./c.html\">c.html</a>"));
    }

    #[test]
    fn no_posts_renders_an_empty_list() {
        assert_eq!(link_list(&[]), "<ul>\n</ul>\n");
    }

    #[test]
    fn labels_are_escaped() {
        let posts = vec![Post::from_source("a&b.md").unwrap()];
        let html = link_list(&posts);
        assert!(html.contains("a&amp;b.html"));
    }
}
