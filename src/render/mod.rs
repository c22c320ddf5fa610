// Server-side rendering of the page template
//
// `html` turns a Page into a complete document, `svg` draws the two charts
// inline. Both go through askama templates under `templates/`, which escape
// every interpolated value.

pub mod html;
pub mod svg;

pub use html::{render_page, HtmlViewport, RenderOptions};
