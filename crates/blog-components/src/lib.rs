//! Presentational components for the blog front-end.
//!
//! Two leaf components with no interdependency:
//!
//! - [`Banner`]: a single-line strip whose style and text vary on one
//!   boolean preview flag.
//! - [`PostBody`]: renders a pre-built post HTML body inside a
//!   bounded-width wrapper and runs the syntax highlighting pass from
//!   `blog-highlight` over it whenever the content changes.
//!
//! Both components emit plain HTML strings. Styling comes from the site's
//! utility classes and the markdown typography stylesheet; neither is
//! specified here.

mod banner;
mod class_names;
mod container;
mod post_body;

pub use banner::{Banner, GITHUB_URL};
pub use class_names::class_names;
pub use container::container;
pub use post_body::{MARKDOWN_CLASS, PostBody};
