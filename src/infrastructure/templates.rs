use chrono::{Datelike, Utc};
use tera::{Context, Tera};

use crate::errors::AppError;

/// Templates are compiled into the binary so the server has no runtime
/// dependency on its working directory.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("blog_list.html", include_str!("../../templates/blog_list.html")),
    ("blog_detail.html", include_str!("../../templates/blog_detail.html")),
    ("projects_list.html", include_str!("../../templates/projects_list.html")),
    ("project_detail.html", include_str!("../../templates/project_detail.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
    ("unavailable.html", include_str!("../../templates/unavailable.html")),
];

pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}

/// Renders site pages. Every page gets the site name and the current year.
pub struct PageRenderer {
    tera: Tera,
    site_name: String,
}

impl PageRenderer {
    pub fn new(site_name: &str) -> Result<Self, tera::Error> {
        Ok(PageRenderer {
            tera: load_templates()?,
            site_name: site_name.to_string(),
        })
    }

    pub fn context(&self) -> Context {
        let mut ctx = Context::new();
        ctx.insert("site_name", &self.site_name);
        ctx.insert("year", &Utc::now().year());
        ctx
    }

    pub fn render(&self, template: &str, ctx: &Context) -> Result<String, AppError> {
        self.tera.render(template, ctx).map_err(|e| {
            tracing::error!(%template, error = ?e, "Template rendering failed");
            AppError::from(e)
        })
    }
}
