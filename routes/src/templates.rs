use std::sync::Arc;

use axum::response::Html;

/// compiled page templates, shared by every handler
#[derive(Clone)]
pub struct Templates(Arc<tera::Tera>);

impl Templates {
	pub fn load() -> Result<Self, tera::Error> {
		let mut tera = tera::Tera::default();
		tera.add_raw_templates(vec![
			("base.html", include_str!("../templates/base.html")),
			("flight_list.html", include_str!("../templates/flight_list.html")),
			("flight_detail.html", include_str!("../templates/flight_detail.html")),
		])?;
		Ok(Templates(Arc::new(tera)))
	}

	pub fn render(&self, template: &str, context: &tera::Context) -> crate::ApiResult<Html<String>> {
		Ok(Html(self.0.render(template, context)?))
	}
}
