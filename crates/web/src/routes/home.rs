//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// Landing page template: password form, announcement, support contact.
///
/// Also doubles as the error page - a failed cycle re-renders the landing
/// page with an error banner, exactly like the original single-page flow.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Error banner from a failed cycle, if any.
    pub error: Option<String>,
}

/// Render the landing page.
#[instrument]
pub async fn index() -> HomeTemplate {
    HomeTemplate { error: None }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_login_form() {
        let html = HomeTemplate { error: None }.render().unwrap();
        assert!(html.contains("Customer Login"));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_renders_error_banner() {
        let html = HomeTemplate {
            error: Some("Invalid password".to_string()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Invalid password"));
    }
}
